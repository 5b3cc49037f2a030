//! Networking modules for HTTP calls to the backend.
//!
//! `api` is the only member: one REST helper posting registrations.

pub mod api;
