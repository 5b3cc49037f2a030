//! Page modules for route-level screens.
//!
//! There is only one screen. The page owns orchestration (submit flow) and
//! delegates the HTTP call to `net::api` and the acknowledgment to
//! `util::notify`.

pub mod signup;
