//! Sign-up page: two controlled inputs and a JSON POST on submit.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

/// Acknowledgment shown after a successful registration.
#[cfg(any(test, feature = "hydrate"))]
const ACK_MESSAGE: &str = "User registered!";

/// Snapshot the field values for submission.
///
/// Values go to the wire verbatim: no trimming, no validation, empty
/// strings included. The remote service owns acceptance.
#[cfg(any(test, feature = "hydrate"))]
fn submitted_fields(email: &str, password: &str) -> (String, String) {
    (email.to_owned(), password.to_owned())
}

/// Sign-up form page.
///
/// Each input is controlled: `prop:value` is driven by a signal and
/// `on:input` writes the event value back, so the displayed text always
/// equals the backing state. Submit posts the current values and, on a 2xx
/// response, shows a one-shot blocking acknowledgment. The fields are not
/// cleared and the submit button is never disabled, so overlapping
/// submissions each issue their own request.
#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let (email_value, password_value) = submitted_fields(&email.get(), &password.get());
            leptos::task::spawn_local(async move {
                match crate::net::api::register_user(&email_value, &password_value).await {
                    Ok(()) => crate::util::notify::acknowledge(ACK_MESSAGE),
                    // Failure is silent in the UI; the console line is the only trace.
                    Err(e) => leptos::logging::warn!("register failed: {e}"),
                }
            });
        }
    };

    view! {
        <div class="signup-page">
            <form class="signup-card" on:submit=on_submit>
                <h2 class="signup-card__title">"Sign Up"</h2>
                <input
                    class="signup-card__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="signup-card__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="signup-card__button" type="submit">
                    "Register"
                </button>
            </form>
        </div>
    }
}
