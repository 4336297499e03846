//! Sign-in page: a timed connection-check splash, then an email step and a
//! password step that submit to the sign-in endpoint.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::components::splash::SplashScreen;
use crate::state::signin::{SigninState, SigninStep};
use crate::util::backdrop::{self, Backdrop};
use crate::util::email::is_valid_email;

/// How long the connection-check splash stays up.
#[cfg(feature = "hydrate")]
const SPLASH_DURATION_MS: u64 = 2500;

/// Matches the step slide transition so focus lands after the move.
#[cfg(feature = "hydrate")]
const PASSWORD_FOCUS_DELAY_MS: u64 = 500;

/// Matches the reverse slide when returning to the email step.
#[cfg(feature = "hydrate")]
const BACK_TO_EMAIL_DELAY_MS: u64 = 300;

#[component]
pub fn SigninPage() -> impl IntoView {
    let signin = expect_context::<RwSignal<SigninState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_ref = NodeRef::<leptos::html::Input>::new();
    let password_ref = NodeRef::<leptos::html::Input>::new();

    // Splash phase: hold for the connection-check delay, then swap the
    // backdrop and reveal the email step.
    backdrop::apply(Backdrop::Splash);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(SPLASH_DURATION_MS)).await;
        backdrop::apply(Backdrop::Form);
        signin.update(|s| s.leave_splash());
        focus_input(email_ref);
    });

    let on_next = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email_input(&email.get()) {
            Ok(address) => {
                signin.update(|s| s.commit_email(address));
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        PASSWORD_FOCUS_DELAY_MS,
                    ))
                    .await;
                    focus_input(password_ref);
                });
            }
            Err(message) => {
                signin.update(|s| s.set_email_error(message));
                focus_input(email_ref);
            }
        }
    };

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        password.set(String::new());
        signin.update(|s| s.clear_password());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(BACK_TO_EMAIL_DELAY_MS))
                .await;
            signin.update(|s| s.return_to_email());
            focus_input(email_ref);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if signin.get().submitting {
            return;
        }
        match validate_password_input(&password.get()) {
            Ok(secret) => {
                signin.update(|s| s.begin_submit(secret));

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let credentials = signin.get_untracked().credentials;
                    match crate::net::api::sign_in(&credentials).await {
                        Ok(outcome) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.alert_with_message(&outcome.message);
                                if let Some(url) = outcome.redirect {
                                    let _ = window.location().set_href(&url);
                                }
                            }
                        }
                        Err(message) => {
                            leptos::logging::warn!("sign in error: {message}");
                            signin.update(|s| s.fail_submit(failure_text(message)));
                        }
                    }
                    // Runs on success and failure alike.
                    signin.update(|s| s.finish_submit());
                });
            }
            Err(message) => {
                signin.update(|s| s.set_password_error(message));
                focus_input(password_ref);
            }
        }
    };

    let splash_visible = move || signin.get().step == SigninStep::Splash;
    let steps_visible = move || signin.get().step != SigninStep::Splash;

    view! {
        <div class="signin-page">
            <Show when=splash_visible>
                <SplashScreen/>
            </Show>
            <Show when=steps_visible>
                <div class="signin-card">
                    <form
                        class=move || email_step_class(signin.get().step)
                        novalidate=true
                        on:submit=on_next
                    >
                        <h1>"Sign in"</h1>
                        <p class="signin-card__subtitle">"Enter your email to continue"</p>
                        <input
                            class="signin-input"
                            type="email"
                            placeholder="you@example.com"
                            node_ref=email_ref
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                signin.update(|s| s.clear_email_error());
                            }
                        />
                        <Show when=move || signin.get().email_error.is_some()>
                            <p class="signin-error">
                                {move || signin.get().email_error.unwrap_or_default()}
                            </p>
                        </Show>
                        <button class="signin-button" type="submit">"Next"</button>
                    </form>
                    <form class=move || password_step_class(signin.get().step) on:submit=on_submit>
                        <h1>"Welcome back"</h1>
                        <p class="signin-card__subtitle">
                            "Signing in as "
                            <span class="signin-card__email">
                                {move || signin.get().credentials.email}
                            </span>
                        </p>
                        <input
                            class="signin-input"
                            type="password"
                            placeholder="Password"
                            node_ref=password_ref
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                signin.update(|s| s.clear_password_error());
                            }
                        />
                        <Show when=move || signin.get().password_error.is_some()>
                            <p class="signin-error">
                                {move || signin.get().password_error.unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || signin.get().submitting>
                            <div class="signin-progress" aria-hidden="true"></div>
                        </Show>
                        <button
                            class="signin-button"
                            type="submit"
                            disabled=move || signin.get().submitting
                        >
                            {move || if signin.get().submitting { "Signing in..." } else { "Sign in" }}
                        </button>
                        <a href="#" class="signin-back" on:click=on_back>
                            "Use a different email"
                        </a>
                    </form>
                </div>
            </Show>
        </div>
    }
}

/// Panel classes for the email step; the slide class engages while the
/// password step is active.
fn email_step_class(step: SigninStep) -> &'static str {
    if step == SigninStep::Password {
        "signin-step signin-step--email slide-out"
    } else {
        "signin-step signin-step--email"
    }
}

/// Panel classes for the password step.
fn password_step_class(step: SigninStep) -> &'static str {
    if step == SigninStep::Password {
        "signin-step signin-step--password slide-in"
    } else {
        "signin-step signin-step--password"
    }
}

/// Trim and vet the email step's input, keeping the address as typed.
///
/// The email form runs with `novalidate`, so this is the only check an
/// address goes through before the inline message renders.
fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let address = raw.trim();
    if address.is_empty() {
        return Err("Please enter an email address");
    }
    if !is_valid_email(address) {
        return Err("Please enter a valid email address");
    }
    Ok(address.to_owned())
}

/// Trim the password input; anything non-empty goes to the server as-is.
fn validate_password_input(raw: &str) -> Result<String, &'static str> {
    let secret = raw.trim();
    if secret.is_empty() {
        return Err("Please enter your password");
    }
    Ok(secret.to_owned())
}

/// Inline text for a failed submission. Errors that carry no display text
/// fall back to a generic retry prompt.
#[cfg(any(test, feature = "hydrate"))]
fn failure_text(message: String) -> String {
    if message.trim().is_empty() {
        "An error occurred. Please try again.".to_owned()
    } else {
        message
    }
}

/// Move focus to an input, ignoring elements that are not mounted yet.
fn focus_input(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input_el) = input.get() {
            let _ = input_el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}
