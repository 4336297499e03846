//! Full-screen splash shown while the connection check runs.

use leptos::prelude::*;

/// Connection-check panel displayed before the email step appears.
///
/// Purely presentational; the sign-in page decides when it goes away.
#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash__spinner" aria-hidden="true"></div>
            <h1 class="splash__title">"Checking your connection"</h1>
            <p class="splash__hint">"This will only take a moment."</p>
        </div>
    }
}
