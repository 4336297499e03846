//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::signin::SigninPage;
use crate::state::signin::SigninState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#0074d9"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one sign-in flow state for the whole page lifetime and routes
/// every path to the sign-in screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let signin = RwSignal::new(SigninState::default());
    provide_context(signin);

    view! {
        <Stylesheet id="leptos" href="/pkg/anteroom.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SigninPage/>
            </Routes>
        </Router>
    }
}
