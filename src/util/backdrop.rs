//! Page-wide backdrop for the two phases of the sign-in flow.
//!
//! The connection-check splash and the form steps run on different
//! full-page backgrounds. Applies a class swap on `<body>`; the visual
//! treatment itself lives in the stylesheet. Requires a browser
//! environment.

#[cfg(test)]
#[path = "backdrop_test.rs"]
mod backdrop_test;

/// Which backdrop phase is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Behind the connection-check splash.
    Splash,
    /// Behind the email and password steps.
    Form,
}

/// Body class for a backdrop phase.
pub fn class_name(backdrop: Backdrop) -> &'static str {
    match backdrop {
        Backdrop::Splash => "backdrop--splash",
        Backdrop::Form => "backdrop--form",
    }
}

/// Swap the `<body>` class to the given phase, dropping the other one.
///
/// No-op outside the browser.
pub fn apply(backdrop: Backdrop) {
    #[cfg(feature = "hydrate")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let classes = body.class_list();
            let _ = classes.remove_1(class_name(Backdrop::Splash));
            let _ = classes.remove_1(class_name(Backdrop::Form));
            let _ = classes.add_1(class_name(backdrop));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = backdrop;
    }
}
