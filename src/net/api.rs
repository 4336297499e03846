//! REST helper for the sign-in endpoint.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`.
//! Server-side (SSR): a stub returning an error since signing in is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with display-ready strings on the error side so
//! transport failures and rejection responses flow into the same inline
//! message slot without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, SigninSuccess};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SigninResponse;

#[cfg(feature = "hydrate")]
const SIGNIN_ENDPOINT: &str = "/api/signin";

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_SUCCESS_MESSAGE: &str = "Sign in successful!";

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_FAILURE_MESSAGE: &str = "Sign in failed";

/// Submit credentials to `POST /api/signin` and fold the response into a
/// UI-ready outcome.
///
/// # Errors
///
/// Returns the display string for transport failures, and the server's
/// explanation (or a generic one) for rejection responses.
pub async fn sign_in(credentials: &Credentials) -> Result<SigninSuccess, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body = parse_signin_body(&resp.text().await.unwrap_or_default());
        classify_response(resp.status(), body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Read a response body leniently: anything that is not a JSON object of
/// the expected shape counts as an empty response, not a failure.
#[cfg(any(test, feature = "hydrate"))]
fn parse_signin_body(body: &str) -> SigninResponse {
    serde_json::from_str(body).unwrap_or_default()
}

/// Fold an HTTP status and parsed body into the sign-in outcome.
///
/// Any 2xx status is a success. A blank message counts as missing and falls
/// back to the generic text, and a blank redirect is no redirect at all.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response(status: u16, body: SigninResponse) -> Result<SigninSuccess, String> {
    let message = body.message.filter(|m| !m.is_empty());
    if (200..300).contains(&status) {
        Ok(SigninSuccess {
            message: message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_owned()),
            redirect: body.redirect.filter(|r| !r.is_empty()),
        })
    } else {
        Err(message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned()))
    }
}
