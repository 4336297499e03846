//! Wire schema for the sign-in endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Form data submitted to the sign-in endpoint.
///
/// Both fields hold trimmed input; the server applies its own
/// normalization (for example lowercasing the email) before lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Lenient mirror of the sign-in response body.
///
/// Every field is optional and unknown fields (like the server's `user`
/// object) are ignored, so a terse or oversized body still parses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SigninResponse {
    /// Human-readable acknowledgment or failure explanation.
    pub message: Option<String>,
    /// Where the client should navigate after a successful sign-in.
    pub redirect: Option<String>,
}

/// What a successful sign-in request resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigninSuccess {
    /// Message surfaced to the user as a blocking acknowledgment.
    pub message: String,
    /// Optional navigation target supplied by the server.
    pub redirect: Option<String>,
}
