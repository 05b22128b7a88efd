//! # API Module
//!
//! HTTP endpoints of the short-lived local server started by `sporcat auth`.
//!
//! - [`callback`] - Completes the Spotify OAuth 2.0 PKCE flow: takes the
//!   authorization code from the redirect, exchanges it together with the code
//!   verifier for a token and hands the token to the waiting auth command.
//! - [`health`] - Reports status and version, handy to check that the
//!   configured `SERVER_ADDRESS` is reachable.
//!
//! The server only lives for a single token exchange and is stopped once the
//! token arrived or the auth command timed out.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
