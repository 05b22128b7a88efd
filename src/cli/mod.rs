//! # CLI Module
//!
//! User-facing commands of sporcat. Each command loads what it needs through
//! the management layer, drives the catalog engine and reports progress on
//! the console.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth 2.0 PKCE login, token stored for later runs
//! - [`curate`] - load, classify, report and publish one artist's catalog
//! - [`cache::clear`] / [`cache::invalidate`] - response cache maintenance
//!
//! ## Layers
//!
//! ```text
//! CLI (commands, spinners, tables)
//!     ↓
//! Management (token, response cache, catalog source)
//!     ↓
//! Catalog engine          Spotify client
//! (normalize, group,      (retries, pagination,
//!  classify, sets)         playlist writes)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! sporcat auth
//! sporcat curate --read-only
//! sporcat curate --rebuild-singles --rebuild-base
//! sporcat cache invalidate album 1klALx0u4AavZNEvC4LrTL
//! ```

mod auth;
pub mod cache;
mod curate;
pub mod report;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::auth;
pub use curate::CurateSettings;
pub use curate::curate;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
