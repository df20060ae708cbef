//! # Health Workers Registry portal
//!
//! Client-side core of the registry portal: a session holder backed by
//! key-value storage, a pure route guard, the login flow and the static module
//! catalog shown on the landing page. The Leptos frontend in `apps/web` wires
//! these into screens; everything here is UI-free and runs natively in tests.
//!
//! ## Session
//!
//! The session is persisted as one JSON record so partial writes cannot leave
//! the flag, token and user out of sync. Older three-key layouts are migrated
//! on first load.
//!
//! ## Route guarding
//!
//! [`routing::resolve`] maps `(path, authenticated, pending intent)` to either a
//! screen to render or a redirect. Guarding is a UX concern only; any real
//! access control belongs to the backend behind the authenticator.
//!
//! The native-only `cli` and `host` modules serve the compiled frontend with a
//! history fallback so deep links such as `/ModulesPage` load the app.

pub mod authenticator;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod login;
pub mod routing;
pub mod session;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod host;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            return;
        }
        assert!(GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_user_agent() {
        assert!(APP_USER_AGENT.starts_with("hwr-portal/"));
    }
}
