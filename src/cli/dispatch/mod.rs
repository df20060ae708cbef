use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{ARG_DIST_DIR, ARG_PORT};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dist_dir = matches
        .get_one::<String>(ARG_DIST_DIR)
        .map(PathBuf::from)
        .context("missing required argument: --dist-dir")?;

    Ok(Action::Server(Args { port, dist_dir }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler_builds_server_action() {
        temp_env::with_vars(
            [("HWR_PORT", None::<String>), ("HWR_DIST_DIR", None::<String>)],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "hwr-portal",
                    "-p",
                    "3000",
                    "-d",
                    "dist",
                ]);

                let Action::Server(args) = handler(&matches).unwrap();

                assert_eq!(args.port, 3000);
                assert_eq!(args.dist_dir, PathBuf::from("dist"));
            },
        );
    }
}
