use crate::host;
use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dist_dir: PathBuf,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the frontend directory is missing or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    if !args.dist_dir.is_dir() {
        bail!(
            "frontend directory {} does not exist; build apps/web first",
            args.dist_dir.display()
        );
    }
    if !args.dist_dir.join(host::INDEX_FILE).is_file() {
        warn!(
            "{} has no {}; deep links will return 404",
            args.dist_dir.display(),
            host::INDEX_FILE
        );
    }

    info!(
        port = args.port,
        dist_dir = %args.dist_dir.display(),
        "Starting portal host"
    );

    host::new(args.port, args.dist_dir).await
}
