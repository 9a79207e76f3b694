//! Prints the number of subscribers and the most recent ones.
//!
//! Usage: `view-subscribers [path/to/subscribers.json]`
//! Without an argument the path comes from the configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use waitlist::{
    config::get_or_init_config,
    inspect::subscribers_report,
    store::JsonFileStore,
};

fn main() -> Result<()> {
    let waitlist_config = &get_or_init_config().waitlist_config;
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| waitlist_config.file_path());

    let store = JsonFileStore::new(path);
    let report = subscribers_report(&store, waitlist_config.recent_len)
        .with_context(|| format!("failed to read subscribers from {}", store.path().display()))?;
    print!("{report}");

    Ok(())
}
