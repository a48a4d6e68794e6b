//! One-shot chat command

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use tally_core::chat;
use tally_core::config::AnalyzerConfig;

pub fn cmd_chat(file: Option<&Path>, message: &str, config: &AnalyzerConfig) -> Result<()> {
    // An unreadable file degrades to the no-data replies instead of failing.
    let loaded = file.and_then(
        |path| match tally_core::normalize_file(path, &config.sign) {
            Ok((rows, _)) => Some(rows),
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                None
            }
        },
    );

    let reply = chat::respond(message, loaded.as_deref(), config);
    println!("{}", reply);

    Ok(())
}
