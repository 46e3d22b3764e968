//! `resolve` command: show which configuration file would be loaded.

use anyhow::{Context, Result};
use jsoncfg::SourceDescriptor;
use jsoncfg::loader::resolver;

pub fn run(descriptor: &SourceDescriptor, candidates: bool) -> Result<()> {
    if candidates {
        let token = descriptor.env_token();
        for candidate in resolver::candidate_paths(descriptor, &token) {
            let marker = if candidate.is_file() { "*" } else { " " };
            println!("{} {}", marker, candidate.display());
        }
        return Ok(());
    }

    let path = resolver::resolve(descriptor).context("Failed to resolve configuration file")?;
    println!("{}", path.display());
    Ok(())
}
