//! `dump` command: print every public field of a section.

use anyhow::Result;
use jsoncfg::{SourceDescriptor, ViewOptions};

use super::open_view;

pub fn run(descriptor: &SourceDescriptor, options: ViewOptions, prefix: Option<&str>) -> Result<()> {
    let view = open_view(descriptor, options)?;
    let fields = view.enumerate(prefix);
    tracing::debug!(count = fields.len(), section = %view.section(), "Dumping fields");
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}
