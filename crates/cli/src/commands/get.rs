//! `get` command: print a single field.

use anyhow::{Context, Result};
use jsoncfg::{SourceDescriptor, ViewOptions};
use serde_json::Value;

use super::open_view;

pub fn run(
    descriptor: &SourceDescriptor,
    options: ViewOptions,
    key: &str,
    default: Option<&str>,
) -> Result<()> {
    let default: Value = match default {
        Some(raw) => serde_json::from_str(raw)
            .with_context(|| format!("--default is not valid JSON: {}", raw))?,
        None => Value::Null,
    };

    let view = open_view(descriptor, options)?;
    let value = view.get(key, &default);
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
