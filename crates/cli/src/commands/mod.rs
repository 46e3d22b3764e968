//! CLI command implementations.

pub mod dump;
pub mod get;
pub mod resolve;
pub mod vault;

use anyhow::{Context, Result};
use jsoncfg::{SectionView, SourceDescriptor, ViewOptions};

/// Open the view selected by the global options.
pub(crate) fn open_view(descriptor: &SourceDescriptor, options: ViewOptions) -> Result<SectionView> {
    SectionView::open(descriptor, options).context("Failed to load configuration")
}
