//! Command implementations for launchpad-cli

pub mod check;
pub mod list;
pub mod resolve;
pub mod root;

pub use check::run_check;
pub use list::run_list;
pub use resolve::run_resolve;
pub use root::run_root;

use launchpad_core::ExtensionCatalog;

use crate::error::Result;

/// Load the built-in catalog and self-check it before any user-facing run.
pub(crate) fn load_catalog() -> Result<ExtensionCatalog> {
    let catalog = launchpad_catalog::builtin()?;
    catalog.validate()?;
    Ok(catalog)
}
