//! Built-in extension catalog for Launchpad.
//!
//! Every entry is an explicit descriptor; nothing is discovered at runtime.
//! Official extensions pin their versions, third-party extensions reference
//! their version property so a user override reaches every coordinate.

mod official;
mod third_party;

use launchpad_core::{ExtensionCatalog, Result};
use tracing::debug;

pub use official::{CONTROLLERS_VERSION, GDX_VERSION};

/// Build the catalog of every known extension.
///
/// # Errors
///
/// Returns `Error::DuplicateExtension` if two descriptors share an id.
pub fn builtin() -> Result<ExtensionCatalog> {
    let mut catalog = ExtensionCatalog::new();
    for extension in official::extensions().into_iter().chain(third_party::extensions()) {
        catalog.try_register(extension)?;
    }
    debug!(extensions = catalog.len(), "built-in catalog ready");
    Ok(catalog)
}
