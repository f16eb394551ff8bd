//! Root build script command

use std::path::Path;

use launchpad_core::{GenerationRequest, Resolver, RootBuild};

use crate::error::Result;

/// Resolve a request and print the root build script
pub fn run_root(request: &Path) -> Result<()> {
    let request = GenerationRequest::from_path(request)?;
    let catalog = super::load_catalog()?;
    let state = Resolver::new(&catalog).generate(&request)?;

    print!("{}", RootBuild::new(&state, &request.project).render());
    Ok(())
}
