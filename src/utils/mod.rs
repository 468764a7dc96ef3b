//! Utility functions/types to use across the whole crate.

mod log;

pub use log::Logger;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create a directory and all of its parents if it doesn't exist yet.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)
            .with_context(|| format!("unable to create directory '{}'", path.display()))?;
    }
    Ok(())
}

/// Switch the language used by bundled messages.
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_nested_dir() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // calling it again on an existing dir is fine
        ensure_dir(&nested).unwrap();
    }
}
