use anyhow::{Result, bail};
use std::path::Path;

pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() {
        bail!("Path is not a file: {}", path.display());
    }
    Ok(())
}
