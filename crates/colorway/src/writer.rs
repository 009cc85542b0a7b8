//! Writes rendered artifacts to disk.

use std::fs;

use anyhow::Context;
use tracing::info;

use colorway_render::GeneratedFile;

/// Writes every file, creating parent directories as needed.
///
/// The pipelines render the complete artifact set before this runs, so a
/// failure earlier in the export never leaves half-written output behind.
pub fn write_files(files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
        let path = file.destination.path();
        fs::create_dir_all(&file.destination.directory).with_context(|| {
            format!(
                "failed to create directory {}",
                file.destination.directory.display()
            )
        })?;
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }
    Ok(())
}
