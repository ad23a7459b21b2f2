//! Writing computed goals to disk.
//!
//! Storage belongs to the caller; this only exists so the CLI can hand a
//! goals file to another process without it ever seeing a partial write.

use crate::{Error, NutritionGoals, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Save goals as pretty JSON, atomically
///
/// Writes to a temp file in the target directory, syncs it, then renames
/// over `path`.
pub fn save_goals(goals: &NutritionGoals, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, goals)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved nutrition goals to {:?}", path);
    Ok(())
}

/// Read goals previously written by [`save_goals`]
pub fn load_goals(path: &Path) -> Result<NutritionGoals> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
