use std::fs;
use std::path::{Path, PathBuf};

use super::{Snapshot, html, json};
use crate::error::{ContribError, Result};

pub const INDEX_FILE: &str = "index.html";
pub const JSON_FILE: &str = "report.json";

/// Check that `dir` can receive the report, creating it when missing.
fn prepare_dir(dir: &Path, force: bool) -> Result<()> {
    if dir.is_file() {
        return Err(ContribError::Config(format!(
            "output path {} is a file",
            dir.display()
        )));
    }
    if dir.is_dir() {
        let occupied = fs::read_dir(dir)?.next().is_some();
        if occupied && !force {
            return Err(ContribError::Config(format!(
                "output directory {} is not empty (use --force to overwrite)",
                dir.display()
            )));
        }
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write the HTML page and the JSON document into `dir`. Returns the paths
/// written.
pub fn export(snapshot: &Snapshot, dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    prepare_dir(dir, force)?;

    let json = json::render(snapshot).map_err(|e| ContribError::Io(e.into()))?;

    let index = dir.join(INDEX_FILE);
    fs::write(&index, html::render(snapshot))?;
    let report = dir.join(JSON_FILE);
    fs::write(&report, json)?;

    for path in [&index, &report] {
        log::info!("wrote {}", path.display());
    }
    Ok(vec![index, report])
}
