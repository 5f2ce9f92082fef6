use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{AppError, Result};
use crate::survey::SURVEY_FILE_NAME;

/// Reduces a client-supplied filename to a safe basename. Rejects anything
/// that is not a plain `.csv` name, plus the survey store's own file.
pub fn sanitize_filename(raw: &str) -> Result<String> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    if name.is_empty() || name.starts_with('.') {
        return Err(AppError::InvalidInput(format!(
            "invalid filename: {:?}",
            raw
        )));
    }
    if !name.to_ascii_lowercase().ends_with(".csv") {
        return Err(AppError::InvalidInput(format!(
            "expected a .csv file, got {:?}",
            name
        )));
    }
    if name == SURVEY_FILE_NAME {
        return Err(AppError::InvalidInput(format!(
            "{} is reserved",
            SURVEY_FILE_NAME
        )));
    }
    Ok(name)
}

/// Writes an uploaded dataset under `upload_dir` and returns its path.
pub fn save_upload(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let name = sanitize_filename(filename)?;
    if bytes.is_empty() {
        return Err(AppError::InvalidInput("empty upload".to_string()));
    }
    fs::create_dir_all(upload_dir)?;
    let path = upload_dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Dataset filenames in `upload_dir`, excluding the survey store.
pub fn list_csvs(upload_dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(upload_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_ascii_lowercase().ends_with(".csv") && name != SURVEY_FILE_NAME {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Most recently modified dataset, the one the UI lands on by default.
pub fn latest_csv(upload_dir: &Path) -> Result<Option<String>> {
    let mut latest: Option<(SystemTime, String)> = None;
    for name in list_csvs(upload_dir)? {
        let modified = fs::metadata(upload_dir.join(&name))?.modified()?;
        let newer = match &latest {
            Some((time, _)) => modified > *time,
            None => true,
        };
        if newer {
            latest = Some((modified, name));
        }
    }
    Ok(latest.map(|(_, name)| name))
}
