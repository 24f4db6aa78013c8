use crate::errors::{AppError, AppResult};
use crate::models::Program;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Recursively collects `.json` files under `dir`, sorted by path.
///
/// # Errors
///
/// Returns `InvalidInput` if `dir` is not a directory.
pub fn find_program_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    Ok(files)
}

/// Reads one API program from a JSON file.
pub fn load_program(path: &Path) -> AppResult<Program> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::ParseError(format!("{}: {e}", path.display())))
}

/// Loads every program found under `dir`, skipping files that fail to load.
pub fn load_programs(dir: &Path) -> AppResult<Vec<Program>> {
    let files = find_program_files(dir)?;
    let mut programs = Vec::with_capacity(files.len());
    for path in &files {
        match load_program(path) {
            Ok(program) => programs.push(program),
            Err(e) => warn!(file = %path.display(), error = %e, "Skipping program file"),
        }
    }
    Ok(programs)
}
