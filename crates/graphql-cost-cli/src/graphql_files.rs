use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Normalize a set of file extensions so each starts with a `.`.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Find all files with one of `file_exts` recursively located at or under
/// each of `paths`.
///
/// If a single file path is given and nothing matched, that file is used
/// regardless of its extension.
pub(crate) fn collect(
    paths: &[PathBuf],
    file_exts: &HashSet<String>,
) -> Result<Vec<PathBuf>, walkdir::Error> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }

            log::trace!("Found file at {path:#?}.");
            if has_ext(path, file_exts) {
                file_paths.push(path.to_path_buf());
            }
        }
    }

    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to load {first_arg_path:#?} even though it doesn't \
            match any of the expected file extensions ({}).",
            file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(first_arg_path.to_path_buf());
    }

    log::debug!("Found {} GraphQL files.", file_paths.len());
    Ok(file_paths)
}

fn has_ext(path: &Path, file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| file_exts.contains(&ext))
}
