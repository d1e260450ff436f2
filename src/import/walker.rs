use walkdir::WalkDir;
use std::path::{Path, PathBuf};
use crate::error::{GedviewError, Result};

/// Resolve an import path to the GEDCOM files it names.
///
/// A file is returned as-is whatever its extension; a directory is walked
/// recursively for `*.ged` files, sorted by path.
pub fn discover_gedcom_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(GedviewError::InvalidInput(format!(
            "import path does not exist: {}",
            root.display()
        )));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ged"))
        })
        .collect();
    files.sort();

    log::info!("Discovered {} GEDCOM files in {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("nested")).unwrap();
        std::fs::write(temp_dir.path().join("b.ged"), "0 TRLR\n").unwrap();
        std::fs::write(temp_dir.path().join("nested").join("a.GED"), "0 TRLR\n").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let files = discover_gedcom_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap().to_ascii_lowercase() == "ged"));
    }

    #[test]
    fn test_discover_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.txt");
        std::fs::write(&path, "0 TRLR\n").unwrap();
        assert_eq!(discover_gedcom_files(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_discover_missing_path() {
        let err = discover_gedcom_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, GedviewError::InvalidInput(_)));
    }
}
