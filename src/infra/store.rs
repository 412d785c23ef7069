//! Persistence for the library document.
//!
//! The document is a UTF-8 JSON array of book records, pretty-printed
//! for human readability. A missing file reads as an empty library.
//! There is no locking; concurrent writers race last-writer-wins.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Library, StoreError};

/// Read the persisted library. A path that does not exist yields an
/// empty library; an existing document that does not parse as a JSON
/// array of book records is `StoreError::Corrupt`.
pub fn load(path: &Path) -> Result<Library, StoreError> {
    if !path.exists() {
        log::debug!("no library document at {}, starting empty", path.display());
        return Ok(Library::new());
    }

    let contents = fs::read_to_string(path)?;
    let library: Library = serde_json::from_str(&contents)?;
    log::debug!("loaded {} records from {}", library.len(), path.display());
    Ok(library)
}

/// Write the full library, replacing the document. The JSON lands via
/// a temp file and rename, so a crash mid-write cannot leave a
/// truncated document behind.
pub fn save(path: &Path, library: &Library) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(library)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    log::debug!("saved {} records to {}", library.len(), path.display());
    Ok(())
}

/// Scratch path next to the target, so the rename stays on one
/// filesystem.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Book;

    fn sample_library() -> Library {
        vec![
            Book {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
                genre: "SciFi".to_string(),
                read: true,
            },
            Book {
                title: "Solaris".to_string(),
                author: "Lem".to_string(),
                year: 1961,
                genre: "SciFi".to_string(),
                read: false,
            },
        ]
    }

    #[test]
    fn test_missing_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let library = load(&dir.path().join("library.txt")).unwrap();
        assert!(library.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        let library = sample_library();

        save(&path, &library).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, library);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        save(&path, &sample_library()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["library.txt"]);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("library.txt");
        save(&path, &sample_library()).unwrap();
        assert_eq!(load(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_document_is_pretty_printed_with_pascal_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        save(&path, &sample_library()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Title\": \"Dune\""));
        assert!(contents.lines().count() > 2, "expected indented output");
    }

    #[test]
    fn test_corrupt_document_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn test_wrong_shape_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(&path, r#"[{"Title": "Dune"}]"#).unwrap();

        assert!(matches!(load(&path), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_load_tolerates_unknown_fields_and_missing_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.txt");
        fs::write(
            &path,
            r#"[{"Title":"Dune","Author":"Herbert","Year":1965,"Genre":"SciFi","Rating":5}]"#,
        )
        .unwrap();

        let library = load(&path).unwrap();
        assert_eq!(library.len(), 1);
        assert!(!library[0].read);
    }
}
