use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// List every file under `path`, at any depth.
///
/// Directory entries are visited in lexical file-name order, depth-first,
/// so the result is deterministic. No ignore rules apply; hidden files are
/// included.
pub fn walk_directory(path: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(path)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => eprintln!("Error walking directory: {}", err),
        }
    }
    files
}

/// Collapse `.` and `..` segments lexically, without touching the
/// filesystem. A `..` above the root is dropped, so absolute paths stay
/// anchored (`/a/../../b` becomes `/b`); relative paths keep leading `..`
/// segments they cannot consume.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
