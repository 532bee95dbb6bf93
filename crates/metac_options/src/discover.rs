//! Source file discovery for project builds.

use std::path::{Path, PathBuf};

/// Extension of translatable source files.
pub const SOURCE_EXTENSION: &str = "mc";

/// Directories never walked.
const SKIPPED_DIRECTORIES: &[&str] = &[".git", "target", "node_modules"];

/// Discover source files for a project rooted at `root_dir`.
///
/// An explicit `files` list wins and is taken as-is, minus entries that do
/// not exist. Otherwise each `include` entry is either a file or a directory
/// walked recursively for `*.mc` files. An empty include list walks the root.
/// Paths under any `exclude` entry are dropped. The result is sorted and
/// deduplicated.
pub fn discover_source_files(
    root_dir: &Path,
    include: &[String],
    exclude: &[String],
    files: Option<&[String]>,
) -> Vec<PathBuf> {
    let mut result = Vec::new();

    if let Some(file_list) = files {
        for file in file_list {
            let path = resolve(root_dir, file);
            if path.is_file() {
                result.push(path);
            } else {
                tracing::warn!(path = %path.display(), "listed source file does not exist");
            }
        }
        return result;
    }

    let excluded: Vec<PathBuf> = exclude.iter().map(|entry| resolve(root_dir, entry)).collect();

    if include.is_empty() {
        walk_directory(root_dir, &excluded, &mut result);
    }
    for entry in include {
        let path = resolve(root_dir, entry);
        if is_excluded(&path, &excluded) {
            continue;
        }
        if path.is_dir() {
            walk_directory(&path, &excluded, &mut result);
        } else if path.is_file() {
            result.push(path);
        }
    }

    result.sort();
    result.dedup();
    tracing::debug!(root = %root_dir.display(), count = result.len(), "discovered source files");
    result
}

fn resolve(root_dir: &Path, entry: &str) -> PathBuf {
    let entry = entry.trim_start_matches("./");
    if Path::new(entry).is_absolute() {
        PathBuf::from(entry)
    } else if entry.is_empty() || entry == "." {
        root_dir.to_path_buf()
    } else {
        root_dir.join(entry)
    }
}

fn walk_directory(dir: &Path, excluded: &[PathBuf], result: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if is_excluded(&path, excluded) {
            continue;
        }

        if path.is_dir() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if SKIPPED_DIRECTORIES.contains(&name) {
                continue;
            }
            walk_directory(&path, excluded, result);
        } else if is_source_file(&path) {
            result.push(path);
        }
    }
}

fn is_source_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    excluded.iter().any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempProject {
        root: PathBuf,
    }

    impl TempProject {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!("metac_discover_{}_{}", name, std::process::id()));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn file(&self, relative: &str) -> PathBuf {
            let path = self.root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "x = 1").unwrap();
            path
        }
    }

    impl Drop for TempProject {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_include_directories_are_walked_for_sources() {
        let project = TempProject::new("walk");
        let a = project.file("src/a.mc");
        let b = project.file("src/nested/b.mc");
        project.file("src/notes.txt");
        project.file("other/c.mc");

        let found = discover_source_files(&project.root, &["src".to_string()], &[], None);
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn test_exclude_drops_subtrees() {
        let project = TempProject::new("exclude");
        let a = project.file("src/a.mc");
        project.file("src/gen/b.mc");

        let found = discover_source_files(&project.root, &["src".to_string()], &["src/gen".to_string()], None);
        assert_eq!(found, vec![a]);
    }

    #[test]
    fn test_empty_include_walks_root() {
        let project = TempProject::new("root");
        let a = project.file("a.mc");
        let b = project.file("lib/b.mc");
        project.file("target/c.mc");

        let found = discover_source_files(&project.root, &[], &[], None);
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn test_explicit_files_win() {
        let project = TempProject::new("files");
        project.file("src/a.mc");
        let b = project.file("src/b.mc");

        let files = vec!["src/b.mc".to_string(), "src/missing.mc".to_string()];
        let found = discover_source_files(&project.root, &["src".to_string()], &[], Some(&files));
        assert_eq!(found, vec![b]);
    }

    #[test]
    fn test_include_file_entries_and_dedup() {
        let project = TempProject::new("dedup");
        let a = project.file("src/a.mc");

        let include = vec!["src".to_string(), "./src/a.mc".to_string()];
        let found = discover_source_files(&project.root, &include, &[], None);
        assert_eq!(found, vec![a]);
    }
}
