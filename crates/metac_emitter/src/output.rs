//! Output file layout and writing.

use std::path::{Component, Path, PathBuf};

/// A file produced by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// The output file path.
    pub path: PathBuf,
    /// The translated text.
    pub text: String,
    /// The source file it was translated from.
    pub source: PathBuf,
}

/// Where translated files go.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Output directory override.
    pub out_dir: Option<PathBuf>,
    /// Root directory for calculating relative paths under `out_dir`.
    pub root_dir: Option<PathBuf>,
    /// Extension of output files, without the dot.
    pub out_extension: String,
}

impl OutputLayout {
    pub fn new() -> Self {
        Self {
            out_dir: None,
            root_dir: None,
            out_extension: "java".to_string(),
        }
    }

    /// The output path for `source`: its extension replaced, relocated
    /// under `out_dir` when one is set.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let relocated = match &self.out_dir {
            None => source.to_path_buf(),
            Some(out_dir) => {
                let relative = self
                    .root_dir
                    .as_deref()
                    .and_then(|root| source.strip_prefix(root).ok())
                    .filter(|relative| relative.is_relative());
                match relative {
                    Some(relative) => out_dir.join(relative),
                    None => out_dir.join(source.file_name().unwrap_or(source.as_os_str())),
                }
            }
        };
        relocated.with_extension(&self.out_extension)
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// The deepest directory that contains every source. Used as the layout
/// root when none is configured, so sources in sibling directories keep
/// distinct output paths. `None` when there are no sources.
pub fn common_source_directory<'p, I>(sources: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'p Path>,
{
    let mut common: Option<Vec<Component<'p>>> = None;
    for source in sources {
        let dir = source.parent().unwrap_or(Path::new(""));
        common = Some(match common {
            None => dir.components().collect(),
            Some(prefix) => prefix
                .into_iter()
                .zip(dir.components())
                .take_while(|(a, b)| a == b)
                .map(|(a, _)| a)
                .collect(),
        });
    }
    common.map(|components| components.into_iter().collect())
}

/// Write output files to disk, creating parent directories as needed.
pub fn write_output_files(files: &[OutputFile]) -> std::io::Result<()> {
    for file in files {
        if let Some(parent) = file.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&file.path, &file.text)?;
        tracing::debug!(path = %file.path.display(), bytes = file.text.len(), "wrote output file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_next_to_source() {
        let layout = OutputLayout::new();
        assert_eq!(layout.output_path(Path::new("src/foo.mc")), PathBuf::from("src/foo.java"));
    }

    #[test]
    fn test_output_path_with_outdir() {
        let layout = OutputLayout {
            out_dir: Some(PathBuf::from("out")),
            ..OutputLayout::new()
        };
        assert_eq!(layout.output_path(Path::new("src/lib/foo.mc")), PathBuf::from("out/foo.java"));
    }

    #[test]
    fn test_output_path_keeps_structure_under_root_dir() {
        let layout = OutputLayout {
            out_dir: Some(PathBuf::from("out")),
            root_dir: Some(PathBuf::from("src")),
            out_extension: "txt".to_string(),
        };
        assert_eq!(layout.output_path(Path::new("src/lib/foo.mc")), PathBuf::from("out/lib/foo.txt"));
        // Outside the root the file name alone is kept.
        assert_eq!(layout.output_path(Path::new("other/bar.mc")), PathBuf::from("out/bar.txt"));
    }

    #[test]
    fn test_common_source_directory() {
        let sources = [Path::new("src/a/main.mc"), Path::new("src/b/main.mc"), Path::new("src/a/x/y.mc")];
        assert_eq!(common_source_directory(sources), Some(PathBuf::from("src")));
        assert_eq!(common_source_directory([Path::new("lib/one.mc")]), Some(PathBuf::from("lib")));
        assert_eq!(
            common_source_directory([Path::new("a/main.mc"), Path::new("b/main.mc")]),
            Some(PathBuf::new())
        );
        assert_eq!(common_source_directory(std::iter::empty::<&Path>()), None);
    }

    #[test]
    fn test_sibling_sources_do_not_collide_under_common_root() {
        let sources = [Path::new("a/main.mc"), Path::new("b/main.mc")];
        let layout = OutputLayout {
            out_dir: Some(PathBuf::from("out")),
            root_dir: common_source_directory(sources),
            ..OutputLayout::new()
        };
        assert_eq!(layout.output_path(sources[0]), PathBuf::from("out/a/main.java"));
        assert_eq!(layout.output_path(sources[1]), PathBuf::from("out/b/main.java"));
    }

    #[test]
    fn test_write_output_files_creates_directories() {
        let dir = std::env::temp_dir().join(format!("metac_output_test_{}", std::process::id()));
        let file = OutputFile {
            path: dir.join("nested/a.java"),
            text: "x = 1;\n\n".to_string(),
            source: PathBuf::from("a.mc"),
        };
        write_output_files(std::slice::from_ref(&file)).unwrap();
        assert_eq!(std::fs::read_to_string(&file.path).unwrap(), file.text);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
