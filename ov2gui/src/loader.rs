//! Loading every `.gfx`/`.gui` file of an interface directory.

use std::path::{Path, PathBuf};

use ov2txt::ParseError;
use thiserror::Error;
use walkdir::WalkDir;

use crate::interface::Interface;
use crate::parser::DocumentKind;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Failed to scan '{}': {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// What to do when a file fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failing file and return its error.
    #[default]
    Abort,
    /// Log the error, record it in the report and continue with the next file.
    SkipFile,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Descend into subdirectories.
    pub recursive: bool,
    pub on_error: ErrorPolicy,
}

/// Per-file outcome of [`Interface::load_dir`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files that parsed, with what they contained, in visit order.
    pub parsed: Vec<(PathBuf, DocumentKind)>,
    /// Files skipped under [`ErrorPolicy::SkipFile`].
    pub failed: Vec<(PathBuf, ParseError)>,
}

impl LoadReport {
    /// Files whose top-level keyword was not recognised.
    pub fn ignored(&self) -> impl Iterator<Item = &Path> {
        self.parsed
            .iter()
            .filter(|(_, kind)| matches!(kind, DocumentKind::Ignored(_)))
            .map(|(path, _)| path.as_path())
    }
}

/// True for `.gfx` and `.gui` files, whatever the case of the extension.
pub fn is_interface_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gfx") || ext.eq_ignore_ascii_case("gui"))
}

impl Interface {
    /// Parses every interface file in `dir`, in file-name order, into this database.
    pub fn load_dir<P: AsRef<Path>>(
        &mut self,
        dir: P,
        options: &LoadOptions,
    ) -> Result<LoadReport, LoadError> {
        let dir = dir.as_ref();
        let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
        if !options.recursive {
            walker = walker.max_depth(1);
        }

        let mut report = LoadReport::default();
        for entry in walker {
            let entry = entry.map_err(|source| LoadError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() || !is_interface_file(entry.path()) {
                continue;
            }

            let path = entry.into_path();
            log::debug!("Parsing {}", path.display());
            let mut file = Interface::new();
            let result = file.parse_file(&path);
            // A failed file contributes only its warnings.
            self.merge(file);
            match result {
                Ok(kind) => report.parsed.push((path, kind)),
                Err(e) if options.on_error == ErrorPolicy::SkipFile => {
                    log::error!("Skipping {}: {}", path.display(), e);
                    report.failed.push((path, e));
                }
                Err(e) => return Err(e.into()),
            }
        }

        log::info!(
            "Loaded {} interface files from {} ({} sprites, {} widgets, {} failed)",
            report.parsed.len(),
            dir.display(),
            self.sprites.len(),
            self.widget_node_count(),
            report.failed.len()
        );
        Ok(report)
    }
}
