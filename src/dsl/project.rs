//! Project export
//!
//! An [`ExportPlan`] maps relative file paths to their contents: one script
//! per class, one autoload script per `global` class, an `[autoload]`
//! registration fragment when any global class exists, and a JSON manifest
//! holding every record with its canonical DSL. Building the plan touches no
//! files; [`ExportPlan::write_to`] does.
//!
//! Class names become file names, so a plan is only built for projects whose
//! names are unique and free of path syntax.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::dsl::ast::{ClassKind, ClassRecord};
use crate::dsl::formats::{AutoloadFormatter, DslFormatter, FormatError, GdscriptFormatter};

pub const MANIFEST_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("class name '{0}' cannot be used as a file name")]
    UnsafeName(String),
    #[error("class '{0}' is defined more than once")]
    DuplicateName(String),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Whether `name` can be used as a file stem inside an output directory.
///
/// Rejects empty names, names made only of dots, path separators, drive
/// colons and control characters.
pub fn is_safe_file_stem(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().all(|c| c == '.')
        && !name
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':') || c.is_control())
}

fn check_names(records: &[ClassRecord]) -> Result<(), ExportError> {
    let mut seen = HashSet::new();
    for record in records {
        if !is_safe_file_stem(&record.name) {
            return Err(ExportError::UnsafeName(record.name.clone()));
        }
        if !seen.insert(record.name.as_str()) {
            return Err(ExportError::DuplicateName(record.name.clone()));
        }
    }
    Ok(())
}

/// `[autoload]` entries for the engine's project settings
fn autoload_registry(records: &[ClassRecord], config: &ExportConfig) -> Option<String> {
    let mut globals = records
        .iter()
        .filter(|record| record.kind == ClassKind::Global)
        .peekable();
    globals.peek()?;

    let dir = config.autoloads_dir.trim_end_matches('/');
    let mut out = String::from("[autoload]\n\n");
    for record in globals {
        out.push_str(&format!(
            "{name}=\"*res://{dir}/{name}.gd\"\n",
            name = record.name
        ));
    }
    Some(out)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    project_name: &'a str,
    version: &'static str,
    classes: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    record: &'a ClassRecord,
    dsl: String,
}

/// Files to write, keyed by path relative to the output directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPlan {
    files: BTreeMap<PathBuf, String>,
}

impl ExportPlan {
    pub fn build(
        project_name: &str,
        records: &[ClassRecord],
        config: &ExportConfig,
        indent: &str,
    ) -> Result<Self, ExportError> {
        check_names(records)?;
        let scripts = GdscriptFormatter::new(indent);
        let autoloads = AutoloadFormatter::new(indent);
        let dsl = DslFormatter::default();
        let mut files = BTreeMap::new();

        for record in records {
            let file_name = format!("{}.gd", record.name);
            files.insert(
                Path::new(&config.scripts_dir).join(&file_name),
                scripts.generate(record),
            );
            if record.kind == ClassKind::Global {
                files.insert(
                    Path::new(&config.autoloads_dir).join(&file_name),
                    autoloads.generate(record),
                );
            }
        }

        let manifest = Manifest {
            project_name,
            version: MANIFEST_VERSION,
            classes: records
                .iter()
                .map(|record| ManifestEntry {
                    record,
                    dsl: dsl.generate(record),
                })
                .collect(),
        };
        let manifest = serde_json::to_string_pretty(&manifest)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        files.insert(PathBuf::from(&config.manifest), manifest);
        if let Some(registry) = autoload_registry(records, config) {
            files.insert(PathBuf::from(&config.autoload_registry), registry);
        }

        debug!(project = project_name, files = files.len(), "built export plan");
        Ok(Self { files })
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, content)| (path.as_path(), content.as_str()))
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file under `dir`, creating directories as needed
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        for (path, content) in &self.files {
            let target = dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)?;
        }
        info!(dir = %dir.display(), files = self.files.len(), "exported project");
        Ok(())
    }
}
