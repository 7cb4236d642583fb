//! Output location for exports.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{Csv, Dot, InterchangeError, Json, ModelFormat, TableJson, TextTree, Yaml};
use crate::model::Model;

/// Stem used when neither the options nor the model name an input file.
pub const DEFAULT_FILE_STEM: &str = "model";

/// Where export files are written.
///
/// Files are named `<out_dir>/<stem>.<extension>`. The stem falls back to
/// the model's input file stem, then to [`DEFAULT_FILE_STEM`].
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output directory, created on demand
    pub out_dir: PathBuf,
    /// Explicit file stem
    pub file_stem: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            file_stem: None,
        }
    }
}

impl ExportOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            file_stem: None,
        }
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = Some(stem.into());
        self
    }

    /// The stem that output files for `model` will use.
    pub fn stem_for(&self, model: &Model) -> String {
        self.file_stem
            .clone()
            .or_else(|| {
                model
                    .input_file()
                    .and_then(Path::file_stem)
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| DEFAULT_FILE_STEM.to_string())
    }

    /// Output path for `model` with `extension`, without touching the disk.
    pub fn output_path(&self, model: &Model, extension: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}.{extension}", self.stem_for(model)))
    }
}

/// Write `model` in one format and return the path written.
pub fn export(
    model: &Model,
    format: &dyn ModelFormat,
    options: &ExportOptions,
) -> Result<PathBuf, InterchangeError> {
    let extension = format.extensions().first().copied().ok_or_else(|| {
        InterchangeError::unsupported(format!("{} has no file extension", format.name()))
    })?;
    let bytes = format.write(model)?;
    std::fs::create_dir_all(&options.out_dir)?;
    let path = options.output_path(model, extension);
    std::fs::write(&path, bytes)?;
    info!(format = format.name(), path = %path.display(), "exported model");
    Ok(path)
}

/// Every export format, in the order [`export_all`] writes them.
pub fn all_formats() -> [&'static dyn ModelFormat; 6] {
    [&Json, &TableJson, &Yaml, &Csv, &Dot, &TextTree]
}

/// Write `model` in every format.
pub fn export_all(model: &Model, options: &ExportOptions) -> Result<Vec<PathBuf>, InterchangeError> {
    all_formats()
        .into_iter()
        .map(|format| export(model, format, options))
        .collect()
}
