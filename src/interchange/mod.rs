//! Model interchange formats.
//!
//! Every format is a read-only consumer of a finished [`Model`]:
//!
//! - **JSON** - nested ownership tree, each node with its full field set
//! - **Table JSON** / **YAML** - the flat record table, readable back
//! - **CSV** - one row per record in index order
//! - **DOT** - parent/child graph for Graphviz
//! - **Text tree** - indented `[index]: name` rendering
//!
//! ```no_run
//! use syster_model::interchange::{ExportOptions, export_all};
//! use syster_model::model::Model;
//!
//! let model = Model::from_file("vehicle.sysml")?;
//! // Writes out/vehicle.json, out/vehicle.csv, ...
//! export_all(&model, &ExportOptions::new("out"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod csv;
mod dot;
mod error;
mod format;
mod json;
mod options;
mod text;
mod yaml;

pub use csv::{COLUMNS as CSV_COLUMNS, Csv};
pub use dot::Dot;
pub use error::InterchangeError;
pub use format::{FormatCapability, ModelFormat};
pub use json::{Json, TableJson};
pub use options::{DEFAULT_FILE_STEM, ExportOptions, all_formats, export, export_all};
pub use text::TextTree;
pub use yaml::Yaml;
