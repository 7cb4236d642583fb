//! Common trait for model interchange formats.

use super::InterchangeError;
use crate::model::Model;

/// Capabilities supported by a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Can read/import models.
    pub read: bool,
    /// Can write/export models.
    pub write: bool,
    /// Preserves every record field, so a read-back model equals the original.
    pub lossless: bool,
}

impl FormatCapability {
    /// Full capability (read, write, lossless).
    pub const FULL: Self = Self {
        read: true,
        write: true,
        lossless: true,
    };

    /// Write-only capability that keeps every field.
    pub const WRITE_ONLY: Self = Self {
        read: false,
        write: true,
        lossless: true,
    };

    /// Write-only rendering that drops most fields.
    pub const RENDER_ONLY: Self = Self {
        read: false,
        write: true,
        lossless: false,
    };
}

/// Trait for model interchange formats.
///
/// Every format is a read-only consumer of a finished [`Model`]; formats
/// that carry the flat table can also read one back.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format. The first one is used for output files.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Capabilities of this format implementation.
    fn capabilities(&self) -> FormatCapability;

    /// Write a model to bytes.
    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError>;

    /// Read a model from bytes.
    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let _ = input;
        Err(InterchangeError::unsupported(format!(
            "{} cannot be read back into a model",
            self.name()
        )))
    }

    /// Validate that the input is well-formed for this format.
    ///
    /// This is a quick check that doesn't fully parse the content.
    fn validate(&self, input: &[u8]) -> Result<(), InterchangeError> {
        let _ = input;
        Ok(())
    }
}
