use std::path::PathBuf;
use thiserror::Error;

use crate::core::variant::VariantRecord;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Unable to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read header of {}: {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read record {record} of {}: {source}", path.display())]
    RecordRead {
        path: PathBuf,
        record: u64,
        #[source]
        source: std::io::Error,
    },
}

/// A restartable, finite sequence of variant records.
///
/// `Some(Ok(_))` is the next record, `None` is end of stream, and `Some(Err(_))` is a
/// read failure. Dropping the iterator releases the underlying handle.
pub type VariantRecords<'a> = Box<dyn Iterator<Item = Result<VariantRecord, SourceError>> + 'a>;

/// A collection of variant records that can be scanned from the beginning any number of times
pub trait VariantSource {
    /// Human-readable name for diagnostics (usually the file path)
    fn label(&self) -> String;

    /// Start a fresh scan from the first record
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Open` if the collection cannot be opened, or
    /// `SourceError::Header` if its header cannot be read.
    fn open(&self) -> Result<VariantRecords<'_>, SourceError>;
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    label: String,
    records: Vec<VariantRecord>,
}

impl MemorySource {
    pub fn new(label: impl Into<String>, records: Vec<VariantRecord>) -> Self {
        Self {
            label: label.into(),
            records,
        }
    }
}

impl VariantSource for MemorySource {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn open(&self) -> Result<VariantRecords<'_>, SourceError> {
        Ok(Box::new(self.records.iter().cloned().map(Ok)))
    }
}
