use crate::adapters::outbound::embedded::EmbeddedPayloadReader;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::ports::outbound::PayloadReader;
use std::path::PathBuf;

/// Where the payload comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderType {
    /// The dataset compiled into the binary
    Embedded,
    File(PathBuf),
}

impl ReaderType {
    pub fn from_input(input: Option<PathBuf>) -> Self {
        match input {
            Some(path) => ReaderType::File(path),
            None => ReaderType::Embedded,
        }
    }
}

/// Factory for creating payload readers
pub struct ReaderFactory;

impl ReaderFactory {
    pub fn create(reader_type: ReaderType) -> Box<dyn PayloadReader> {
        match reader_type {
            ReaderType::Embedded => Box::new(EmbeddedPayloadReader::new()),
            ReaderType::File(path) => Box::new(FileSystemReader::new(path)),
        }
    }
}
