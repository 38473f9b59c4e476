use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the formatted report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_presenter_writes_to_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.md");
        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("# report\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report\n");
    }

    #[test]
    fn test_presenter_type_equality() {
        assert_eq!(PresenterType::Stdout, PresenterType::Stdout);
        assert_ne!(
            PresenterType::Stdout,
            PresenterType::File(PathBuf::from("out.json"))
        );
    }
}
