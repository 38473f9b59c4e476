mod formatter_factory;
mod presenter_factory;
mod reader_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use reader_factory::{ReaderFactory, ReaderType};
