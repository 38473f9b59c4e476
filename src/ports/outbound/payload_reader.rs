use crate::shared::Result;

/// PayloadReader port for obtaining raw payload text
///
/// Abstracts where an opportunity payload comes from: a file on disk or the
/// copy compiled into the binary.
pub trait PayloadReader {
    /// Reads the complete payload text
    ///
    /// # Errors
    /// Returns an error if the payload cannot be located or read
    fn read_payload(&self) -> Result<String>;

    /// Human-readable name of the payload source, used in messages
    fn source_label(&self) -> String;
}

impl<T: PayloadReader + ?Sized> PayloadReader for Box<T> {
    fn read_payload(&self) -> Result<String> {
        (**self).read_payload()
    }

    fn source_label(&self) -> String {
        (**self).source_label()
    }
}
