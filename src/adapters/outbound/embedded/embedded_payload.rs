use crate::catalog::{EMBEDDED_PAYLOAD, EMBEDDED_SOURCE_LABEL};
use crate::ports::outbound::PayloadReader;
use crate::shared::Result;

/// EmbeddedPayloadReader adapter returning the compiled-in dataset
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedPayloadReader;

impl EmbeddedPayloadReader {
    pub fn new() -> Self {
        Self
    }
}

impl PayloadReader for EmbeddedPayloadReader {
    fn read_payload(&self) -> Result<String> {
        Ok(EMBEDDED_PAYLOAD.to_string())
    }

    fn source_label(&self) -> String {
        EMBEDDED_SOURCE_LABEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procurement::services::PayloadLoader;

    #[test]
    fn test_embedded_payload_parses() {
        let content = EmbeddedPayloadReader::new().read_payload().unwrap();
        assert_eq!(PayloadLoader::parse(&content).unwrap().len(), 7);
    }
}
