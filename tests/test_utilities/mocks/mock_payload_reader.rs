use pncp_radar::prelude::*;

/// Mock PayloadReader serving an in-memory payload
pub struct MockPayloadReader {
    pub content: String,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockPayloadReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl PayloadReader for MockPayloadReader {
    fn read_payload(&self) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock payload read failure");
        }
        Ok(self.content.clone())
    }

    fn source_label(&self) -> String {
        "mock payload".to_string()
    }
}
