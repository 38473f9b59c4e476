use pncp_radar::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter capturing what would have been written
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub presented: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.presented.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
