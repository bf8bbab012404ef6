use sbom_uploader::prelude::*;
use std::sync::{Arc, Mutex};

/// OutputPresenter that keeps everything it is asked to present
#[derive(Default, Clone)]
pub struct CapturingPresenter {
    pub outputs: Arc<Mutex<Vec<String>>>,
}

impl CapturingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl OutputPresenter for CapturingPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
