use std::sync::{Arc, Mutex};

/// The single shared output region. Every completed action overwrites it;
/// no history is kept. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct OutputSlot {
    inner: Arc<Mutex<String>>,
}

impl OutputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, text: impl Into<String>) {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = text.into();
    }

    pub fn get(&self) -> String {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
