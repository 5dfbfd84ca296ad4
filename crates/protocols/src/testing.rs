//! In-memory `ObjectReader` for tests.

use crate::ObjectReader;
use crate::error::ProtocolError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockObjectReader {
    objects: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl MockObjectReader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_object(mut self, id: &str, object: Value) -> Self {
        self.objects.insert(id.to_string(), object);
        self
    }

    /// Object ids requested so far, in call order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ObjectReader for MockObjectReader {
    async fn get_object(&self, object_id: &str) -> Result<Value, ProtocolError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(object_id.to_string());
        }
        self.objects
            .get(object_id)
            .cloned()
            .ok_or_else(|| ProtocolError::Rpc {
                code: -32000,
                message: format!("object {object_id} not found"),
            })
    }
}
