//! Scripted remote for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::RemoteError;
use crate::remote::{ApiRequest, Remote};

/// Records every request and answers from a queue of scripted outcomes
#[derive(Default)]
pub struct FakeRemote {
    calls: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<Value, RemoteError>>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_ok(&self, payload: Value) {
        self.responses.borrow_mut().push_back(Ok(payload));
    }

    pub fn respond_err(&self, status: u16, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(RemoteError::status(status, Some(message))));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl Remote for FakeRemote {
    async fn request(&self, request: ApiRequest) -> Result<Value, RemoteError> {
        self.calls.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted response".into())))
    }
}

pub fn item_payload(id: u32, text: &str, checked: bool) -> Value {
    json!({ "id": id, "text": text, "checked": checked })
}
