//! Test double for [`RewriteBackend`](super::RewriteBackend).

use super::RewriteBackend;
use crate::error::{Result, TimesheetError};
use std::cell::RefCell;

/// Backend returning a fixed reply or failure, recording every request.
#[derive(Debug)]
pub struct ScriptedBackend {
    reply: std::result::Result<String, String>,
    requests: RefCell<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// `(raw, style)` pairs received so far.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

impl RewriteBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    fn rewrite(&self, raw: &str, style: &str) -> Result<String> {
        self.requests
            .borrow_mut()
            .push((raw.to_string(), style.to_string()));
        self.reply.clone().map_err(TimesheetError::Llm)
    }
}
