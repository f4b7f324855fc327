//! Shared test utilities for shouldupdate.

pub mod fixtures;
pub mod mock_server;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{Result, SuError};
use crate::releases::ReleaseSource;

/// Canned answer for one identifier in [`StubReleases`].
#[derive(Debug, Clone)]
pub enum StubAnswer {
    Version(String),
    Status(u16),
    MissingTag,
}

/// In-memory [`ReleaseSource`] that records every identifier it was asked
/// about.
#[derive(Debug, Default)]
pub struct StubReleases {
    answers: HashMap<String, StubAnswer>,
    calls: RefCell<Vec<String>>,
}

impl StubReleases {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(mut self, identifier: &str, version: &str) -> Self {
        self.answers
            .insert(identifier.to_string(), StubAnswer::Version(version.to_string()));
        self
    }

    #[must_use]
    pub fn with_answer(mut self, identifier: &str, answer: StubAnswer) -> Self {
        self.answers.insert(identifier.to_string(), answer);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ReleaseSource for StubReleases {
    fn latest_version(&self, identifier: &str) -> Result<String> {
        self.calls.borrow_mut().push(identifier.to_string());
        let url = format!("stub://repos/{identifier}/releases/latest");
        match self.answers.get(identifier) {
            Some(StubAnswer::Version(version)) => Ok(version.clone()),
            Some(StubAnswer::Status(status)) => Err(SuError::Api {
                identifier: identifier.to_string(),
                url,
                status: *status,
                message: None,
                documentation_url: None,
            }),
            Some(StubAnswer::MissingTag) => Err(SuError::MissingTag {
                identifier: identifier.to_string(),
                url,
            }),
            None => Err(SuError::Api {
                identifier: identifier.to_string(),
                url,
                status: 404,
                message: Some("Not Found".to_string()),
                documentation_url: None,
            }),
        }
    }
}
