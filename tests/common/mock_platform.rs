//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use clubhouse_pr::error::{Error, Result};
use clubhouse_pr::platform::PlatformService;
use clubhouse_pr::types::PlatformConfig;
use std::sync::Mutex;

/// Call record for `update_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePrCall {
    pub pr_number: u64,
    pub title: String,
    pub body: String,
}

/// Call record for `add_labels`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLabelsCall {
    pub pr_number: u64,
    pub labels: Vec<String>,
}

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    // Call tracking
    update_pr_calls: Mutex<Vec<UpdatePrCall>>,
    add_labels_calls: Mutex<Vec<AddLabelsCall>>,
    // Error injection
    error_on_update_pr: Mutex<Option<String>>,
    error_on_add_labels: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock for a test repository
    pub fn new() -> Self {
        Self::with_config(PlatformConfig {
            owner: "test".to_string(),
            repo: "repo".to_string(),
            host: None,
        })
    }

    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            update_pr_calls: Mutex::new(Vec::new()),
            add_labels_calls: Mutex::new(Vec::new()),
            error_on_update_pr: Mutex::new(None),
            error_on_add_labels: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `update_pull_request` return an error
    pub fn fail_update_pr(&self, msg: &str) {
        *self.error_on_update_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_labels` return an error
    pub fn fail_add_labels(&self, msg: &str) {
        *self.error_on_add_labels.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `update_pull_request` calls
    pub fn get_update_pr_calls(&self) -> Vec<UpdatePrCall> {
        self.update_pr_calls.lock().unwrap().clone()
    }

    /// Get all `add_labels` calls
    pub fn get_add_labels_calls(&self) -> Vec<AddLabelsCall> {
        self.add_labels_calls.lock().unwrap().clone()
    }

    /// Assert that `update_pull_request` was called with a specific title
    pub fn assert_updated_with_title(&self, pr_number: u64, title: &str) {
        let calls = self.get_update_pr_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.pr_number == pr_number && c.title == title),
            "Expected update_pull_request({pr_number}, {title}) but got: {calls:?}"
        );
    }

    /// Assert that `add_labels` was called with specific labels
    pub fn assert_labeled_with(&self, pr_number: u64, labels: &[&str]) {
        let calls = self.get_add_labels_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.pr_number == pr_number && c.labels == labels),
            "Expected add_labels({pr_number}, {labels:?}) but got: {calls:?}"
        );
    }

    /// Assert that no write call was made
    pub fn assert_no_writes(&self) {
        assert!(
            self.get_update_pr_calls().is_empty(),
            "Expected no update_pull_request calls"
        );
        assert!(
            self.get_add_labels_calls().is_empty(),
            "Expected no add_labels calls"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn update_pull_request(&self, pr_number: u64, title: &str, body: &str) -> Result<()> {
        self.update_pr_calls.lock().unwrap().push(UpdatePrCall {
            pr_number,
            title: title.to_string(),
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_update_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(())
    }

    async fn add_labels(&self, pr_number: u64, labels: &[String]) -> Result<()> {
        self.add_labels_calls.lock().unwrap().push(AddLabelsCall {
            pr_number,
            labels: labels.to_vec(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_add_labels.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
