//! Confirmation channel for destructive operations
//!
//! A delete never proceeds without an explicit confirm/cancel choice. The
//! prompt is a port so the console, a GUI dialog, or a test double can all
//! answer it.

use async_trait::async_trait;

/// The blocking question shown before a destructive operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmationRequest {
    /// Builds the standard destructive-action prompt
    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Yes, Delete".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Answers confirmation requests
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Returns true when the user confirms, false when they cancel
    async fn confirm(&self, request: ConfirmationRequest) -> bool;
}

/// Prompt that confirms everything (demo walkthroughs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait]
impl ConfirmationPrompt for AlwaysConfirm {
    async fn confirm(&self, _request: ConfirmationRequest) -> bool {
        true
    }
}

/// Prompt that cancels everything (tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

#[async_trait]
impl ConfirmationPrompt for AlwaysDecline {
    async fn confirm(&self, _request: ConfirmationRequest) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stock_prompts() {
        let request = ConfirmationRequest::destructive("Delete Bill", "Are you sure?");
        assert!(AlwaysConfirm.confirm(request.clone()).await);
        assert!(!AlwaysDecline.confirm(request).await);
    }

    #[test]
    fn test_destructive_labels() {
        let request = ConfirmationRequest::destructive("Delete Doctor", "Sure?");
        assert_eq!(request.confirm_label, "Yes, Delete");
        assert_eq!(request.cancel_label, "Cancel");
    }
}
