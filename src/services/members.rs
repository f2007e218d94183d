//! Member passes and staff check-in

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    config::MembersConfig,
    error::{AppError, AppResult},
    models::member::{CheckIn, MemberPass, ScanOutcome},
};

/// Turns a payload into a scannable code (SVG, data URL, ...)
#[cfg_attr(test, mockall::automock)]
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str) -> AppResult<String>;
}

/// Camera scanner; resolves once a code is decoded or the modal is closed
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrScanner: Send + Sync {
    async fn scan(&self) -> AppResult<ScanOutcome>;
}

#[derive(Clone, Debug)]
pub struct MembersService {
    pass_prefix: String,
}

impl MembersService {
    pub fn new(config: &MembersConfig) -> Self {
        Self {
            pass_prefix: config.pass_prefix.clone(),
        }
    }

    fn payload(&self, member_id: &str, issued_at: DateTime<Utc>) -> AppResult<String> {
        let member_id = member_id.trim();
        if member_id.is_empty() || !member_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(AppError::Validation(format!("Invalid member id: '{}'", member_id)));
        }
        Ok(format!(
            "{}-{}-{}",
            self.pass_prefix,
            member_id.to_ascii_uppercase(),
            issued_at.timestamp_millis()
        ))
    }

    /// Pass payload for `member_id`, optionally rendered
    pub fn issue_pass(
        &self,
        member_id: &str,
        issued_at: DateTime<Utc>,
        renderer: Option<&dyn QrRenderer>,
    ) -> AppResult<MemberPass> {
        let payload = self.payload(member_id, issued_at)?;
        let rendered = renderer.map(|r| r.render(&payload)).transpose()?;

        tracing::debug!("Issued member pass {}", payload);

        Ok(MemberPass {
            member_id: member_id.trim().to_string(),
            payload,
            issued_at,
            rendered,
        })
    }

    /// Record a decoded code for display. The text is kept as received.
    pub fn record_check_in(&self, decoded_text: &str, scanned_at: DateTime<Utc>) -> AppResult<CheckIn> {
        if decoded_text.trim().is_empty() {
            return Err(AppError::Validation("Decoded text must not be empty".to_string()));
        }
        tracing::info!("Check-in scanned: {}", decoded_text);
        Ok(CheckIn {
            decoded_text: decoded_text.to_string(),
            scanned_at,
        })
    }

    /// Run one scan. `None` when the scanner was closed without a result.
    pub async fn check_in(&self, scanner: &dyn QrScanner) -> AppResult<Option<CheckIn>> {
        match scanner.scan().await? {
            ScanOutcome::Decoded(text) => self.record_check_in(&text, Utc::now()).map(Some),
            ScanOutcome::Cancelled => {
                tracing::debug!("Scanner closed without a result");
                Ok(None)
            }
        }
    }
}
