// src/services/email.rs

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP transport not configured")]
    NotConfigured,

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("send task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub user: String,
    pub pass: String,
    pub from: String,
}

impl MailConfig {
    /// All four SMTP settings are required; any missing one leaves the
    /// mailer unconfigured rather than half-configured.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            host: env::var("SMTP_HOST").ok()?,
            user: env::var("SMTP_USER").ok()?,
            pass: env::var("SMTP_PASS").ok()?,
            from: env::var("SMTP_FROM").ok()?,
        })
    }
}

/// Outbound mail service. Delivery runs over STARTTLS on the blocking pool
/// and the outcome is returned to the caller, which records it per
/// recipient; a failed send never aborts a scheduling batch.
pub struct Mailer {
    config: Option<MailConfig>,
}

impl Mailer {
    pub fn from_env() -> Self {
        Self {
            config: MailConfig::from_env(),
        }
    }

    #[allow(dead_code)]
    pub fn unconfigured() -> Self {
        Self { config: None }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Send a plain-text interview invitation
    pub async fn send_interview_invitation(
        &self,
        to: &str,
        job_title: &str,
        interview_time: &str,
    ) -> Result<(), MailError> {
        let config = self.config.clone().ok_or(MailError::NotConfigured)?;

        let to = to.to_string();
        let body = format!(
            "Dear Candidate,\n\n\
             We are pleased to invite you for an interview for the position of '{}' on {}.\n\n\
             Best regards,\nThe Hiring Team",
            job_title, interview_time
        );

        tokio::task::spawn_blocking(move || {
            let email = Message::builder()
                .from(config.from.parse()?)
                .to(to.parse()?)
                .subject("Interview Invitation")
                .header(ContentType::TEXT_PLAIN)
                .body(body)?;

            let creds = Credentials::new(config.user, config.pass);
            let mailer = SmtpTransport::starttls_relay(&config.host)?
                .credentials(creds)
                .build();

            mailer.send(&email)?;
            Ok(())
        })
        .await?
    }
}
