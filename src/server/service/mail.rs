//! Outgoing email.
//!
//! With `SMTP_HOST` set, mail goes through an async lettre SMTP transport. Without it the
//! mailer only logs the message, which keeps password recovery usable in development.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::Config,
    error::{config::ConfigError, internal::InternalError, AppError},
};

#[derive(Clone)]
enum Transport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Log,
}

#[derive(Clone)]
pub struct Mailer {
    transport: Transport,
    from: Mailbox,
}

impl Mailer {
    /// Builds the mailer from `SMTP_*` and `MAIL_FROM`.
    ///
    /// # Returns
    /// - `Ok(Mailer)` - SMTP mailer if `SMTP_HOST` is set, log-only otherwise
    /// - `Err(AppError::ConfigErr)` - `MAIL_FROM` is not a valid mailbox or the relay
    ///   host is rejected
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let from: Mailbox = config.mail_from.parse().map_err(|e: lettre::address::AddressError| {
            ConfigError::InvalidEnvVar {
                name: "MAIL_FROM".to_string(),
                value: config.mail_from.clone(),
                reason: e.to_string(),
            }
        })?;

        let Some(smtp) = &config.smtp else {
            tracing::info!("SMTP_HOST not set, outgoing mail will only be logged");
            return Ok(Self {
                transport: Transport::Log,
                from,
            });
        };

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SMTP_HOST".to_string(),
                value: smtp.host.clone(),
                reason: e.to_string(),
            })?
            .port(smtp.port);

        if let (Some(username), Some(password)) = (&smtp.username, &smtp.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Transport::Smtp(builder.build()),
            from,
        })
    }

    /// Mailer that only logs, used by tests.
    pub fn log_only(from: Mailbox) -> Self {
        Self {
            transport: Transport::Log,
            from,
        }
    }

    /// Sends a plain-text message.
    ///
    /// # Returns
    /// - `Ok(())` - Message delivered to the relay, or logged
    /// - `Err(AppError::InternalErr(Mail))` - Invalid recipient or delivery failure
    pub async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), AppError> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e: lettre::address::AddressError| InternalError::Mail(e.to_string()))?;

        match &self.transport {
            Transport::Log => {
                tracing::info!(to = %recipient, subject, "{}", body);
            }
            Transport::Smtp(transport) => {
                let message = Message::builder()
                    .from(self.from.clone())
                    .to(recipient)
                    .subject(subject)
                    .header(ContentType::TEXT_PLAIN)
                    .body(body)
                    .map_err(|e| InternalError::Mail(e.to_string()))?;

                transport
                    .send(message)
                    .await
                    .map_err(|e| InternalError::Mail(e.to_string()))?;

                tracing::debug!("Sent '{}' to {}", subject, to);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_only_accepts_valid_recipient() {
        let mailer = Mailer::log_only("test@example.com".parse().unwrap());

        assert!(mailer
            .send("user@example.com", "Hello", "body".to_string())
            .await
            .is_ok());
        assert!(mailer
            .send("not an address", "Hello", "body".to_string())
            .await
            .is_err());
    }
}
