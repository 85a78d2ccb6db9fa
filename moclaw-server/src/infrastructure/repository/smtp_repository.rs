use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
    config::Config,
    domain::{errors::AppError, models::Visit, ports::notification::NotificationRepository},
};

/// Mails every visit to the operator over a STARTTLS SMTP relay.
#[derive(Clone)]
pub struct SmtpRepository {
    host: String,
    port: u16,
    credentials: Credentials,
    from: Mailbox,
    to: Mailbox,
    subject: String,
}

impl SmtpRepository {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            credentials: Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ),
            from: config.mail_from.parse()?,
            to: config.mail_to.parse()?,
            subject: config.mail_subject.clone(),
        })
    }

    pub fn build_message(&self, visit: &Visit) -> Result<Message, AppError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(compose_body(visit))?;
        Ok(message)
    }
}

pub fn compose_body(visit: &Visit) -> String {
    format!(
        "IP: {}\nLocation: {}\nDevice: {}",
        visit.ip,
        visit.location,
        visit.device.as_deref().unwrap_or("N/A")
    )
}

impl NotificationRepository for SmtpRepository {
    async fn notify(&self, visit: &Visit) -> Result<(), AppError> {
        let message = self.build_message(visit)?;

        // A fresh transport per visit: the session is not kept between requests.
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();

        let response = mailer.send(message).await?;
        tracing::debug!(code = %response.code(), "notification email accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn config() -> Config {
        Config {
            server_host: "127.0.0.1".into(),
            server_port: 5000,
            ipinfo_protocol: "http".into(),
            ipinfo_host: "ipinfo.io".into(),
            ipinfo_token: None,
            smtp_host: "localhost".into(),
            smtp_port: 2525,
            smtp_username: "sender@example.com".into(),
            smtp_password: "hunter2".into(),
            mail_from: "sender@example.com".into(),
            mail_to: "operator@example.com".into(),
            mail_subject: "Who clicked on your link?".into(),
        }
    }

    fn visit(device: Option<&str>) -> Visit {
        Visit {
            ip: "1.2.3.4".into(),
            location: json!({"city": "Springfield"}),
            device: device.map(str::to_owned),
        }
    }

    #[test]
    fn body_lists_visit_facts() {
        assert_eq!(
            compose_body(&visit(Some("TestAgent/1.0"))),
            "IP: 1.2.3.4\nLocation: {\"city\":\"Springfield\"}\nDevice: TestAgent/1.0"
        );
    }

    #[test]
    fn body_marks_missing_device() {
        assert!(compose_body(&visit(None)).ends_with("Device: N/A"));
    }

    #[test]
    fn message_is_addressed_to_operator() {
        let repo = SmtpRepository::new(&config()).unwrap();
        let message = repo.build_message(&visit(Some("TestAgent/1.0"))).unwrap();

        let envelope = message.envelope();
        assert_eq!(envelope.from().unwrap().to_string(), "sender@example.com");
        assert_eq!(envelope.to()[0].to_string(), "operator@example.com");

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Who clicked on your link?"));
        assert!(raw.contains("IP: 1.2.3.4"));
        assert!(raw.contains("Device: TestAgent/1.0"));
    }

    #[test]
    fn rejects_invalid_addresses() {
        let mut config = config();
        config.mail_to = "not an address".into();

        assert!(matches!(
            SmtpRepository::new(&config),
            Err(AppError::Address(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_relay_is_an_smtp_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut config = config();
        config.smtp_host = "127.0.0.1".into();
        config.smtp_port = port;
        let repo = SmtpRepository::new(&config).unwrap();

        let err = repo
            .notify(&visit(Some("TestAgent/1.0")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Smtp(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
