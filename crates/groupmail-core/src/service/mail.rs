//! Mail delivery: codec + session composition.

use crate::error::Result;
use crate::model::Email;
use chrono::Utc;
use groupmail_mime::Charset;
use groupmail_smtp::{Address, Session};
use tracing::info;

/// Hostname announced in the `EHLO` exchange.
const CLIENT_NAME: &str = "groupmail";

/// One connected delivery session.
///
/// Owns the SMTP session and the configured charset; [`Mailer::send`]
/// renders each [`Email`] into payload bytes and drives the envelope
/// exchange for it. Sends are strictly sequential over the single
/// connection, in the order they are made.
#[derive(Debug)]
pub struct Mailer {
    session: Session,
    encoding: Charset,
}

impl Mailer {
    /// Connects to the relay and performs the handshake.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or greeting fails.
    pub async fn connect(host: &str, port: u16, encoding: Charset) -> Result<Self> {
        let session = Session::connect(host, port, CLIENT_NAME).await?;
        info!(host, port, "connected to SMTP relay");
        Ok(Self { session, encoding })
    }

    /// Submits one email.
    ///
    /// On failure the connection is left open; the caller decides whether
    /// to attempt [`Mailer::quit`] for best-effort cleanup.
    ///
    /// # Errors
    ///
    /// Returns the protocol or transport error from the session, without
    /// retrying.
    pub async fn send(&mut self, email: &Email) -> Result<()> {
        let to: Vec<&str> = email.receivers().iter().map(Address::as_str).collect();
        let payload = groupmail_mime::render(
            email.sender().as_str(),
            &to,
            email.subject(),
            email.body(),
            self.encoding,
            Utc::now(),
        );

        self.session
            .send(email.sender(), email.receivers(), &payload)
            .await?;

        info!(
            sender = %email.sender(),
            receivers = to.len(),
            subject = email.subject(),
            "email submitted"
        );
        Ok(())
    }

    /// Ends the session, releasing the connection in all cases.
    ///
    /// # Errors
    ///
    /// Returns an error if the QUIT exchange fails; the socket is released
    /// regardless.
    pub async fn quit(self) -> Result<()> {
        self.session.quit().await?;
        Ok(())
    }
}
