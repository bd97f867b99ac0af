//! SMTP session driver.

use super::{SmtpStream, connect};
use crate::command::Command;
use crate::error::Result;
use crate::parser::{expect_code, is_last_reply_line};
use crate::types::{Address, ReplyCode};
use tracing::debug;

/// A connected SMTP session.
///
/// A session only exists in the connected state: [`Session::connect`]
/// performs the greeting and `EHLO` exchange before returning, and
/// [`Session::quit`] consumes the session, so no command can be issued on a
/// closed connection. Commands are strictly sequential; every write is
/// flushed and its reply validated before the next command goes out.
#[derive(Debug)]
pub struct Session {
    stream: SmtpStream,
}

impl Session {
    /// Opens a connection and performs the initial handshake.
    ///
    /// Reads the server greeting (must be `220`), then sends
    /// `EHLO <client_name>` and consumes the multi-line reply. The reply is
    /// only delimited, not code-checked: lines are read until one has a
    /// space in the fourth position (see
    /// [`is_last_reply_line`](crate::parser::is_last_reply_line)).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or the greeting does not
    /// carry code `220`. The socket is released on failure.
    pub async fn connect(hostname: &str, port: u16, client_name: &str) -> Result<Self> {
        let mut stream = connect(hostname, port).await?;
        debug!(hostname, port, "connected to relay");

        let greeting = stream.read_line().await?;
        expect_code(&greeting, ReplyCode::SERVICE_READY)?;

        let mut session = Self { stream };
        session
            .write_command(Command::Ehlo {
                hostname: client_name.to_string(),
            })
            .await?;

        loop {
            let line = session.stream.read_line().await?;
            if is_last_reply_line(&line) {
                break;
            }
        }

        Ok(session)
    }

    /// Submits one message: envelope negotiation, then the payload.
    ///
    /// Runs `MAIL FROM` (expect `250`), `RCPT TO` per recipient (expect
    /// `250`, a single rejection fails the whole send), `DATA` (expect
    /// `354`), then the payload and the `.` terminator (expect `250`).
    /// On failure nothing further is transmitted and the connection stays
    /// open; cleanup is the caller's call via [`Session::quit`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedReply`](crate::Error::UnexpectedReply)
    /// with the raw server line on any reply code mismatch, or a transport
    /// error if the socket fails.
    pub async fn send(
        &mut self,
        from: &Address,
        recipients: &[Address],
        payload: &[u8],
    ) -> Result<()> {
        self.exchange(Command::MailFrom { from: from.clone() }, ReplyCode::OK)
            .await?;

        for recipient in recipients {
            self.exchange(
                Command::RcptTo {
                    to: recipient.clone(),
                },
                ReplyCode::OK,
            )
            .await?;
        }

        self.exchange(Command::Data, ReplyCode::START_DATA).await?;

        self.write_payload(payload).await?;
        let line = self.stream.read_line().await?;
        expect_code(&line, ReplyCode::OK)?;

        debug!(from = %from, recipients = recipients.len(), "message accepted");
        Ok(())
    }

    /// Sends `QUIT` and closes the connection.
    ///
    /// The session is consumed, so the socket is released whether or not
    /// the server answered `221`; a bad reply is still reported but never
    /// masked by the close.
    ///
    /// # Errors
    ///
    /// Returns an error if the QUIT exchange fails.
    pub async fn quit(mut self) -> Result<()> {
        let outcome = self.exchange(Command::Quit, ReplyCode::CLOSING).await;
        debug!("session closed");
        outcome
    }

    /// Writes one command and validates the single-line reply.
    async fn exchange(&mut self, cmd: Command, expected: ReplyCode) -> Result<()> {
        self.write_command(cmd).await?;
        let line = self.stream.read_line().await?;
        expect_code(&line, expected)
    }

    async fn write_command(&mut self, cmd: Command) -> Result<()> {
        self.stream.write_all(&cmd.serialize()).await
    }

    /// Transmits the message payload followed by the end-of-data line.
    ///
    /// Lines starting with `.` are dot-stuffed on the wire so the body can
    /// never fake the terminator.
    async fn write_payload(&mut self, payload: &[u8]) -> Result<()> {
        let mut lines = payload.split(|&b| b == b'\n').peekable();
        while let Some(line) = lines.next() {
            // A trailing newline yields one empty final chunk; the
            // terminator below supplies that line ending.
            if line.is_empty() && lines.peek().is_none() {
                break;
            }
            if line.first() == Some(&b'.') {
                self.stream.write_all(b".").await?;
            }
            self.stream.write_all(line).await?;
            self.stream.write_all(b"\n").await?;
        }

        self.stream.write_all(b".\n").await
    }
}
