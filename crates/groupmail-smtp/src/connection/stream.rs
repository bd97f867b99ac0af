//! Low-level SMTP stream handling.

use crate::error::{Error, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Buffered line-oriented stream over a plain TCP connection.
#[derive(Debug)]
pub struct SmtpStream {
    reader: BufReader<TcpStream>,
}

impl SmtpStream {
    /// Reads one reply line from the stream, with the terminator trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionClosed`] on end-of-stream and
    /// [`Error::Io`] if the read fails.
    pub async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).await?;
        if n == 0 {
            return Err(Error::ConnectionClosed);
        }
        Ok(line.trim_end().to_string())
    }

    /// Writes data to the stream and flushes it before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the write or flush fails.
    pub async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.reader.get_mut().write_all(data).await?;
        self.reader.get_mut().flush().await?;
        Ok(())
    }
}

/// Connects to an SMTP server over plain TCP.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn connect(hostname: &str, port: u16) -> Result<SmtpStream> {
    let addr = format!("{hostname}:{port}");
    let stream = TcpStream::connect(&addr).await?;
    Ok(SmtpStream {
        reader: BufReader::new(stream),
    })
}
