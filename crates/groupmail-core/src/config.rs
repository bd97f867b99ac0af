//! Run configuration.
//!
//! Read from a plain `key=value` file. Blank lines and `#` comments are
//! skipped; any other line without a `=` is an error. All required values
//! are validated for presence and type up front, before any file or
//! network activity.

use crate::error::{Error, Result};
use groupmail_mime::Charset;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the message templates file.
    pub messages_file: PathBuf,
    /// Path to the address list file.
    pub victims_file: PathBuf,
    /// Line prefix separating message templates.
    pub message_separator: String,
    /// Character encoding declared and applied by the codec.
    pub encoding: Charset,
    /// Number of groups to partition the address list into.
    pub group_count: usize,
    /// SMTP relay host.
    pub smtp_server_address: String,
    /// SMTP relay port.
    pub smtp_server_port: u16,
    /// Whether to shuffle addresses before partitioning.
    pub shuffle: bool,
}

impl Config {
    /// Loads and validates the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error for malformed lines and missing or invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed lines and missing or
    /// invalid values.
    pub fn parse(text: &str) -> Result<Self> {
        let values = parse_pairs(text)?;

        let group_count = require(&values, "group_count")?
            .parse()
            .map_err(|_| Error::Config("group_count must be a positive integer".to_string()))?;
        let smtp_server_port = require(&values, "smtp_server_port")?
            .parse()
            .map_err(|_| Error::Config("smtp_server_port must be a port number".to_string()))?;
        let encoding = Charset::parse(require(&values, "encoding")?)?;
        let shuffle = match values.get("shuffle").map(String::as_str) {
            None => false,
            Some(v) => v
                .parse()
                .map_err(|_| Error::Config("shuffle must be true or false".to_string()))?,
        };

        Ok(Self {
            messages_file: PathBuf::from(require(&values, "messages_file")?),
            victims_file: PathBuf::from(require(&values, "victims_file")?),
            message_separator: require(&values, "message_separator")?.to_string(),
            encoding,
            group_count,
            smtp_server_address: require(&values, "smtp_server_address")?.to_string(),
            smtp_server_port,
            shuffle,
        })
    }
}

fn parse_pairs(text: &str) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Config(format!("invalid configuration line: {line}")));
        };
        values.insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(values)
}

fn require<'a>(values: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    values
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("missing or empty configuration key: {key}")))
}
