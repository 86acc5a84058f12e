//! Interactive command session.
//!
//! A [`Session`] owns the address book for the lifetime of the process and
//! drives the prompt / read / dispatch / print loop over any async
//! reader and writer pair (stdin/stdout in the binary, in-memory buffers in
//! tests).

use crate::commands::{self, Reply, FAREWELL_MESSAGE, WELCOME_MESSAGE};
use crate::config::Config;
use crate::metrics::SessionMetrics;
use crate::models::AddressBook;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// A single-user command session with an in-memory address book.
pub struct Session {
    config: Config,
    book: AddressBook,
    metrics: SessionMetrics,
}

impl Session {
    /// Create a session with an empty address book.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            book: AddressBook::new(),
            metrics: SessionMetrics::new(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Dispatch one line against the session's address book.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        commands::dispatch(line, &mut self.book, &self.metrics)
    }

    /// Run the command loop until an exit command or end of input.
    ///
    /// End of input is treated like `exit`. Only I/O failures are returned
    /// as errors; command failures are printed and the loop continues.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Session started");
        writer
            .write_all(format!("{}\n", WELCOME_MESSAGE).as_bytes())
            .await?;

        let mut buf = Vec::new();
        loop {
            writer.write_all(self.config.prompt.as_bytes()).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                tracing::debug!("End of input");
                writer
                    .write_all(format!("\n{}\n", FAREWELL_MESSAGE).as_bytes())
                    .await?;
                break;
            }
            let line = decode_line(&buf);

            match self.handle_line(&line) {
                Reply::Message(message) => {
                    writer.write_all(format!("{}\n", message).as_bytes()).await?;
                }
                Reply::Exit(message) => {
                    writer.write_all(format!("{}\n", message).as_bytes()).await?;
                    break;
                }
                Reply::Nothing => {}
            }
        }

        writer.flush().await?;
        self.metrics.log_summary();
        tracing::info!(contacts = self.book.len(), "Session finished");
        Ok(())
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
