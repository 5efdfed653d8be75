//! Interactive port prompt.
//!
//! ```text
//! prompt: Type a port number - Press Enter to start with -> (8080) 99999
//! error:  Port Number should be within (1024 - 65535) Due to root privilege requirement
//! prompt: Type a port number - Press Enter to start with -> (8080)
//! ```
//!
//! An empty line picks the default port.  Invalid input prints the reason and
//! asks again.  End of input (Ctrl+D, closed stdin) aborts the prompt; the
//! binary treats that as a graceful exit.
//!
//! The prompt is generic over its reader and writer so tests can script it.

use std::io;

use slidex_core::{validate_port, PortError, DEFAULT_PORT};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Text shown before the default port.
pub const PROMPT_TEXT: &str = "Type a port number - Press Enter to start with -> ";

#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before a valid port was entered.
    #[error("port prompt aborted")]
    Aborted,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Turns one line typed at the prompt into a port.
///
/// Surrounding whitespace (including the line terminator) is ignored and an
/// empty line selects [`DEFAULT_PORT`].
///
/// # Errors
///
/// Returns the [`PortError`] from [`validate_port`] for anything else that is
/// not an acceptable port.
pub fn resolve_port(line: &str) -> Result<u16, PortError> {
    let value = line.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    validate_port(value)
}

/// Asks for a port until a valid one is entered.
///
/// # Errors
///
/// - [`PromptError::Aborted`] when `input` reaches end of file.
/// - [`PromptError::Io`] when reading or writing the terminal fails.
pub async fn prompt_port<R, W>(input: &mut R, output: &mut W) -> Result<u16, PromptError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        output
            .write_all(format!("prompt: {PROMPT_TEXT}({DEFAULT_PORT}) ").as_bytes())
            .await?;
        output.flush().await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Err(PromptError::Aborted);
        }

        match resolve_port(&line) {
            Ok(port) => return Ok(port),
            Err(e) => {
                output.write_all(format!("error:  {e}\n").as_bytes()).await?;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
