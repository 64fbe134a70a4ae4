//! Console transport
//!
//! Reads one message per line and writes every reply followed by a blank
//! line. A few slash commands control the session itself.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};
use crate::quiz::Dialogue;
use crate::storage::SessionStore;
use crate::utils::errors::Result;

/// Reply sent when a turn fails but the conversation can go on
pub const TURN_FAILED: &str = "Sorry, something went wrong. Please try again.";

/// Console commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    Progress,
    Quit,
}

impl Command {
    /// Parse a slash command, `None` for ordinary messages
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "/restart" => Some(Command::Restart),
            "/progress" => Some(Command::Progress),
            "/quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Drive a conversation from `input` until EOF or `/quit`.
///
/// A turn that fails with a recoverable error is answered with an apology
/// and the loop keeps reading; any other error ends the conversation.
pub async fn run<S, R, W>(
    dialogue: &Dialogue<S>,
    conversation_id: &str,
    input: R,
    mut output: W,
) -> Result<()>
where
    S: SessionStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(conversation_id = conversation_id, "Console conversation started");
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();

        match Command::parse(message) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                dialogue.reset(conversation_id).await?;
                write_reply(&mut output, "Quiz restarted. Send any message to begin.").await?;
            }
            Some(Command::Progress) => {
                let progress = dialogue.progress(conversation_id).await?;
                let text = format!(
                    "Answered {} of {} questions{}",
                    progress.answered,
                    progress.total,
                    if progress.is_complete { " (completed)" } else { "" }
                );
                write_reply(&mut output, &text).await?;
            }
            None => {
                debug!(conversation_id = conversation_id, "Console message received");
                match dialogue.handle_message(conversation_id, message).await {
                    Ok(replies) => {
                        for reply in replies {
                            write_reply(&mut output, &reply).await?;
                        }
                    }
                    Err(e) if e.is_recoverable() => {
                        error!(
                            conversation_id = conversation_id,
                            severity = %e.severity(),
                            "Turn failed: {}", e
                        );
                        write_reply(&mut output, TURN_FAILED).await?;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        output.flush().await?;
    }

    info!(conversation_id = conversation_id, "Console conversation ended");
    Ok(())
}

async fn write_reply<W: AsyncWrite + Unpin>(output: &mut W, reply: &str) -> Result<()> {
    output.write_all(reply.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("/restart"), Some(Command::Restart));
        assert_eq!(Command::parse("/progress"), Some(Command::Progress));
        assert_eq!(Command::parse("/quit"), Some(Command::Quit));
        assert_eq!(Command::parse("quit"), None);
        assert_eq!(Command::parse("2"), None);
    }
}
