//! Headless frontend: one command per input line, one JSON object per output line.
//!
//! ```text
//! select 400      -> {"ok":true,"state":{...},"values":[200,...],"can_submit":true}
//! select 999      -> {"ok":false,"error":"...","code":"CMD_AMOUNT_NOT_ON_BOARD"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Bytes that are not
//! UTF-8 are replaced, so such a line gets a parse error instead of ending
//! the session.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use scorekeeper_core::{Command, GameError, GameState, Points, ScoringEngine};
use scorekeeper_frontend_core::frontend::FrontendApp;

const PARSE_ERROR_CODE: &str = "PARSE_ERROR";

#[derive(Serialize)]
struct Snapshot<'a> {
    ok: bool,
    state: &'a GameState,
    values: &'a [Points],
    can_submit: bool,
}

#[derive(Serialize)]
struct Failure {
    ok: bool,
    error: String,
    code: &'static str,
}

/// Counts of processed lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: usize,
    pub rejected: usize,
    /// Lines that did not parse as a command.
    pub invalid: usize,
}

/// Runs every command read from `reader` against `engine`, writing one JSON
/// line per command to `writer`.
pub async fn run_script<R, W>(
    engine: &mut ScoringEngine,
    mut reader: R,
    writer: &mut W,
) -> Result<ScriptSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = ScriptSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(command) => match engine.execute(&command) {
                Ok(outcome) => {
                    tracing::debug!(command = %command, score = outcome.state.score, "Command applied");
                    summary.applied += 1;
                    let values = engine.clue_values();
                    serde_json::to_string(&Snapshot {
                        ok: true,
                        state: engine.state(),
                        values: &values,
                        can_submit: engine.can_submit(),
                    })?
                }
                Err(error) => {
                    tracing::warn!(command = %command, code = error.error_code(), "{}", error);
                    summary.rejected += 1;
                    serde_json::to_string(&Failure {
                        ok: false,
                        error: error.to_string(),
                        code: error.error_code(),
                    })?
                }
            },
            Err(error) => {
                tracing::warn!(line = %line, "{}", error);
                summary.invalid += 1;
                serde_json::to_string(&Failure {
                    ok: false,
                    error: error.to_string(),
                    code: PARSE_ERROR_CODE,
                })?
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(summary)
}

/// Script frontend bound to the process's stdin and stdout.
pub struct ScriptApp {
    engine: ScoringEngine,
}

impl ScriptApp {
    pub fn stdio() -> Self {
        Self {
            engine: ScoringEngine::new(),
        }
    }
}

#[async_trait]
impl FrontendApp for ScriptApp {
    async fn run(mut self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();

        let summary = run_script(&mut self.engine, reader, &mut stdout).await?;
        tracing::info!(
            applied = summary.applied,
            rejected = summary.rejected,
            invalid = summary.invalid,
            "Script finished"
        );
        Ok(())
    }
}
