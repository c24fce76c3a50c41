use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};

use crate::services::processor::{Action, FileProcessor};

const HELP: &str = "commands: list | check | scan [dir] | process | single [path] | settings | set [name value] | stats | help | quit";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellSummary {
    pub executed: usize,
    pub failed: usize,
}

enum Parsed {
    Run(Action),
    Help,
    Quit,
    Empty,
    Unknown(String),
    /// End of input while a prompt was waiting.
    Closed,
}

/// Interactive front end: one command per line, prompts for missing
/// arguments, prints the shared output after every action.
pub async fn run_shell<R, W>(processor: &FileProcessor, reader: R, mut writer: W) -> std::io::Result<ShellSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut summary = ShellSummary::default();
    writer.write_all(format!("{}\n", HELP).as_bytes()).await?;

    loop {
        writer.write_all(b"> ").await?;
        writer.flush().await?;
        let Some(line) = lines.next_line().await? else { break };

        match parse(line.trim(), &mut lines, &mut writer).await? {
            Parsed::Run(action) => {
                debug!(action = %action, "shell: running");
                summary.executed += 1;
                if processor.run(action).await.is_err() {
                    summary.failed += 1;
                }
                writer.write_all(format!("{}\n", processor.slot().get()).as_bytes()).await?;
            }
            Parsed::Help => writer.write_all(format!("{}\n", HELP).as_bytes()).await?,
            Parsed::Empty => {}
            Parsed::Unknown(cmd) => {
                writer.write_all(format!("unknown command {:?}; type help\n", cmd).as_bytes()).await?
            }
            Parsed::Quit | Parsed::Closed => break,
        }
    }
    writer.flush().await?;
    info!(executed = summary.executed, failed = summary.failed, "shell finished");
    Ok(summary)
}

async fn parse<R, W>(line: &str, lines: &mut Lines<R>, writer: &mut W) -> std::io::Result<Parsed>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, Some(r.trim())),
        None => (line, None),
    };
    let parsed = match cmd.to_ascii_lowercase().as_str() {
        "" => Parsed::Empty,
        "list" => Parsed::Run(Action::ListFiles),
        "check" => Parsed::Run(Action::CheckFiles),
        "process" => Parsed::Run(Action::ProcessUnconverted),
        "settings" => Parsed::Run(Action::ListSettings),
        "stats" => Parsed::Run(Action::Stats),
        "help" | "?" => Parsed::Help,
        "quit" | "exit" => Parsed::Quit,
        "scan" => match argument(rest, "Enter directory path to scan:", lines, writer).await? {
            Some(dir) => Parsed::Run(Action::ScanFiles(dir.into())),
            None => Parsed::Closed,
        },
        "single" => match argument(rest, "Enter file path to process:", lines, writer).await? {
            Some(path) => Parsed::Run(Action::ProcessSingle(path.into())),
            None => Parsed::Closed,
        },
        "set" => {
            let (name, value) = match rest.filter(|r| !r.is_empty()) {
                Some(r) => match r.split_once(char::is_whitespace) {
                    Some((n, v)) => (Some(n.to_string()), Some(v.trim_start().to_string())),
                    None => (Some(r.to_string()), None),
                },
                None => (None, None),
            };
            let name = match name {
                Some(n) => Some(n),
                None => prompt("Setting name:", lines, writer).await?,
            };
            let value = match (&name, value) {
                (_, Some(v)) => Some(v),
                (Some(_), None) => prompt("Setting value:", lines, writer).await?,
                (None, None) => None,
            };
            match (name, value) {
                (Some(name), Some(value)) => Parsed::Run(Action::UpdateSetting { name, value }),
                _ => Parsed::Closed,
            }
        }
        other => Parsed::Unknown(other.to_string()),
    };
    Ok(parsed)
}

/// Inline argument if present, otherwise a prompted line (which may be empty).
async fn argument<R, W>(inline: Option<&str>, question: &str, lines: &mut Lines<R>, writer: &mut W) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match inline.filter(|s| !s.is_empty()) {
        Some(v) => Ok(Some(v.to_string())),
        None => prompt(question, lines, writer).await,
    }
}

async fn prompt<R, W>(question: &str, lines: &mut Lines<R>, writer: &mut W) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{} ", question).as_bytes()).await?;
    writer.flush().await?;
    lines.next_line().await
}
