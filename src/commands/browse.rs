//! The `browse` command: an interactive session that keeps a `DisplayState` alive between
//! commands, so that sorting the same column again reverses it.

use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::model::{Column, SearchMode, TransactionSet};
use crate::render::OutputFormat;
use crate::view::DisplayState;
use crate::{render, store, Config, Result};
use anyhow::{bail, Context};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

const HELP: &str = "\
Commands:
  search <term>   show transactions where <term> appears in the date, amount or category
  exact <term>    show transactions where <term> is the whole date, amount or category
  sort <column>   sort by date, amount or category; sorting the same column again reverses it
  all             show all transactions again
  help            show this message
  quit            end the session
";

/// Loads the data file and runs an interactive session on stdin and stdout.
///
/// # Errors
/// - Returns an error if the data file exists but cannot be read or parsed.
/// - Returns an error if reading stdin or writing stdout fails.
pub async fn browse(config: &Config) -> Result<Out<()>> {
    let set = store::load(config.data_file()).await?;
    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    run_session(&set, config.format(), input, &mut output).await?;
    Ok(Out::new_message(""))
}

/// Runs an interactive session over `set`, reading one command per line from `input` and writing
/// the table to `output` after every change. The session ends at `quit` or at the end of `input`.
///
/// Lines that cannot be understood produce an error line on `output` and the session continues.
pub async fn run_session<R, W>(
    set: &TransactionSet,
    format: OutputFormat,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Browsing {} transactions, type 'help' for commands", set.len());
    let mut view = DisplayState::new(set);
    write(output, &render::render(&view, format)?).await?;

    let mut lines = input.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .context("Unable to read a command")
        .pub_result(ErrorType::Io)?
    {
        if line.trim().is_empty() {
            continue;
        }
        let command = match SessionCommand::from_str(&line).pub_result(ErrorType::Input) {
            Ok(command) => command,
            Err(e) => {
                warn!("{e:#}");
                write(output, &format!("error: {}\n", e.root_cause())).await?;
                continue;
            }
        };
        debug!("{command:?}");

        match command {
            SessionCommand::Search { term, mode } => view.search(set, &term, mode),
            SessionCommand::Sort(column) => {
                let _ = view.sort_by(column);
            }
            SessionCommand::All => view.reset(set),
            SessionCommand::Help => {
                write(output, HELP).await?;
                continue;
            }
            SessionCommand::Quit => break,
        }
        write(output, &render::render(&view, format)?).await?;
    }
    Ok(())
}

async fn write<W>(output: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(text.as_bytes())
        .await
        .context("Unable to write output")
        .pub_result(ErrorType::Io)?;
    output
        .flush()
        .await
        .context("Unable to flush output")
        .pub_result(ErrorType::Io)
}

/// One line of input in a `browse` session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Search { term: String, mode: SearchMode },
    Sort(Column),
    All,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_lowercase().as_str() {
            "search" | "contains" => SessionCommand::Search {
                term: rest.to_string(),
                mode: SearchMode::Contains,
            },
            "exact" => SessionCommand::Search {
                term: rest.to_string(),
                mode: SearchMode::Exact,
            },
            "sort" => {
                let column = Column::from_str(&rest.to_lowercase()).map_err(|_| {
                    anyhow::anyhow!(
                        "Unknown column '{rest}', expected one of date, amount or category"
                    )
                })?;
                SessionCommand::Sort(column)
            }
            "all" | "reset" => SessionCommand::All,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            _ => bail!("Unknown command '{word}', type 'help' for the list of commands"),
        };
        Ok(command)
    }
}
