//! Line-driven form: every accepted change recomputes and redraws the report.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, warn};

use crate::app::App;
use crate::logging;
use crate::render::text::render_text;

const HELP: &str = "\
commands:
  crew <1-10>          set crew size
  days <1-1000>        set mission duration in days
  mission <type>       short-leo | medium-lunar | long-deep-space
  recycling <level>    none | partial | high
  log <level>          change log verbosity (error, warn, info, debug, trace)
  show                 redraw the current estimate
  help                 show this list
  quit                 exit";

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Crew(i64),
    Days(i64),
    Mission(String),
    Recycling(String),
    Log(String),
    Show,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum CommandError {
    #[error("unknown command '{0}' (type 'help' for the list)")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingValue(&'static str),

    #[error("'{command}' expects a whole number, got '{value}'")]
    NotANumber {
        command: &'static str,
        value: String,
    },
}

fn parse_number(
    command: &'static str,
    value: Option<&str>,
) -> Result<i64, CommandError> {
    let value = value.ok_or(CommandError::MissingValue(command))?;
    value.parse().map_err(|_| CommandError::NotANumber {
        command,
        value: value.to_string(),
    })
}

fn parse_text(
    command: &'static str,
    value: Option<&str>,
) -> Result<String, CommandError> {
    value
        .map(str::to_string)
        .ok_or(CommandError::MissingValue(command))
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Empty),
        "crew" => parse_number("crew", rest).map(Command::Crew),
        "days" => parse_number("days", rest).map(Command::Days),
        "mission" => parse_text("mission", rest).map(Command::Mission),
        "recycling" => parse_text("recycling", rest).map(Command::Recycling),
        "log" => parse_text("log", rest).map(Command::Log),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn show<W: Write>(
    app: &App,
    output: &mut W,
) -> Result<()> {
    match app.compute() {
        Ok(report) => write!(output, "{}", render_text(&report))?,
        Err(e) => writeln!(output, "error: {e}")?,
    }
    Ok(())
}

/// Applies one form change. Returns `Ok(false)` when the value was rejected
/// and the report should not be redrawn.
fn apply<W: Write>(
    app: &mut App,
    command: Command,
    output: &mut W,
) -> Result<bool> {
    let form = app.form_mut();
    let rejected = match command {
        Command::Crew(n) => {
            form.set_crew_size(n);
            None
        }
        Command::Days(n) => {
            form.set_duration_days(n);
            None
        }
        Command::Mission(value) => form.set_mission_type(&value).err(),
        Command::Recycling(value) => form.set_recycling_level(&value).err(),
        _ => None,
    };

    if let Some(e) = rejected {
        warn!(error = %e, "form value rejected");
        writeln!(output, "error: {e}")?;
        return Ok(false);
    }
    Ok(true)
}

/// Runs the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{HELP}\n")?;
    show(app, output)?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        debug!(command = %line.trim(), "command received");

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Empty) => {}
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Show) => show(app, output)?,
            Ok(Command::Log(level)) => match logging::set_log_level(&level) {
                Ok(()) => writeln!(output, "log level set to '{level}'")?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Ok(change) => {
                if apply(app, change, output)? {
                    show(app, output)?;
                }
            }
            Err(e) => writeln!(output, "error: {e}")?,
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use aerolife_core::RecyclingLevel;
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_script(script: &str) -> (App, String) {
        let mut app = App::default();
        let mut out = Vec::new();
        run(&mut app, script.as_bytes(), &mut out).unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_command_reads_numbers_and_words() {
        assert_eq!(parse_command("crew 4"), Ok(Command::Crew(4)));
        assert_eq!(parse_command("  DAYS   365 "), Ok(Command::Days(365)));
        assert_eq!(
            parse_command("mission medium (lunar)"),
            Ok(Command::Mission("medium (lunar)".to_string()))
        );
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("   "), Ok(Command::Empty));
    }

    #[test]
    fn parse_command_reports_problems() {
        assert_eq!(
            parse_command("crew"),
            Err(CommandError::MissingValue("crew"))
        );
        assert_eq!(
            parse_command("days many"),
            Err(CommandError::NotANumber {
                command: "days",
                value: "many".to_string(),
            })
        );
        assert_eq!(
            parse_command("launch"),
            Err(CommandError::Unknown("launch".to_string()))
        );
    }

    #[test]
    fn each_change_redraws_the_report() {
        let (app, out) = run_script("recycling high\ncrew 1\nquit\n");

        assert_eq!(app.form().recycling_level(), RecyclingLevel::High);
        assert_eq!(app.form().crew_size(), 1);
        // initial report, then one per accepted change
        assert_eq!(out.matches("total life support mass:").count(), 3);
        assert!(out.contains("total life support mass: 878 kg"));
    }

    #[test]
    fn rejected_value_keeps_state_and_skips_redraw() {
        let (app, out) = run_script("recycling extreme\n");

        assert_eq!(app.form().recycling_level(), RecyclingLevel::None);
        assert!(out.contains("error: invalid input: recycling_level = \"extreme\""));
        assert_eq!(out.matches("total life support mass:").count(), 1);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let (app, _) = run_script("crew 99\ndays -5\n");

        assert_eq!(app.form().crew_size(), 10);
        assert_eq!(app.form().duration_days(), 1);
    }

    #[test]
    fn input_stops_at_quit() {
        let (app, _) = run_script("quit\ncrew 9\n");

        assert_eq!(app.form().crew_size(), 3);
    }
}
