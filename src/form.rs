//! Interactive terminal form: one line per field edit, the composed URL is
//! redrawn after every change.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::time::Instant;

use crate::clipboard::Clipboard;
use crate::composer::{Composer, ComposerState};
use crate::utm::UtmKey;

const HELP: &str = "Commands:
  url <value>        set the base URL
  <field> <value>    set a parameter (source, medium, campaign, term, content)
  <field>            clear a parameter
  copy               copy the output URL
  show               redraw the form
  help               show this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetBaseUrl(String),
    SetParam(UtmKey, String),
    Copy,
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<FormCommand> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_lowercase().as_str() {
        "" | "show" => Ok(FormCommand::Show),
        "url" | "base" | "base_url" => Ok(FormCommand::SetBaseUrl(rest.to_string())),
        "copy" => Ok(FormCommand::Copy),
        "help" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" | "q" => Ok(FormCommand::Quit),
        _ => {
            let key: UtmKey = head.parse()?;
            Ok(FormCommand::SetParam(key, rest.to_string()))
        }
    }
}

pub fn render<W: Write>(out: &mut W, composer: &Composer, now: Instant) -> Result<()> {
    let indicator = match composer.state() {
        ComposerState::NoBaseUrlEntered => "enter a URL",
        ComposerState::InvalidUrl => "invalid",
        ComposerState::ValidUrlWithOutput => "valid",
    };

    writeln!(out, "UTM Builder")?;
    writeln!(out, "  {:<14}{} [{}]", "Base URL", composer.base_url(), indicator)?;
    for key in UtmKey::ALL {
        writeln!(out, "  {:<14}{}", key.as_str(), composer.param(key))?;
    }
    writeln!(out, "  {:<14}{}", "Output URL", composer.output())?;

    let copy_status = if composer.is_copied_at(now) {
        "Copied!"
    } else if composer.can_copy() {
        "ready"
    } else {
        "disabled"
    };
    writeln!(out, "  {:<14}{}", "Copy", copy_status)?;
    Ok(())
}

/// Runs the form until `quit` or end of input and returns the final state.
pub fn run<R: BufRead, W: Write>(
    mut composer: Composer,
    input: R,
    out: &mut W,
    clipboard: &mut dyn Clipboard,
) -> Result<Composer> {
    render(out, &composer, Instant::now())?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line.context("Failed to read form input")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}. Type 'help' for commands.", e)?;
                continue;
            }
        };
        debug!("Form command: {:?}", command);

        match command {
            FormCommand::SetBaseUrl(value) => composer.set_base_url(&value),
            FormCommand::SetParam(key, value) => composer.set_param(key, &value),
            FormCommand::Copy => {
                if let Err(e) = composer.copy(clipboard, Instant::now()) {
                    warn!("Copy failed: {}", e);
                    writeln!(out, "Copy failed: {}", e)?;
                    continue;
                }
            }
            FormCommand::Show => {}
            FormCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            FormCommand::Quit => break,
        }

        render(out, &composer, Instant::now())?;
        out.flush()?;
    }

    Ok(composer)
}
