// SPDX-FileCopyrightText: 2026 Tally Contributors
// SPDX-License-Identifier: MIT

//! Tally CLI entrypoint.
//!
//! By default this runs the interactive keypad TUI.
//!
//! Use `--tape "<keys>"` to run headless: the key script is applied to the
//! initial state and the final display (or, with `--json`, the full state
//! snapshot) is printed to stdout.

use std::error::Error;

use tally::model::CalcState;
use tally::ops::{apply_all, parse_tape};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n  {program} --tape \"<keys>\" [--json]\n\nTUI mode (default) renders the keypad: type digits and + - * /, press = or Enter\nfor equals, c to clear, q or Esc to quit. Colors can be overridden with\nTALLY_PALETTE=\"fg,bg,accent,error\".\n\n--tape applies a key script (digits, + - * /, =, c; whitespace ignored) to the\ninitial state and prints the final display.\n--json prints the final state as a JSON snapshot instead (requires --tape)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    tape: Option<String>,
    json: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--tape" => {
                if options.tape.is_some() {
                    return Err(());
                }
                let tape = args.next().ok_or(())?;
                options.tape = Some(tape);
            }
            "--json" => {
                if options.json {
                    return Err(());
                }
                options.json = true;
            }
            _ => return Err(()),
        }
    }

    if options.json && options.tape.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tally".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some(tape) = options.tape {
            let events = parse_tape(&tape)?;
            let state = apply_all(&CalcState::default(), events);

            if options.json {
                println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
            } else {
                println!("{}", state.display());
            }
            return Ok(());
        }

        tally::tui::run()
    })();

    if let Err(err) = result {
        eprintln!("tally: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_to_tui_mode() {
        assert_eq!(parse(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn accepts_tape_and_json() {
        let options = parse(&["--tape", "5+3=", "--json"]).unwrap();
        assert_eq!(options.tape.as_deref(), Some("5+3="));
        assert!(options.json);
    }

    #[test]
    fn rejects_json_without_tape() {
        parse(&["--json"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse(&["--tape", "1", "--tape", "2"]).unwrap_err();
        parse(&["--tape", "1", "--json", "--json"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_tape_value_and_unknown_flags() {
        parse(&["--tape"]).unwrap_err();
        parse(&["--frobnicate"]).unwrap_err();
        parse(&["5+3="]).unwrap_err();
    }
}
