//! Stdin/stdout implementation of the library's [`Prompter`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::Prompter;

/// Asks questions on the terminal. With `assume_yes`, confirmations are
/// answered without reading stdin.
pub(crate) struct StdinPrompter {
    assume_yes: bool,
}

impl StdinPrompter {
    pub(crate) fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        crate::log_blank();
        if self.assume_yes {
            log::info!("{message} [y/N] y");
            return Ok(true);
        }
        print!("{message} [y/N] ");
        io::stdout().flush()?;

        let answer = read_line()?;
        let confirmed = answer.trim().eq_ignore_ascii_case("y");
        if !confirmed {
            log::info!("Aborting...");
        }
        Ok(confirmed)
    }

    fn select(&self, header: &str, options: &[String]) -> io::Result<Vec<usize>> {
        log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
        for (i, option) in options.iter().enumerate() {
            log::info!(
                "  {} {}",
                format!("{:>3})", i + 1).if_supports_color(Stdout, |t| t.cyan()),
                option
            );
        }

        loop {
            print!("Select games (numbers separated by spaces or commas, \"all\", empty for none): ");
            io::stdout().flush()?;
            let input = read_line()?;
            match parse_selection(&input, options.len()) {
                Ok(selection) => {
                    if !selection.is_empty() {
                        log::info!("Your selection:");
                        for &i in &selection {
                            log::info!("- \"{}\"", options[i]);
                        }
                    }
                    return Ok(selection);
                }
                Err(msg) => log::warn!("{msg}"),
            }
        }
    }

    fn input_path(&self, prompt: &str) -> io::Result<Option<PathBuf>> {
        crate::log_blank();
        print!("{prompt}: ");
        io::stdout().flush()?;
        let input = read_line()?;
        let trimmed = input.trim().trim_matches('"');
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed while waiting for an answer",
        ));
    }
    Ok(input)
}

/// Parse a one-based selection like `"1, 3 4"` or `"all"` into zero-based
/// indices, keeping the order given and dropping repeats.
pub(crate) fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") || input == "*" {
        return Ok((0..len).collect());
    }

    let mut selection = Vec::new();
    for token in input.split([',', ' ', '\t']).filter(|t| !t.is_empty()) {
        let n: usize = token
            .parse()
            .map_err(|_| format!("\"{token}\" is not a number"))?;
        if n == 0 || n > len {
            return Err(format!("{n} is not between 1 and {len}"));
        }
        if !selection.contains(&(n - 1)) {
            selection.push(n - 1);
        }
    }
    Ok(selection)
}
