//! Interactive entry point used when no command is given.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::{Prompter, RelocationContext};

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Backup,
    Restore,
    Move,
    Relink,
    List,
    Exit,
}

const MENU: &[(MenuChoice, &str)] = &[
    (MenuChoice::Backup, "Backup launcher manifests"),
    (MenuChoice::Restore, "Restore launcher manifests"),
    (MenuChoice::Move, "Move game installations"),
    (MenuChoice::Relink, "Relink launcher manifests"),
    (MenuChoice::List, "List games"),
    (MenuChoice::Exit, "Exit"),
];

/// Ask which operation to run and run it once.
pub(crate) fn run_menu(
    ctx: &RelocationContext,
    prompter: &dyn Prompter,
    quiet: bool,
) -> Result<(), CliError> {
    crate::log_blank();
    log::info!(
        "{} {}",
        "Main Menu".if_supports_color(Stdout, |t| t.bold()),
        format!("({} games found)", ctx.game_count()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for (i, (_, label)) in MENU.iter().enumerate() {
        log::info!(
            "  {} {}",
            format!("{})", i + 1).if_supports_color(Stdout, |t| t.cyan()),
            label
        );
    }

    let choice = loop {
        print!("Select an operation: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(());
        }
        match parse_menu_choice(&input) {
            Some(choice) => break choice,
            None => log::warn!("\"{}\" is not a menu option", input.trim()),
        }
    };

    match choice {
        MenuChoice::Backup => super::backup::run_backup(ctx, prompter),
        MenuChoice::Restore => super::backup::run_restore(ctx, prompter),
        MenuChoice::Move => {
            super::move_games::run_move(ctx, prompter, Vec::new(), None, false, quiet)
        }
        MenuChoice::Relink => super::relink::run_relink(ctx, prompter),
        MenuChoice::List => {
            super::list::run_list(ctx);
            Ok(())
        }
        MenuChoice::Exit => Ok(()),
    }
}

/// Accepts a one-based number or a case-insensitive prefix of the operation name.
fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| MENU.get(i)).map(|(c, _)| *c);
    }
    let lower = input.to_ascii_lowercase();
    MENU.iter()
        .find(|(c, _)| format!("{c:?}").to_ascii_lowercase().starts_with(&lower))
        .map(|(c, _)| *c)
}
