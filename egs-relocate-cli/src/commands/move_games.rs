use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::{
    MoveAction, MovePlan, MoveProgress, MoveRequest, MoveSummary, Outcome, Prompter,
    RelocationContext,
};

use crate::CliError;

/// Run the move command.
pub(crate) fn run_move(
    ctx: &RelocationContext,
    prompter: &dyn Prompter,
    games: Vec<String>,
    dest: Option<PathBuf>,
    dry_run: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let request = MoveRequest {
        games,
        destination: dest,
    };
    let Some(selection) = ctx.prepare_move(prompter, &request)? else {
        return Ok(());
    };

    if dry_run {
        let plan = ctx.plan_move(&selection)?;
        print_move_plan(&plan);
        return Ok(());
    }

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: MoveProgress| {
        let percent = progress.percent();
        match progress {
            MoveProgress::Game { name, index, total } => {
                log::debug!("Moving games ({percent}%)");
                pb.set_message(format!(
                    "Moving games ({percent}%) [{}/{}] {}",
                    index + 1,
                    total,
                    name
                ));
                pb.tick();
            }
            MoveProgress::Done { .. } => {
                pb.finish_and_clear();
            }
        }
    };

    let outcome = ctx.execute_move(prompter, &selection, &progress_callback);
    pb.finish_and_clear();

    match outcome? {
        Outcome::Completed(summary) => print_move_summary(&summary),
        Outcome::Aborted => {}
    }
    Ok(())
}

/// Print what a move would do.
fn print_move_plan(plan: &MovePlan<'_>) {
    crate::log_blank();
    log::info!(
        "Destination: {}",
        plan.destination
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    for planned in &plan.moves {
        match &planned.action {
            MoveAction::Move { target, manifests } => {
                let names: Vec<&str> = manifests.iter().map(|m| m.name()).collect();
                log::info!(
                    "  {} {} {} {} {}",
                    "\u{2192}".if_supports_color(Stdout, |t| t.green()),
                    planned.game.name().if_supports_color(Stdout, |t| t.bold()),
                    "\u{2192}".if_supports_color(Stdout, |t| t.green()),
                    target.display(),
                    format!("[{}]", names.join(", ")).if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            MoveAction::Skip(reason) => {
                log::warn!(
                    "  {} {} ({})",
                    "?".if_supports_color(Stdout, |t| t.yellow()),
                    planned.game.name().if_supports_color(Stdout, |t| t.dimmed()),
                    reason.description(),
                );
            }
        }
    }
    crate::log_blank();
    log::info!(
        "{} of {} selected games would be moved",
        plan.move_count().if_supports_color(Stdout, |t| t.bold()),
        plan.moves.len(),
    );
}

fn print_move_summary(summary: &MoveSummary) {
    crate::log_blank();
    for moved in &summary.moved {
        log::info!(
            "  {} {} {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            moved.name.if_supports_color(Stdout, |t| t.bold()),
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            moved.target.display(),
        );
    }
    for skipped in &summary.skipped {
        log::warn!(
            "  {} {} ({})",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            skipped.name,
            skipped.reason.description(),
        );
    }

    crate::log_blank();
    log::info!(
        "{} moved, {} skipped",
        summary.moved.len().if_supports_color(Stdout, |t| t.green()),
        summary.skipped.len(),
    );
    if !summary.moved.is_empty() {
        log::info!(
            "You should now run the \"restore\" command with --games-root \"{}\"!",
            summary.destination.display(),
        );
    }
}
