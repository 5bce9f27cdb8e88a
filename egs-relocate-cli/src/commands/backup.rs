use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::{Prompter, RelocationContext, UnmatchedManifest};

use crate::CliError;

/// Run the backup command.
pub(crate) fn run_backup(ctx: &RelocationContext, prompter: &dyn Prompter) -> Result<(), CliError> {
    log::info!(
        "Launcher manifests: {}",
        ctx.config()
            .launcher_manifest_root
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let Some(summary) = ctx.backup_manifests(prompter)?.completed() else {
        return Ok(());
    };

    crate::log_blank();
    log::info!(
        "{} {} launcher manifests backed up to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.backed_up.len(),
        ctx.backup_folder()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    print_unmatched(&summary.unmatched);
    Ok(())
}

/// Run the restore command.
pub(crate) fn run_restore(
    ctx: &RelocationContext,
    prompter: &dyn Prompter,
) -> Result<(), CliError> {
    log::info!(
        "Backup folder: {}",
        ctx.backup_folder()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let Some(summary) = ctx.restore_manifests(prompter)?.completed() else {
        return Ok(());
    };

    crate::log_blank();
    log::info!(
        "{} {} launcher manifests restored",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.restored.len(),
    );
    Ok(())
}

pub(crate) fn print_unmatched(unmatched: &[UnmatchedManifest]) {
    if unmatched.is_empty() {
        return;
    }
    log::warn!(
        "  {} {} game manifests have no launcher manifest",
        "?".if_supports_color(Stdout, |t| t.yellow()),
        unmatched.len(),
    );
    for u in unmatched {
        log::warn!(
            "    {} {}",
            u.game.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", u.manifest).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
