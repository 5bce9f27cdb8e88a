use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::{Prompter, RelocationContext};

use crate::CliError;

/// Run the relink command.
pub(crate) fn run_relink(ctx: &RelocationContext, prompter: &dyn Prompter) -> Result<(), CliError> {
    let Some(summary) = ctx.relink_manifests(prompter)?.completed() else {
        return Ok(());
    };

    crate::log_blank();
    for relinked in &summary.relinked {
        log::info!(
            "  {} {} {} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            relinked.manifest.if_supports_color(Stdout, |t| t.bold()),
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            relinked.game,
        );
    }
    log::info!(
        "{} launcher manifests relinked",
        summary.relinked.len().if_supports_color(Stdout, |t| t.bold()),
    );
    super::backup::print_unmatched(&summary.unmatched);
    Ok(())
}
