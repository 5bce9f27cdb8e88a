use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::{RelocationContext, ScanSkipReason};

pub(crate) fn run_list(ctx: &RelocationContext) {
    crate::log_blank();
    log::info!(
        "Games in {}:",
        ctx.config()
            .games_root
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    for game in ctx.catalog() {
        let manifests: Vec<&str> = game.manifest_files().iter().map(|m| m.name()).collect();
        log::info!(
            "  {} {}",
            game.name().if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", manifests.join(", ")).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("{} games", ctx.game_count());

    if !ctx.scan_skips().is_empty() {
        crate::log_blank();
        log::info!("Skipped entries:");
        for skip in ctx.scan_skips() {
            let reason = match skip.reason {
                ScanSkipReason::NotAGameFolder => "not a game folder",
                ScanSkipReason::MissingManifest => "missing manifest (incomplete install?)",
            };
            log::info!(
                "  {} {}",
                skip.name.if_supports_color(Stdout, |t| t.dimmed()),
                format!("({reason})").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
