use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::settings::{self, PathSetting};

use crate::CliError;
use crate::cli_types::ConfigAction;

pub(crate) fn run_config(
    action: ConfigAction,
    games_root: Option<PathBuf>,
    manifests_root: Option<PathBuf>,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            run_config_show(games_root, manifests_root);
            Ok(())
        }
        ConfigAction::SetGamesRoot { path } => run_config_set(PathSetting::GamesRoot, path),
        ConfigAction::SetManifestsRoot { path } => {
            run_config_set(PathSetting::LauncherManifestRoot, path)
        }
        ConfigAction::Path => {
            println!("{}", settings::settings_path().display());
            Ok(())
        }
    }
}

/// Show the resolved folders and the settings file.
fn run_config_show(games_root: Option<PathBuf>, manifests_root: Option<PathBuf>) {
    let path = settings::settings_path();
    let config = crate::resolve_config(games_root, manifests_root);

    log::info!(
        "{}",
        "egs-relocate Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    print_folder("Games root", &config.games_root);
    print_folder("Launcher manifests", &config.launcher_manifest_root);
    print_folder("Backup folder", &config.backup_folder());

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

fn print_folder(label: &str, path: &Path) {
    let status = if path.is_dir() {
        format!("{}", "(exists)".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "(missing)".if_supports_color(Stdout, |t| t.red()))
    };
    log::info!(
        "  {:<20} {} {}",
        format!("{label}:"),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
}

fn run_config_set(setting: PathSetting, path: Option<PathBuf>) -> Result<(), CliError> {
    let path = match path {
        Some(p) => {
            let absolute = std::path::absolute(&p).unwrap_or(p);
            if !absolute.is_dir() {
                return Err(CliError::config(format!(
                    "{} is not a directory",
                    absolute.display()
                )));
            }
            Some(absolute)
        }
        None => None,
    };

    settings::save_path(setting, path.as_deref())
        .map_err(|e| CliError::config(format!("failed to save settings: {e}")))?;

    match &path {
        Some(p) => log::info!(
            "{} {} set to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            setting.key(),
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{} {} cleared",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            setting.key(),
        ),
    }
    Ok(())
}
