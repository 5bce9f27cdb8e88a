//! egs-relocate CLI
//!
//! Command-line interface for moving Epic Games Launcher installs and
//! keeping the launcher's manifests pointed at them.

mod cli_types;
mod commands;
mod error;
mod prompter;

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use egs_relocate_lib::settings::{self, PathSetting};
use egs_relocate_lib::{RelocationConfig, RelocationContext};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use prompter::StdinPrompter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        if let Some(hint) = e.hint() {
            log::error!("{}", hint.if_supports_color(Stdout, |t| t.yellow()));
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let games_root = cli.games_root;
    let manifests_root = cli.manifests_root;
    let load_context = || -> Result<RelocationContext, CliError> {
        let config = resolve_config(games_root.clone(), manifests_root.clone());
        log::debug!(
            "Games root: {}, launcher manifests: {}",
            config.games_root.display(),
            config.launcher_manifest_root.display()
        );
        Ok(RelocationContext::new(config)?)
    };
    let prompter = StdinPrompter::new(cli.yes);

    match cli.command {
        None => commands::menu::run_menu(&load_context()?, &prompter, cli.quiet),
        Some(Commands::Backup) => commands::backup::run_backup(&load_context()?, &prompter),
        Some(Commands::Restore) => commands::backup::run_restore(&load_context()?, &prompter),
        Some(Commands::Move {
            dest,
            dry_run,
            games,
        }) => commands::move_games::run_move(
            &load_context()?,
            &prompter,
            games,
            dest,
            dry_run,
            cli.quiet,
        ),
        Some(Commands::Relink) => commands::relink::run_relink(&load_context()?, &prompter),
        Some(Commands::List) => {
            commands::list::run_list(&load_context()?);
            Ok(())
        }
        Some(Commands::Config { action }) => {
            commands::config::run_config(action, games_root.clone(), manifests_root.clone())
        }
    }
}

/// Resolve both folders through the CLI flag → settings file → default chain.
pub(crate) fn resolve_config(
    games_root: Option<PathBuf>,
    manifests_root: Option<PathBuf>,
) -> RelocationConfig {
    RelocationConfig::new(
        settings::resolve_path(PathSetting::LauncherManifestRoot, manifests_root),
        settings::resolve_path(PathSetting::GamesRoot, games_root),
    )
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Writes log output to stdout and, when set, to a log file with ANSI codes
/// stripped.
struct LogSink {
    file: Option<File>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

fn init_logger(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(
                file,
                "=== egs-relocate {} ===",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )?;
            Some(file)
        }
        None => None,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .write_style(env_logger::WriteStyle::Always)
        .target(env_logger::Target::Pipe(Box::new(LogSink { file })))
        .format(move |buf, record| {
            let timestamp = if verbose {
                format!("{} ", chrono::Local::now().format("%H:%M:%S%.3f"))
            } else {
                String::new()
            };
            let msg = record.args();
            match record.level() {
                Level::Error => writeln!(
                    buf,
                    "{timestamp}{} {msg}",
                    "error:".if_supports_color(Stdout, |t| t.red())
                ),
                Level::Warn => writeln!(
                    buf,
                    "{timestamp}{} {msg}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow())
                ),
                Level::Info => writeln!(buf, "{timestamp}{msg}"),
                Level::Debug | Level::Trace => writeln!(
                    buf,
                    "{timestamp}{}",
                    msg.to_string().if_supports_color(Stdout, |t| t.dimmed())
                ),
            }
        })
        .try_init()
        .map_err(|e| CliError::other(e.to_string()))
}
