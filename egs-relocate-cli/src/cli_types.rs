//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "egs-relocate")]
#[command(
    about = "Move Epic Games Launcher installs between folders and keep the launcher manifests in step",
    long_about = None
)]
pub(crate) struct Cli {
    /// Folder holding the game installs (defaults to the saved setting, then the current directory)
    #[arg(short, long, global = true)]
    pub games_root: Option<PathBuf>,

    /// Launcher manifest folder (defaults to the saved setting, then the launcher's default location)
    #[arg(short, long, global = true)]
    pub manifests_root: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Without a command, an interactive menu is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Copy the launcher manifests of all games into <games root>/_MANIFEST_BACKUPS
    Backup,

    /// Copy backed-up manifests back into the launcher manifest folder
    Restore,

    /// Move game installs to another folder, carrying their backed-up manifests along
    Move {
        /// Destination folder (asked for when omitted)
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Show what would be moved without changing anything
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Game folder names to move (a selection menu is shown when omitted)
        games: Vec<String>,
    },

    /// Point backed-up manifests at the games' current folders
    Relink,

    /// List the games found under the games root
    List,

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved folders and the settings file
    Show,

    /// Save the default games root
    SetGamesRoot {
        /// Folder to save; omit to clear the saved value
        path: Option<PathBuf>,
    },

    /// Save the default launcher manifest folder
    SetManifestsRoot {
        /// Folder to save; omit to clear the saved value
        path: Option<PathBuf>,
    },

    /// Print the settings file path
    Path,
}
