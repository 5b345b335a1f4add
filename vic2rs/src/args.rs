use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vic2data::path::PATHS_FILE;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about = "Victoria II save analyzer support tool", long_about = None)]
pub struct Cli {
    /// File that remembers the save game and install directories
    #[arg(long, global = true, default_value = PATHS_FILE)]
    pub paths_file: PathBuf,

    /// Path to the Victoria II installation, overriding the remembered one
    #[arg(long, global = true)]
    pub install: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show the save game and install directories.
    Paths,

    /// Remember the save game and install directories for later runs.
    ///
    /// Pass an empty string for a directory that is unknown.
    SetPaths {
        /// Directory the game writes save games to.
        save_games: String,
        /// Game install directory.
        #[arg(id = "install_dir", value_name = "INSTALL")]
        install: String,
    },

    /// Remember the directory of a save game file.
    RememberSave {
        /// A save game file (e.g. `D:/saves/England1836.v2`).
        save_file: String,
    },

    /// Print the official names of countries from the game's localisation.
    ///
    /// Example: `names ENG` prints the tag and "United Kingdom", tab separated.
    Names {
        /// Country tags (e.g. ENG, FRA).
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        let cli = Cli::parse_from(["vic2rs", "names", "ENG", "FRA", "--install", "E:/game"]);
        assert_eq!(
            cli.command,
            Commands::Names {
                tags: vec!["ENG".to_string(), "FRA".to_string()]
            }
        );
        assert_eq!(cli.install, Some(PathBuf::from("E:/game")));
        assert_eq!(cli.paths_file, PathBuf::from("paths.txt"));
    }

    #[test]
    fn test_parse_set_paths_with_unknown_install() {
        let cli = Cli::parse_from(["vic2rs", "-v", "set-paths", "D:/saves/", ""]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::SetPaths {
                save_games: "D:/saves/".to_string(),
                install: String::new(),
            }
        );
    }

    #[test]
    fn test_names_requires_tags() {
        assert!(Cli::try_parse_from(["vic2rs", "names"]).is_err());
    }
}
