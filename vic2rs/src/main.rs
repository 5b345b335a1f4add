mod args;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use args::{Cli, Commands};
use vic2data::PathResolver;
use vic2data::countries::registry_from_tags;
use vic2data::localisation;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let resolver = PathResolver::with_file(cli.paths_file);

    match cli.command {
        Commands::Paths => {
            let (pair, source) = match resolver.stored()? {
                Some(pair) => (pair, "stored"),
                None => (resolver.discover(), "discovered"),
            };
            println!("{pair}");
            println!("source: {} ({})", source, resolver.paths_file().display());
            if !pair.is_complete() {
                log::warn!("Some directories are unknown, use `set-paths` to choose them");
            }
        }
        Commands::SetPaths {
            save_games,
            install,
        } => {
            resolver.save(&save_games, &install)?;
            println!("Saved paths to {}", resolver.paths_file().display());
        }
        Commands::RememberSave { save_file } => {
            let pair = resolver.remember_save_file(&save_file)?;
            println!("{pair}");
        }
        Commands::Names { tags } => {
            let install = match cli.install {
                Some(install) => install,
                None => PathBuf::from(resolver.resolve()?.install),
            };
            if install.as_os_str().is_empty() {
                bail!("Cannot find the Victoria II install directory. Use --install or set-paths.");
            }
            log::info!("Using install directory {}", install.display());

            let mut registry = registry_from_tags(tags.iter().cloned());
            localisation::load_into(&install, &mut registry).with_context(|| {
                format!("Failed to load localisation from {}", install.display())
            })?;

            for tag in &tags {
                let name = registry
                    .get(tag)
                    .and_then(|country| country.official_name.as_deref())
                    .unwrap_or("-");
                println!("{tag}\t{name}");
            }
        }
    }

    Ok(())
}
