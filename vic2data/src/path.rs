use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default name of the file that remembers the chosen directories.
/// Relative, so it lives in the working directory.
pub const PATHS_FILE: &str = "paths.txt";

/// Game releases to look for, most preferred first.
pub const INSTALL_VERSIONS: [&str; 3] = [
    "Victoria II - A Heart of Darkness",
    "Victoria 2 A House Divided",
    "Victoria 2",
];

/// Directories a release may be installed under, most preferred first.
pub const INSTALL_PREFIXES: [&str; 4] = [
    "C:/Program Files/Paradox Interactive/",
    "C:/Program Files/Steam/steamapps/common/",
    "C:/Program Files (x86)/Steam/steamapps/common/",
    "C:/Program Files (x86)/Paradox Interactive/",
];

#[derive(Error, Debug)]
pub enum PathsError {
    #[error("could not read the paths file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not save the paths file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// The save game directory and the install directory.
/// An empty string means the directory is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPair {
    pub save_games: String,
    pub install: String,
}

impl PathPair {
    pub fn new(save_games: impl Into<String>, install: impl Into<String>) -> Self {
        Self {
            save_games: save_games.into(),
            install: install.into(),
        }
    }

    /// Both directories are known.
    pub fn is_complete(&self) -> bool {
        !self.save_games.is_empty() && !self.install.is_empty()
    }
}

impl fmt::Display for PathPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "save games: {}", self.save_games)?;
        write!(f, "install: {}", self.install)
    }
}

/// Finds the game directories, preferring what the user saved last time.
#[derive(Debug, Clone)]
pub struct PathResolver {
    paths_file: PathBuf,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    /// Uses `paths.txt` in the working directory.
    pub fn new() -> Self {
        Self::with_file(PATHS_FILE)
    }

    pub fn with_file(paths_file: impl Into<PathBuf>) -> Self {
        Self {
            paths_file: paths_file.into(),
        }
    }

    pub fn paths_file(&self) -> &Path {
        &self.paths_file
    }

    /// Returns the stored pair if the paths file exists, otherwise probes the
    /// well-known locations.
    ///
    /// Stored paths are returned as written, whether or not they exist.
    pub fn resolve(&self) -> Result<PathPair, PathsError> {
        Ok(self.stored()?.unwrap_or_else(|| self.discover()))
    }

    /// Reads the paths file. `Ok(None)` if there is no such file.
    ///
    /// Line 1 is the save game directory, line 2 the install directory.
    /// Missing lines read as empty strings.
    pub fn stored(&self) -> Result<Option<PathPair>, PathsError> {
        let content = match fs::read_to_string(&self.paths_file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PathsError::Read {
                    path: self.paths_file.clone(),
                    source,
                });
            }
        };
        log::debug!("Using stored paths from {:?}", self.paths_file);

        let mut lines = content.lines();
        let save_games = lines.next().unwrap_or_default();
        let install = lines.next().unwrap_or_default();
        Ok(Some(PathPair::new(save_games, install)))
    }

    /// Probes for both directories, ignoring the paths file.
    pub fn discover(&self) -> PathPair {
        PathPair {
            save_games: detect_save_games_dir(),
            install: detect_install_dir(),
        }
    }

    /// Writes the pair to the paths file, replacing its previous content.
    pub fn save(&self, save_games: &str, install: &str) -> Result<(), PathsError> {
        fs::write(&self.paths_file, format!("{save_games}\n{install}")).map_err(|source| {
            PathsError::Write {
                path: self.paths_file.clone(),
                source,
            }
        })?;
        log::info!("Saved paths to {:?}", self.paths_file);
        Ok(())
    }

    /// Remembers the directory of a save game the user picked, keeping the
    /// current install directory.
    pub fn remember_save_file(&self, save_file: &str) -> Result<PathPair, PathsError> {
        let mut pair = self.resolve()?;
        pair.save_games = directory_of(save_file).to_string();
        self.save(&pair.save_games, &pair.install)?;
        Ok(pair)
    }
}

/// Everything up to and including the last `/`, or the whole path if it has none.
///
/// Purely textual: `\` is not treated as a separator.
pub fn directory_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => path,
    }
}

/// All install directory candidates in probe order.
///
/// Release preference dominates: every prefix is tried for one release
/// before moving on to the next.
pub fn install_candidates() -> Vec<String> {
    INSTALL_VERSIONS
        .iter()
        .flat_map(|version| {
            INSTALL_PREFIXES
                .iter()
                .map(move |prefix| format!("{prefix}{version}"))
        })
        .collect()
}

/// Where the game keeps save games for `user`.
pub fn save_games_candidate(user: &str) -> String {
    format!("C:/Users/{user}/Documents/Paradox Interactive/Victoria II/save games/")
}

/// The first candidate that is an existing directory, or an empty string.
pub fn first_existing_dir<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if Path::new(candidate).is_dir() {
            log::debug!("Found directory {}", candidate);
            return candidate.to_string();
        }
        log::debug!("No directory at {}", candidate);
    }
    String::new()
}

/// Probes the well-known install locations. Empty string if the game isn't found.
pub fn detect_install_dir() -> String {
    first_existing_dir(install_candidates())
}

/// Probes the current user's save game directory. Empty string if it doesn't exist.
pub fn detect_save_games_dir() -> String {
    match current_user() {
        Some(user) => first_existing_dir([save_games_candidate(&user)]),
        None => String::new(),
    }
}

fn current_user() -> Option<String> {
    std::env::var("USERNAME")
        .or_else(|_| std::env::var("USER"))
        .ok()
}
