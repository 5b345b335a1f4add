//! Game data support for the Victoria II save analyzer.
//!
//! Two independent pieces live here: loading official country names from the
//! game's `localisation` directory, and finding (or remembering) where the game
//! and its save games are installed.

pub mod countries;
pub mod localisation;
pub mod path;

pub use countries::{Country, CountryRegistry, OfficialName};
pub use localisation::LocalisationError;
pub use path::{PathPair, PathResolver, PathsError, directory_of};
