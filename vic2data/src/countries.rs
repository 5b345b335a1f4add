use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Represents a country known to the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    /// The country tag (e.g. `ENG`).
    pub tag: String,
    /// The localised official name, once one has been loaded.
    pub official_name: Option<String>,
}

impl Country {
    /// Creates a country with no official name yet.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            official_name: None,
        }
    }
}

/// Something whose official name can be set by the localisation loader.
pub trait OfficialName {
    fn set_official_name(&mut self, name: String);
}

impl OfficialName for Country {
    fn set_official_name(&mut self, name: String) {
        self.official_name = Some(name);
    }
}

/// A registry of countries keyed by tag.
///
/// The loader only ever looks entries up; it never inserts or removes them.
/// `None` means the tag is not registered.
pub trait CountryRegistry {
    fn country_mut(&mut self, tag: &str) -> Option<&mut dyn OfficialName>;
}

impl<C: OfficialName, S: BuildHasher> CountryRegistry for HashMap<String, C, S> {
    fn country_mut(&mut self, tag: &str) -> Option<&mut dyn OfficialName> {
        self.get_mut(tag).map(|c| c as &mut dyn OfficialName)
    }
}

impl<C: OfficialName> CountryRegistry for BTreeMap<String, C> {
    fn country_mut(&mut self, tag: &str) -> Option<&mut dyn OfficialName> {
        self.get_mut(tag).map(|c| c as &mut dyn OfficialName)
    }
}

/// Builds a registry with one nameless country per tag.
pub fn registry_from_tags<I, T>(tags: I) -> BTreeMap<String, Country>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    tags.into_iter()
        .map(|tag| {
            let country = Country::new(tag);
            (country.tag.clone(), country)
        })
        .collect()
}
