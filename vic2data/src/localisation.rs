use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::countries::CountryRegistry;

/// Name of the localisation directory under the game install root.
pub const LOCALISATION_DIR: &str = "localisation";

/// The UTF-8 byte order mark. In Latin-1 these bytes are just `ï»¿`.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Error, Debug)]
pub enum LocalisationError {
    #[error("Failed to list files in directory {path:?}: {source}")]
    DirectoryNotListable { path: PathBuf, source: io::Error },
    #[error("Failed to read localisation file {path:?}: {source}")]
    FileRead { path: PathBuf, source: io::Error },
    #[error("Failed to parse localisation file {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Decodes ISO-8859-1 bytes. Every byte maps to the code point of the same value.
///
/// `encoding_rs::Encoding::for_label("iso-8859-1")` resolves to windows-1252,
/// which remaps 0x80..=0x9F, so the plain Latin-1 conversion is used instead.
pub fn decode_latin1(bytes: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

/// Loads official country names from every `.csv` file in `<install_root>/localisation`.
///
/// Each row is `TAG;Official name;...`. Rows naming a tag that is not in the
/// registry, and rows with fewer than two fields, are skipped.
///
/// # Returns
///
/// The number of official names set. Updates applied before an error are kept.
pub fn load_into<P: AsRef<Path>>(
    install_root: P,
    registry: &mut dyn CountryRegistry,
) -> Result<usize, LocalisationError> {
    let mut count = 0;
    for path in localisation_files(install_root)? {
        count += load_file(&path, registry)?;
    }
    log::info!("Applied {} official country names", count);
    Ok(count)
}

/// Lists the `.csv` files (any case) directly under `<install_root>/localisation`.
///
/// Subdirectories are neither returned nor descended into.
pub fn localisation_files<P: AsRef<Path>>(
    install_root: P,
) -> Result<Vec<PathBuf>, LocalisationError> {
    let dir = install_root.as_ref().join(LOCALISATION_DIR);
    let not_listable = |source| LocalisationError::DirectoryNotListable {
        path: dir.clone(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(&dir).map_err(not_listable)? {
        let entry = entry.map_err(not_listable)?;
        let path = entry.path();
        if path.is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .to_lowercase()
                .ends_with(".csv")
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Applies the rows of a single localisation file to the registry, top to bottom.
pub fn load_file(
    path: &Path,
    registry: &mut dyn CountryRegistry,
) -> Result<usize, LocalisationError> {
    let bytes = fs::read(path).map_err(|source| LocalisationError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading localisation from {:?}", path);

    // The csv reader drops a leading BOM, but in Latin-1 it belongs to the
    // first tag. A line holding only the BOM is skipped either way.
    let bom_in_first_tag = bytes.starts_with(UTF8_BOM)
        && !matches!(bytes.get(UTF8_BOM.len()), None | Some(b'\n' | b'\r'));

    // Paradox csv: no header, no quoting, any number of trailing columns.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(bytes.as_slice());

    let mut count = 0;
    for (i, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|source| LocalisationError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let restore_bom = i == 0 && bom_in_first_tag;

        // Trailing empty columns don't count, so `ENG;` has a single field.
        let mut fields = record
            .iter()
            .rposition(|field| !field.is_empty())
            .map_or(0, |last| last + 1);
        if restore_bom {
            fields = fields.max(1);
        }
        if fields < 2 {
            continue;
        }

        let mut tag = decode_latin1(&record[0]);
        if restore_bom {
            tag.insert_str(0, &decode_latin1(UTF8_BOM));
        }
        if let Some(country) = registry.country_mut(&tag) {
            country.set_official_name(decode_latin1(&record[1]));
            count += 1;
        }
    }
    Ok(count)
}
