// crates/atlas-core/src/loader.rs

//! # Data Loader
//!
//! Parses state tables from text (what the browser receives) and, with the
//! `json` feature, from files on disk (what the server and demos read).
//! With `compact`, files ending in `.gz` are decompressed transparently.

use crate::error::Result;
use crate::model::StateTable;

/// Parse a `stateData.json` document.
pub fn parse_state_table(text: &str) -> Result<StateTable> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a fetched document, substituting an empty table on any error.
///
/// An empty table means every lookup falls through to the embedded tables.
pub fn parse_state_table_or_empty(text: &str) -> StateTable {
    parse_state_table(text).unwrap_or_else(|e| {
        tracing::debug!("ignoring malformed state data: {e}");
        StateTable::default()
    })
}

#[cfg(feature = "json")]
pub use self::fs::*;

#[cfg(feature = "json")]
mod fs {
    use crate::error::{AtlasError, Result};
    use crate::model::StateTable;
    use std::fs::File;
    use std::io::{BufReader, Read};
    use std::path::{Path, PathBuf};

    /// File name the server looks for inside its data directory.
    pub const STATE_DATA_FILE: &str = "stateData.json";
    pub const INDIA_STATES_FILE: &str = "india_states.geojson";

    /// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
    /// Returns a generic reader so the caller doesn't care about compression.
    pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| {
            AtlasError::NotFound(format!("{}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);

        #[cfg(feature = "compact")]
        {
            if path.extension().is_some_and(|ext| ext == "gz") {
                use flate2::read::GzDecoder;
                return Ok(Box::new(GzDecoder::new(reader)));
            }
        }

        Ok(Box::new(reader))
    }

    /// Read the whole (possibly decompressed) file into a string.
    pub fn read_text(path: &Path) -> Result<String> {
        let mut out = String::new();
        open_stream(path)?.read_to_string(&mut out)?;
        Ok(out)
    }

    /// Load a state table from a JSON (or `.json.gz`) file.
    pub fn load_state_table(path: impl AsRef<Path>) -> Result<StateTable> {
        let reader = open_stream(path.as_ref())?;
        Ok(serde_json::from_reader(reader)?)
    }

    /// Look for `name` in `dir`, then for `name.gz`.
    pub fn locate(dir: &Path, name: &str) -> Option<PathBuf> {
        let plain = dir.join(name);
        if plain.is_file() {
            return Some(plain);
        }
        #[cfg(feature = "compact")]
        {
            let gz = dir.join(format!("{name}.gz"));
            if gz.is_file() {
                return Some(gz);
            }
        }
        None
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StateLookup;

    #[test]
    fn malformed_text_yields_empty_table() {
        assert!(parse_state_table_or_empty("not json").is_empty());
        assert!(parse_state_table_or_empty("[1, 2]").is_empty());
    }

    #[test]
    fn parses_minimal_document() {
        let t = parse_state_table(r#"{"Assam": {"quote": "Awesome Assam"}}"#).unwrap();
        assert_eq!(t.record("assam").unwrap().quote.as_deref(), Some("Awesome Assam"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn loads_from_disk_and_locates_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_DATA_FILE);
        std::fs::write(&path, r#"{"Sikkim": {"spots": [{"name": "Tsomgo Lake"}]}}"#).unwrap();

        assert_eq!(locate(dir.path(), STATE_DATA_FILE), Some(path.clone()));
        assert_eq!(locate(dir.path(), INDIA_STATES_FILE), None);

        let t = load_state_table(&path).unwrap();
        assert_eq!(t.record("Sikkim").unwrap().spots[0].name, "Tsomgo Lake");
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = load_state_table("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::AtlasError::NotFound(_)));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_input() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stateData.json.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(br#"{"Ladakh": {"quote": "Land of High Passes"}}"#).unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        assert_eq!(locate(dir.path(), STATE_DATA_FILE), Some(path.clone()));
        let t = load_state_table(&path).unwrap();
        assert!(t.record("Ladakh").is_some());
    }
}
