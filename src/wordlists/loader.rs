//! Dictionary loading utilities
//!
//! Reads a word-per-line text file into a `Dictionary`.

use super::{Dictionary, DictionaryConfig};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// The file is read as UTF-8 with one word per line. Entries are lowercased and
/// trimmed; entries that are not alphabetic or miss a threshold are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::{DictionaryConfig, load_dictionary};
///
/// let dictionary = load_dictionary("words.txt", &DictionaryConfig::default()).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P, config: &DictionaryConfig) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dictionary(lines: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_filters_and_normalizes() {
        let file = write_dictionary("Cadet\naced\n\ntea\n  aide  \nwell-known\nCADET\n");
        let dictionary = load_dictionary(file.path(), &DictionaryConfig::default()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cadet"));
        assert!(dictionary.contains("aced"));
        assert!(dictionary.contains("aide"));
    }

    #[test]
    fn load_handles_crlf_line_endings() {
        let file = write_dictionary("cadet\r\naced\r\n");
        let dictionary = load_dictionary(file.path(), &DictionaryConfig::default()).unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn load_empty_file() {
        let file = write_dictionary("");
        let dictionary = load_dictionary(file.path(), &DictionaryConfig::default()).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dictionary(dir.path().join("missing.txt"), &DictionaryConfig::default());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn load_invalid_utf8_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x63, 0x61, 0xff, 0x0a]).unwrap();
        let result = load_dictionary(file.path(), &DictionaryConfig::default());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
