//! # Format parsers
//!
//! Extract raw text lines from subtitle-block, plain-text and tabular
//! sources. Parsers are pure reads: they emit lines pre-normalization
//! and tolerate malformed encodings by lossy substitution.

pub mod plain;
pub mod subtitle;
pub mod tabular;

use std::fs;
use std::path::Path;

pub use plain::parse_plain;
pub use subtitle::parse_subtitles;
pub use tabular::parse_tabular;

use crate::error::Result;

/// Recognized source formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.srt` subtitle blocks.
    Subtitle,
    /// `.txt`, one logical line per input line.
    Plain,
    /// `.csv` with a preferred-column header convention.
    Tabular,
}

impl SourceFormat {
    /// Detects the format from the file extension, case-insensitive.
    /// `None` means the file is not a corpus source and is skipped.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "srt" => Some(Self::Subtitle),
            "txt" => Some(Self::Plain),
            "csv" => Some(Self::Tabular),
            _ => None,
        }
    }
}

/// Reads a source file tolerantly: malformed byte sequences become
/// U+FFFD replacement characters rather than failing the parse.
fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses one source file into its raw lines.
///
/// Returns an empty sequence for unrecognized extensions; recognized
/// files that cannot be read propagate `CurateError::Io`.
pub fn parse_path(path: &Path) -> Result<Vec<String>> {
    let Some(format) = SourceFormat::from_path(path) else {
        return Ok(Vec::new());
    };

    let content = read_lossy(path)?;
    match format {
        SourceFormat::Subtitle => Ok(parse_subtitles(&content)),
        SourceFormat::Plain => Ok(parse_plain(&content)),
        SourceFormat::Tabular => parse_tabular(&content),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/ep01.srt")),
            Some(SourceFormat::Subtitle)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("notes.TXT")),
            Some(SourceFormat::Plain)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("table.Csv")),
            Some(SourceFormat::Tabular)
        );
        assert_eq!(SourceFormat::from_path(Path::new("README.md")), None);
        assert_eq!(SourceFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn unrecognized_path_yields_empty_sequence() {
        // Never touches the filesystem for unknown extensions
        let lines = parse_path(&PathBuf::from("does-not-exist.bin")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, [0xE4, 0xBD, 0x20, 0xFF, 0x61]).unwrap();

        let lines = parse_path(&path).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains('\u{FFFD}'));
        assert!(lines[0].ends_with('a'));
    }

    #[test]
    fn missing_recognized_file_is_an_io_error() {
        let err = parse_path(Path::new("/definitely/absent.srt")).unwrap_err();
        assert!(matches!(err, crate::error::CurateError::Io(_)));
    }
}
