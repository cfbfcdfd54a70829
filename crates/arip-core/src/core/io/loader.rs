use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Leading bytes of a gzip member using the deflate method.
pub const GZIP_MAGIC: [u8; 3] = [0x1f, 0x8b, 0x08];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Unsupported format, the content cannot be decoded as text: {0}")]
    UnsupportedFormat(#[source] io::Error),
}

/// Reads the text lines of a structure file, decompressing it first if needed.
///
/// The first line is treated as a header and dropped. Line terminators are removed.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be opened and
/// [`LoadError::UnsupportedFormat`] if its content is neither UTF-8 text nor a
/// gzip stream of UTF-8 text.
pub fn load_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = File::open(path)?;
    read_lines(BufReader::new(file))
}

/// Same as [`load_lines`], for any buffered source.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>, LoadError> {
    let compressed = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    debug!(compressed, "Decoding structure text.");

    let mut text = String::new();
    let decoded = if compressed {
        MultiGzDecoder::new(reader).read_to_string(&mut text)
    } else {
        reader.read_to_string(&mut text)
    };
    decoded.map_err(LoadError::UnsupportedFormat)?;

    Ok(text.lines().skip(1).map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::tempdir;

    const TEXT: &str = "HEADER    TEST\nATOM  first\nATOM  second\n";

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn plain_text_drops_header_line() {
        let lines = read_lines(TEXT.as_bytes()).unwrap();
        assert_eq!(lines, vec!["ATOM  first", "ATOM  second"]);
    }

    #[test]
    fn gzip_content_is_decompressed_transparently() {
        let compressed = gzip(TEXT.as_bytes());
        assert!(compressed.starts_with(&GZIP_MAGIC));
        let lines = read_lines(compressed.as_slice()).unwrap();
        assert_eq!(lines, read_lines(TEXT.as_bytes()).unwrap());
    }

    #[test]
    fn every_gzip_member_is_decompressed() {
        let mut concatenated = gzip(b"HEADER\nATOM  first\n");
        concatenated.extend(gzip(b"ATOM  second\nATOM  third\n"));
        let lines = read_lines(concatenated.as_slice()).unwrap();
        assert_eq!(lines, vec!["ATOM  first", "ATOM  second", "ATOM  third"]);
    }

    #[test]
    fn crlf_terminators_are_removed() {
        let lines = read_lines("HEADER\r\nATOM  a\r\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["ATOM  a"]);
    }

    #[test]
    fn binary_content_is_unsupported() {
        let bytes: &[u8] = &[0xff, 0xfe, 0x00, 0x9f, 0x80];
        assert!(matches!(
            read_lines(bytes),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn truncated_gzip_stream_is_unsupported() {
        let compressed = gzip(TEXT.as_bytes());
        let truncated = &compressed[..compressed.len() / 2];
        assert!(matches!(
            read_lines(truncated),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn empty_file_yields_no_lines() {
        assert!(read_lines(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn load_lines_reads_from_path() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("1abc.pdb");
        let packed = dir.path().join("1abc.pdb.gz");
        std::fs::write(&plain, TEXT).unwrap();
        std::fs::write(&packed, gzip(TEXT.as_bytes())).unwrap();

        assert_eq!(load_lines(&plain).unwrap(), load_lines(&packed).unwrap());
    }

    #[test]
    fn load_lines_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_lines(&dir.path().join("missing.pdb"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
