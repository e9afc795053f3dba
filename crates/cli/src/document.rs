//! Format detection and provider dispatch.

use slidetext_core::{DocumentProvider, Error, Presentation, PresentationFormat, Result};
use slidetext_ppt::PptParser;
use slidetext_pptx::PptxParser;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Open and fully decode a presentation.
///
/// The format comes from the file's magic bytes, falling back to its
/// extension.
pub fn open(path: &Path) -> Result<Presentation> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 8];
    let read = read_prefix(&mut reader, &mut magic)?;
    reader.seek(SeekFrom::Start(0))?;

    let format = detect_format(path, &magic[..read]).ok_or_else(|| {
        Error::UnsupportedFormat(format!(
            "{} is neither a PPTX (zip) nor a PPT (compound file) presentation",
            path.display()
        ))
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    log::debug!("Opening {} as {:?}", path.display(), format);

    match format {
        PresentationFormat::Pptx => parse_with(&PptxParser::new(), reader, filename),
        PresentationFormat::Ppt => parse_with(&PptParser::new(), reader, filename),
    }
}

fn parse_with<P: DocumentProvider, R: Read + Seek>(
    provider: &P,
    reader: R,
    filename: &str,
) -> Result<Presentation> {
    let presentation = provider.parse(reader, filename)?;
    log::debug!(
        "Decoded {} slides from {} ({:?})",
        presentation.slides().len(),
        filename,
        provider.format()
    );
    Ok(presentation)
}

fn detect_format(path: &Path, magic: &[u8]) -> Option<PresentationFormat> {
    PresentationFormat::from_magic(magic).or_else(|| {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(PresentationFormat::from_extension)
    })
}

/// Fill as much of `buf` as the file allows.
fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format_prefers_magic() {
        let zip_magic = [0x50, 0x4B, 0x03, 0x04, 0, 0, 0, 0];
        assert_eq!(
            detect_format(Path::new("renamed.ppt"), &zip_magic),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(
            detect_format(Path::new("deck.PPT"), b"xx"),
            Some(PresentationFormat::Ppt)
        );
        assert_eq!(detect_format(Path::new("notes.txt"), b"hello"), None);
    }

    #[test]
    fn test_open_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"just text").unwrap();

        assert!(matches!(open(&path), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_open_reports_corrupt_pptx() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pptx");
        fs::write(&path, b"PK\x03\x04 not really a zip").unwrap();

        assert!(open(&path).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            open(&dir.path().join("gone.pptx")),
            Err(Error::IoError(_))
        ));
    }
}
