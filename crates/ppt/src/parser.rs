//! PPT file parser implementation.
//!
//! Parses legacy PowerPoint files using the OLE/CFB container format. The
//! `PowerPoint Document` stream is a tree of records; this parser reads:
//!
//! - the persist directory, mapping persist ids to record offsets,
//! - the slide `SlideListWithText`, which fixes slide order and holds the
//!   outline (placeholder) text of every slide,
//! - inline text boxes inside each slide's drawing,
//! - `Notes` containers, matched to slides by slide id.
//!
//! ## Compatibility
//!
//! This parser is designed for PowerPoint 97-2003 (.ppt) files. It validates
//! files before extraction and returns clear errors for incompatible formats.

use cfb::CompoundFile;
use encoding_rs::{UTF_16LE, WINDOWS_1252};
use slidetext_core::{
    DocumentProvider, Error, PlaceholderKind, Presentation, PresentationFormat, Result, Shape,
    ShapeKind, Slide,
};
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};

/// Minimum stream size for a valid PPT file (bytes).
/// A valid PPT needs at least a document container with some content.
const MIN_STREAM_SIZE: usize = 512;

/// Maximum supported text type value.
/// Values beyond this are unsupported and may indicate an incompatible format.
const MAX_SUPPORTED_TEXT_TYPE: u32 = 8;

/// Malformed records tolerated before the stream is rejected as corrupt.
const MAX_MALFORMED_RECORDS: usize = 10;

/// Deepest container nesting accepted; anything deeper is treated as corrupt.
const MAX_NESTING_DEPTH: usize = 64;

/// Size of a record header in bytes.
const HEADER_LEN: usize = 8;

/// `recVer` value marking a container record.
const CONTAINER_VERSION: u16 = 0x0F;

/// `recInstance` of the SlideListWithText that lists presentation slides.
const SLIDE_LIST_INSTANCE: u16 = 0;

/// Record type constants for PPT file format.
mod record_types {
    pub const RT_DOCUMENT: u16 = 0x03E8;
    pub const RT_SLIDE: u16 = 0x03EE;
    pub const RT_SLIDE_ATOM: u16 = 0x03EF;
    pub const RT_NOTES: u16 = 0x03F0;
    pub const RT_NOTES_ATOM: u16 = 0x03F1;
    pub const RT_SLIDE_PERSIST_ATOM: u16 = 0x03F3;
    pub const RT_TEXT_HEADER_ATOM: u16 = 0x0F9F;
    pub const RT_TEXT_CHARS_ATOM: u16 = 0x0FA0;
    pub const RT_TEXT_BYTES_ATOM: u16 = 0x0FA8;
    pub const RT_SLIDE_LIST_WITH_TEXT: u16 = 0x0FF0;
    pub const RT_PERSIST_PTR_FULL_BLOCK: u16 = 0x1771;
    pub const RT_PERSIST_PTR_INCREMENTAL_BLOCK: u16 = 0x1772;
    pub const RT_CLIENT_TEXTBOX: u16 = 0xF00D;
}

/// Information collected during file validation.
#[derive(Debug, Default)]
struct FileValidation {
    /// Size of the PowerPoint Document stream
    stream_size: usize,
    /// Whether RT_Document record was found
    has_document: bool,
    /// Whether any slide records were found
    has_slides: bool,
    /// Whether any text header atoms were found
    has_text_headers: bool,
    /// Whether any text content records were found
    has_text_content: bool,
    /// Count of text records found
    text_record_count: usize,
    /// Unknown/unsupported text types encountered
    unsupported_text_types: HashSet<u32>,
    /// Count of malformed records (bad lengths, etc.)
    malformed_records: usize,
    /// Whether containers nest deeper than MAX_NESTING_DEPTH
    too_deeply_nested: bool,
}

/// Text types from RT_TextHeaderAtom.
/// These indicate what kind of text follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextType {
    Title = 0,
    Body = 1,
    Notes = 2,
    NotUsed = 3,
    Other = 4,
    CenterBody = 5,
    CenterTitle = 6,
    HalfBody = 7,
    QuarterBody = 8,
}

impl TextType {
    fn from_u32(value: u32) -> Self {
        match value {
            0 => TextType::Title,
            1 => TextType::Body,
            2 => TextType::Notes,
            3 => TextType::NotUsed,
            4 => TextType::Other,
            5 => TextType::CenterBody,
            6 => TextType::CenterTitle,
            7 => TextType::HalfBody,
            8 => TextType::QuarterBody,
            _ => TextType::Other,
        }
    }

    /// Shape kind of the text box holding text of this type.
    ///
    /// Title slides store their subtitle as centered body text.
    fn shape_kind(&self) -> ShapeKind {
        match self {
            TextType::Title => ShapeKind::Placeholder(PlaceholderKind::Title),
            TextType::CenterTitle => ShapeKind::Placeholder(PlaceholderKind::CenterTitle),
            TextType::CenterBody => ShapeKind::Placeholder(PlaceholderKind::Subtitle),
            TextType::Body | TextType::HalfBody | TextType::QuarterBody | TextType::Notes => {
                ShapeKind::Placeholder(PlaceholderKind::Body)
            }
            TextType::Other | TextType::NotUsed => ShapeKind::TextBox,
        }
    }
}

/// An 8-byte record header plus where its content lives.
#[derive(Debug, Clone, Copy)]
struct RecordHeader {
    version: u16,
    instance: u16,
    rec_type: u16,
    /// Offset of the header itself.
    offset: usize,
    /// Offset of the first content byte.
    content_start: usize,
    content_end: usize,
}

impl RecordHeader {
    /// Read the header at `pos`, or `None` if it does not fit below `end`.
    fn read(data: &[u8], pos: usize, end: usize) -> Option<Self> {
        let end = end.min(data.len());
        if pos + HEADER_LEN > end {
            return None;
        }

        let rec_ver_instance = read_u16_le(data, pos);
        let rec_len = read_u32_le(data, pos + 4) as usize;
        let content_start = pos + HEADER_LEN;

        Some(Self {
            version: rec_ver_instance & 0x0F,
            instance: rec_ver_instance >> 4,
            rec_type: read_u16_le(data, pos + 2),
            offset: pos,
            content_start,
            content_end: content_start.saturating_add(rec_len),
        })
    }

    fn is_container(&self) -> bool {
        self.version == CONTAINER_VERSION
    }

    fn content<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.content_start..self.content_end]
    }
}

/// Iterator over sibling records in `[start, end)`.
///
/// Stops at the first record whose content runs past `end`.
struct Records<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Records<'a> {
    fn new(data: &'a [u8], start: usize, end: usize) -> Self {
        Self {
            data,
            pos: start,
            end: end.min(data.len()),
        }
    }

    fn children(data: &'a [u8], parent: &RecordHeader) -> Self {
        Self::new(data, parent.content_start, parent.content_end)
    }
}

impl Iterator for Records<'_> {
    type Item = RecordHeader;

    fn next(&mut self) -> Option<Self::Item> {
        let header = RecordHeader::read(self.data, self.pos, self.end)?;
        if header.content_end > self.end {
            self.pos = self.end;
            return None;
        }
        self.pos = header.content_end;
        Some(header)
    }
}

/// A slide as listed in the slide SlideListWithText.
#[derive(Debug)]
struct SlideEntry {
    persist_id: u32,
    slide_id: u32,
    shapes: Vec<Shape>,
}

/// Parser for legacy PPT (OLE/CFB) files.
pub struct PptParser;

impl PptParser {
    /// Create a new PPT parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPT file from a reader.
    ///
    /// This method first validates the file structure to ensure compatibility,
    /// then extracts slides and notes. It will return an error if the file
    /// format is not compatible with this parser.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        let mut cfb = CompoundFile::open(reader)
            .map_err(|e| Error::CfbError(format!("Failed to open CFB container: {}", e)))?;

        // Validate CFB structure has required streams
        self.validate_cfb_structure(&cfb)?;

        // Read the PowerPoint Document stream
        let stream_data = self.read_powerpoint_stream(&mut cfb)?;

        self.parse_stream(&stream_data, filename)
    }

    /// Build the presentation from the raw `PowerPoint Document` stream.
    fn parse_stream(&self, data: &[u8], filename: &str) -> Result<Presentation> {
        let validation = self.validate_stream(data)?;

        log::debug!(
            "PPT validation: stream_size={}, has_document={}, has_slides={}, \
             has_text_headers={}, has_text_content={}, text_records={}, malformed={}",
            validation.stream_size,
            validation.has_document,
            validation.has_slides,
            validation.has_text_headers,
            validation.has_text_content,
            validation.text_record_count,
            validation.malformed_records
        );

        let document = self.find_document_container(data)?;
        let persist_directory = self.read_persist_directory(data);
        let mut notes_pages = self.read_notes_pages(data);
        let entries = self.read_slide_list(data, &document);

        let mut presentation = Presentation::new(filename, PresentationFormat::Ppt);

        if entries.is_empty() {
            log::warn!(
                "No slide list found in '{}', reading slide containers in stream order",
                filename
            );
            for (idx, container) in Records::new(data, 0, data.len())
                .filter(|r| r.rec_type == record_types::RT_SLIDE)
                .enumerate()
            {
                let mut slide = Slide::new(idx + 1);
                for shape in collect_text_box_shapes(data, &container) {
                    slide.add_shape(shape);
                }
                if let Some(notes) = self.linked_notes(data, &persist_directory, &container) {
                    slide.set_notes_shapes(notes);
                }
                presentation.add_slide(slide);
            }
            return Ok(presentation);
        }

        for (idx, entry) in entries.into_iter().enumerate() {
            let mut slide = Slide::new(idx + 1);

            for shape in entry.shapes {
                slide.add_shape(shape);
            }

            match self.slide_container(data, &persist_directory, entry.persist_id) {
                Some(container) => {
                    for shape in collect_text_box_shapes(data, &container) {
                        slide.add_shape(shape);
                    }
                }
                None => log::debug!(
                    "Slide {} (persist id {}) has no slide container",
                    idx + 1,
                    entry.persist_id
                ),
            }

            if let Some(notes) = notes_pages.remove(&entry.slide_id) {
                slide.set_notes_shapes(notes);
            }

            presentation.add_slide(slide);
        }

        log::debug!(
            "PPT '{}': {} slides",
            filename,
            presentation.slides().len()
        );

        Ok(presentation)
    }

    /// Validate the CFB container has required PowerPoint streams.
    fn validate_cfb_structure<R: Read + Seek>(&self, cfb: &CompoundFile<R>) -> Result<()> {
        // Check for PowerPoint Document stream (required)
        let has_ppt_doc = cfb
            .walk()
            .any(|entry| entry.path().to_string_lossy() == "/PowerPoint Document");

        if !has_ppt_doc {
            return Err(Error::UnsupportedFormat(
                "Missing 'PowerPoint Document' stream. This may not be a valid PPT file \
                 or may be a different Office format."
                    .to_string(),
            ));
        }

        // Check for Current User stream (indicates proper PPT format)
        let has_current_user = cfb
            .walk()
            .any(|entry| entry.path().to_string_lossy() == "/Current User");

        if !has_current_user {
            log::warn!(
                "Missing 'Current User' stream. File may be an older PPT format variant."
            );
        }

        Ok(())
    }

    /// Validate the PowerPoint Document stream content.
    ///
    /// This performs a quick scan of the stream to check:
    /// - Minimum size requirements
    /// - Presence of the document container
    /// - Basic record structure integrity
    fn validate_stream(&self, data: &[u8]) -> Result<FileValidation> {
        let mut validation = FileValidation {
            stream_size: data.len(),
            ..Default::default()
        };

        // Check minimum size
        if data.len() < MIN_STREAM_SIZE {
            return Err(Error::CorruptedFile(format!(
                "PowerPoint Document stream too small ({} bytes). \
                 Minimum expected: {} bytes. File may be corrupted or truncated.",
                data.len(),
                MIN_STREAM_SIZE
            )));
        }

        // Scan records to validate structure
        self.scan_records_for_validation(data, 0, data.len(), 0, &mut validation);

        if validation.too_deeply_nested {
            return Err(Error::CorruptedFile(format!(
                "Records nest deeper than {} levels. File may be corrupted.",
                MAX_NESTING_DEPTH
            )));
        }

        if !validation.has_document {
            return Err(Error::UnsupportedFormat(
                "No RT_Document record found. This file may use an unsupported \
                 PowerPoint format version (pre-97) or be corrupted."
                    .to_string(),
            ));
        }

        if !validation.has_text_content && !validation.has_text_headers {
            log::warn!(
                "No text records found. The presentation may contain only images/graphics."
            );
        }

        // Warn about unsupported text types
        if !validation.unsupported_text_types.is_empty() {
            log::warn!(
                "File contains unsupported text types: {:?}. Some text may not be classified.",
                validation.unsupported_text_types
            );
        }

        // Check for excessive malformed records (indicates corruption)
        if validation.malformed_records > MAX_MALFORMED_RECORDS {
            return Err(Error::CorruptedFile(format!(
                "Too many malformed records ({}) detected. File may be corrupted.",
                validation.malformed_records
            )));
        }

        Ok(validation)
    }

    /// Scan records to collect validation information.
    fn scan_records_for_validation(
        &self,
        data: &[u8],
        start: usize,
        end: usize,
        depth: usize,
        validation: &mut FileValidation,
    ) {
        if depth > MAX_NESTING_DEPTH {
            validation.too_deeply_nested = true;
            validation.malformed_records += 1;
            return;
        }

        let mut pos = start;

        while let Some(record) = RecordHeader::read(data, pos, end) {
            // Check for malformed records
            if record.content_end > end || record.content_end > data.len() {
                validation.malformed_records += 1;
                break;
            }

            let rec_len = record.content_end - record.content_start;

            // Track record types
            match record.rec_type {
                record_types::RT_DOCUMENT => {
                    validation.has_document = true;
                }
                record_types::RT_SLIDE => {
                    validation.has_slides = true;
                }
                record_types::RT_TEXT_HEADER_ATOM => {
                    validation.has_text_headers = true;
                    // Check text type value
                    if rec_len >= 4 {
                        let text_type = read_u32_le(data, record.content_start);
                        if text_type > MAX_SUPPORTED_TEXT_TYPE {
                            validation.unsupported_text_types.insert(text_type);
                        }
                    }
                }
                record_types::RT_TEXT_CHARS_ATOM | record_types::RT_TEXT_BYTES_ATOM => {
                    validation.has_text_content = true;
                    validation.text_record_count += 1;
                }
                _ => {}
            }

            // Recurse into containers
            if record.is_container() {
                self.scan_records_for_validation(
                    data,
                    record.content_start,
                    record.content_end,
                    depth + 1,
                    validation,
                );
            }

            pos = record.content_end;
        }
    }

    /// Read the PowerPoint Document stream from the CFB container.
    fn read_powerpoint_stream<R: Read + Seek>(
        &self,
        cfb: &mut CompoundFile<R>,
    ) -> Result<Vec<u8>> {
        // The main PowerPoint content is in "PowerPoint Document" stream
        let stream_path = "/PowerPoint Document";

        let mut stream = cfb.open_stream(stream_path).map_err(|e| {
            Error::CfbError(format!(
                "Failed to open PowerPoint Document stream: {}",
                e
            ))
        })?;

        let mut data = Vec::new();
        stream
            .read_to_end(&mut data)
            .map_err(|e| Error::CfbError(format!("Failed to read stream: {}", e)))?;

        Ok(data)
    }

    /// Locate the top-level Document container.
    fn find_document_container(&self, data: &[u8]) -> Result<RecordHeader> {
        let mut pos = 0;

        while let Some(record) = RecordHeader::read(data, pos, data.len()) {
            if record.rec_type == record_types::RT_DOCUMENT {
                if record.content_end > data.len() {
                    return Err(Error::PptParseError(format!(
                        "Document container at offset {} is truncated",
                        record.offset
                    )));
                }
                return Ok(record);
            }
            if record.content_end > data.len() {
                break;
            }
            pos = record.content_end;
        }

        Err(Error::PptParseError(
            "Document container is not a top-level record".to_string(),
        ))
    }

    /// Read every persist directory block into one persist id → offset map.
    ///
    /// Blocks are applied in stream order, so later edits override earlier ones.
    fn read_persist_directory(&self, data: &[u8]) -> HashMap<u32, usize> {
        let mut directory = HashMap::new();

        for record in Records::new(data, 0, data.len()).filter(|r| {
            matches!(
                r.rec_type,
                record_types::RT_PERSIST_PTR_FULL_BLOCK
                    | record_types::RT_PERSIST_PTR_INCREMENTAL_BLOCK
            )
        }) {
            let mut pos = record.content_start;

            while pos + 4 <= record.content_end {
                // 20-bit starting persist id, 12-bit count of offsets that follow.
                let info = read_u32_le(data, pos);
                let first_id = info & 0x000F_FFFF;
                let count = (info >> 20) as usize;
                pos += 4;

                for index in 0..count {
                    if pos + 4 > record.content_end {
                        break;
                    }
                    directory.insert(first_id + index as u32, read_u32_le(data, pos) as usize);
                    pos += 4;
                }
            }
        }

        directory
    }

    /// Read slide order and outline text from the slide SlideListWithText.
    fn read_slide_list(&self, data: &[u8], document: &RecordHeader) -> Vec<SlideEntry> {
        let mut entries: Vec<SlideEntry> = Vec::new();

        let Some(list) = Records::children(data, document).find(|r| {
            r.rec_type == record_types::RT_SLIDE_LIST_WITH_TEXT
                && r.instance == SLIDE_LIST_INSTANCE
        }) else {
            return entries;
        };

        let mut text_type = TextType::Body;

        for record in Records::children(data, &list) {
            match record.rec_type {
                record_types::RT_SLIDE_PERSIST_ATOM => {
                    if record.content_end - record.content_start < 16 {
                        log::warn!("Short SlidePersistAtom at offset {}", record.offset);
                        continue;
                    }
                    entries.push(SlideEntry {
                        persist_id: read_u32_le(data, record.content_start),
                        slide_id: read_u32_le(data, record.content_start + 12),
                        shapes: Vec::new(),
                    });
                }
                record_types::RT_TEXT_HEADER_ATOM => {
                    text_type = read_text_type(data, &record).unwrap_or(text_type);
                }
                record_types::RT_TEXT_CHARS_ATOM | record_types::RT_TEXT_BYTES_ATOM => {
                    if let (Some(entry), Some(text)) = (entries.last_mut(), decode_text(data, &record))
                    {
                        entry.shapes.push(Shape::with_text(text_type.shape_kind(), text));
                    }
                }
                _ => {}
            }
        }

        entries
    }

    /// Read notes pages, keyed by the id of the slide they belong to.
    fn read_notes_pages(&self, data: &[u8]) -> HashMap<u32, Vec<Shape>> {
        let mut pages = HashMap::new();

        for notes in
            Records::new(data, 0, data.len()).filter(|r| r.rec_type == record_types::RT_NOTES)
        {
            let slide_id = Records::children(data, &notes)
                .find(|r| {
                    r.rec_type == record_types::RT_NOTES_ATOM && r.content_end - r.content_start >= 4
                })
                .map(|atom| read_u32_le(data, atom.content_start));

            match slide_id {
                // Slide id 0 marks the notes master.
                Some(0) | None => {}
                Some(slide_id) => {
                    pages.insert(slide_id, collect_text_box_shapes(data, &notes));
                }
            }
        }

        pages
    }

    /// Notes text of the Notes container named by a slide's `SlideAtom`.
    ///
    /// `notesIdRef` is a persist id; zero means the slide has no notes page.
    fn linked_notes(
        &self,
        data: &[u8],
        persist_directory: &HashMap<u32, usize>,
        slide: &RecordHeader,
    ) -> Option<Vec<Shape>> {
        let atom = Records::children(data, slide).find(|r| {
            r.rec_type == record_types::RT_SLIDE_ATOM && r.content_end - r.content_start >= 20
        })?;

        let notes_ref = read_u32_le(data, atom.content_start + 16);
        if notes_ref == 0 {
            return None;
        }

        let offset = *persist_directory.get(&notes_ref)?;
        let notes = RecordHeader::read(data, offset, data.len())?;
        if notes.rec_type != record_types::RT_NOTES || notes.content_end > data.len() {
            log::warn!(
                "Notes persist id {} points at offset {} which is not a notes container",
                notes_ref,
                offset
            );
            return None;
        }

        Some(collect_text_box_shapes(data, &notes))
    }

    /// The Slide container a persist id points at, if it is one.
    fn slide_container(
        &self,
        data: &[u8],
        persist_directory: &HashMap<u32, usize>,
        persist_id: u32,
    ) -> Option<RecordHeader> {
        let offset = *persist_directory.get(&persist_id)?;
        let record = RecordHeader::read(data, offset, data.len())?;

        if record.rec_type != record_types::RT_SLIDE || record.content_end > data.len() {
            log::warn!(
                "Persist id {} points at offset {} which is not a slide container",
                persist_id,
                offset
            );
            return None;
        }

        Some(record)
    }
}

impl Default for PptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProvider for PptParser {
    fn format(&self) -> PresentationFormat {
        PresentationFormat::Ppt
    }

    fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        PptParser::parse(self, reader, filename)
    }
}

/// Shapes for every text box under `parent` that carries its own text.
///
/// Text boxes that only reference outline text hold no text atoms and are
/// skipped; that text is already read from the slide list.
fn collect_text_box_shapes(data: &[u8], parent: &RecordHeader) -> Vec<Shape> {
    let mut shapes = Vec::new();
    walk_text_boxes(data, parent, 0, &mut shapes);
    shapes
}

fn walk_text_boxes(data: &[u8], parent: &RecordHeader, depth: usize, shapes: &mut Vec<Shape>) {
    if depth > MAX_NESTING_DEPTH {
        log::warn!(
            "Skipping records nested deeper than {} levels at offset {}",
            MAX_NESTING_DEPTH,
            parent.offset
        );
        return;
    }

    for record in Records::children(data, parent) {
        if record.rec_type == record_types::RT_CLIENT_TEXTBOX {
            let mut text_type = TextType::Other;
            for child in Records::children(data, &record) {
                match child.rec_type {
                    record_types::RT_TEXT_HEADER_ATOM => {
                        text_type = read_text_type(data, &child).unwrap_or(text_type);
                    }
                    record_types::RT_TEXT_CHARS_ATOM | record_types::RT_TEXT_BYTES_ATOM => {
                        if let Some(text) = decode_text(data, &child) {
                            shapes.push(Shape::with_text(text_type.shape_kind(), text));
                        }
                    }
                    _ => {}
                }
            }
        } else if record.is_container() {
            walk_text_boxes(data, &record, depth + 1, shapes);
        }
    }
}

fn read_text_type(data: &[u8], header_atom: &RecordHeader) -> Option<TextType> {
    (header_atom.content_end - header_atom.content_start >= 4)
        .then(|| TextType::from_u32(read_u32_le(data, header_atom.content_start)))
}

/// Decode a TextCharsAtom (UTF-16LE) or TextBytesAtom (Windows-1252).
fn decode_text(data: &[u8], record: &RecordHeader) -> Option<String> {
    match record.rec_type {
        record_types::RT_TEXT_CHARS_ATOM => extract_unicode_text(record.content(data)),
        record_types::RT_TEXT_BYTES_ATOM => extract_ansi_text(record.content(data)),
        _ => None,
    }
}

/// Extract Unicode (UTF-16LE) text, stopping at a null terminator.
fn extract_unicode_text(bytes: &[u8]) -> Option<String> {
    let even = &bytes[..bytes.len() & !1];
    let (text, _) = UTF_16LE.decode_without_bom_handling(even);
    non_empty(text.split('\0').next().unwrap_or_default())
}

/// Extract ANSI (Windows-1252) text, stopping at a null terminator.
fn extract_ansi_text(bytes: &[u8]) -> Option<String> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&bytes[..end]);
    non_empty(&text)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Read a little-endian u16 from a byte slice.
fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read a little-endian u32 from a byte slice.
fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
