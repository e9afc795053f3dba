//! PPTX file parser implementation.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use slidetext_core::{
    DocumentProvider, Error, PlaceholderKind, Presentation, PresentationFormat, Result, Shape,
    ShapeKind, Slide,
};
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

const PRESENTATION_PATH: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";

/// PowerPoint's in-paragraph line break, as reported by its text ranges.
const LINE_BREAK: char = '\u{000B}';

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut presentation = Presentation::new(filename, PresentationFormat::Pptx);

        let slide_paths = self.get_slide_order(&mut archive)?;
        log::debug!("PPTX '{}': {} slides", filename, slide_paths.len());

        for (idx, slide_path) in slide_paths.iter().enumerate() {
            let slide = self.parse_slide(&mut archive, slide_path, idx + 1)?;
            presentation.add_slide(slide);
        }

        Ok(presentation)
    }

    /// Get the ordered list of slide part paths.
    ///
    /// `p:sldIdLst` in presentation.xml is authoritative. Packages without it
    /// fall back to the slide relationships sorted by their trailing number.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self
            .try_read_file_from_archive(archive, PRESENTATION_RELS_PATH)?
            .ok_or_else(|| {
                Error::PptxParseError(format!(
                    "Missing '{}'. This does not look like a PowerPoint package.",
                    PRESENTATION_RELS_PATH
                ))
            })?;
        let relationships = parse_relationships(&rels_content)?;

        let slide_rels: Vec<&Relationship> = relationships
            .iter()
            .filter(|rel| rel.is_of_type("slide"))
            .collect();

        let listed_ids = match self.try_read_file_from_archive(archive, PRESENTATION_PATH)? {
            Some(content) => parse_slide_id_list(&content)?,
            None => {
                log::warn!("Missing '{}', ordering slides by name", PRESENTATION_PATH);
                Vec::new()
            }
        };

        if !listed_ids.is_empty() {
            let by_id: HashMap<&str, &Relationship> =
                slide_rels.iter().map(|rel| (rel.id.as_str(), *rel)).collect();

            let mut paths = Vec::with_capacity(listed_ids.len());
            for id in &listed_ids {
                match by_id.get(id.as_str()) {
                    Some(rel) => paths.push(resolve_target(PRESENTATION_PATH, &rel.target)),
                    None => log::warn!("Slide list references unknown relationship '{}'", id),
                }
            }
            return Ok(paths);
        }

        let mut slides: Vec<(String, Option<usize>)> = slide_rels
            .iter()
            .map(|rel| {
                let order_num =
                    extract_slide_number(&rel.target).or_else(|| extract_slide_number(&rel.id));
                (resolve_target(PRESENTATION_PATH, &rel.target), order_num)
            })
            .collect();

        // Sort slides by their number
        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide and its notes page from the archive.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<Slide> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let mut slide = Slide::new(slide_number);

        for shape in extract_shapes_from_xml(&content)? {
            slide.add_shape(shape);
        }

        if let Some(notes_path) = self.get_notes_path(archive, slide_path)? {
            match self.try_read_file_from_archive(archive, &notes_path)? {
                Some(notes) => slide.set_notes_shapes(extract_shapes_from_xml(&notes)?),
                None => log::warn!(
                    "Slide {} references missing notes part '{}'",
                    slide_number,
                    notes_path
                ),
            }
        }

        Ok(slide)
    }

    /// Find the notes slide related to a slide part, if any.
    fn get_notes_path<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
    ) -> Result<Option<String>> {
        let Some(rels_content) = self.try_read_file_from_archive(archive, &rels_path_for(slide_path))?
        else {
            return Ok(None);
        };

        Ok(parse_relationships(&rels_content)?
            .into_iter()
            .find(|rel| rel.is_of_type("notesSlide"))
            .map(|rel| resolve_target(slide_path, &rel.target)))
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        self.try_read_file_from_archive(archive, path)?
            .ok_or_else(|| Error::ZipError(format!("File not found in archive '{}'", path)))
    }

    /// Read a file from the ZIP archive, `None` if it does not exist.
    fn try_read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<Option<String>> {
        let mut file = match archive.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(Error::ZipError(format!(
                    "Failed to open '{}' in archive: {}",
                    path, e
                )))
            }
        };

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(Some(content))
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProvider for PptxParser {
    fn format(&self) -> PresentationFormat {
        PresentationFormat::Pptx
    }

    fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation> {
        PptxParser::parse(self, reader, filename)
    }
}

/// One `<Relationship>` entry of a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Relationship {
    id: String,
    rel_type: String,
    target: String,
}

impl Relationship {
    /// Match on the last segment of the relationship type URI.
    fn is_of_type(&self, name: &str) -> bool {
        self.rel_type.rsplit('/').next() == Some(name)
    }
}

/// Parse a relationships part.
fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut relationships = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"Relationship" =>
            {
                let mut rel = Relationship {
                    id: String::new(),
                    rel_type: String::new(),
                    target: String::new(),
                };

                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value).to_string();
                    match attr.key.as_ref() {
                        b"Id" => rel.id = value,
                        b"Type" => rel.rel_type = value,
                        b"Target" => rel.target = value,
                        _ => {}
                    }
                }

                relationships.push(rel);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(relationships)
}

/// Relationship ids of `p:sldIdLst/p:sldId`, in presentation order.
fn parse_slide_id_list(xml: &str) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"sldId" =>
            {
                // `id` is the numeric slide id; the relationship id is `r:id`.
                let rel_id = e.attributes().flatten().find_map(|attr| {
                    let key = attr.key.as_ref();
                    (key != b"id" && local_name(key) == b"id")
                        .then(|| String::from_utf8_lossy(&attr.value).to_string())
                });
                if let Some(rel_id) = rel_id {
                    ids.push(rel_id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation.xml: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(ids)
}

/// The drawing element a shape was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeElement {
    Sp,
    Pic,
    GraphicFrame,
}

/// Shape state accumulated while walking a `p:sp`, `p:pic` or `p:graphicFrame`.
#[derive(Debug)]
struct ShapeInfo {
    element: ShapeElement,
    placeholder: Option<PlaceholderKind>,
    text_box: bool,
    has_text_body: bool,
    paragraphs: Vec<String>,
}

impl ShapeInfo {
    fn new(element: ShapeElement) -> Self {
        Self {
            element,
            placeholder: None,
            text_box: false,
            has_text_body: false,
            paragraphs: Vec::new(),
        }
    }

    fn current_paragraph(&mut self) -> &mut String {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(String::new());
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Apply attributes of elements that may appear as start or empty tags.
    fn observe(&mut self, name: &[u8], e: &BytesStart) {
        match name {
            b"ph" => {
                let ph_type = e
                    .attributes()
                    .flatten()
                    .find(|attr| attr.key.as_ref() == b"type")
                    .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
                self.placeholder = Some(placeholder_kind_from_type(ph_type.as_deref()));
            }
            b"cNvSpPr" => {
                self.text_box = e.attributes().flatten().any(|attr| {
                    attr.key.as_ref() == b"txBox" && matches!(attr.value.as_ref(), b"1" | b"true")
                });
            }
            _ => {}
        }
    }

    fn into_shape(self) -> Shape {
        let kind = match (self.placeholder, self.element) {
            (Some(kind), _) => ShapeKind::Placeholder(kind),
            (None, ShapeElement::Sp) if self.text_box => ShapeKind::TextBox,
            (None, ShapeElement::Sp) => ShapeKind::AutoShape,
            (None, ShapeElement::Pic) => ShapeKind::Picture,
            (None, ShapeElement::GraphicFrame) => ShapeKind::Other,
        };

        if !self.has_text_body {
            return Shape::new(kind);
        }

        if self.paragraphs.iter().all(String::is_empty) {
            Shape::with_text(kind, "")
        } else {
            Shape::with_text(kind, self.paragraphs.join("\n"))
        }
    }
}

/// Map the `type` attribute of `p:ph` to a placeholder kind.
///
/// An absent type means `obj`, the schema default.
fn placeholder_kind_from_type(ph_type: Option<&str>) -> PlaceholderKind {
    match ph_type {
        Some("title") => PlaceholderKind::Title,
        Some("ctrTitle") => PlaceholderKind::CenterTitle,
        Some("subTitle") => PlaceholderKind::Subtitle,
        Some("body") => PlaceholderKind::Body,
        Some("obj") | None => PlaceholderKind::Object,
        Some(_) => PlaceholderKind::Other,
    }
}

/// Extract shapes, in document order, from slide or notes slide XML.
fn extract_shapes_from_xml(xml_content: &str) -> Result<Vec<Shape>> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml_content);

    let mut current_shape: Option<ShapeInfo> = None;
    let mut in_text_body = false;
    let mut in_text_run = false;
    // Depth inside an `mc:Choice` subtree; its `mc:Fallback` sibling is read instead.
    let mut choice_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) if choice_depth > 0 => choice_depth += 1,
            Ok(Event::End(_)) if choice_depth > 0 => choice_depth -= 1,
            Ok(Event::Empty(_)) | Ok(Event::Text(_)) if choice_depth > 0 => {}
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let local_name = local_name(name.as_ref());

                if local_name == b"Choice" {
                    choice_depth = 1;
                    continue;
                }

                match local_name {
                    b"sp" => current_shape = Some(ShapeInfo::new(ShapeElement::Sp)),
                    b"pic" => current_shape = Some(ShapeInfo::new(ShapeElement::Pic)),
                    b"graphicFrame" => {
                        current_shape = Some(ShapeInfo::new(ShapeElement::GraphicFrame))
                    }
                    _ => {}
                }

                if let Some(ref mut shape) = current_shape {
                    shape.observe(local_name, e);

                    match local_name {
                        // Table cells carry their own txBody; only shapes own a text frame.
                        b"txBody" if shape.element == ShapeElement::Sp => {
                            shape.has_text_body = true;
                            in_text_body = true;
                        }
                        b"p" if in_text_body => shape.paragraphs.push(String::new()),
                        b"t" if in_text_body => in_text_run = true,
                        _ => {}
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let local_name = local_name(name.as_ref());

                if let Some(ref mut shape) = current_shape {
                    shape.observe(local_name, e);

                    match local_name {
                        b"p" if in_text_body => shape.paragraphs.push(String::new()),
                        b"br" if in_text_body => shape.current_paragraph().push(LINE_BREAK),
                        b"txBody" if shape.element == ShapeElement::Sp => {
                            shape.has_text_body = true;
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text_run {
                    if let Some(ref mut shape) = current_shape {
                        let text = e.unescape().unwrap_or_default();
                        shape.current_paragraph().push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();

                match local_name(name.as_ref()) {
                    b"sp" | b"pic" | b"graphicFrame" => {
                        if let Some(shape) = current_shape.take() {
                            shapes.push(shape.into_shape());
                        }
                        in_text_body = false;
                        in_text_run = false;
                    }
                    b"txBody" => in_text_body = false,
                    b"t" => in_text_run = false,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(shapes)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Path of the relationships part belonging to `part`.
fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against the part that owns the relationship.
fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    // Remove common extensions first
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}
