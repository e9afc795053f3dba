//! Document model produced by the providers and consumed by the pipeline.

use serde::{Deserialize, Serialize};

/// A decoded presentation: slides in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Original filename (without path).
    pub filename: String,

    /// Detected format of the source file.
    pub format: PresentationFormat,

    slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new presentation with the given filename and format.
    pub fn new(filename: impl Into<String>, format: PresentationFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
            slides: Vec::new(),
        }
    }

    /// Add a slide to the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

/// The format of the source presentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationFormat {
    /// Modern PPTX (Office Open XML).
    Pptx,
    /// Legacy PPT (OLE/CFB binary).
    Ppt,
}

impl PresentationFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pptx" => Some(Self::Pptx),
            "ppt" => Some(Self::Ppt),
            _ => None,
        }
    }

    /// Detect format from file magic bytes.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }

        // PPTX is a ZIP file (PK\x03\x04)
        if bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
            return Some(Self::Pptx);
        }

        // PPT is an OLE/CFB file (D0 CF 11 E0 A1 B1 1A E1)
        if bytes.len() >= 8
            && bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])
        {
            return Some(Self::Ppt);
        }

        None
    }

    /// File extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Ppt => "ppt",
        }
    }
}

/// A single slide with its notes page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    ordinal: usize,
    shapes: Vec<Shape>,
    notes_shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide at the given 1-based position.
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            shapes: Vec::new(),
            notes_shapes: Vec::new(),
        }
    }

    /// 1-based position of the slide in the deck.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Shapes on the slide, in document order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shapes on the slide's notes page, in document order.
    pub fn notes_shapes(&self) -> &[Shape] {
        &self.notes_shapes
    }

    /// Add a shape to the slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a shape to the slide's notes page.
    pub fn add_notes_shape(&mut self, shape: Shape) {
        self.notes_shapes.push(shape);
    }

    /// Replace the notes page.
    pub fn set_notes_shapes(&mut self, shapes: Vec<Shape>) {
        self.notes_shapes = shapes;
    }
}

/// Semantic role of a placeholder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderKind {
    Title,
    CenterTitle,
    Subtitle,
    Body,
    Object,
    /// Any other role: date, footer, slide number, chart, picture, ...
    Other,
}

/// What kind of element a shape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A layout placeholder with a semantic role.
    Placeholder(PlaceholderKind),
    /// A free-standing text box.
    TextBox,
    /// Any other drawn shape.
    AutoShape,
    Picture,
    /// Tables, charts, embedded objects and anything unrecognised.
    Other,
}

/// A visual element on a slide or notes page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    has_text_frame: bool,
    text: Option<String>,
}

impl Shape {
    /// Create a shape without a text frame.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            has_text_frame: false,
            text: None,
        }
    }

    /// Create a shape carrying a text frame with the given raw text.
    ///
    /// An empty string is stored as "the frame has no text".
    pub fn with_text(kind: ShapeKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind,
            has_text_frame: true,
            text: (!text.is_empty()).then_some(text),
        }
    }

    /// Shape kind tag.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Whether the shape carries a text frame at all.
    pub fn has_text_frame(&self) -> bool {
        self.has_text_frame
    }

    /// Raw multi-paragraph text, if the text frame reports any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, ShapeKind::Placeholder(_))
    }

    /// The placeholder role; `None` for non-placeholder shapes.
    pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
        match self.kind {
            ShapeKind::Placeholder(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_magic() {
        assert_eq!(
            PresentationFormat::from_magic(b"PK\x03\x04rest"),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(
            PresentationFormat::from_magic(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
            Some(PresentationFormat::Ppt)
        );
        assert_eq!(PresentationFormat::from_magic(b"%PDF-1.7"), None);
        assert_eq!(PresentationFormat::from_magic(b"PK"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            PresentationFormat::from_extension("PPTX"),
            Some(PresentationFormat::Pptx)
        );
        assert_eq!(
            PresentationFormat::from_extension("ppt"),
            Some(PresentationFormat::Ppt)
        );
        assert_eq!(PresentationFormat::from_extension("key"), None);

        for format in [PresentationFormat::Pptx, PresentationFormat::Ppt] {
            assert_eq!(
                PresentationFormat::from_extension(format.extension()),
                Some(format)
            );
        }
    }

    #[test]
    fn test_empty_text_means_no_text() {
        let shape = Shape::with_text(ShapeKind::TextBox, "");
        assert!(shape.has_text_frame());
        assert_eq!(shape.text(), None);

        let picture = Shape::new(ShapeKind::Picture);
        assert!(!picture.has_text_frame());
    }

    #[test]
    fn test_placeholder_kind_only_for_placeholders() {
        let title = Shape::with_text(ShapeKind::Placeholder(PlaceholderKind::Title), "Intro");
        assert!(title.is_placeholder());
        assert_eq!(title.placeholder_kind(), Some(PlaceholderKind::Title));

        let text_box = Shape::with_text(ShapeKind::TextBox, "Intro");
        assert!(!text_box.is_placeholder());
        assert_eq!(text_box.placeholder_kind(), None);
    }
}
