//! Paragraph-level cleanup of a single shape's text frame.

use crate::Shape;
use regex::Regex;
use std::sync::LazyLock;

/// Separator placed between paragraphs and between appended fragments.
pub const PARAGRAPH_SEPARATOR: &str = "\n";

/// Any run of carriage returns and line feeds, in any order.
static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Extract the usable text of a shape.
///
/// Paragraphs are trimmed individually, empty ones are dropped and the rest
/// are joined with [`PARAGRAPH_SEPARATOR`]. Returns `None` when nothing is
/// left, so callers can skip the shape entirely.
pub fn extract_shape_text(shape: &Shape) -> Option<String> {
    if !shape.has_text_frame() {
        return None;
    }

    let raw = shape.text()?.trim();

    let joined = PARAGRAPH_BREAK_REGEX
        .split(raw)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR);

    let text = joined.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
