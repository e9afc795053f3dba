//! Routing of shape text into the four per-slide buckets.

use crate::shape_text::{extract_shape_text, PARAGRAPH_SEPARATOR};
use crate::{PlaceholderKind, Slide};

/// An append-only list of paragraph fragments, joined on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    fragments: Vec<String>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. Empty fragments are ignored.
    pub fn append(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments in append order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// All fragments joined with the paragraph separator.
    pub fn text(&self) -> String {
        self.fragments.join(PARAGRAPH_SEPARATOR)
    }
}

/// Title, subtitle, body and notes text accumulated for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideBuckets {
    pub title: Bucket,
    pub subtitle: Bucket,
    pub body: Bucket,
    pub notes: Bucket,
}

impl SlideBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no bucket holds any text.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtitle.is_empty()
            && self.body.is_empty()
            && self.notes.is_empty()
    }
}

/// Classify the slide's shapes into title, subtitle and body.
///
/// The notes bucket is left empty; see [`extract_notes`].
pub fn classify_slide(slide: &Slide) -> SlideBuckets {
    let mut buckets = SlideBuckets::new();

    for shape in slide.shapes() {
        let Some(text) = extract_shape_text(shape) else {
            continue;
        };

        let bucket = match shape.placeholder_kind() {
            Some(PlaceholderKind::Title | PlaceholderKind::CenterTitle) => &mut buckets.title,
            Some(PlaceholderKind::Subtitle) => &mut buckets.subtitle,
            Some(_) | None => &mut buckets.body,
        };
        bucket.append(text);
    }

    buckets
}

/// Collect the speaker notes of a slide.
///
/// A notes shape whose text is exactly the slide's own ordinal is the
/// auto-inserted slide number and is dropped.
pub fn extract_notes(slide: &Slide) -> Bucket {
    let slide_number = slide.ordinal().to_string();
    let mut notes = Bucket::new();

    for shape in slide.notes_shapes() {
        if let Some(text) = extract_shape_text(shape) {
            if text == slide_number {
                log::debug!("Dropping slide number from notes of slide {}", slide_number);
            } else {
                notes.append(text);
            }
        }
    }

    notes
}

/// Classify the slide and attach its notes.
pub fn collect_buckets(slide: &Slide) -> SlideBuckets {
    let mut buckets = classify_slide(slide);
    buckets.notes = extract_notes(slide);
    buckets
}
