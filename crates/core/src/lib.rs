//! Document model, slide classification, text normalization and report
//! formatting for presentation text extraction.

pub mod classify;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod report;
pub mod shape_text;
pub mod types;

pub use classify::{classify_slide, collect_buckets, extract_notes, Bucket, SlideBuckets};
pub use error::{Error, Result};
pub use normalize::{NormalizedText, TextNormalizer};
pub use provider::DocumentProvider;
pub use report::{LineEnding, ReportFormatter, ReportWriter, SlideRecord};
pub use shape_text::extract_shape_text;
pub use types::{PlaceholderKind, Presentation, PresentationFormat, Shape, ShapeKind, Slide};
