//! The seam between container decoding and the extraction pipeline.

use crate::{Presentation, PresentationFormat, Result};
use std::io::{Read, Seek};

/// Decodes one container format into the abstract [`Presentation`] model.
///
/// Implementations hold no per-document state, so one provider can decode
/// any number of documents.
pub trait DocumentProvider {
    /// The container format this provider understands.
    fn format(&self) -> PresentationFormat;

    /// Decode a presentation from a seekable reader.
    fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Presentation>;
}
