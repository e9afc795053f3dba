//! Per-slide text blocks and the document report built from them.
//!
//! Each slide with any text becomes one block:
//!
//! ```text
//! Title: Overview
//!
//! Point A
//! Point B
//!
//! See appendix
//! ```
//!
//! Slides without title fall back to a `Slide N` header, and slides without
//! any text produce no block at all.

use crate::classify::{collect_buckets, SlideBuckets};
use crate::normalize::{NormalizedText, TextNormalizer};
use crate::shape_text::PARAGRAPH_SEPARATOR;
use crate::Presentation;
use serde::Serialize;
use std::io::{self, Write};

/// Prefix placed in front of slide titles unless disabled.
pub const TITLE_PREFIX: &str = "Title: ";

/// Line terminator used in the written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The platform's conventional line ending.
    pub fn native() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Builds normalized text blocks from slide buckets.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    /// Whether titles are written as `Title: <title>`.
    title_prefix: bool,
    line_ending: LineEnding,
    normalizer: TextNormalizer,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            title_prefix: true,
            line_ending: LineEnding::native(),
            normalizer: TextNormalizer::new(),
        }
    }
}

impl ReportFormatter {
    /// Create a formatter with the title prefix on and native line endings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the `Title: ` prefix is written.
    pub fn with_title_prefix(mut self, enabled: bool) -> Self {
        self.title_prefix = enabled;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Format one slide's buckets into a block.
    ///
    /// Returns `None` when every bucket is empty.
    pub fn format_slide(&self, ordinal: usize, buckets: &SlideBuckets) -> Option<NormalizedText> {
        if buckets.is_empty() {
            return None;
        }

        let mut block = if buckets.title.is_empty() {
            format!("Slide {ordinal}")
        } else if self.title_prefix {
            format!("{TITLE_PREFIX}{}", buckets.title.text())
        } else {
            buckets.title.text()
        };

        for section in [&buckets.subtitle, &buckets.body, &buckets.notes] {
            if !section.is_empty() {
                block.push_str(PARAGRAPH_SEPARATOR);
                block.push_str(PARAGRAPH_SEPARATOR);
                block.push_str(&section.text());
            }
        }

        Some(self.finish(&block))
    }

    /// Structured form of a slide's buckets for machine-readable output.
    ///
    /// Same emptiness rule as [`format_slide`](Self::format_slide); every
    /// field goes through the same line-ending and character normalization.
    pub fn slide_record(&self, ordinal: usize, buckets: &SlideBuckets) -> Option<SlideRecord> {
        if buckets.is_empty() {
            return None;
        }

        let field = |bucket: &crate::classify::Bucket| {
            (!bucket.is_empty()).then(|| self.finish(&bucket.text()))
        };

        Some(SlideRecord {
            slide: ordinal,
            title: field(&buckets.title),
            subtitle: field(&buckets.subtitle),
            body: field(&buckets.body),
            notes: field(&buckets.notes),
        })
    }

    /// Blocks for every slide that has text, in slide order.
    pub fn format_presentation<'a>(
        &'a self,
        presentation: &'a Presentation,
    ) -> impl Iterator<Item = NormalizedText> + 'a {
        presentation
            .slides()
            .iter()
            .filter_map(move |slide| self.format_slide(slide.ordinal(), &collect_buckets(slide)))
    }

    /// Records for every slide that has text, in slide order.
    pub fn presentation_records<'a>(
        &'a self,
        presentation: &'a Presentation,
    ) -> impl Iterator<Item = SlideRecord> + 'a {
        presentation
            .slides()
            .iter()
            .filter_map(move |slide| self.slide_record(slide.ordinal(), &collect_buckets(slide)))
    }

    /// Canonicalize line endings, then apply the character table.
    fn finish(&self, text: &str) -> NormalizedText {
        match self.line_ending {
            LineEnding::Lf => self.normalizer.normalize(text),
            LineEnding::CrLf => self
                .normalizer
                .normalize(&text.replace(PARAGRAPH_SEPARATOR, LineEnding::CrLf.as_str())),
        }
    }
}

/// One slide's normalized fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideRecord {
    /// 1-based slide number.
    pub slide: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<NormalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<NormalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<NormalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<NormalizedText>,
}

/// Writes blocks to a sink as records separated by a blank line.
pub struct ReportWriter<W: Write> {
    sink: W,
    line_ending: LineEnding,
    records: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W, line_ending: LineEnding) -> Self {
        Self {
            sink,
            line_ending,
            records: 0,
        }
    }

    /// Write one record followed by a line ending.
    pub fn write_record(&mut self, record: &str) -> io::Result<()> {
        let eol = self.line_ending.as_str();
        if self.records > 0 {
            self.sink.write_all(eol.as_bytes())?;
        }
        self.sink.write_all(record.as_bytes())?;
        self.sink.write_all(eol.as_bytes())?;
        self.records += 1;
        Ok(())
    }

    /// Format and write every slide of the presentation.
    ///
    /// Returns the number of records written.
    pub fn write_presentation(
        &mut self,
        formatter: &ReportFormatter,
        presentation: &Presentation,
    ) -> io::Result<usize> {
        for block in formatter.format_presentation(presentation) {
            self.write_record(block.as_str())?;
        }
        Ok(self.records)
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bucket;
    use crate::{PlaceholderKind, PresentationFormat, Shape, ShapeKind, Slide};

    fn bucket(parts: &[&str]) -> Bucket {
        let mut bucket = Bucket::new();
        for part in parts {
            bucket.append(*part);
        }
        bucket
    }

    fn lf_formatter() -> ReportFormatter {
        ReportFormatter::new().with_line_ending(LineEnding::Lf)
    }

    fn overview_slide() -> Slide {
        let mut slide = Slide::new(1);
        slide.add_shape(Shape::with_text(
            ShapeKind::Placeholder(PlaceholderKind::Title),
            "Overview\n",
        ));
        slide.add_shape(Shape::with_text(ShapeKind::TextBox, " Point A \r\nPoint B"));
        slide.add_notes_shape(Shape::with_text(
            ShapeKind::Placeholder(PlaceholderKind::Other),
            "1",
        ));
        slide.add_notes_shape(Shape::with_text(
            ShapeKind::Placeholder(PlaceholderKind::Body),
            "See appendix",
        ));
        slide
    }

    #[test]
    fn test_empty_buckets_emit_nothing() {
        assert_eq!(lf_formatter().format_slide(4, &SlideBuckets::new()), None);
        assert_eq!(lf_formatter().slide_record(4, &SlideBuckets::new()), None);
    }

    #[test]
    fn test_title_prefix_toggle() {
        let buckets = SlideBuckets {
            title: bucket(&["Intro"]),
            ..Default::default()
        };

        let with_prefix = lf_formatter().format_slide(1, &buckets).unwrap();
        assert_eq!(with_prefix.as_str(), "Title: Intro");

        let without_prefix = lf_formatter()
            .with_title_prefix(false)
            .format_slide(1, &buckets)
            .unwrap();
        assert_eq!(without_prefix.as_str(), "Intro");
    }

    #[test]
    fn test_untitled_slide_uses_ordinal_header() {
        let buckets = SlideBuckets {
            body: bucket(&["Just body"]),
            ..Default::default()
        };

        let block = lf_formatter().format_slide(7, &buckets).unwrap();
        assert_eq!(block.as_str(), "Slide 7\n\nJust body");
    }

    #[test]
    fn test_notes_only_slide() {
        let buckets = SlideBuckets {
            notes: bucket(&["Only notes"]),
            ..Default::default()
        };

        let block = lf_formatter().format_slide(2, &buckets).unwrap();
        assert_eq!(block.as_str(), "Slide 2\n\nOnly notes");
    }

    #[test]
    fn test_section_order() {
        let buckets = SlideBuckets {
            title: bucket(&["T"]),
            subtitle: bucket(&["S"]),
            body: bucket(&["B1", "B2"]),
            notes: bucket(&["N"]),
        };

        let block = lf_formatter().format_slide(1, &buckets).unwrap();
        assert_eq!(block.as_str(), "Title: T\n\nS\n\nB1\nB2\n\nN");
    }

    #[test]
    fn test_crlf_line_endings() {
        let buckets = SlideBuckets {
            title: bucket(&["T"]),
            body: bucket(&["a", "b"]),
            ..Default::default()
        };

        let block = ReportFormatter::new()
            .with_line_ending(LineEnding::CrLf)
            .format_slide(1, &buckets)
            .unwrap();
        assert_eq!(block.as_str(), "Title: T\r\n\r\na\r\nb");
    }

    #[test]
    fn test_vertical_tab_normalized_after_line_endings() {
        let buckets = SlideBuckets {
            title: bucket(&["one\u{000B}two"]),
            ..Default::default()
        };

        let block = ReportFormatter::new()
            .with_line_ending(LineEnding::CrLf)
            .format_slide(1, &buckets)
            .unwrap();
        assert_eq!(block.as_str(), "Title: one\ntwo");
    }

    #[test]
    fn test_block_is_normalized() {
        let buckets = SlideBuckets {
            title: bucket(&["\u{201C}Smart\u{201D} quotes\u{2026}"]),
            body: bucket(&["2019\u{2013}2020\u{00A0}plan"]),
            ..Default::default()
        };

        let block = lf_formatter().format_slide(1, &buckets).unwrap();
        assert_eq!(block.as_str(), "Title: \"Smart\" quotes...\n\n2019-2020 plan");
    }

    #[test]
    fn test_end_to_end_overview_slide() {
        let buckets = collect_buckets(&overview_slide());
        assert_eq!(buckets.title.text(), "Overview");
        assert_eq!(buckets.body.text(), "Point A\nPoint B");
        assert_eq!(buckets.notes.text(), "See appendix");
        assert!(buckets.subtitle.is_empty());

        let block = lf_formatter().format_slide(1, &buckets).unwrap();
        assert_eq!(
            block.as_str(),
            "Title: Overview\n\nPoint A\nPoint B\n\nSee appendix"
        );
    }

    #[test]
    fn test_empty_slides_are_absent() {
        let mut presentation = Presentation::new("deck.pptx", PresentationFormat::Pptx);
        presentation.add_slide(overview_slide());

        let mut blank = Slide::new(2);
        blank.add_shape(Shape::new(ShapeKind::Picture));
        blank.add_notes_shape(Shape::with_text(
            ShapeKind::Placeholder(PlaceholderKind::Other),
            "2",
        ));
        presentation.add_slide(blank);

        let mut third = Slide::new(3);
        third.add_shape(Shape::with_text(ShapeKind::TextBox, "Closing"));
        presentation.add_slide(third);

        let blocks: Vec<_> = lf_formatter().format_presentation(&presentation).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.len() < presentation.slides().len());
        assert_eq!(blocks[1].as_str(), "Slide 3\n\nClosing");
    }

    #[test]
    fn test_writer_separates_records() {
        let mut presentation = Presentation::new("deck.pptx", PresentationFormat::Pptx);
        presentation.add_slide(overview_slide());
        let mut second = Slide::new(2);
        second.add_shape(Shape::with_text(
            ShapeKind::Placeholder(PlaceholderKind::CenterTitle),
            "Thanks",
        ));
        presentation.add_slide(second);

        let formatter = lf_formatter().with_title_prefix(false);
        let mut writer = ReportWriter::new(Vec::new(), LineEnding::Lf);
        let written = writer.write_presentation(&formatter, &presentation).unwrap();
        assert_eq!(written, 2);

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(
            output,
            "Overview\n\nPoint A\nPoint B\n\nSee appendix\n\nThanks\n"
        );
    }

    #[test]
    fn test_writer_with_nothing_to_write() {
        let presentation = Presentation::new("empty.pptx", PresentationFormat::Pptx);
        let mut writer = ReportWriter::new(Vec::new(), LineEnding::CrLf);
        assert_eq!(
            writer
                .write_presentation(&ReportFormatter::new(), &presentation)
                .unwrap(),
            0
        );
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_slide_record_serialization() {
        let record = lf_formatter()
            .slide_record(1, &collect_buckets(&overview_slide()))
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"slide":1,"title":"Overview","body":"Point A\nPoint B","notes":"See appendix"}"#
        );
    }
}
