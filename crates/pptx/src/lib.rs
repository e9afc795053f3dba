//! PPTX (Office Open XML) document provider.
//!
//! Parses .pptx files, which are ZIP archives containing XML documents, into
//! the slide/shape/placeholder model, including each slide's notes page.

pub mod parser;

pub use parser::PptxParser;
