//! Legacy PPT (OLE/CFB) document provider.
//!
//! Parses .ppt files, which use the Microsoft Compound File Binary (CFB)
//! format, into the slide/shape/placeholder model. This is a best-effort
//! implementation focusing on slide text and speaker notes.

pub mod parser;

pub use parser::PptParser;
