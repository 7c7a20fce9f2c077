//! # mdrich core
//!
//! Converts a lightweight markup report into a document of styled blocks:
//! headings, paragraphs, bullet items, quotes, rules, diagram lines and
//! tables, each carrying bold/plain text runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdrich_core::{convert_str, Block};
//!
//! let doc = convert_str("## Summary\n\n- **Bold** item\n");
//!
//! assert_eq!(doc.len(), 2);
//! assert!(matches!(doc.blocks()[1], Block::BulletItem(_)));
//! ```
//!
//! ## Diagnostics
//!
//! Conversion never fails. Lossy or unterminated constructs are reported
//! alongside the document:
//!
//! ```rust
//! use mdrich_core::Converter;
//!
//! let input = "| a | b |\n| 1 | 2 | 3 |\n```mermaid\ngraph TD";
//! let result = Converter::default().convert_with_diagnostics(input);
//!
//! println!("Blocks: {}, Notes: {}", result.document.len(), result.diagnostics.len());
//! ```

pub mod ast;
pub mod builder;
pub mod classify;
pub mod error;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod table;

pub use ast::{Block, Cell, Document, HeadingLevel, Row, Run, TableGrid};
pub use builder::DocumentBuilder;
pub use error::{Diagnostic, DiagnosticKind, Diagnostics};
pub use inline::format_runs;
pub use parser::{convert, convert_str, Conversion, ConvertOptions, Converter};
pub use table::build_table;
