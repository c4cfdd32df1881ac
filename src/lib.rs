//! # docmodel
//!
//! A typed document object model with nullability tracking, reflective
//! dotted-path field access, and diff-aware DDL serialization.
//!
//! Every formatting field of the model knows whether it was explicitly
//! set; unset fields inherit at render time and contribute nothing to
//! output. Fields can be addressed generically by dotted path
//! (`"Format.Font.Bold"`), and serialization can diff a tree against a
//! reference tree, emitting only what actually differs.
//!
//! ## Quick Start
//!
//! ```
//! use docmodel::{ddl, Document, Unit};
//!
//! fn main() -> docmodel::Result<()> {
//!     let mut doc = Document::new();
//!     doc.styles
//!         .add_style("Heading1", "Normal")
//!         .font_mut()
//!         .bold
//!         .set(true);
//!
//!     let section = doc.add_section();
//!     let title = section.add_paragraph();
//!     title.style.set("Heading1");
//!     title.add_text("Annual Report");
//!
//!     let body = section.add_paragraph();
//!     body.format_mut().first_line_indent.set(Unit::from_centimeter(0.5));
//!     body.add_text("It was a good year.");
//!
//!     let text = ddl::to_ddl(&doc)?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Generic field access
//!
//! ```
//! use docmodel::{AccessMode, DocumentObject, Paragraph, Value};
//!
//! let mut p = Paragraph::new();
//! p.meta()
//!     .set_value(&mut p, "Format.Font.Bold", Value::Bool(true))
//!     .unwrap();
//!
//! let bold = p
//!     .meta()
//!     .get_value(&p, "Format.Font.Bold", AccessMode::ReadOnly)
//!     .unwrap();
//! assert_eq!(bold.into_value(), Some(Value::Bool(true)));
//! ```

pub mod ddl;
pub mod error;
pub mod meta;
pub mod model;
pub mod values;

// Re-export commonly used types
pub use ddl::{DdlWriter, SerializeDdl};
pub use error::{Error, Result};
pub use meta::{
    AccessMode, DescriptorKind, Meta, Resolved, ValueDescriptor, ValueDescriptorCollection,
};
pub use model::{
    Border, Borders, BorderStyle, Cell, Chart, ChartType, Character, Column, Document,
    DocumentInfo, DocumentObject, Element, Font, HeaderFooter, Legend, ObjectCollection,
    Orientation, OutlineLevel, PageSetup, Paragraph, ParagraphAlignment, ParagraphElement,
    ParagraphFormat, ParentLink, RendererId, Row, Section, Shading, Style, Styles, StyleType,
    SymbolName, Table, TabStop, TabStops, TabAlignment, TabLeader, Text, Underline,
};
pub use values::{
    Color, DomEnum, NBool, NDouble, NEnum, NInt, NString, NUnit, NullableValue, Unit, UnitType,
    Value,
};
