//! The document object model: element types, the object base contract,
//! and ordered child collections.

mod borders;
mod chart;
mod collections;
mod document;
mod enums;
mod font;
mod format;
pub(crate) mod object;
mod paragraph;
mod section;
mod style;
mod table;
mod tabs;

pub use borders::{Border, Borders, Shading};
pub use chart::{Chart, Legend};
pub use collections::ObjectCollection;
pub use document::{Document, DocumentInfo, RendererId};
pub use enums::{
    BorderStyle, ChartType, Orientation, OutlineLevel, ParagraphAlignment, StyleType, SymbolName,
    TabAlignment, TabLeader, Underline,
};
pub use font::Font;
pub use format::ParagraphFormat;
pub use object::{DocumentObject, ObjectBase, ParentLink};
pub use paragraph::{Character, Paragraph, ParagraphElement, Text};
pub use section::{Element, Elements, HeaderFooter, PageSetup, Section};
pub use style::{Style, Styles, NORMAL_STYLE_NAME};
pub use table::{Cell, Column, Row, Table};
pub use tabs::{TabStop, TabStops};
