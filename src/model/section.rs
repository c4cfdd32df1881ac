//! Sections and page-level structure.

use crate::meta::Meta;
use crate::model::chart::Chart;
use crate::model::collections::ObjectCollection;
use crate::model::enums::Orientation;
use crate::model::format::ParagraphFormat;
use crate::model::object::{dom_object, vivify, DocumentObject, ObjectBase};
use crate::model::paragraph::Paragraph;
use crate::model::table::Table;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::values::{NEnum, NUnit};

/// Block-level content of a section, header, footer, or table cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Paragraph(Paragraph),
    Table(Table),
    Chart(Chart),
}

impl Element {
    fn inner(&self) -> &dyn DocumentObject {
        match self {
            Element::Paragraph(p) => p,
            Element::Table(t) => t,
            Element::Chart(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DocumentObject {
        match self {
            Element::Paragraph(p) => p,
            Element::Table(t) => t,
            Element::Chart(c) => c,
        }
    }
}

impl DocumentObject for Element {
    fn meta(&self) -> &'static Meta {
        self.inner().meta()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self.inner().as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self.inner_mut().as_any_mut()
    }

    fn base(&self) -> &ObjectBase {
        self.inner().base()
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        self.inner_mut().base_mut()
    }

    fn clone_object(&self) -> Box<dyn DocumentObject> {
        Box::new(self.clone())
    }

    fn is_meaningful(&self) -> bool {
        self.inner().is_meaningful()
    }

    fn reset_cached_values(&mut self) {
        self.inner_mut().reset_cached_values();
    }
}

/// Ordered block content.
pub type Elements = ObjectCollection<Element>;

/// Appends block elements; shared by every container that holds them.
pub(crate) fn add_paragraph(elements: &mut Elements) -> &mut Paragraph {
    match elements.push(Element::Paragraph(Paragraph::new())) {
        Element::Paragraph(p) => p,
        _ => unreachable!(),
    }
}

pub(crate) fn add_table(elements: &mut Elements) -> &mut Table {
    match elements.push(Element::Table(Table::new())) {
        Element::Table(t) => t,
        _ => unreachable!(),
    }
}

pub(crate) fn add_chart(elements: &mut Elements, chart: Chart) -> &mut Chart {
    match elements.push(Element::Chart(chart)) {
        Element::Chart(c) => c,
        _ => unreachable!(),
    }
}

/// Page geometry of a section.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageSetup {
    #[serde(skip)]
    base: ObjectBase,
    pub orientation: NEnum<Orientation>,
    pub page_width: NUnit,
    pub page_height: NUnit,
    pub left_margin: NUnit,
    pub right_margin: NUnit,
    pub top_margin: NUnit,
    pub bottom_margin: NUnit,
}

static PAGE_SETUP_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("PageSetup")
        .scalar::<PageSetup, NEnum<Orientation>>(
            "Orientation",
            |p| &p.orientation,
            |p| &mut p.orientation,
        )
        .scalar::<PageSetup, NUnit>("PageWidth", |p| &p.page_width, |p| &mut p.page_width)
        .scalar::<PageSetup, NUnit>("PageHeight", |p| &p.page_height, |p| &mut p.page_height)
        .scalar::<PageSetup, NUnit>("LeftMargin", |p| &p.left_margin, |p| &mut p.left_margin)
        .scalar::<PageSetup, NUnit>("RightMargin", |p| &p.right_margin, |p| &mut p.right_margin)
        .scalar::<PageSetup, NUnit>("TopMargin", |p| &p.top_margin, |p| &mut p.top_margin)
        .scalar::<PageSetup, NUnit>("BottomMargin", |p| &p.bottom_margin, |p| {
            &mut p.bottom_margin
        })
        .build()
});

impl PageSetup {
    /// Create a page setup with every field unset.
    pub fn new() -> Self {
        Self::default()
    }
}

dom_object!(PageSetup, meta = PAGE_SETUP_META);

/// A page header or footer.
///
/// Marked meaningful: instantiating a header suppresses the inherited one
/// even when nothing is set on it, so an empty instance must survive
/// serialization pruning.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeaderFooter {
    #[serde(skip)]
    base: ObjectBase,
    format: Option<ParagraphFormat>,
    pub elements: Elements,
}

static HEADER_FOOTER_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("HeaderFooter")
        .object::<HeaderFooter, ParagraphFormat>(
            "Format",
            |h| h.format.as_ref(),
            |h| h.format.as_mut(),
            HeaderFooter::format_mut,
        )
        .collection::<HeaderFooter, Elements>("Elements", "Element", |h| &h.elements, |h| {
            &mut h.elements
        })
        .build()
});

impl HeaderFooter {
    /// Create an empty header or footer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default paragraph formatting, if set.
    pub fn format(&self) -> Option<&ParagraphFormat> {
        self.format.as_ref()
    }

    /// The default paragraph formatting, created on first access.
    pub fn format_mut(&mut self) -> &mut ParagraphFormat {
        vivify(&mut self.format, "Format")
    }

    /// Append an empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        add_paragraph(&mut self.elements)
    }
}

dom_object!(HeaderFooter, meta = HEADER_FOOTER_META, meaningful);

/// A section: page geometry, optional header and footer, and block
/// content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Section {
    #[serde(skip)]
    base: ObjectBase,
    page_setup: Option<PageSetup>,
    header: Option<HeaderFooter>,
    footer: Option<HeaderFooter>,
    pub elements: Elements,
}

static SECTION_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Section")
        .object::<Section, PageSetup>(
            "PageSetup",
            |s| s.page_setup.as_ref(),
            |s| s.page_setup.as_mut(),
            Section::page_setup_mut,
        )
        .object::<Section, HeaderFooter>(
            "Header",
            |s| s.header.as_ref(),
            |s| s.header.as_mut(),
            Section::header_mut,
        )
        .object::<Section, HeaderFooter>(
            "Footer",
            |s| s.footer.as_ref(),
            |s| s.footer.as_mut(),
            Section::footer_mut,
        )
        .collection::<Section, Elements>("Elements", "Element", |s| &s.elements, |s| {
            &mut s.elements
        })
        .build()
});

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// The page geometry, if set.
    pub fn page_setup(&self) -> Option<&PageSetup> {
        self.page_setup.as_ref()
    }

    /// The page geometry, created on first access.
    pub fn page_setup_mut(&mut self) -> &mut PageSetup {
        vivify(&mut self.page_setup, "PageSetup")
    }

    /// The header, if instantiated.
    pub fn header(&self) -> Option<&HeaderFooter> {
        self.header.as_ref()
    }

    /// The header, created on first access.
    pub fn header_mut(&mut self) -> &mut HeaderFooter {
        vivify(&mut self.header, "Header")
    }

    /// The footer, if instantiated.
    pub fn footer(&self) -> Option<&HeaderFooter> {
        self.footer.as_ref()
    }

    /// The footer, created on first access.
    pub fn footer_mut(&mut self) -> &mut HeaderFooter {
        vivify(&mut self.footer, "Footer")
    }

    /// Append an empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        add_paragraph(&mut self.elements)
    }

    /// Append an empty table.
    pub fn add_table(&mut self) -> &mut Table {
        add_table(&mut self.elements)
    }

    /// Append a chart.
    pub fn add_chart(&mut self, chart: Chart) -> &mut Chart {
        add_chart(&mut self.elements, chart)
    }
}

dom_object!(Section, meta = SECTION_META);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::object_is_null;

    #[test]
    fn test_empty_header_is_meaningful() {
        let mut section = Section::new();
        assert!(object_is_null(&section).unwrap());

        // Merely instantiating the header flips the section non-empty.
        section.header_mut();
        assert!(!object_is_null(&section).unwrap());
        assert!(!object_is_null(section.header().unwrap()).unwrap());
    }

    #[test]
    fn test_untouched_page_setup_stays_empty() {
        let mut section = Section::new();
        section.page_setup_mut();
        assert!(object_is_null(&section).unwrap());

        section.page_setup_mut().orientation.set(Orientation::Landscape);
        assert!(!object_is_null(&section).unwrap());
    }

    #[test]
    fn test_mixed_block_content() {
        let mut section = Section::new();
        section.add_paragraph().add_text("intro");
        section.add_table();
        section.add_paragraph();

        assert_eq!(section.elements.len(), 3);
        assert!(matches!(section.elements.get(1), Some(Element::Table(_))));
    }
}
