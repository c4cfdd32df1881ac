//! The document root.

use crate::error::{Error, Result};
use crate::meta::Meta;
use crate::model::collections::ObjectCollection;
use crate::model::object::{dom_object, vivify, ObjectBase};
use crate::model::section::Section;
use crate::model::style::Styles;
use crate::values::NString;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Identity of a rendering backend instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererId(pub u64);

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentInfo {
    #[serde(skip)]
    base: ObjectBase,
    pub title: NString,
    pub author: NString,
    pub subject: NString,
    pub keywords: NString,
    pub comment: NString,
}

static DOCUMENT_INFO_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("DocumentInfo")
        .scalar::<DocumentInfo, NString>("Title", |i| &i.title, |i| &mut i.title)
        .scalar::<DocumentInfo, NString>("Author", |i| &i.author, |i| &mut i.author)
        .scalar::<DocumentInfo, NString>("Subject", |i| &i.subject, |i| &mut i.subject)
        .scalar::<DocumentInfo, NString>("Keywords", |i| &i.keywords, |i| &mut i.keywords)
        .scalar::<DocumentInfo, NString>("Comment", |i| &i.comment, |i| &mut i.comment)
        .build()
});

impl DocumentInfo {
    /// Create an info block with every field unset.
    pub fn new() -> Self {
        Self::default()
    }
}

dom_object!(DocumentInfo, meta = DOCUMENT_INFO_META);

/// The root of a document tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    #[serde(skip)]
    base: ObjectBase,
    pub comment: NString,
    info: Option<DocumentInfo>,
    pub styles: Styles,
    pub sections: ObjectCollection<Section>,
    #[serde(skip)]
    bound_to: Option<RendererId>,
}

static DOCUMENT_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Document")
        .scalar::<Document, NString>("Comment", |d| &d.comment, |d| &mut d.comment)
        .object::<Document, DocumentInfo>(
            "Info",
            |d| d.info.as_ref(),
            |d| d.info.as_mut(),
            Document::info_mut,
        )
        .collection::<Document, Styles>("Styles", "Style", |d| &d.styles, |d| &mut d.styles)
        .collection::<Document, ObjectCollection<Section>>(
            "Sections",
            "Section",
            |d| &d.sections,
            |d| &mut d.sections,
        )
        .build()
});

impl Document {
    /// Create an empty document with the built-in style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document metadata, if set.
    pub fn info(&self) -> Option<&DocumentInfo> {
        self.info.as_ref()
    }

    /// The document metadata, created on first access.
    pub fn info_mut(&mut self) -> &mut DocumentInfo {
        vivify(&mut self.info, "Info")
    }

    /// Append an empty section.
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new())
    }

    /// Bind this document to a rendering backend.
    ///
    /// A document belongs to at most one renderer for its lifetime:
    /// binding a second, different identity fails with `AlreadyBound`.
    /// Re-binding the same identity is a no-op.
    pub fn bind_to_renderer(&mut self, renderer: RendererId) -> Result<()> {
        match self.bound_to {
            None => {
                self.bound_to = Some(renderer);
                Ok(())
            }
            Some(current) if current == renderer => Ok(()),
            Some(_) => Err(Error::AlreadyBound),
        }
    }

    /// Whether the document is bound to a renderer.
    pub fn is_bound(&self) -> bool {
        self.bound_to.is_some()
    }
}

dom_object!(Document, meta = DOCUMENT_META);
