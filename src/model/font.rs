//! Character formatting.

use crate::meta::Meta;
use crate::model::enums::Underline;
use crate::model::object::{dom_object, ObjectBase};
use crate::values::{Color, NBool, NEnum, NString, NUnit};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Character formatting applied to a run of text.
///
/// All fields are nullable; a null field inherits from the base style at
/// render time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Font {
    #[serde(skip)]
    base: ObjectBase,
    pub name: NString,
    pub size: NUnit,
    pub bold: NBool,
    pub italic: NBool,
    pub underline: NEnum<Underline>,
    pub superscript: NBool,
    pub subscript: NBool,
    pub color: Color,
}

static FONT_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Font")
        .scalar::<Font, NString>("Name", |f| &f.name, |f| &mut f.name)
        .scalar::<Font, NUnit>("Size", |f| &f.size, |f| &mut f.size)
        .scalar::<Font, NBool>("Bold", |f| &f.bold, |f| &mut f.bold)
        .scalar::<Font, NBool>("Italic", |f| &f.italic, |f| &mut f.italic)
        .scalar::<Font, NEnum<Underline>>("Underline", |f| &f.underline, |f| &mut f.underline)
        .scalar::<Font, NBool>("Superscript", |f| &f.superscript, |f| &mut f.superscript)
        .scalar::<Font, NBool>("Subscript", |f| &f.subscript, |f| &mut f.subscript)
        .scalar::<Font, Color>("Color", |f| &f.color, |f| &mut f.color)
        .build()
});

impl Font {
    /// Create a font with every field unset.
    pub fn new() -> Self {
        Self::default()
    }
}

dom_object!(Font, meta = FONT_META);
