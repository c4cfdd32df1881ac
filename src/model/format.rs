//! Paragraph formatting.

use crate::meta::Meta;
use crate::model::borders::{Borders, Shading};
use crate::model::enums::{OutlineLevel, ParagraphAlignment};
use crate::model::font::Font;
use crate::model::object::{dom_object, vivify, ObjectBase};
use crate::model::tabs::TabStops;
use crate::values::{NBool, NEnum, NUnit};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Paragraph-level formatting.
///
/// Nested composites (font, borders, shading, tab stops) are absent until
/// first touched; reading through the meta layer never creates them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParagraphFormat {
    #[serde(skip)]
    base: ObjectBase,
    pub alignment: NEnum<ParagraphAlignment>,
    pub left_indent: NUnit,
    pub right_indent: NUnit,
    pub first_line_indent: NUnit,
    pub space_before: NUnit,
    pub space_after: NUnit,
    pub keep_together: NBool,
    pub keep_with_next: NBool,
    pub page_break_before: NBool,
    pub outline_level: NEnum<OutlineLevel>,
    font: Option<Font>,
    borders: Option<Borders>,
    shading: Option<Shading>,
    tab_stops: Option<TabStops>,
}

static PARAGRAPH_FORMAT_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("ParagraphFormat")
        .scalar::<ParagraphFormat, NEnum<ParagraphAlignment>>(
            "Alignment",
            |f| &f.alignment,
            |f| &mut f.alignment,
        )
        .scalar::<ParagraphFormat, NUnit>("LeftIndent", |f| &f.left_indent, |f| {
            &mut f.left_indent
        })
        .scalar::<ParagraphFormat, NUnit>("RightIndent", |f| &f.right_indent, |f| {
            &mut f.right_indent
        })
        .scalar::<ParagraphFormat, NUnit>("FirstLineIndent", |f| &f.first_line_indent, |f| {
            &mut f.first_line_indent
        })
        .scalar::<ParagraphFormat, NUnit>("SpaceBefore", |f| &f.space_before, |f| {
            &mut f.space_before
        })
        .scalar::<ParagraphFormat, NUnit>("SpaceAfter", |f| &f.space_after, |f| {
            &mut f.space_after
        })
        .scalar::<ParagraphFormat, NBool>("KeepTogether", |f| &f.keep_together, |f| {
            &mut f.keep_together
        })
        .scalar::<ParagraphFormat, NBool>("KeepWithNext", |f| &f.keep_with_next, |f| {
            &mut f.keep_with_next
        })
        .scalar::<ParagraphFormat, NBool>("PageBreakBefore", |f| &f.page_break_before, |f| {
            &mut f.page_break_before
        })
        .scalar::<ParagraphFormat, NEnum<OutlineLevel>>(
            "OutlineLevel",
            |f| &f.outline_level,
            |f| &mut f.outline_level,
        )
        .object::<ParagraphFormat, Font>(
            "Font",
            |f| f.font.as_ref(),
            |f| f.font.as_mut(),
            ParagraphFormat::font_mut,
        )
        .object::<ParagraphFormat, Borders>(
            "Borders",
            |f| f.borders.as_ref(),
            |f| f.borders.as_mut(),
            ParagraphFormat::borders_mut,
        )
        .object::<ParagraphFormat, Shading>(
            "Shading",
            |f| f.shading.as_ref(),
            |f| f.shading.as_mut(),
            ParagraphFormat::shading_mut,
        )
        .object::<ParagraphFormat, TabStops>(
            "TabStops",
            |f| f.tab_stops.as_ref(),
            |f| f.tab_stops.as_mut(),
            ParagraphFormat::tab_stops_mut,
        )
        .build()
});

impl ParagraphFormat {
    /// Create a format with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The character formatting, if set.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The character formatting, created on first access.
    pub fn font_mut(&mut self) -> &mut Font {
        vivify(&mut self.font, "Font")
    }

    /// The borders, if set.
    pub fn borders(&self) -> Option<&Borders> {
        self.borders.as_ref()
    }

    /// The borders, created on first access.
    pub fn borders_mut(&mut self) -> &mut Borders {
        vivify(&mut self.borders, "Borders")
    }

    /// The shading, if set.
    pub fn shading(&self) -> Option<&Shading> {
        self.shading.as_ref()
    }

    /// The shading, created on first access.
    pub fn shading_mut(&mut self) -> &mut Shading {
        vivify(&mut self.shading, "Shading")
    }

    /// The tab stops, if set.
    pub fn tab_stops(&self) -> Option<&TabStops> {
        self.tab_stops.as_ref()
    }

    /// The tab stops, created on first access.
    pub fn tab_stops_mut(&mut self) -> &mut TabStops {
        vivify(&mut self.tab_stops, "TabStops")
    }
}

dom_object!(ParagraphFormat, meta = PARAGRAPH_FORMAT_META);
