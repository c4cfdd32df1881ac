//! Named styles.

use crate::meta::Meta;
use crate::model::enums::StyleType;
use crate::model::font::Font;
use crate::model::format::ParagraphFormat;
use crate::model::object::{vivify, DocumentObject, ObjectBase, ParentLink};
use crate::values::{NEnum, NString, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Name of the built-in root style every document starts with.
pub const NORMAL_STYLE_NAME: &str = "Normal";

/// A named style: an optional base style to inherit from, plus font and
/// paragraph formatting overrides.
///
/// The name is identity, not content: it is excluded from bulk null
/// sweeps and cannot be cleared.
#[derive(Debug, Clone, Serialize)]
pub struct Style {
    #[serde(skip)]
    base: ObjectBase,
    name: String,
    pub base_style: NString,
    pub style_type: NEnum<StyleType>,
    font: Option<Font>,
    paragraph_format: Option<ParagraphFormat>,
}

static STYLE_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Style")
        .plain::<Style>(
            "Name",
            |s| Value::String(s.name.clone()),
            |s, v| match v {
                Value::String(name) => {
                    s.name = name;
                    Ok(())
                }
                other => Err(other.incompatible_with("String")),
            },
            // Identity is never cleared.
            |_| {},
        )
        .ref_only()
        .scalar::<Style, NString>("BaseStyle", |s| &s.base_style, |s| &mut s.base_style)
        .scalar::<Style, NEnum<StyleType>>("Type", |s| &s.style_type, |s| &mut s.style_type)
        .object::<Style, Font>(
            "Font",
            |s| s.font.as_ref(),
            |s| s.font.as_mut(),
            Style::font_mut,
        )
        .object::<Style, ParagraphFormat>(
            "ParagraphFormat",
            |s| s.paragraph_format.as_ref(),
            |s| s.paragraph_format.as_mut(),
            Style::paragraph_format_mut,
        )
        .build()
});

impl Style {
    /// Create a style with no base.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::default(),
            name: name.into(),
            base_style: NString::default(),
            style_type: NEnum::default(),
            font: None,
            paragraph_format: None,
        }
    }

    /// Create a style inheriting from `base_style`.
    pub fn with_base(name: impl Into<String>, base_style: impl Into<String>) -> Self {
        let mut style = Style::new(name);
        style.base_style.set(base_style);
        style
    }

    /// The style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character formatting overrides, if set.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The character formatting overrides, created on first access.
    pub fn font_mut(&mut self) -> &mut Font {
        vivify(&mut self.font, "Font")
    }

    /// The paragraph formatting overrides, if set.
    pub fn paragraph_format(&self) -> Option<&ParagraphFormat> {
        self.paragraph_format.as_ref()
    }

    /// The paragraph formatting overrides, created on first access.
    pub fn paragraph_format_mut(&mut self) -> &mut ParagraphFormat {
        vivify(&mut self.paragraph_format, "ParagraphFormat")
    }
}

impl DocumentObject for Style {
    fn meta(&self) -> &'static Meta {
        &STYLE_META
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn clone_object(&self) -> Box<dyn DocumentObject> {
        Box::new(self.clone())
    }
}

static STYLES_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Styles")
        .object_ref::<Styles, Style>(NORMAL_STYLE_NAME, |s| s.find(NORMAL_STYLE_NAME))
        .build()
});

/// The style sheet of a document.
///
/// Always contains the built-in `Normal` root style. Lookup is ASCII
/// case-insensitive, matching field-name lookup everywhere else.
#[derive(Debug, Clone, Serialize)]
pub struct Styles {
    #[serde(skip)]
    base: ObjectBase,
    items: Vec<Style>,
}

impl Default for Styles {
    fn default() -> Self {
        let mut styles = Styles {
            base: ObjectBase::default(),
            items: Vec::new(),
        };
        styles.add(Style::new(NORMAL_STYLE_NAME));
        styles
    }
}

impl Styles {
    /// Create a style sheet holding only the built-in `Normal` style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of styles, the built-in one included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sheet is empty. Never true in practice.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Styles in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.items.iter()
    }

    /// Look up a style by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Style> {
        self.items
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Look up a style by case-insensitive name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Style> {
        self.items
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// The built-in `Normal` style.
    pub fn normal(&self) -> Option<&Style> {
        self.find(NORMAL_STYLE_NAME)
    }

    /// Define a style inheriting from `base_style`, replacing any existing
    /// definition of the same name.
    pub fn add_style(
        &mut self,
        name: impl Into<String>,
        base_style: impl Into<String>,
    ) -> &mut Style {
        self.add(Style::with_base(name, base_style))
    }

    /// Add a style, replacing any existing definition of the same name.
    pub fn add(&mut self, mut style: Style) -> &mut Style {
        if let Some(index) = self
            .items
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(&style.name))
        {
            style.set_parent(Some(ParentLink::Index(index)));
            self.items[index] = style;
            &mut self.items[index]
        } else {
            let index = self.items.len();
            style.set_parent(Some(ParentLink::Index(index)));
            self.items.push(style);
            &mut self.items[index]
        }
    }
}

impl DocumentObject for Styles {
    fn meta(&self) -> &'static Meta {
        &STYLES_META
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn clone_object(&self) -> Box<dyn DocumentObject> {
        Box::new(self.clone())
    }

    fn is_collection(&self) -> bool {
        true
    }

    fn child_count(&self) -> usize {
        self.items.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn DocumentObject> {
        self.items.get(index).map(|s| s as &dyn DocumentObject)
    }

    fn child_at_mut(&mut self, index: usize) -> Option<&mut dyn DocumentObject> {
        self.items.get_mut(index).map(|s| s as &mut dyn DocumentObject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{AccessMode, Resolved};
    use crate::values::NullableValue;

    #[test]
    fn test_normal_is_built_in() {
        let styles = Styles::new();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles.normal().unwrap().name(), "Normal");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut styles = Styles::new();
        styles.add_style("Heading1", "Normal");
        assert!(styles.find("heading1").is_some());
        assert!(styles.find("HEADING1").is_some());
        assert!(styles.find("Heading2").is_none());
    }

    #[test]
    fn test_add_replaces_same_name() {
        let mut styles = Styles::new();
        styles.add_style("Code", "Normal").font_mut().name.set("mono");
        styles.add_style("code", "Normal");

        assert_eq!(styles.len(), 2);
        // The replacement carries no font override.
        assert!(styles.find("Code").unwrap().font().is_none());
    }

    #[test]
    fn test_normal_descriptor_is_ref_only() {
        let styles = Styles::new();
        let descriptor = styles.meta().descriptors().find("Normal").unwrap();
        assert!(descriptor.is_ref_only());

        let resolved = styles
            .meta()
            .get_value(&styles, "Normal", AccessMode::ReadOnly)
            .unwrap();
        match resolved {
            Resolved::Object(obj) => {
                let style = obj.as_any().downcast_ref::<Style>().unwrap();
                assert_eq!(style.name(), "Normal");
            }
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_name_is_not_cleared_by_bulk_sweep() {
        let mut styles = Styles::new();
        styles.add_style("Quote", "Normal");
        let style = styles.find_mut("Quote").unwrap();

        style.meta().set_null_all(style).unwrap();
        assert_eq!(style.name(), "Quote");
        assert!(style.base_style.is_null());
    }
}
