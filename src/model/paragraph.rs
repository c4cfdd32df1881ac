//! Paragraphs and their inline content.

use crate::meta::Meta;
use crate::model::collections::ObjectCollection;
use crate::model::enums::SymbolName;
use crate::model::format::ParagraphFormat;
use crate::model::object::{dom_object, vivify, DocumentObject, ObjectBase};
use crate::values::{DomEnum, NInt, NString, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A run of literal text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Text {
    #[serde(skip)]
    base: ObjectBase,
    pub content: String,
}

static TEXT_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Text")
        .plain::<Text>(
            "Content",
            |t| Value::String(t.content.clone()),
            |t, v| match v {
                Value::String(s) => {
                    t.content = s;
                    Ok(())
                }
                other => Err(other.incompatible_with("String")),
            },
            |t| t.content.clear(),
        )
        .build()
});

impl Text {
    /// Create a text run.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::default(),
            content: content.into(),
        }
    }
}

dom_object!(Text, meta = TEXT_META);

/// A special character, repeated `count` times.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    #[serde(skip)]
    base: ObjectBase,
    pub symbol: SymbolName,
    pub count: NInt,
}

static CHARACTER_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Character")
        .plain::<Character>(
            "Symbol",
            |c| Value::Int(c.symbol.raw()),
            |c, v| match v {
                Value::Int(raw) => {
                    c.symbol = SymbolName::from_raw(raw).ok_or_else(|| {
                        crate::error::Error::InvalidEnumValue {
                            enum_name: SymbolName::NAME,
                            value: raw.to_string(),
                        }
                    })?;
                    Ok(())
                }
                Value::String(name) => {
                    c.symbol = SymbolName::from_name(&name).ok_or({
                        crate::error::Error::InvalidEnumValue {
                            enum_name: SymbolName::NAME,
                            value: name,
                        }
                    })?;
                    Ok(())
                }
                other => Err(other.incompatible_with(SymbolName::NAME)),
            },
            |c| c.symbol = SymbolName::default(),
        )
        .scalar::<Character, NInt>("Count", |c| &c.count, |c| &mut c.count)
        .build()
});

impl Character {
    /// Create a single occurrence of `symbol`.
    pub fn new(symbol: SymbolName) -> Self {
        Self {
            base: ObjectBase::default(),
            symbol,
            // Repeat count starts at one, not null.
            count: NInt::new(1),
        }
    }

    /// Create `count` occurrences of `symbol`.
    pub fn with_count(symbol: SymbolName, count: i32) -> Self {
        Self {
            base: ObjectBase::default(),
            symbol,
            count: NInt::new(count),
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Character::new(SymbolName::default())
    }
}

dom_object!(Character, meta = CHARACTER_META);

/// Inline content of a paragraph.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphElement {
    Text(Text),
    Character(Character),
}

impl ParagraphElement {
    fn inner(&self) -> &dyn DocumentObject {
        match self {
            ParagraphElement::Text(t) => t,
            ParagraphElement::Character(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DocumentObject {
        match self {
            ParagraphElement::Text(t) => t,
            ParagraphElement::Character(c) => c,
        }
    }
}

// Delegation keeps descriptor downcasts working: the wrapper is a storage
// detail, `as_any` exposes the wrapped concrete type.
impl DocumentObject for ParagraphElement {
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

/// A paragraph: an optional style reference, optional direct formatting,
/// and ordered inline content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Paragraph {
    #[serde(skip)]
    base: ObjectBase,
    pub style: NString,
    format: Option<ParagraphFormat>,
    pub elements: ObjectCollection<ParagraphElement>,
}

static PARAGRAPH_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Paragraph")
        .scalar::<Paragraph, NString>("Style", |p| &p.style, |p| &mut p.style)
        .object::<Paragraph, ParagraphFormat>(
            "Format",
            |p| p.format.as_ref(),
            |p| p.format.as_mut(),
            Paragraph::format_mut,
        )
        .collection::<Paragraph, ObjectCollection<ParagraphElement>>(
            "Elements",
            "ParagraphElement",
            |p| &p.elements,
            |p| &mut p.elements,
        )
        .build()
});

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// The direct formatting, if set.
    pub fn format(&self) -> Option<&ParagraphFormat> {
        self.format.as_ref()
    }

    /// The direct formatting, created on first access.
    pub fn format_mut(&mut self) -> &mut ParagraphFormat {
        vivify(&mut self.format, "Format")
    }

    /// Append a text run.
    pub fn add_text(&mut self, content: impl Into<String>) -> &mut Text {
        match self.elements.push(ParagraphElement::Text(Text::new(content))) {
            ParagraphElement::Text(t) => t,
            _ => unreachable!(),
        }
    }

    /// Append a single special character.
    pub fn add_character(&mut self, symbol: SymbolName) -> &mut Character {
        match self
            .elements
            .push(ParagraphElement::Character(Character::new(symbol)))
        {
            ParagraphElement::Character(c) => c,
            _ => unreachable!(),
        }
    }
}

dom_object!(Paragraph, meta = PARAGRAPH_META);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::object::ParentLink;
    use crate::values::NullableValue;

    #[test]
    fn test_character_count_seeded_to_one() {
        let c = Character::new(SymbolName::Bullet);
        assert!(!c.count.is_null());
        assert_eq!(c.count.get(), 1);
    }

    #[test]
    fn test_inline_content_keeps_order() {
        let mut p = Paragraph::new();
        p.add_text("see ");
        p.add_character(SymbolName::Euro);
        p.add_text(" prices");

        assert_eq!(p.elements.len(), 3);
        assert!(matches!(
            p.elements.get(1),
            Some(ParagraphElement::Character(_))
        ));
        for (i, el) in p.elements.iter().enumerate() {
            assert_eq!(el.parent_link(), Some(ParentLink::Index(i)));
        }
    }

    #[test]
    fn test_element_wrapper_exposes_concrete_type() {
        let mut p = Paragraph::new();
        p.add_text("hello");

        let el = p.elements.get(0).unwrap() as &dyn DocumentObject;
        let text = el.as_any().downcast_ref::<Text>().unwrap();
        assert_eq!(text.content, "hello");
    }

    #[test]
    fn test_symbol_through_meta_accepts_code_point() {
        let mut c = Character::new(SymbolName::Blank);
        c.meta()
            .set_value(&mut c, "Symbol", Value::Int(0x2605))
            .unwrap();
        assert_eq!(c.symbol, SymbolName::Chr(0x2605));

        let err = c
            .meta()
            .set_value(&mut c, "Symbol", Value::Int(-7))
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::InvalidEnumValue { .. }));
    }
}
