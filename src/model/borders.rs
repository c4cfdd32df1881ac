//! Border and shading formatting.

use crate::meta::Meta;
use crate::model::enums::BorderStyle;
use crate::model::object::{vivify, DocumentObject, ObjectBase};
use crate::values::{Color, NBool, NEnum, NUnit};
use once_cell::sync::Lazy;
use serde::Serialize;

/// A single border edge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Border {
    #[serde(skip)]
    base: ObjectBase,
    pub visible: NBool,
    pub style: NEnum<BorderStyle>,
    pub width: NUnit,
    pub color: Color,
    cleared: bool,
}

static BORDER_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Border")
        .scalar::<Border, NBool>("Visible", |b| &b.visible, |b| &mut b.visible)
        .scalar::<Border, NEnum<BorderStyle>>("Style", |b| &b.style, |b| &mut b.style)
        .scalar::<Border, NUnit>("Width", |b| &b.width, |b| &mut b.width)
        .scalar::<Border, Color>("Color", |b| &b.color, |b| &mut b.color)
        .build()
});

impl Border {
    /// Create a border with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this border as explicitly cleared. A cleared border is
    /// serialized with a clearing marker even when all fields are null,
    /// overriding anything inherited from the reference.
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    /// Whether this border was explicitly cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl DocumentObject for Border {
    fn meta(&self) -> &'static Meta {
        &BORDER_META
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

    // A cleared border must survive the "semantically empty" pruning so
    // the clearing marker reaches the output.
    fn is_meaningful(&self) -> bool {
        self.cleared
    }
}

/// The four border edges of a paragraph or table, plus defaults shared by
/// all edges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Borders {
    #[serde(skip)]
    base: ObjectBase,
    pub visible: NBool,
    pub style: NEnum<BorderStyle>,
    pub width: NUnit,
    pub color: Color,
    top: Option<Border>,
    left: Option<Border>,
    bottom: Option<Border>,
    right: Option<Border>,
    cleared: bool,
}

static BORDERS_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Borders")
        .scalar::<Borders, NBool>("Visible", |b| &b.visible, |b| &mut b.visible)
        .scalar::<Borders, NEnum<BorderStyle>>("Style", |b| &b.style, |b| &mut b.style)
        .scalar::<Borders, NUnit>("Width", |b| &b.width, |b| &mut b.width)
        .scalar::<Borders, Color>("Color", |b| &b.color, |b| &mut b.color)
        .object::<Borders, Border>("Top", |b| b.top.as_ref(), |b| b.top.as_mut(), Borders::top_mut)
        .object::<Borders, Border>(
            "Left",
            |b| b.left.as_ref(),
            |b| b.left.as_mut(),
            Borders::left_mut,
        )
        .object::<Borders, Border>(
            "Bottom",
            |b| b.bottom.as_ref(),
            |b| b.bottom.as_mut(),
            Borders::bottom_mut,
        )
        .object::<Borders, Border>(
            "Right",
            |b| b.right.as_ref(),
            |b| b.right.as_mut(),
            Borders::right_mut,
        )
        .build()
});

impl Borders {
    /// Create a borders group with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The top edge, if set.
    pub fn top(&self) -> Option<&Border> {
        self.top.as_ref()
    }

    /// The top edge, created on first access.
    pub fn top_mut(&mut self) -> &mut Border {
        vivify(&mut self.top, "Top")
    }

    /// The left edge, if set.
    pub fn left(&self) -> Option<&Border> {
        self.left.as_ref()
    }

    /// The left edge, created on first access.
    pub fn left_mut(&mut self) -> &mut Border {
        vivify(&mut self.left, "Left")
    }

    /// The bottom edge, if set.
    pub fn bottom(&self) -> Option<&Border> {
        self.bottom.as_ref()
    }

    /// The bottom edge, created on first access.
    pub fn bottom_mut(&mut self) -> &mut Border {
        vivify(&mut self.bottom, "Bottom")
    }

    /// The right edge, if set.
    pub fn right(&self) -> Option<&Border> {
        self.right.as_ref()
    }

    /// The right edge, created on first access.
    pub fn right_mut(&mut self) -> &mut Border {
        vivify(&mut self.right, "Right")
    }

    /// Mark the whole group as explicitly cleared.
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    /// Whether the group was explicitly cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl DocumentObject for Borders {
    fn meta(&self) -> &'static Meta {
        &BORDERS_META
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

    fn is_meaningful(&self) -> bool {
        self.cleared
    }
}

/// Background shading.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Shading {
    #[serde(skip)]
    base: ObjectBase,
    pub visible: NBool,
    pub color: Color,
    cleared: bool,
}

static SHADING_META: Lazy<Meta> = Lazy::new(|| {
    Meta::builder("Shading")
        .scalar::<Shading, NBool>("Visible", |s| &s.visible, |s| &mut s.visible)
        .scalar::<Shading, Color>("Color", |s| &s.color, |s| &mut s.color)
        .build()
});

impl Shading {
    /// Create a shading with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark this shading as explicitly cleared.
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    /// Whether this shading was explicitly cleared.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl DocumentObject for Shading {
    fn meta(&self) -> &'static Meta {
        &SHADING_META
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

    fn is_meaningful(&self) -> bool {
        self.cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::object_is_null;
    use crate::model::object::ParentLink;
    use crate::values::NullableValue;

    #[test]
    fn test_vivified_edge_is_bound_to_its_slot() {
        let mut borders = Borders::new();
        assert!(borders.top().is_none());

        borders.top_mut().visible.set(true);
        assert_eq!(
            borders.top().unwrap().parent_link(),
            Some(ParentLink::Field("Top"))
        );
    }

    #[test]
    fn test_cleared_group_reports_non_null() {
        let mut borders = Borders::new();
        assert!(object_is_null(&borders).unwrap());

        borders.clear();
        assert!(!object_is_null(&borders).unwrap());
    }

    #[test]
    fn test_empty_edge_keeps_group_null() {
        let mut borders = Borders::new();
        // Vivifying an edge without setting anything is still empty.
        borders.top_mut();
        assert!(object_is_null(&borders).unwrap());

        borders.top_mut().width.set(crate::values::Unit::from_point(0.5));
        assert!(!object_is_null(&borders).unwrap());
    }

    #[test]
    fn test_shading_fields() {
        let mut shading = Shading::new();
        assert!(shading.visible.is_null());
        shading.color = Color::from_rgb(0xEE, 0xEE, 0xEE);
        assert!(!object_is_null(&shading).unwrap());
    }
}
