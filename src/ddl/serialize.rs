//! Diff-aware DDL serialization of the document tree.
//!
//! Every implementation follows the same emission rule: an attribute is
//! written iff it is set on the object itself and either there is no
//! reference object, the reference leaves the attribute unset, or the two
//! values differ. Serializing an object against an identical reference
//! therefore emits nothing.

use crate::ddl::writer::DdlWriter;
use crate::error::{Error, Result};
use crate::model::{
    Border, Borders, Cell, Chart, Column, Document, DocumentInfo, Element, Font, HeaderFooter,
    PageSetup, Paragraph, ParagraphElement, ParagraphFormat, Row, Section, Shading, Style, Styles,
    Table, TabStop, TabStops,
};
use crate::values::{quote, DomEnum, NullableValue};
use std::collections::HashMap;

/// Diff-aware DDL emission.
pub trait SerializeDdl {
    /// Emit this object, writing only what differs from `reference`.
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()>;

    /// Whether inherited state was explicitly cleared, requiring a
    /// clearing marker even when nothing else is emitted.
    fn cleared(&self) -> bool {
        false
    }
}

/// The attribute emission rule.
fn attr<N>(w: &mut DdlWriter, name: &str, field: &N, reference: Option<&N>)
where
    N: NullableValue + PartialEq,
{
    if field.is_null() {
        return;
    }
    if let Some(r) = reference {
        if !r.is_null() && r == field {
            return;
        }
    }
    w.write_attribute(name, &field.ddl_text());
}

/// Render a nested composite into a scratch writer and emit a named
/// attribute block only when something came out of it. A cleared
/// composite gets its clearing marker regardless.
fn nested<T: SerializeDdl>(
    w: &mut DdlWriter,
    name: &str,
    field: Option<&T>,
    reference: Option<&T>,
) -> Result<()> {
    let Some(obj) = field else {
        return Ok(());
    };
    if obj.cleared() {
        w.write_clear_marker(name);
    }
    let mut scratch = DdlWriter::with_indent(w.indent() + 1);
    obj.serialize(&mut scratch, reference)?;
    if scratch.is_empty() {
        return Ok(());
    }
    w.write_line(name);
    w.begin_attributes();
    w.append(scratch);
    w.end_attributes();
    Ok(())
}

impl SerializeDdl for Font {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Name", &self.name, reference.map(|r| &r.name));
        attr(w, "Size", &self.size, reference.map(|r| &r.size));
        attr(w, "Bold", &self.bold, reference.map(|r| &r.bold));
        attr(w, "Italic", &self.italic, reference.map(|r| &r.italic));
        attr(w, "Underline", &self.underline, reference.map(|r| &r.underline));
        attr(
            w,
            "Superscript",
            &self.superscript,
            reference.map(|r| &r.superscript),
        );
        attr(w, "Subscript", &self.subscript, reference.map(|r| &r.subscript));
        attr(w, "Color", &self.color, reference.map(|r| &r.color));
        Ok(())
    }
}

impl SerializeDdl for Border {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Visible", &self.visible, reference.map(|r| &r.visible));
        attr(w, "Style", &self.style, reference.map(|r| &r.style));
        attr(w, "Width", &self.width, reference.map(|r| &r.width));
        attr(w, "Color", &self.color, reference.map(|r| &r.color));
        Ok(())
    }

    fn cleared(&self) -> bool {
        self.is_cleared()
    }
}

impl SerializeDdl for Borders {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Visible", &self.visible, reference.map(|r| &r.visible));
        attr(w, "Style", &self.style, reference.map(|r| &r.style));
        attr(w, "Width", &self.width, reference.map(|r| &r.width));
        attr(w, "Color", &self.color, reference.map(|r| &r.color));
        nested(w, "Top", self.top(), reference.and_then(|r| r.top()))?;
        nested(w, "Left", self.left(), reference.and_then(|r| r.left()))?;
        nested(w, "Bottom", self.bottom(), reference.and_then(|r| r.bottom()))?;
        nested(w, "Right", self.right(), reference.and_then(|r| r.right()))?;
        Ok(())
    }

    fn cleared(&self) -> bool {
        self.is_cleared()
    }
}

impl SerializeDdl for Shading {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Visible", &self.visible, reference.map(|r| &r.visible));
        attr(w, "Color", &self.color, reference.map(|r| &r.color));
        Ok(())
    }

    fn cleared(&self) -> bool {
        self.is_cleared()
    }
}

impl SerializeDdl for TabStop {
    // Collection children are never diffed; the reference is ignored.
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("TabStop");
        w.begin_attributes();
        w.write_attribute("Position", &self.position.to_string());
        attr(w, "Alignment", &self.alignment, None);
        attr(w, "Leader", &self.leader, None);
        w.end_attributes();
        Ok(())
    }
}

impl SerializeDdl for TabStops {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        for stop in self.iter() {
            stop.serialize(w, None)?;
        }
        Ok(())
    }

    fn cleared(&self) -> bool {
        self.is_cleared()
    }
}

impl SerializeDdl for ParagraphFormat {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Alignment", &self.alignment, reference.map(|r| &r.alignment));
        attr(w, "LeftIndent", &self.left_indent, reference.map(|r| &r.left_indent));
        attr(
            w,
            "RightIndent",
            &self.right_indent,
            reference.map(|r| &r.right_indent),
        );
        attr(
            w,
            "FirstLineIndent",
            &self.first_line_indent,
            reference.map(|r| &r.first_line_indent),
        );
        attr(w, "SpaceBefore", &self.space_before, reference.map(|r| &r.space_before));
        attr(w, "SpaceAfter", &self.space_after, reference.map(|r| &r.space_after));
        attr(
            w,
            "KeepTogether",
            &self.keep_together,
            reference.map(|r| &r.keep_together),
        );
        attr(
            w,
            "KeepWithNext",
            &self.keep_with_next,
            reference.map(|r| &r.keep_with_next),
        );
        attr(
            w,
            "PageBreakBefore",
            &self.page_break_before,
            reference.map(|r| &r.page_break_before),
        );
        attr(
            w,
            "OutlineLevel",
            &self.outline_level,
            reference.map(|r| &r.outline_level),
        );
        nested(w, "Font", self.font(), reference.and_then(|r| r.font()))?;
        nested(w, "Borders", self.borders(), reference.and_then(|r| r.borders()))?;
        nested(w, "Shading", self.shading(), reference.and_then(|r| r.shading()))?;
        nested(
            w,
            "TabStops",
            self.tab_stops(),
            reference.and_then(|r| r.tab_stops()),
        )?;
        Ok(())
    }
}

impl SerializeDdl for PageSetup {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Orientation", &self.orientation, reference.map(|r| &r.orientation));
        attr(w, "PageWidth", &self.page_width, reference.map(|r| &r.page_width));
        attr(w, "PageHeight", &self.page_height, reference.map(|r| &r.page_height));
        attr(w, "LeftMargin", &self.left_margin, reference.map(|r| &r.left_margin));
        attr(w, "RightMargin", &self.right_margin, reference.map(|r| &r.right_margin));
        attr(w, "TopMargin", &self.top_margin, reference.map(|r| &r.top_margin));
        attr(
            w,
            "BottomMargin",
            &self.bottom_margin,
            reference.map(|r| &r.bottom_margin),
        );
        Ok(())
    }
}

impl SerializeDdl for DocumentInfo {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        attr(w, "Title", &self.title, reference.map(|r| &r.title));
        attr(w, "Author", &self.author, reference.map(|r| &r.author));
        attr(w, "Subject", &self.subject, reference.map(|r| &r.subject));
        attr(w, "Keywords", &self.keywords, reference.map(|r| &r.keywords));
        attr(w, "Comment", &self.comment, reference.map(|r| &r.comment));
        Ok(())
    }
}

impl SerializeDdl for Paragraph {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        w.write_line("\\paragraph");

        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        attr(&mut attrs, "Style", &self.style, reference.map(|r| &r.style));
        nested(
            &mut attrs,
            "Format",
            self.format(),
            reference.and_then(|r| r.format()),
        )?;
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }

        w.begin_content();
        for element in self.elements.iter() {
            match element {
                ParagraphElement::Text(text) => w.write_line(&quote(&text.content)),
                ParagraphElement::Character(c) => {
                    // The repeat count is implicit when unset or one.
                    if c.count.is_null() || c.count.get() == 1 {
                        w.write_line(&format!("\\symbol({})", c.symbol.ddl_text()));
                    } else {
                        w.write_line(&format!(
                            "\\symbol({}, {})",
                            c.symbol.ddl_text(),
                            c.count.get()
                        ));
                    }
                }
            }
        }
        w.end_content();
        Ok(())
    }
}

fn header_footer(w: &mut DdlWriter, keyword: &str, hf: &HeaderFooter) -> Result<()> {
    w.write_line(keyword);

    let mut attrs = DdlWriter::with_indent(w.indent() + 1);
    nested(&mut attrs, "Format", hf.format(), None)?;
    if !attrs.is_empty() {
        w.begin_attributes();
        w.append(attrs);
        w.end_attributes();
    }

    w.begin_content();
    for element in hf.elements.iter() {
        element.serialize(w, None)?;
    }
    w.end_content();
    Ok(())
}

impl SerializeDdl for Element {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        match self {
            Element::Paragraph(p) => p.serialize(w, None),
            Element::Table(t) => t.serialize(w, None),
            Element::Chart(c) => c.serialize(w, None),
        }
    }
}

impl SerializeDdl for Section {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("\\section");

        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        nested(&mut attrs, "PageSetup", self.page_setup(), None)?;
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }

        w.begin_content();
        if let Some(header) = self.header() {
            header_footer(w, "\\header", header)?;
        }
        if let Some(footer) = self.footer() {
            header_footer(w, "\\footer", footer)?;
        }
        for element in self.elements.iter() {
            element.serialize(w, None)?;
        }
        w.end_content();
        Ok(())
    }
}

impl SerializeDdl for Column {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("\\column");
        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        attr(&mut attrs, "Width", &self.width, None);
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }
        Ok(())
    }
}

impl SerializeDdl for Cell {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("\\cell");
        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        nested(&mut attrs, "Shading", self.shading(), None)?;
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }
        w.begin_content();
        for element in self.elements.iter() {
            element.serialize(w, None)?;
        }
        w.end_content();
        Ok(())
    }
}

impl SerializeDdl for Row {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("\\row");
        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        attr(&mut attrs, "Height", &self.height, None);
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }
        w.begin_content();
        for cell in self.cells.iter() {
            cell.serialize(w, None)?;
        }
        w.end_content();
        Ok(())
    }
}

impl SerializeDdl for Table {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line("\\table");

        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        nested(&mut attrs, "Borders", self.borders(), None)?;
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }

        w.begin_content();
        w.write_line("\\columns");
        w.begin_content();
        for column in self.columns.iter() {
            column.serialize(w, None)?;
        }
        w.end_content();
        w.write_line("\\rows");
        w.begin_content();
        for row in self.rows.iter() {
            row.serialize(w, None)?;
        }
        w.end_content();
        w.end_content();
        Ok(())
    }
}

impl SerializeDdl for Chart {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        w.write_line(&format!("\\chart({})", self.chart_type.ddl_text()));

        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        attr(&mut attrs, "Width", &self.width, None);
        attr(&mut attrs, "Height", &self.height, None);
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }

        if let Some(legend) = self.legend() {
            w.begin_content();
            w.write_line("\\legend");
            let mut legend_attrs = DdlWriter::with_indent(w.indent() + 1);
            nested(&mut legend_attrs, "Format", legend.format(), None)?;
            if !legend_attrs.is_empty() {
                w.begin_attributes();
                w.append(legend_attrs);
                w.end_attributes();
            }
            w.end_content();
        }
        Ok(())
    }
}

fn style_block(w: &mut DdlWriter, style: &Style, reference: Option<&Style>) -> Result<()> {
    let declaration = if style.base_style.is_null() {
        format!("Style {}", quote(style.name()))
    } else {
        format!(
            "Style {} : {}",
            quote(style.name()),
            quote(style.base_style.get())
        )
    };
    w.write_line(&declaration);

    let mut attrs = DdlWriter::with_indent(w.indent() + 1);
    attr(&mut attrs, "Type", &style.style_type, reference.map(|r| &r.style_type));
    nested(&mut attrs, "Font", style.font(), reference.and_then(|r| r.font()))?;
    nested(
        &mut attrs,
        "ParagraphFormat",
        style.paragraph_format(),
        reference.and_then(|r| r.paragraph_format()),
    )?;
    if !attrs.is_empty() {
        w.begin_attributes();
        w.append(attrs);
        w.end_attributes();
    }
    Ok(())
}

const UNVISITED: u8 = 0;
const IN_PROGRESS: u8 = 1;
const DONE: u8 = 2;

fn visit_style<'a>(
    styles: &'a Styles,
    style: &'a Style,
    state: &mut HashMap<String, u8>,
    order: &mut Vec<&'a Style>,
) -> Result<()> {
    let key = style.name().to_ascii_lowercase();
    match state.get(&key).copied().unwrap_or(UNVISITED) {
        DONE => return Ok(()),
        IN_PROGRESS => {
            return Err(Error::CircularBaseStyle {
                style: style.name().to_string(),
            })
        }
        _ => {}
    }
    state.insert(key.clone(), IN_PROGRESS);
    if !style.base_style.is_null() {
        let base_name = style.base_style.get();
        let base = styles.find(base_name).ok_or_else(|| Error::UnknownBaseStyle {
            style: style.name().to_string(),
            base: base_name.to_string(),
        })?;
        visit_style(styles, base, state, order)?;
    }
    state.insert(key, DONE);
    order.push(style);
    Ok(())
}

/// Styles in base-first order, so every style appears after the style it
/// inherits from.
pub(crate) fn style_order(styles: &Styles) -> Result<Vec<&Style>> {
    let mut state = HashMap::new();
    let mut order = Vec::with_capacity(styles.len());
    for style in styles.iter() {
        visit_style(styles, style, &mut state, &mut order)?;
    }
    Ok(order)
}

impl SerializeDdl for Styles {
    fn serialize(&self, w: &mut DdlWriter, _reference: Option<&Self>) -> Result<()> {
        let order = style_order(self)?;
        log::debug!("serializing {} styles base-first", order.len());
        w.write_line("\\styles");
        w.begin_content();
        for style in order {
            let reference = if style.base_style.is_null() {
                None
            } else {
                self.find(style.base_style.get())
            };
            style_block(w, style, reference)?;
        }
        w.end_content();
        Ok(())
    }
}

impl SerializeDdl for Document {
    fn serialize(&self, w: &mut DdlWriter, reference: Option<&Self>) -> Result<()> {
        w.write_line("\\document");

        let mut attrs = DdlWriter::with_indent(w.indent() + 1);
        attr(&mut attrs, "Comment", &self.comment, reference.map(|r| &r.comment));
        nested(&mut attrs, "Info", self.info(), reference.and_then(|r| r.info()))?;
        if !attrs.is_empty() {
            w.begin_attributes();
            w.append(attrs);
            w.end_attributes();
        }

        w.begin_content();
        self.styles.serialize(w, None)?;
        for section in self.sections.iter() {
            section.serialize(w, None)?;
        }
        w.end_content();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Unit;

    fn render<T: SerializeDdl>(obj: &T, reference: Option<&T>) -> String {
        let mut w = DdlWriter::new();
        obj.serialize(&mut w, reference).unwrap();
        w.into_string()
    }

    #[test]
    fn test_self_diff_emits_nothing() {
        let mut format = ParagraphFormat::new();
        format.alignment.set(crate::model::ParagraphAlignment::Center);
        format.font_mut().bold.set(true);
        format.font_mut().size.set(Unit::from_point(11.0));

        let twin = format.clone();
        assert_eq!(render(&format, Some(&twin)), "");
    }

    #[test]
    fn test_diff_emits_only_changed_attributes() {
        let mut reference = Font::default();
        reference.bold.set(true);
        reference.size.set(Unit::from_point(10.0));

        let mut font = reference.clone();
        font.size.set(Unit::from_point(12.0));
        font.italic.set(true);

        let out = render(&font, Some(&reference));
        assert_eq!(out, "Size = 12\nItalic = true\n");
    }

    #[test]
    fn test_attribute_set_only_on_reference_is_not_emitted() {
        let mut reference = Font::default();
        reference.bold.set(true);

        let font = Font::default();
        assert_eq!(render(&font, Some(&reference)), "");
    }

    #[test]
    fn test_cleared_border_emits_marker() {
        let mut format = ParagraphFormat::new();
        format.borders_mut().clear();

        let out = render(&format, None);
        assert_eq!(out, "Borders = null\n");
    }

    #[test]
    fn test_cleared_border_with_attributes_emits_both() {
        let mut format = ParagraphFormat::new();
        let borders = format.borders_mut();
        borders.clear();
        borders.visible.set(true);

        let out = render(&format, None);
        assert_eq!(out, "Borders = null\nBorders\n[\n  Visible = true\n]\n");
    }

    #[test]
    fn test_style_cycle_is_detected() {
        let mut styles = Styles::new();
        styles.add_style("A", "B");
        styles.add_style("B", "A");

        let err = style_order(&styles).unwrap_err();
        assert!(matches!(err, Error::CircularBaseStyle { .. }));
    }

    #[test]
    fn test_unknown_base_style_is_detected() {
        let mut styles = Styles::new();
        styles.add_style("A", "Missing");

        let err = style_order(&styles).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownBaseStyle { base, .. } if base == "Missing"
        ));
    }

    #[test]
    fn test_styles_order_is_base_first() {
        let mut styles = Styles::new();
        // Registered child-first on purpose.
        styles.add_style("Heading2", "Heading1");
        styles.add_style("Heading1", "Normal");

        let order: Vec<&str> = style_order(&styles).unwrap().iter().map(|s| s.name()).collect();
        assert_eq!(order, ["Normal", "Heading1", "Heading2"]);
    }

    #[test]
    fn test_character_count_emitted_only_when_not_one() {
        let mut p = Paragraph::new();
        p.add_character(crate::model::SymbolName::Euro);
        let out = render(&p, None);
        assert!(out.contains("\\symbol(Euro)\n"));

        let mut q = Paragraph::new();
        q.add_character(crate::model::SymbolName::Euro).count.set(3);
        let out = render(&q, None);
        assert!(out.contains("\\symbol(Euro, 3)\n"));
    }

    #[test]
    fn test_nulled_character_count_uses_bare_form() {
        use crate::model::DocumentObject;
        use crate::values::Value;

        let mut p = Paragraph::new();
        let c = p.add_character(crate::model::SymbolName::Euro);
        c.count.set(3);
        c.meta().set_value(c, "Count", Value::Null).unwrap();

        let out = render(&p, None);
        assert!(out.contains("\\symbol(Euro)\n"));
        assert!(!out.contains("\\symbol(Euro,"));
    }
}
