//! Diff-aware DDL output through the public API.

use docmodel::{
    ddl, Chart, ChartType, Color, DdlWriter, Document, Error, Orientation, ParagraphFormat,
    SerializeDdl, SymbolName, Unit,
};

fn render<T: SerializeDdl>(obj: &T, reference: Option<&T>) -> String {
    let mut w = DdlWriter::new();
    obj.serialize(&mut w, reference).unwrap();
    w.into_string()
}

#[test]
fn test_full_document() {
    let mut doc = Document::new();
    doc.info_mut().title.set("Annual Report");
    doc.styles
        .add_style("Heading1", "Normal")
        .font_mut()
        .bold
        .set(true);

    let section = doc.add_section();
    section.page_setup_mut().orientation.set(Orientation::Landscape);

    let title = section.add_paragraph();
    title.style.set("Heading1");
    title.add_text("Annual Report");

    let body = section.add_paragraph();
    body.add_text("All amounts in ");
    body.add_character(SymbolName::Euro);
    body.add_text(".");

    let ddl = ddl::to_ddl(&doc).unwrap();

    assert!(ddl.contains("Title = \"Annual Report\""));
    assert!(ddl.contains("Style \"Heading1\" : \"Normal\""));
    assert!(ddl.contains("Bold = true"));
    assert!(ddl.contains("Orientation = Landscape"));
    assert!(ddl.contains("Style = \"Heading1\""));
    assert!(ddl.contains("\\symbol(Euro)"));
    // A paragraph with no explicit style carries no attribute block.
    assert!(ddl.contains("\\paragraph\n"));
}

#[test]
fn test_inherited_attributes_are_not_repeated() {
    let mut doc = Document::new();
    doc.styles
        .add_style("Heading1", "Normal")
        .font_mut()
        .bold
        .set(true);
    // Heading2 inherits bold from Heading1 and sets it redundantly.
    let h2 = doc.styles.add_style("Heading2", "Heading1");
    h2.font_mut().bold.set(true);
    h2.font_mut().size.set(Unit::from_point(14.0));

    let ddl = ddl::to_ddl(&doc).unwrap();

    // The redundant Bold on Heading2 is folded away; only Heading1
    // declares it.
    assert_eq!(ddl.matches("Bold = true").count(), 1);
    assert_eq!(ddl.matches("Size = 14").count(), 1);

    // Base-first ordering.
    let h1_at = ddl.find("Style \"Heading1\"").unwrap();
    let h2_at = ddl.find("Style \"Heading2\"").unwrap();
    assert!(h1_at < h2_at);
}

#[test]
fn test_divergent_override_is_emitted() {
    let mut doc = Document::new();
    doc.styles
        .add_style("Base", "Normal")
        .font_mut()
        .bold
        .set(true);
    doc.styles
        .add_style("Derived", "Base")
        .font_mut()
        .bold
        .set(false);

    let ddl = ddl::to_ddl(&doc).unwrap();
    assert!(ddl.contains("Bold = true"));
    assert!(ddl.contains("Bold = false"));
}

#[test]
fn test_serializing_against_identical_reference_emits_nothing() {
    let mut format = ParagraphFormat::new();
    format.space_before.set(Unit::from_point(6.0));
    format.font_mut().name.set("Georgia");
    format.font_mut().color = Color::from_rgb(0x20, 0x20, 0x20);
    format.borders_mut().top_mut().visible.set(true);

    let twin = format.clone();
    assert_eq!(render(&format, Some(&twin)), "");
}

#[test]
fn test_cleared_composites_emit_markers() {
    let mut format = ParagraphFormat::new();
    format.shading_mut().clear();
    format.tab_stops_mut().clear_all();

    let out = render(&format, None);
    assert!(out.contains("Shading = null"));
    assert!(out.contains("TabStops = null"));
}

#[test]
fn test_tab_stops_after_clearing() {
    use docmodel::{TabAlignment, TabStop};

    let mut format = ParagraphFormat::new();
    let stops = format.tab_stops_mut();
    stops.clear_all();
    let stop = stops.add_tab_stop(TabStop::new(Unit::from_centimeter(8.0)));
    stop.alignment.set(TabAlignment::Right);

    let out = render(&format, None);
    let marker_at = out.find("TabStops = null").unwrap();
    let block_at = out.find("TabStops\n").unwrap();
    assert!(marker_at < block_at);
    assert!(out.contains("Position = 8cm"));
    assert!(out.contains("Alignment = Right"));
}

#[test]
fn test_chart_and_table_blocks() {
    let mut doc = Document::new();
    let section = doc.add_section();

    let table = section.add_table();
    table.add_column(Unit::from_centimeter(3.0));
    table.add_column(Unit::from_centimeter(5.0));
    let row = table.add_row();
    row.cells
        .get_mut(0)
        .unwrap()
        .add_paragraph()
        .add_text("cell one");

    let mut chart = Chart::new(ChartType::Pie2D);
    chart.width.set(Unit::from_centimeter(10.0));
    chart.legend_mut();
    section.add_chart(chart);

    let ddl = ddl::to_ddl(&doc).unwrap();
    assert!(ddl.contains("\\table"));
    assert!(ddl.contains("Width = 3cm"));
    assert!(ddl.contains("\\row"));
    assert!(ddl.contains("\"cell one\""));
    assert!(ddl.contains("\\chart(Pie2D)"));
    assert!(ddl.contains("Width = 10cm"));
    // The legend was added without formatting; its mere presence still
    // serializes.
    assert!(ddl.contains("\\legend"));
}

#[test]
fn test_style_cycle_fails_serialization() {
    let mut doc = Document::new();
    doc.styles.add_style("A", "B");
    doc.styles.add_style("B", "A");

    let err = ddl::to_ddl(&doc).unwrap_err();
    assert!(matches!(err, Error::CircularBaseStyle { .. }));
}

#[test]
fn test_json_export() {
    let mut doc = Document::new();
    doc.info_mut().title.set("x");
    doc.add_section().add_paragraph().add_text("hello");

    let json = ddl::to_json(&doc).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["info"]["title"], "x");
    assert_eq!(
        parsed["sections"][0]["elements"][0]["paragraph"]["elements"][0]["text"]["content"],
        "hello"
    );
}

#[test]
fn test_header_is_serialized_even_when_empty() {
    let mut doc = Document::new();
    doc.add_section().header_mut();

    let ddl = ddl::to_ddl(&doc).unwrap();
    assert!(ddl.contains("\\header"));
}
