//! Dotted-path access through the public API.

use docmodel::{
    AccessMode, DescriptorKind, Document, DocumentObject, Error, NullableValue, Paragraph, Unit,
    Value,
};

#[test]
fn test_direct_and_path_access_are_equivalent() {
    let mut p = Paragraph::new();
    p.format_mut().font_mut().bold.set(true);
    p.format_mut().left_indent.set(Unit::from_centimeter(1.0));

    let meta = p.meta();
    assert_eq!(
        meta.get_value(&p, "Format.Font.Bold", AccessMode::ReadOnly)
            .unwrap()
            .into_value(),
        Some(Value::Bool(true))
    );
    assert_eq!(
        meta.get_value(&p, "Format.LeftIndent", AccessMode::ReadOnly)
            .unwrap()
            .into_value(),
        Some(Value::Unit(Unit::from_centimeter(1.0)))
    );

    meta.set_value(&mut p, "Format.Font.Bold", Value::Bool(false))
        .unwrap();
    assert!(!p.format().unwrap().font().unwrap().bold.get());
}

#[test]
fn test_write_descent_vivifies_reads_do_not() {
    let mut p = Paragraph::new();
    let meta = p.meta();

    // A deep read on a pristine paragraph resolves to null without
    // constructing anything.
    let resolved = meta
        .get_value(&p, "Format.Borders.Top.Width", AccessMode::GetNull)
        .unwrap();
    assert!(resolved.is_null());
    assert!(p.format().is_none());

    // The same path written creates the whole chain.
    meta.set_value(
        &mut p,
        "Format.Borders.Top.Width",
        Value::Unit(Unit::from_point(0.5)),
    )
    .unwrap();
    assert_eq!(
        p.format().unwrap().borders().unwrap().top().unwrap().width.get(),
        Unit::from_point(0.5)
    );
}

#[test]
fn test_path_lookup_ignores_ascii_case() {
    let mut p = Paragraph::new();
    p.meta()
        .set_value(&mut p, "FORMAT.font.Italic", Value::Bool(true))
        .unwrap();
    assert!(p.format().unwrap().font().unwrap().italic.get());
}

#[test]
fn test_error_taxonomy() {
    let mut p = Paragraph::new();
    let meta = p.meta();

    assert!(matches!(
        meta.get_value(&p, "Format.Nope", AccessMode::ReadOnly),
        Err(Error::InvalidFieldName { .. })
    ));
    assert!(matches!(
        meta.get_value(&p, "Style.Anything", AccessMode::ReadOnly),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        meta.get_value(&p, "Format..Font", AccessMode::ReadOnly),
        Err(Error::InvalidPathShape { .. })
    ));
    assert!(matches!(
        meta.set_value(&mut p, "Format.Alignment", Value::Int(77)),
        Err(Error::InvalidEnumValue { .. })
    ));
    assert!(matches!(
        meta.set_value(&mut p, "Format.Font.Bold", Value::from("yes")),
        Err(Error::IncompatibleValue { .. })
    ));

    // Failed writes leave the tree untouched where it matters: the enum
    // field is still unset.
    assert!(meta.is_null(&p, "Format.Alignment").unwrap());
}

#[test]
fn test_null_propagation_along_paths() {
    let mut doc = Document::new();
    let meta = doc.meta();

    assert!(meta.is_null(&doc, "Info.Title").unwrap());

    meta.set_value(&mut doc, "Info.Title", Value::from("draft"))
        .unwrap();
    assert!(!meta.is_null(&doc, "Info.Title").unwrap());

    meta.set_null(&mut doc, "Info.Title").unwrap();
    assert!(meta.is_null(&doc, "Info.Title").unwrap());
    // The info block itself survives, but reads as semantically empty.
    assert!(doc.info().is_some());
    assert!(meta.is_null(&doc, "Info").unwrap());
}

#[test]
fn test_value_null_clears_through_set_value() {
    let mut p = Paragraph::new();
    let meta = p.meta();
    meta.set_value(&mut p, "Format.Font.Size", Value::Unit(Unit::from_point(12.0)))
        .unwrap();
    meta.set_value(&mut p, "Format.Font.Size", Value::Null)
        .unwrap();
    assert!(p.format().unwrap().font().unwrap().size.is_null());
}

#[test]
fn test_descriptor_enumeration_for_generic_tooling() {
    let p = Paragraph::new();
    let descriptors = p.meta().descriptors();
    assert_eq!(descriptors.type_name(), "Paragraph");

    let kinds: Vec<(&str, DescriptorKind)> = descriptors
        .iter()
        .map(|d| (d.name(), d.kind()))
        .collect();
    assert_eq!(
        kinds,
        [
            ("Style", DescriptorKind::Scalar),
            ("Format", DescriptorKind::Object),
            ("Elements", DescriptorKind::Collection),
        ]
    );
    assert_eq!(
        descriptors.get("elements").unwrap().item_type(),
        Some("ParagraphElement")
    );
}

#[test]
fn test_scalar_read_modes_differ_only_when_unset() {
    let p = Paragraph::new();
    let meta = p.meta();

    assert!(meta
        .get_value(&p, "Style", AccessMode::GetNull)
        .unwrap()
        .is_null());
    assert_eq!(
        meta.get_value(&p, "Style", AccessMode::ReadOnly)
            .unwrap()
            .into_value(),
        Some(Value::String(String::new()))
    );

    let mut q = Paragraph::new();
    q.style.set("Quote");
    for mode in [AccessMode::GetNull, AccessMode::ReadOnly] {
        assert_eq!(
            q.meta().get_value(&q, "Style", mode).unwrap().into_value(),
            Some(Value::String("Quote".into()))
        );
    }
}
