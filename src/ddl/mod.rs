//! DDL output: the document description language rendition of a
//! document tree, plus a JSON export of the raw model.

mod serialize;
mod writer;

pub use serialize::SerializeDdl;
pub use writer::DdlWriter;

use crate::error::Result;
use crate::model::Document;

/// Render a document to DDL text.
pub fn to_ddl(document: &Document) -> Result<String> {
    let mut writer = DdlWriter::new();
    document.serialize(&mut writer, None)?;
    Ok(writer.into_string())
}

/// Export the raw document model as pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ddl_minimal_document() {
        let mut doc = Document::new();
        doc.add_section().add_paragraph().add_text("hello");

        let ddl = to_ddl(&doc).unwrap();
        assert!(ddl.starts_with("\\document\n"));
        assert!(ddl.contains("\\styles\n"));
        assert!(ddl.contains("\\section\n"));
        assert!(ddl.contains("\"hello\"\n"));
    }

    #[test]
    fn test_to_json_round_trips_values() {
        let mut doc = Document::new();
        doc.info_mut().title.set("report");

        let json = to_json(&doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["info"]["title"], "report");
        // Unset wrappers export as explicit nulls.
        assert!(parsed["info"]["author"].is_null());
    }
}
