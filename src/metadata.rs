use lopdf::{Dictionary, Document, Object};

/// Document information entries cleared before rendering.
pub const DESCRIPTIVE_FIELDS: [&[u8]; 6] = [
    b"Title",
    b"Author",
    b"Subject",
    b"Keywords",
    b"Producer",
    b"Creator",
];

/// Blanks the descriptive fields of the document information dictionary.
///
/// The dictionary is created when the trailer has none, so the fields are
/// always present and empty afterwards.
pub fn clear_descriptive_metadata(doc: &mut Document) {
    let info_ref = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => Some(*id),
        _ => None,
    };

    if let Some(id) = info_ref {
        if let Ok(Object::Dictionary(info)) = doc.get_object_mut(id) {
            blank_fields(info);
            return;
        }
    }

    // Inline, dangling or missing: replace with a fresh indirect dictionary
    // that keeps whatever inline entries were there.
    let mut info = match doc.trailer.get(b"Info") {
        Ok(Object::Dictionary(inline)) => inline.clone(),
        _ => Dictionary::new(),
    };
    blank_fields(&mut info);
    let info_id = doc.add_object(info);
    doc.trailer.set("Info", info_id);
}

fn blank_fields(info: &mut Dictionary) {
    for key in DESCRIPTIVE_FIELDS {
        info.set(key, Object::string_literal(""));
    }
}
