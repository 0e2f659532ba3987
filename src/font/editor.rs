use std::fs;
use std::path::Path;

use ttf_parser::Face;
use write_fonts::read::FontRef;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::types::Tag;
use write_fonts::FontBuilder;

use crate::error::{Error, Result};

use super::naming::NameSet;

const TTF_MAGIC: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
const OTF_MAGIC: [u8; 4] = *b"OTTO";

const GASP: Tag = Tag::new(b"gasp");
const NAME: Tag = Tag::new(b"name");

const WINDOWS_PLATFORM: u16 = 3;
const UNICODE_BMP_ENCODING: u16 = 1;
const ENGLISH_UNITED_STATES: u16 = 0x0409;

/// Read a font file and check that it is something we can edit
pub fn read_font(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;

    if data.len() < 4 || (data[..4] != TTF_MAGIC && data[..4] != OTF_MAGIC) {
        return Err(Error::Font(format!(
            "{} is not a TrueType or OpenType font",
            path.display()
        )));
    }

    let face = Face::parse(&data, 0)
        .map_err(|e| Error::Font(format!("Failed to load font from {}: {}", path.display(), e)))?;
    log::debug!(
        "Loaded {} ({} glyphs)",
        path.display(),
        face.number_of_glyphs()
    );
    if let Some(family) = unicode_name(&face, ttf_parser::name_id::FAMILY) {
        log::debug!("Input family: {}", family);
    }
    if let Some(version) = unicode_name(&face, ttf_parser::name_id::VERSION) {
        log::debug!("Input version: {}", version);
    }

    Ok(data)
}

fn unicode_name(face: &Face, id: u16) -> Option<String> {
    let names = face.names();
    (0..names.len())
        .filter_map(|i| names.get(i))
        .find(|n| n.name_id == id && n.is_unicode())
        .and_then(|n| n.to_string())
}

/// Build a copy of `data` with a fresh `name` table and without `gasp`.
/// Every other table is carried over byte-for-byte.
pub fn rename_font(data: &[u8], names: &NameSet) -> Result<Vec<u8>> {
    let font =
        FontRef::new(data).map_err(|e| Error::Font(format!("Failed to parse font: {}", e)))?;

    let records: Vec<NameRecord> = names
        .records()
        .into_iter()
        .map(|(id, value)| {
            NameRecord::new(
                WINDOWS_PLATFORM,
                UNICODE_BMP_ENCODING,
                ENGLISH_UNITED_STATES,
                id,
                value.into(),
            )
        })
        .collect();
    let name = Name::new(records.into_iter().collect());

    let mut builder = FontBuilder::new();
    builder
        .add_table(&name)
        .map_err(|e| Error::Font(format!("Failed to build name table: {}", e)))?;

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if tag == GASP || tag == NAME {
            continue;
        }
        if let Some(table) = font.table_data(tag) {
            builder.add_raw(tag, table);
        }
    }

    Ok(builder.build())
}
