//! DOCX body text
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`
//! with page headers and footers in `word/header*.xml` and
//! `word/footer*.xml`. Text is read headers first, then the body, then the
//! footers. Paragraph ends, breaks and tabs become whitespace and every
//! other tag is dropped.

use std::io::{Cursor, Read, Seek};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";
const HEADER_PREFIX: &str = "word/header";
const FOOTER_PREFIX: &str = "word/footer";

lazy_static! {
    static ref PARAGRAPH_END: Regex = Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").unwrap();
    static ref TAB: Regex = Regex::new(r"<w:tab\s*/>").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

pub fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    let headers = parts_with_prefix(&names, HEADER_PREFIX);
    let footers = parts_with_prefix(&names, FOOTER_PREFIX);

    let mut text = String::new();
    for name in &headers {
        text.push_str(&read_part(&mut archive, name)?);
    }
    text.push_str(&read_part(&mut archive, DOCUMENT_PART)?);
    for name in &footers {
        text.push_str(&read_part(&mut archive, name)?);
    }

    Ok(text)
}

fn parts_with_prefix<'a>(names: &'a [String], prefix: &str) -> Vec<&'a str> {
    names
        .iter()
        .filter(|name| name.starts_with(prefix) && name.ends_with(".xml"))
        .map(String::as_str)
        .collect()
}

fn read_part<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    name: &str,
) -> Result<String, ExtractError> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| ExtractError::Docx(format!("{}: {}", name, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;

    Ok(xml_to_text(&xml))
}

/// Flatten WordprocessingML to plain text.
pub fn xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_END.replace_all(xml, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
