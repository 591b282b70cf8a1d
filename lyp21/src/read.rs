//!
//! # Lyp Reading Module
//!
//! Event-driven parsing of layer-properties XML.
//! Entries are the `<properties>` children of the `<layer-properties>` root element.
//! Nested groups (`<group-members>`) and all other elements are skipped.
//!

// Standard Lib Imports
use std::path::Path;

// Crates.io Imports
use log::{info, trace};
use quick_xml::events::Event;
use quick_xml::Reader;

// Local imports
use super::data::*;

/// Root element name
const ROOT: &[u8] = b"layer-properties";
/// Entry element name
const PROPERTIES: &[u8] = b"properties";

/// Parse the drawing-purpose entries from layer-properties file `fname`
pub fn parse_file(fname: impl AsRef<Path>) -> LypResult<Vec<LypEntry>> {
    let fname = fname.as_ref();
    let bytes = std::fs::read(fname)?;
    let src = String::from_utf8(bytes).map_err(|e| LypError::Parse {
        msg: format!("Invalid UTF-8 in {:?}", fname),
        pos: Some(e.utf8_error().valid_up_to()),
    })?;
    let entries = parse_str(&src)?;
    info!("Read {} drawing layers from {:?}", entries.len(), fname);
    Ok(entries)
}
/// Parse the drawing-purpose entries from layer-properties content `src`
pub fn parse_str(src: &str) -> LypResult<Vec<LypEntry>> {
    let entries = parse_all(src)?
        .into_iter()
        .filter(|e| {
            let keep = e.is_drawing();
            if !keep {
                trace!("Skipping non-drawing lyp entry {:?}", e.name);
            }
            keep
        })
        .collect();
    Ok(entries)
}
/// Parse all entries from layer-properties content `src`, regardless of purpose
pub fn parse_all(src: &str) -> LypResult<Vec<LypEntry>> {
    LypParser::new(src).parse()
}

/// Fields captured from the children of each `<properties>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LypField {
    Name,
    Source,
    FillColor,
}
impl LypField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"name" => Some(Self::Name),
            b"source" => Some(Self::Source),
            b"fill-color" => Some(Self::FillColor),
            _ => None,
        }
    }
}

/// # Lyp Parser
///
/// Tracks the stack of open elements, collecting a [LypEntry]
/// for each `<properties>` element at depth one.
struct LypParser<'src> {
    reader: Reader<&'src [u8]>,
}
impl<'src> LypParser<'src> {
    fn new(src: &'src str) -> Self {
        let mut reader = Reader::from_str(src);
        reader.trim_text(true);
        Self { reader }
    }
    fn parse(&mut self) -> LypResult<Vec<LypEntry>> {
        let mut entries = Vec::new();
        let mut open: Vec<Vec<u8>> = Vec::new();
        let mut entry: Option<LypEntry> = None;
        let mut field: Option<LypField> = None;
        let mut seen_root = false;

        loop {
            let event = match self.reader.read_event() {
                Ok(e) => e,
                Err(e) => return Err(self.fail(e.to_string())),
            };
            match event {
                Event::Start(e) => {
                    let tag = e.name().as_ref().to_vec();
                    match open.len() {
                        0 => {
                            self.check_root(&tag, seen_root)?;
                            seen_root = true;
                        }
                        1 if tag == PROPERTIES => entry = Some(LypEntry::default()),
                        2 if entry.is_some() => field = LypField::from_tag(&tag),
                        _ => (),
                    }
                    open.push(tag);
                }
                Event::Empty(e) => {
                    // Self-closing elements carry no text. Only the root needs checking.
                    if open.is_empty() {
                        self.check_root(e.name().as_ref(), seen_root)?;
                        seen_root = true;
                    }
                }
                Event::Text(t) => {
                    if let (Some(entry), Some(field), 3) = (entry.as_mut(), field, open.len()) {
                        let txt = match t.unescape() {
                            Ok(txt) => txt,
                            Err(e) => return Err(self.fail(e.to_string())),
                        };
                        push_field(entry, field, &txt);
                    }
                }
                Event::CData(c) => {
                    if let (Some(entry), Some(field), 3) = (entry.as_mut(), field, open.len()) {
                        let raw = c.into_inner();
                        push_field(entry, field, String::from_utf8_lossy(&raw).trim());
                    }
                }
                Event::End(_) => {
                    open.pop();
                    match open.len() {
                        2 => field = None,
                        1 => {
                            if let Some(e) = entry.take() {
                                entries.push(e);
                            }
                        }
                        _ => (),
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes
                _ => (),
            }
        }
        if !seen_root {
            return Err(LypError::parse(
                "No <layer-properties> root element found",
            ));
        }
        if let Some(tag) = open.last() {
            let tag = String::from_utf8_lossy(tag).to_string();
            return Err(self.fail(format!("Unexpected end of document inside <{}>", tag)));
        }
        Ok(entries)
    }
    /// Check that `tag` is a valid, and the first, root element
    fn check_root(&self, tag: &[u8], seen_root: bool) -> LypResult<()> {
        if seen_root {
            return Err(self.fail("Multiple root elements"));
        }
        if tag != ROOT {
            let tag = String::from_utf8_lossy(tag);
            return Err(self.fail(format!(
                "Expected root element <layer-properties>, found <{}>",
                tag
            )));
        }
        Ok(())
    }
    /// Create a [LypError::Parse] at our current position
    fn fail(&self, msg: impl Into<String>) -> LypError {
        LypError::Parse {
            msg: msg.into(),
            pos: Some(self.reader.buffer_position()),
        }
    }
}

/// Append text `txt` to `field` of `entry`
fn push_field(entry: &mut LypEntry, field: LypField, txt: &str) {
    let dest = match field {
        LypField::Name => &mut entry.name,
        LypField::Source => &mut entry.source,
        LypField::FillColor => &mut entry.fill_color,
    };
    dest.push_str(txt);
}
