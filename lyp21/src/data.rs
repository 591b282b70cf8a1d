//!
//! # Lyp Data Model
//!

// Crates.io Imports
use serde::{Deserialize, Serialize};

/// The layer-purpose suffix of retained entries
pub const DRAWING: &str = "drawing";

/// # Lyp Layer Entry
///
/// One `<properties>` element of a layer-properties file.
/// All fields are kept as written; missing elements are empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LypEntry {
    /// Display name, e.g. `Metal1.drawing`
    pub name: String,
    /// GDS source locator, e.g. `8/0` or `8/0@1`
    pub source: String,
    /// Fill color, e.g. `#39bfff`
    pub fill_color: String,
}
impl LypEntry {
    /// Get the layer-name part of a drawing-purpose entry, e.g. `Metal1` for `Metal1.drawing`.
    /// Returns `None` for any name not of the form `<base>.drawing`.
    pub fn base_name(&self) -> Option<&str> {
        let mut parts = self.name.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(DRAWING), None) => Some(base),
            _ => None,
        }
    }
    /// Boolean indication of a drawing-purpose entry
    pub fn is_drawing(&self) -> bool {
        self.base_name().is_some()
    }
    /// Parse our source locator into a (GDS layer, GDS datatype) pair.
    ///
    /// Any KLayout layout-index suffix (`@1`) is removed first.
    /// The remainder must be exactly two integers separated by a single `/`.
    pub fn gds_pair(&self) -> LypResult<(i32, i32)> {
        let loc = self.source.split('@').next().unwrap_or_default().trim();
        let parts: Vec<&str> = loc.split('/').collect();
        let (layer, datatype) = match parts.as_slice() {
            [layer, datatype] => (layer.trim(), datatype.trim()),
            _ => return Err(self.invalid_source()),
        };
        match (layer.parse::<i32>(), datatype.parse::<i32>()) {
            (Ok(l), Ok(d)) => Ok((l, d)),
            _ => Err(self.invalid_source()),
        }
    }
    fn invalid_source(&self) -> LypError {
        LypError::Parse {
            msg: format!(
                "Invalid GDS source {:?} for layer {:?}, expected <layer>/<datatype>",
                self.source, self.name
            ),
            pos: None,
        }
    }
}

///
/// # Lyp Error Enumeration
///
pub enum LypError {
    /// Failure opening or reading the input
    Io(std::io::Error),
    /// Malformed XML, or a document which is not a layer-properties file
    Parse {
        msg: String,
        /// Byte position in the source, where known
        pos: Option<usize>,
    },
}
impl LypError {
    /// Create a [LypError::Parse] without source position
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            msg: msg.into(),
            pos: None,
        }
    }
}
impl From<std::io::Error> for LypError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<quick_xml::Error> for LypError {
    fn from(e: quick_xml::Error) -> Self {
        match e {
            quick_xml::Error::Io(io) => Self::Io(std::io::Error::new(io.kind(), io.to_string())),
            e => Self::parse(e.to_string()),
        }
    }
}
impl std::fmt::Debug for LypError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LypError::Io(e) => write!(f, "Lyp I/O Error: {}", e),
            LypError::Parse { msg, pos: Some(pos) } => {
                write!(f, "Lyp Parse Error at byte {}: {}", pos, msg)
            }
            LypError::Parse { msg, pos: None } => write!(f, "Lyp Parse Error: {}", msg),
        }
    }
}
impl std::fmt::Display for LypError {
    /// Delegates to the [Debug] implementation
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
impl std::error::Error for LypError {}

/// Lyp21 Library-Wide Result Type
pub type LypResult<T> = Result<T, LypError>;
