//!
//! # Tech-Lef Data Model
//!

// Crates.io Imports
use serde::{Deserialize, Serialize};

// Local Imports
use crate::utils::enumstr;

/// Layers extracted by default: the poly, contact and routing stack of IHP SG13G2.
/// LEF `LAYER` definitions of any other name are skipped.
pub const DEFAULT_LAYERS: [&str; 15] = [
    "GatPoly",
    "Cont",
    "Metal1",
    "Via1",
    "Metal2",
    "Via2",
    "Metal3",
    "Via3",
    "Metal4",
    "Via4",
    "Metal5",
    "TopVia1",
    "TopMetal1",
    "TopVia2",
    "TopMetal2",
];

/// # Lef Technology File
///
/// The subset of a tech-lef relevant to a vertical layer stack-up.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LefTechFile {
    /// Lef Spec Version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
    /// Hierarchy Divider Character, with any quotes removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_char: Option<String>,
    /// Whitelisted layer definitions, in file order
    #[serde(default)]
    pub layers: Vec<LefTechLayer>,
}
impl LefTechFile {
    /// Find the (first) layer named `name`
    pub fn layer(&self, name: &str) -> Option<&LefTechLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// # Lef Technology Layer
///
/// Dimensions are in LEF units (microns). Fields not set in the LEF remain zero.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LefTechLayer {
    /// Layer Name
    pub name: String,
    /// Layer Type, e.g. `ROUTING` or `CUT`. Informational only.
    #[serde(default)]
    pub layer_type: String,
    /// Height of the layer bottom above the substrate
    #[serde(default)]
    pub height: f64,
    /// Vertical extent
    #[serde(default)]
    pub thickness: f64,
}
impl LefTechLayer {
    /// Create a new [LefTechLayer] named `name`, with all other fields empty
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

enumstr!(
    /// # Lef Key(Word)s
    ///
    /// The statement keywords which drive the tech-lef reader.
    /// Matched case-sensitively, in their conventional upper-case form.
    LefKey {
        Version: "VERSION",
        DividerChar: "DIVIDERCHAR",
        Units: "UNITS",
        Layer: "LAYER",
        Via: "VIA",
        ViaRule: "VIARULE",
        Type: "TYPE",
        Thickness: "THICKNESS",
        Height: "HEIGHT",
        End: "END",
    }
);

///
/// # Lef Error Enumeration
///
/// Reading fails only on I/O. Content problems are skipped rather than reported.
///
pub enum LefError {
    /// Failure opening or reading the input, including non-UTF-8 content
    Io(std::io::Error),
}
impl From<std::io::Error> for LefError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl std::fmt::Debug for LefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LefError::Io(e) => write!(f, "Lef I/O Error: {}", e),
        }
    }
}
impl std::fmt::Display for LefError {
    /// Delegates to the [Debug] implementation
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
impl std::error::Error for LefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LefError::Io(e) => Some(e),
        }
    }
}

/// Techlef21 Library-Wide Result Type
pub type LefResult<T> = Result<T, LefError>;
