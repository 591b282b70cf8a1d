//!
//! # Layer Stack
//!
//! The ordered, bottom-to-top list of process layers, and their per-layer records.
//!

// Std-Lib
use std::collections::HashSet;

// Crates.io
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Local Imports
use crate::utils::{ErrorHelper, Unwrapper};
use crate::{Rgb, TechError, TechResult};

/// Name of the bottom-most layer, which always writes GDS layer 255
pub const SUBSTRATE: &str = "Substrate";

/// # Layer Record
///
/// Dimensions are in microns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayerRecord {
    /// Layer Name. Unique within a stack.
    pub name: String,
    /// GDS Layer Number
    #[serde(default)]
    pub gds_number: i32,
    /// GDS Datatype
    #[serde(default)]
    pub gds_datatype: i32,
    /// Color, as `#RRGGBB`
    pub color: String,
    /// Height of the layer bottom
    #[serde(default)]
    pub height: f64,
    /// Vertical extent. Zero-thickness vias are interpolated between their neighbors.
    #[serde(default)]
    pub thickness: f64,
    /// Metal (routing) layer indicator
    #[serde(default)]
    pub metal: bool,
}
impl LayerRecord {
    /// Create a new [LayerRecord], with GDS layer and datatype zero
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        height: f64,
        thickness: f64,
        metal: bool,
    ) -> Self {
        Self {
            name: name.into(),
            gds_number: 0,
            gds_datatype: 0,
            color: color.into(),
            height,
            thickness,
            metal,
        }
    }
    /// Set the GDS layer and datatype
    pub fn gds(mut self, number: i32, datatype: i32) -> Self {
        self.gds_number = number;
        self.gds_datatype = datatype;
        self
    }
    /// Boolean indication of a via layer, i.e. one whose name contains "Via"
    pub fn is_via(&self) -> bool {
        self.name.contains("Via")
    }
}

/// # Layer Stack
///
/// Layers in physical order, bottom to top.
/// The order is fixed at construction; later passes update fields in place.
///
/// Construction checks that names are unique, colors are valid,
/// and that no via layer sits at either end of the stack,
/// so that every via has neighbors to interpolate between.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: Vec<LayerRecord>,
}
impl LayerStack {
    /// Create and validate a [LayerStack] from `layers`, ordered bottom to top
    pub fn new(layers: Vec<LayerRecord>) -> TechResult<Self> {
        let stack = Self { layers };
        stack.validate()?;
        Ok(stack)
    }
    /// The default SG13G2 stack
    pub fn sg13g2() -> Self {
        Self {
            layers: sg13g2_layers(),
        }
    }
    /// Check our construction invariants
    pub fn validate(&self) -> TechResult<()> {
        self.assert(!self.layers.is_empty(), "Layer stack is empty")?;
        let mut names = HashSet::new();
        let last = self.layers.len() - 1;
        for (idx, layer) in self.layers.iter().enumerate() {
            self.assert(
                names.insert(layer.name.as_str()),
                format!("Duplicate layer name {}", layer.name),
            )?;
            Rgb::from_hex(&layer.color).unwrapper(
                self,
                format!("Invalid color {:?} for layer {}", layer.color, layer.name),
            )?;
            if layer.is_via() {
                self.assert(
                    idx != 0 && idx != last,
                    format!(
                        "Via layer {} cannot be the first or last layer of the stack",
                        layer.name
                    ),
                )?;
            }
        }
        Ok(())
    }
    /// Layer records, bottom to top
    pub fn layers(&self) -> &[LayerRecord] {
        &self.layers
    }
    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }
    /// Boolean indication of an empty stack. Never true for a validated stack.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
    /// Get the layer named `name`
    pub fn get(&self, name: &str) -> Option<&LayerRecord> {
        self.layers.iter().find(|l| l.name == name)
    }
    /// Get a mutable reference to the layer named `name`
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut LayerRecord> {
        self.layers.iter_mut().find(|l| l.name == name)
    }
    /// Mutable access by index, for the passes which work on neighbors
    pub(crate) fn records_mut(&mut self) -> &mut [LayerRecord] {
        &mut self.layers
    }
    /// Consume the stack, returning its records
    pub fn into_layers(self) -> Vec<LayerRecord> {
        self.layers
    }
}
impl ErrorHelper for LayerStack {
    type Error = TechError;
    fn err(&self, msg: impl Into<String>) -> TechError {
        TechError::config(msg)
    }
}

/// The IHP SG13G2 front- and back-end stack, with approximate default dimensions.
/// Routing metals and vias are sized from the tech-lef.
pub fn sg13g2_layers() -> Vec<LayerRecord> {
    vec![
        LayerRecord::new(SUBSTRATE, "#FFFFFF", -10.0, 10.0, false).gds(255, 0),
        LayerRecord::new("NWell", "#000000", 0.0, 0.2, false),
        LayerRecord::new("PWell", "#000000", 0.0, 0.2, false),
        LayerRecord::new("Active", "#000000", 0.2, 0.12, false),
        LayerRecord::new("ResPoly", "#000000", 0.32, 0.1, false),
        LayerRecord::new("GatPoly", "#FF0000", 0.32, 0.1, false),
        LayerRecord::new("Cont", "#00FF00", 0.32, 0.64, false),
        LayerRecord::new("Metal1", "#0000FF", 0.0, 0.0, true),
        LayerRecord::new("Via1", "#FFFF00", 0.0, 0.0, false),
        LayerRecord::new("Metal2", "#00FFFF", 0.0, 0.0, true),
        LayerRecord::new("Via2", "#FF00FF", 0.0, 0.0, false),
        LayerRecord::new("Metal3", "#FF0000", 0.0, 0.0, true),
        LayerRecord::new("Via3", "#00FF00", 0.0, 0.0, false),
        LayerRecord::new("Metal4", "#0000FF", 0.0, 0.0, true),
        LayerRecord::new("Via4", "#FFFF00", 0.0, 0.0, false),
        LayerRecord::new("Metal5", "#00FFFF", 0.0, 0.0, true),
        LayerRecord::new("TopVia1", "#FF00FF", 0.0, 0.0, false),
        LayerRecord::new("TopMetal1", "#FF0000", 0.0, 2.0, true),
        LayerRecord::new("TopVia2", "#00FF00", 0.0, 0.0, false),
        LayerRecord::new("TopMetal2", "#0000FF", 0.0, 3.0, true),
        LayerRecord::new("MIM", "#00FFFF", 5.3, 0.15, false),
    ]
}
