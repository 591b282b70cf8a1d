//!
//! # Merge Passes
//!
//! Each pass consumes the [LayerStack] and returns it updated,
//! so passes chain in a fixed order and no two hold the stack at once.
//!

// Crates.io
use log::{debug, trace, warn};

// Local Imports
use crate::utils::ErrorHelper;
use crate::{LayerStack, Rgb, TechError, TechResult};
use lyp21::LypEntry;
use techlef21::LefTechLayer;

impl LayerStack {
    /// Apply GDS layer, datatype and color from layer-properties `entries`.
    ///
    /// Entries are joined by their base name (`Metal1` for `Metal1.drawing`).
    /// Entries matching no layer are skipped. Matching entries must carry a valid
    /// `<layer>/<datatype>` source and `#RRGGBB` color, or fail with [TechError::Parse].
    pub fn apply_gds_and_color(mut self, entries: &[LypEntry]) -> TechResult<Self> {
        for entry in entries {
            let base = match entry.base_name() {
                Some(base) => base,
                None => continue,
            };
            let layer = match self.get_mut(base) {
                Some(layer) => layer,
                None => {
                    trace!("No stack layer for {}", entry.name);
                    continue;
                }
            };
            let (number, datatype) = entry.gds_pair()?;
            if Rgb::from_hex(&entry.fill_color).is_none() {
                return Err(TechError::parse(format!(
                    "Invalid fill color {:?} for layer {}",
                    entry.fill_color, entry.name
                )));
            }
            layer.gds_number = number;
            layer.gds_datatype = datatype;
            layer.color = entry.fill_color.clone();
            debug!(
                "Layer {}: GDS {}/{}, color {}",
                layer.name, number, datatype, layer.color
            );
        }
        Ok(self)
    }
    /// Apply heights and thicknesses from tech-lef `layers`, joined by exact name.
    ///
    /// Only layers with positive thickness are applied.
    /// The rest, typically vias, are left for [LayerStack::interpolate_vias].
    pub fn apply_height_thickness(mut self, layers: &[LefTechLayer]) -> Self {
        for lef in layers {
            if lef.thickness <= 0.0 {
                continue;
            }
            if let Some(layer) = self.get_mut(&lef.name) {
                layer.height = lef.height;
                layer.thickness = lef.thickness;
                debug!(
                    "Layer {}: height {}, thickness {}",
                    layer.name, layer.height, layer.thickness
                );
            }
        }
        self
    }
    /// Size each zero-thickness via to span the gap between its neighbors:
    /// from the top of the layer below to the bottom of the layer above.
    ///
    /// Runs bottom to top, so a via sees any update made to the layer below it.
    pub fn interpolate_vias(mut self) -> TechResult<Self> {
        let count = self.len();
        for idx in 0..count {
            let layer = &self.layers()[idx];
            if !layer.is_via() || layer.thickness != 0.0 {
                continue;
            }
            if idx == 0 || idx + 1 >= count {
                return self.fail(format!(
                    "Via layer {} has no neighbor to interpolate from",
                    layer.name
                ));
            }
            let records = self.records_mut();
            let below = &records[idx - 1];
            let height = below.height + below.thickness;
            let thickness = records[idx + 1].height - height;

            let via = &mut records[idx];
            via.height = height;
            via.thickness = thickness;
            if thickness <= 0.0 {
                warn!(
                    "Via layer {} interpolated to non-positive thickness {}",
                    via.name, thickness
                );
            }
            debug!(
                "Via {}: height {}, thickness {}",
                via.name, via.height, via.thickness
            );
        }
        Ok(self)
    }
}
