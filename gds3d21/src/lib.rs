//!
//! # Gds3d21 GDS3D Techfile Generation
//!
//! Builds the layer "techfile" read by the GDS3D viewer from two PDK sources:
//! * A KLayout layer-properties file, supplying each layer's GDS number, datatype and color
//! * A technology LEF, supplying each routing layer's height and thickness
//!
//! Both are merged onto a [LayerStack] of defaults, via layers lacking LEF dimensions
//! are interpolated between their neighbors, and the result is written out.
//!
//! ```no_run
//! use gds3d21::{StackConfig, TechfileHeader};
//!
//! let config = StackConfig::sg13g2();
//! let stack = gds3d21::generate(&config, "sg13g2.lyp", "sg13g2_tech.lef").unwrap();
//! stack.save_techfile(&TechfileHeader::now(&config.process), "sg13g2.txt").unwrap();
//! ```
//!

// Std-Lib
use std::path::Path;

// Crates.io
use log::info;

// Internal modules & re-exports
pub use gds3dutils as utils;
pub use lyp21;
pub use techlef21;

mod error;
pub use error::*;

mod color;
pub use color::*;

mod stack;
pub use stack::*;

mod config;
pub use config::*;

mod merge;

pub mod write;
pub use write::TechfileHeader;


/// Load the layer-properties file `lyp` and tech-lef `lef`,
/// and merge them onto the layer stack of `config`.
///
/// Either input failing to load fails the whole generation.
pub fn generate(
    config: &StackConfig,
    lyp: impl AsRef<Path>,
    lef: impl AsRef<Path>,
) -> TechResult<LayerStack> {
    let stack = config.stack()?;
    let lyp_entries = lyp21::parse_file(lyp)?;
    let lef = techlef21::LefReader::new(config.lef_layers.iter().cloned()).read_file(lef)?;
    merge(stack, &lyp_entries, &lef)
}

/// Merge layer-properties entries `lyp` and tech-lef `lef` onto `stack`,
/// in order: GDS numbers and colors, then heights and thicknesses, then via interpolation.
pub fn merge(
    stack: LayerStack,
    lyp: &[lyp21::LypEntry],
    lef: &techlef21::LefTechFile,
) -> TechResult<LayerStack> {
    let stack = stack
        .apply_gds_and_color(lyp)?
        .apply_height_thickness(&lef.layers)
        .interpolate_vias()?;
    info!("Merged {} layers", stack.len());
    Ok(stack)
}
