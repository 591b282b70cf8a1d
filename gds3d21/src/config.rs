//!
//! # Layer-Stack Configuration
//!
//! Everything process-specific: the stack itself, the tech-lef layers to extract,
//! and the process name written to the techfile header.
//! Defaults to IHP SG13G2, and can be loaded from or saved to JSON, YAML or TOML.
//!

// Std-Lib
use std::path::Path;

// Crates.io
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Local Imports
use crate::utils::{SerdeFile, SerializationFormat};
use crate::{sg13g2_layers, LayerRecord, LayerStack, TechError, TechResult};

/// # Stack Configuration
// Field order matters for TOML, which requires plain values before arrays of tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StackConfig {
    /// Process name, written to the techfile header
    #[serde(default = "default_process")]
    pub process: String,
    /// Names of the tech-lef layers to read heights and thicknesses from
    #[serde(default = "default_lef_layers")]
    pub lef_layers: Vec<String>,
    /// Layers, bottom to top
    pub layers: Vec<LayerRecord>,
}
impl Default for StackConfig {
    fn default() -> Self {
        Self::sg13g2()
    }
}
impl StackConfig {
    /// The IHP SG13G2 configuration
    pub fn sg13g2() -> Self {
        Self {
            process: default_process(),
            lef_layers: default_lef_layers(),
            layers: sg13g2_layers(),
        }
    }
    /// Load from file `fname`, in the format implied by its extension
    pub fn load(fname: impl AsRef<Path>) -> TechResult<Self> {
        let fname = fname.as_ref();
        Self::open_auto(fname).map_err(|e| {
            TechError::config(format!("Cannot load layer stack from {:?}: {}", fname, e))
        })
    }
    /// Save to file `fname`, in the format implied by its extension
    pub fn store(&self, fname: impl AsRef<Path>) -> TechResult<()> {
        self.save_auto(fname)?;
        Ok(())
    }
    /// Parse from string `src` in format `fmt`
    pub fn parse(src: &str, fmt: SerializationFormat) -> TechResult<Self> {
        fmt.from_str(src)
            .map_err(|e| TechError::config(format!("Invalid layer stack: {}", e)))
    }
    /// Create and validate the [LayerStack]
    pub fn stack(&self) -> TechResult<LayerStack> {
        LayerStack::new(self.layers.clone())
    }
    /// JSON schema of the configuration format
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(StackConfig)
    }
}
impl SerdeFile for StackConfig {}

fn default_process() -> String {
    "IHP 130nm open source".into()
}
fn default_lef_layers() -> Vec<String> {
    techlef21::DEFAULT_LAYERS
        .iter()
        .map(|s| s.to_string())
        .collect()
}
