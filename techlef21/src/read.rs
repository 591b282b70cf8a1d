//!
//! # Tech-Lef Reading Module
//!
//! A line-at-a-time state machine over whitespace-separated tokens.
//! Each non-blank line is dispatched on its first token, in the context of the current [LefReadMode].
//!

// Standard Lib Imports
use std::io::{BufRead, BufReader};
use std::path::Path;

// Crates.io Imports
use log::{debug, info, trace, warn};

// Local imports
use super::data::*;
use super::utils::EnumStr;

/// Parse tech-lef content from file `fname`, extracting the [DEFAULT_LAYERS]
pub fn parse_file(fname: impl AsRef<Path>) -> LefResult<LefTechFile> {
    LefReader::default().read_file(fname)
}
/// Parse tech-lef content `src` from string, extracting the [DEFAULT_LAYERS]
pub fn parse_str(src: &str) -> LefResult<LefTechFile> {
    LefReader::default().read_str(src)
}

/// # Tech-Lef Reader
///
/// Holds the whitelist of layer names to be extracted.
#[derive(Debug, Clone)]
pub struct LefReader {
    layers: Vec<String>,
}
impl Default for LefReader {
    fn default() -> Self {
        Self::new(DEFAULT_LAYERS)
    }
}
impl LefReader {
    /// Create a [LefReader] extracting the layers named in `layers`
    pub fn new<S: Into<String>>(layers: impl IntoIterator<Item = S>) -> Self {
        Self {
            layers: layers.into_iter().map(Into::into).collect(),
        }
    }
    /// The layer-name whitelist
    pub fn layers(&self) -> &[String] {
        &self.layers
    }
    /// Read from file `fname`
    pub fn read_file(&self, fname: impl AsRef<Path>) -> LefResult<LefTechFile> {
        let fname = fname.as_ref();
        let file = std::fs::File::open(fname)?;
        let lef = self.read(BufReader::new(file))?;
        info!(
            "Read {} of {} LEF layers from {:?}",
            lef.layers.len(),
            self.layers.len(),
            fname
        );
        Ok(lef)
    }
    /// Read from string `src`
    pub fn read_str(&self, src: &str) -> LefResult<LefTechFile> {
        self.read(src.as_bytes())
    }
    /// Read from any buffered source
    pub fn read(&self, src: impl BufRead) -> LefResult<LefTechFile> {
        let mut session = LefReadSession {
            reader: self,
            lef: LefTechFile::default(),
        };
        let mut src = src;
        let mut mode = LefReadMode::Idle;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if src.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Non-UTF-8 bytes (e.g. Latin-1 comments) are replaced, not rejected
            let line = String::from_utf8_lossy(&buf);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            mode = session.step(mode, &tokens);
        }
        if let LefReadMode::Layer(layer) = mode {
            warn!("LEF ended inside LAYER {}, which is dropped", layer.name);
        }
        Ok(session.lef)
    }
    /// Boolean indication of whether layer `name` is extracted
    fn selects(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l == name)
    }
}

/// # Lef Reader Modes
///
/// Which section of the LEF the reader is in.
/// The layer under construction travels inside [LefReadMode::Layer].
#[derive(Debug, Clone, PartialEq)]
pub enum LefReadMode {
    /// Top level, between sections
    Idle,
    /// Inside `UNITS`
    Units,
    /// Inside a whitelisted `LAYER`
    Layer(LefTechLayer),
    /// Inside any other `LAYER`
    LayerIgnore,
    /// Inside a `VIA` or `VIARULE`
    ViaIgnore,
}

/// Lef Reading Session
/// State held over the course of a single read.
struct LefReadSession<'r> {
    reader: &'r LefReader,
    lef: LefTechFile,
}
impl<'r> LefReadSession<'r> {
    /// Transition function.
    /// Apply the statement in `tokens` (non-empty) in `mode`, and return the next mode.
    /// Statements not meaningful in `mode`, or missing their argument, leave it unchanged.
    fn step(&mut self, mode: LefReadMode, tokens: &[&str]) -> LefReadMode {
        let key = LefKey::from_str(tokens[0]);
        let arg = tokens.get(1).copied();
        match (mode, key) {
            // Top-level statements
            (LefReadMode::Idle, Some(LefKey::Version)) => {
                if let Some(v) = arg.and_then(parse_number) {
                    info!("Found LEF version {}", v);
                    self.lef.version = Some(v);
                }
                LefReadMode::Idle
            }
            (LefReadMode::Idle, Some(LefKey::DividerChar)) => {
                if let Some(d) = arg {
                    self.lef.divider_char = Some(d.trim_matches('"').to_string());
                }
                LefReadMode::Idle
            }
            (LefReadMode::Idle, Some(LefKey::Units)) => LefReadMode::Units,
            (LefReadMode::Idle, Some(LefKey::Layer)) => match arg {
                Some(name) if self.reader.selects(name) => {
                    debug!("Found LEF layer {}", name);
                    LefReadMode::Layer(LefTechLayer::new(name))
                }
                Some(name) => {
                    trace!("Skipping LEF layer {}", name);
                    LefReadMode::LayerIgnore
                }
                None => LefReadMode::Idle,
            },
            (LefReadMode::Idle, Some(LefKey::Via | LefKey::ViaRule)) => LefReadMode::ViaIgnore,

            // Layer content
            (LefReadMode::Layer(mut layer), Some(LefKey::Type)) => {
                if let Some(t) = arg {
                    layer.layer_type = t.to_string();
                }
                LefReadMode::Layer(layer)
            }
            (LefReadMode::Layer(mut layer), Some(LefKey::Thickness)) => {
                if let Some(v) = arg.and_then(parse_number) {
                    layer.thickness = v;
                }
                LefReadMode::Layer(layer)
            }
            (LefReadMode::Layer(mut layer), Some(LefKey::Height)) => {
                if let Some(v) = arg.and_then(parse_number) {
                    layer.height = v;
                }
                LefReadMode::Layer(layer)
            }
            (LefReadMode::Layer(layer), Some(LefKey::End)) => {
                debug!(
                    "LEF layer {}: type {:?}, height {}, thickness {}",
                    layer.name, layer.layer_type, layer.height, layer.thickness
                );
                self.lef.layers.push(layer);
                LefReadMode::Idle
            }

            // Section ends
            (LefReadMode::Units, Some(LefKey::End))
            | (LefReadMode::LayerIgnore, Some(LefKey::End))
            | (LefReadMode::ViaIgnore, Some(LefKey::End)) => LefReadMode::Idle,

            (mode, _) => mode,
        }
    }
}

/// Parse a numeric token, or `None` if it is not a number
fn parse_number(tok: &str) -> Option<f64> {
    match tok.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            trace!("Ignoring non-numeric LEF value {:?}", tok);
            None
        }
    }
}
