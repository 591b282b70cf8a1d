//!
//! # Techfile Writer Module
//!
//! GDS3D techfiles are a comment header followed by one block of `Key: value` lines per layer:
//!
//! ```text
//! LayerStart: Metal1
//! Layer: 8
//! Datatype: 0
//! Height: 640
//! Thickness: 420
//! Red: 0.22
//! Green: 0.75
//! Blue: 1.00
//! Filter: 0.0
//! Metal: 1
//! Show: 1
//! LayerEnd
//! ```
//!
//! Heights and thicknesses are written in nanometers, colors as channel fractions.
//!

// Standard Lib Imports
use std::io::Write;
use std::path::Path;

// Crates.io Imports
use chrono::{Local, NaiveDateTime};
use log::info;

// Local imports
use crate::{LayerRecord, LayerStack, Rgb, TechError, TechResult, SUBSTRATE};

/// GDS layer number always written for the [SUBSTRATE] layer
pub const SUBSTRATE_GDS_LAYER: i32 = 255;

/// Header license notice
const LICENSE: &[&str] = &[
    "This program is free software; you can redistribute it and/or modify it",
    "under the terms of the GNU General Public License as published by the Free",
    "Software Foundation; either version 2 of the License, or (at your option)",
    "any later version.",
    "",
    "This program is distributed in the hope that it will be useful, but WITHOUT",
    "ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or",
    "FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for",
    "more details.",
    "",
    "You should have received a copy of the GNU General Public License along with",
    "this program; if not, write to the Free Software Foundation, Inc., 51",
    "Franklin Street, Fifth Floor, Boston, MA 02110-1301, USA.",
    "",
    "SPDX-License-Identifier: GPL-2.0-or-later",
];

/// Default header author
pub const DEFAULT_AUTHOR: &str = "Jørgen Kragh Jakobsen";
/// Default header copyright notice
pub const DEFAULT_COPYRIGHT: &str = "Copyright (C) 2024 Jorgen Kragh Jakobsen <jkj@icworks.dk>";

/// # Techfile Header
#[derive(Debug, Clone, PartialEq)]
pub struct TechfileHeader {
    /// Process Name
    pub process: String,
    /// Author
    pub author: String,
    /// Generation Time
    pub date: NaiveDateTime,
    /// Copyright notice, preceding the license
    pub copyright: String,
}
impl TechfileHeader {
    /// Create a [TechfileHeader] for `process`, dated now, with the default author and copyright
    pub fn now(process: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            author: DEFAULT_AUTHOR.into(),
            date: Local::now().naive_local(),
            copyright: DEFAULT_COPYRIGHT.into(),
        }
    }
}

impl LayerStack {
    /// Write our techfile to file `fname`
    pub fn save_techfile(&self, header: &TechfileHeader, fname: impl AsRef<Path>) -> TechResult<()> {
        save(self, header, fname)
    }
    /// Write our techfile to a [String]
    pub fn to_techfile_string(&self, header: &TechfileHeader) -> TechResult<String> {
        to_string(self, header)
    }
}

/// Write the techfile for `stack` to file `fname`.
/// Content is rendered in full before the file is created,
/// so a rendering failure leaves no partial file behind.
pub fn save(stack: &LayerStack, header: &TechfileHeader, fname: impl AsRef<Path>) -> TechResult<()> {
    let fname = fname.as_ref();
    let content = to_string(stack, header)?;
    let mut file = std::fs::File::create(fname)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    info!("Wrote {} layers to {:?}", stack.len(), fname);
    Ok(())
}
/// Write the techfile for `stack` to a [String]
pub fn to_string(stack: &LayerStack, header: &TechfileHeader) -> TechResult<String> {
    let mut buf = Vec::new();
    TechfileWriter::new(&mut buf).write_techfile(stack, header)?;
    String::from_utf8(buf).map_err(|e| TechError::Boxed(Box::new(e)))
}

/// # Techfile Writing Helper
pub struct TechfileWriter<'wr> {
    /// Write Destination
    dest: Box<dyn Write + 'wr>,
}
impl<'wr> TechfileWriter<'wr> {
    /// Create a new [TechfileWriter] to destination `dest`.
    /// Destination is boxed internally.
    pub fn new(dest: impl Write + 'wr) -> Self {
        Self {
            dest: Box::new(dest),
        }
    }
    /// Write the header and every layer of `stack`, bottom to top
    pub fn write_techfile(&mut self, stack: &LayerStack, header: &TechfileHeader) -> TechResult<()> {
        self.write_header(header)?;
        for layer in stack.layers() {
            self.write_layer(layer)?;
        }
        self.dest.flush()?;
        Ok(())
    }
    /// Write the comment header
    fn write_header(&mut self, header: &TechfileHeader) -> TechResult<()> {
        self.write_line(format_args!("# Autogenerated GDS3D techfile"))?;
        self.write_line(format_args!("# Process : {}", header.process))?;
        self.write_line(format_args!("# Author  : {}", header.author))?;
        let date = header.date.format("%Y-%m-%d %H:%M:%S");
        self.write_line(format_args!("# Date    : {}", date))?;
        self.write_line(format_args!("#"))?;
        self.write_line(format_args!("# {}", header.copyright))?;
        self.write_line(format_args!("#"))?;
        for line in LICENSE {
            match line.is_empty() {
                true => self.write_line(format_args!("#"))?,
                false => self.write_line(format_args!("# {}", line))?,
            }
        }
        self.write_line(format_args!(""))?;
        Ok(())
    }
    /// Write a single layer block
    fn write_layer(&mut self, layer: &LayerRecord) -> TechResult<()> {
        let rgb = Rgb::from_hex(&layer.color).ok_or_else(|| {
            TechError::parse(format!(
                "Invalid color {:?} for layer {}",
                layer.color, layer.name
            ))
        })?;
        let [red, green, blue] = rgb.fractions();
        let gds_number = match layer.name.as_str() {
            SUBSTRATE => SUBSTRATE_GDS_LAYER,
            _ => layer.gds_number,
        };

        self.write_line(format_args!("LayerStart: {}", layer.name))?;
        self.write_line(format_args!("Layer: {}", gds_number))?;
        self.write_line(format_args!("Datatype: {}", layer.gds_datatype))?;
        self.write_line(format_args!("Height: {:.0}", layer.height * 1000.0))?;
        self.write_line(format_args!("Thickness: {:.0}", layer.thickness * 1000.0))?;
        self.write_line(format_args!("Red: {:.2}", red))?;
        self.write_line(format_args!("Green: {:.2}", green))?;
        self.write_line(format_args!("Blue: {:.2}", blue))?;
        self.write_line(format_args!("Filter: 0.0"))?;
        self.write_line(format_args!("Metal: {}", u8::from(layer.metal)))?;
        self.write_line(format_args!("Show: 1"))?;
        self.write_line(format_args!("LayerEnd"))?;
        self.write_line(format_args!(""))?;
        Ok(())
    }
    /// Helper to write a line
    fn write_line(&mut self, args: std::fmt::Arguments) -> std::io::Result<()> {
        writeln!(self.dest, "{}", args)
    }
}
