//!
//! # Lyp21 KLayout Layer-Properties Reader
//!
//! Reads the `<layer-properties>` XML files (`.lyp`) with which KLayout describes
//! how each GDS layer is named and drawn.
//! Only the drawing-purpose entries (names of the form `<layer>.drawing`) are kept,
//! along with their GDS source locator and fill color.
//!

mod data;
pub use data::*;

mod read;
pub use read::*;

#[cfg(test)]
mod tests;
