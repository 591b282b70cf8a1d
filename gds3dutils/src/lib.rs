//!
//! # GDS3D Techfile Generator Internal Utilities Crate
//!
//! Shared helpers for the format readers and the techfile generator:
//! * [ser]: serialization of configuration data to and from JSON, YAML and TOML files
//! * [enumstr]: keyword-to-enum mapping, for the many text formats which encode enumerated values as strings
//! * [error]: the [ErrorHelper] and [Unwrapper] failure-routing traits
//!

pub mod ser;
pub use ser::*;

pub mod error;
pub use error::*;

pub mod enumstr;
pub use enumstr::*;
