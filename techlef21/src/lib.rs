//!
//! # Techlef21 LEF Technology-Layer Reader
//!
//! Extracts the vertical stack-up of a process from a LEF technology file ("tech-lef"):
//! for each of a whitelist of layers, its `TYPE`, `HEIGHT` and `THICKNESS`.
//!
//! Reading is line-oriented and deliberately lenient.
//! Unknown statements are skipped, and unparsable numbers leave their fields at zero.
//! The only failures are those of reading the input itself.
//!
//! ```rust
//! let src = "
//!     VERSION 5.8 ;
//!     LAYER Metal1
//!         TYPE ROUTING ;
//!         HEIGHT 0.45 ;
//!         THICKNESS 0.4 ;
//!     END Metal1
//! ";
//! let lef = techlef21::parse_str(src).unwrap();
//! assert_eq!(lef.layers[0].name, "Metal1");
//! assert_eq!(lef.layers[0].thickness, 0.4);
//! ```
//!

// Internal modules & re-exports
pub use gds3dutils as utils;

mod data;
pub use data::*;

mod read;
pub use read::*;
