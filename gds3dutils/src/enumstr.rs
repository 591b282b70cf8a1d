//!
//! # Enum-String Mapping Module
//!
//! Defines the [enumstr] macro and paired [EnumStr] trait,
//! mapping between a field-less enum and the keywords of a text format.
//! Line-oriented formats such as LEF identify their statements by leading keywords,
//! which [EnumStr::from_str] turns into something `match`-able.
//!
//! Example:
//!
//! ```rust
//! use gds3dutils::{enumstr, EnumStr};
//!
//! enumstr!(
//!     /// # Layer Purposes
//!     Purpose {
//!         Drawing: "drawing",
//!         Pin: "pin",
//!     }
//! );
//! assert_eq!(Purpose::from_str("pin"), Some(Purpose::Pin));
//! assert_eq!(Purpose::Drawing.to_str(), "drawing");
//! ```
//!

///
/// # String-Enumeration Trait
///
/// * `to_str(&self) -> &'static str` converts the enum to its keyword.
/// * `from_str(&str) -> Option<Self>` does the opposite, returning `None` for unknown keywords.
///
pub trait EnumStr: std::marker::Sized {
    fn to_str(&self) -> &'static str;
    fn from_str(txt: &str) -> Option<Self>;
}

///
/// # Enum-String Pairing Macro
///
/// Creates a field-less `enum` with one variant per keyword,
/// implementing [EnumStr] and [std::fmt::Display] (which writes the keyword).
/// Matching in `from_str` is case-sensitive.
///
#[macro_export]
macro_rules! enumstr {
    (   $(#[$meta: meta])*
        $enum_name: ident {
        $( $variant: ident : $strval: literal ),* $(,)?
    }) => {
        $(#[$meta])*
        #[allow(dead_code)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $( #[doc=$strval]
                $variant ),*
        }
        impl $crate::EnumStr for $enum_name {
            fn to_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $strval),*,
                }
            }
            fn from_str(txt: &str) -> Option<Self> {
                match txt {
                    $( $strval => Some(Self::$variant)),*,
                    _ => None,
                }
            }
        }
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", $crate::EnumStr::to_str(self))
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use crate::EnumStr;

    enumstr!(
        /// Section keywords
        Section {
            Units: "UNITS",
            Layer: "LAYER",
            End: "END",
        }
    );

    #[test]
    fn maps_keywords() {
        assert_eq!(Section::Layer.to_str(), "LAYER");
        assert_eq!(Section::from_str("UNITS"), Some(Section::Units));
        assert_eq!(Section::from_str("END"), Some(Section::End));
        assert_eq!(Section::from_str("end"), None);
        assert_eq!(Section::from_str("MACRO"), None);
        assert_eq!(format!("{}", Section::End), "END");
    }
}
