//!
//! # Serialization & Deserialization Utilities
//!
//! Loading and saving of [serde]-compatible configuration data,
//! such as layer-stack definitions, in any of the supported text formats.
//! The format is either named explicitly, or inferred from a file-path extension.
//!

// Standard Lib Imports
#[allow(unused_imports)]
use std::io::prelude::*;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

// Crates.io Imports
use serde::de::DeserializeOwned;
use serde::Serialize;
use textwrap::dedent;

/// # Enumerated Supported Serialization Formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationFormat {
    Json,
    Yaml,
    Toml,
}
impl SerializationFormat {
    /// Get the format implied by file-extension `ext`, if it is one we support.
    /// Matching is case-insensitive, and accepts both `yaml` and `yml`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
    /// Get the format implied by the extension of path `fname`
    pub fn from_path(fname: impl AsRef<Path>) -> Result<Self, Error> {
        let fname = fname.as_ref();
        fname
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                Error::msg(format!(
                    "Cannot infer serialization format from path {:?}. Expected .json, .yaml, .yml or .toml",
                    fname
                ))
            })
    }
    /// Convert any [serde::Serialize] data to a serialized string
    pub fn to_string(&self, data: &impl Serialize) -> Result<String, Error> {
        match *self {
            Self::Json => Ok(serde_json::to_string_pretty(data)?),
            Self::Yaml => Ok(serde_yaml::to_string(data)?),
            Self::Toml => Ok(toml::to_string(data)?),
        }
    }
    /// Parse string `s`.
    /// Common leading indentation is removed first, so in-source literals can be indented freely.
    pub fn from_str<T: DeserializeOwned>(&self, s: &str) -> Result<T, Error> {
        let s = dedent(s);
        match *self {
            Self::Json => Ok(serde_json::from_str(&s)?),
            Self::Yaml => Ok(serde_yaml::from_str(&s)?),
            Self::Toml => Ok(toml::from_str(&s)?),
        }
    }
    /// Save `data` to file `fname`
    pub fn save(&self, data: &impl Serialize, fname: impl AsRef<Path>) -> Result<(), Error> {
        let s = self.to_string(data)?;
        let mut file = BufWriter::new(std::fs::File::create(fname)?);
        file.write_all(s.as_bytes())?;
        file.flush()?;
        Ok(())
    }
    /// Load from file at path `fname`
    pub fn open<T: DeserializeOwned>(&self, fname: impl AsRef<Path>) -> Result<T, Error> {
        let file = std::fs::File::open(&fname)?;
        let mut file = BufReader::new(file);
        let rv: T = match *self {
            Self::Json => serde_json::from_reader(file)?,
            Self::Yaml => serde_yaml::from_reader(file)?,
            Self::Toml => {
                // TOML has no reader-based API; read the whole file first
                let mut s = String::new();
                file.read_to_string(&mut s)?;
                toml::from_str(&s)?
            }
        };
        Ok(rv)
    }
}

/// Serialization to & from file trait
///
/// Fully default-implemented, allowing empty implementations
/// for types that implement [serde] serialization and deserialization.
/// The `_auto` variants pick their [SerializationFormat] from the file extension.
///
pub trait SerdeFile: Serialize + DeserializeOwned {
    /// Save in `fmt`-format to file `fname`
    fn save(&self, fmt: SerializationFormat, fname: impl AsRef<Path>) -> Result<(), Error> {
        fmt.save(self, fname)
    }
    /// Open from `fmt`-format file `fname`
    fn open(fname: impl AsRef<Path>, fmt: SerializationFormat) -> Result<Self, Error> {
        fmt.open(fname)
    }
    /// Save to file `fname`, in the format implied by its extension
    fn save_auto(&self, fname: impl AsRef<Path>) -> Result<(), Error> {
        let fmt = SerializationFormat::from_path(&fname)?;
        fmt.save(self, fname)
    }
    /// Open from file `fname`, in the format implied by its extension
    fn open_auto(fname: impl AsRef<Path>) -> Result<Self, Error> {
        let fmt = SerializationFormat::from_path(&fname)?;
        fmt.open(fname)
    }
}

/// Wrapper over other errors
#[derive(Debug)]
pub struct Error(Box<dyn std::error::Error + Send + Sync>);
impl Error {
    /// Create an [Error] from a string message
    pub fn msg(s: impl Into<String>) -> Self {
        Self(s.into().into())
    }
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
impl std::error::Error for Error {}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self(Box::new(e))
    }
}
impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self(Box::new(e))
    }
}
impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self(Box::new(e))
    }
}
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self(Box::new(e))
    }
}
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Thing {
        name: String,
        height: f64,
        tags: Vec<String>,
    }
    impl SerdeFile for Thing {}

    fn thing() -> Thing {
        Thing {
            name: "Metal1".into(),
            height: 0.55,
            tags: vec!["metal".into(), "routing".into()],
        }
    }

    #[test]
    fn formats_from_extensions() {
        use SerializationFormat::*;
        assert_eq!(SerializationFormat::from_extension("json"), Some(Json));
        assert_eq!(SerializationFormat::from_extension("YML"), Some(Yaml));
        assert_eq!(SerializationFormat::from_extension("yaml"), Some(Yaml));
        assert_eq!(SerializationFormat::from_extension("toml"), Some(Toml));
        assert_eq!(SerializationFormat::from_extension("lef"), None);
        assert_eq!(SerializationFormat::from_path("a/b/stack.toml").unwrap(), Toml);
        assert!(SerializationFormat::from_path("stack").is_err());
        assert!(SerializationFormat::from_path("stack.txt").is_err());
    }

    #[test]
    fn parses_indented_yaml() {
        let src = r#"
            name: Via1
            height: 1.5
            tags: []
        "#;
        let t: Thing = SerializationFormat::Yaml.from_str(src).unwrap();
        assert_eq!(t.name, "Via1");
        assert_eq!(t.height, 1.5);
        assert!(t.tags.is_empty());
    }

    #[test]
    fn saves_and_opens_each_format() -> Result<(), Error> {
        let dir = tempfile::tempdir()?;
        for ext in ["json", "yaml", "toml"] {
            let path = dir.path().join(format!("thing.{}", ext));
            thing().save_auto(&path)?;
            let back = Thing::open_auto(&path)?;
            assert_eq!(back, thing());
        }
        Ok(())
    }
}
