//!
//! # Techfile Result and Error Types
//!

// Local Imports
use lyp21::LypError;
use techlef21::LefError;

/// # [TechError] Result Type
pub type TechResult<T> = Result<T, TechError>;

///
/// # Techfile Error Enumeration
///
pub enum TechError {
    /// File-System Errors: reading inputs, or creating the techfile
    Io(std::io::Error),
    /// Malformed Input Content
    Parse(String),
    /// Invalid Layer-Stack Configuration
    Config(String),
    /// Boxed External Errors
    Boxed(Box<dyn std::error::Error + Send + Sync>),
}
impl TechError {
    /// Create a [TechError::Parse] from anything String-convertible
    pub fn parse(s: impl Into<String>) -> Self {
        Self::Parse(s.into())
    }
    /// Create a [TechError::Config] from anything String-convertible
    pub fn config(s: impl Into<String>) -> Self {
        Self::Config(s.into())
    }
}
impl std::fmt::Debug for TechError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TechError::Io(err) => write!(f, "I/O Error: {}", err),
            TechError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            TechError::Config(msg) => write!(f, "Layer Stack Error: {}", msg),
            TechError::Boxed(err) => err.fmt(f),
        }
    }
}
impl std::fmt::Display for TechError {
    /// Delegates to the [Debug] implementation
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
impl std::error::Error for TechError {}
impl From<std::io::Error> for TechError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<LypError> for TechError {
    fn from(e: LypError) -> Self {
        match e {
            LypError::Io(e) => Self::Io(e),
            e @ LypError::Parse { .. } => Self::Parse(e.to_string()),
        }
    }
}
impl From<LefError> for TechError {
    fn from(e: LefError) -> Self {
        match e {
            LefError::Io(e) => Self::Io(e),
        }
    }
}
impl From<gds3dutils::ser::Error> for TechError {
    fn from(e: gds3dutils::ser::Error) -> Self {
        Self::Boxed(Box::new(e))
    }
}
