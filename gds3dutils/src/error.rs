//!
//! # Error-Helper Utilities
//!
//! Traits for routing constraint failures through a type's own error constructor,
//! so that checks on e.g. a layer stack can report the stack's context with each failure.
//!
//! ```rust
//! use gds3dutils::error::{ErrorHelper, Unwrapper};
//!
//! struct Stack {
//!     names: Vec<String>,
//! }
//! impl ErrorHelper for Stack {
//!     type Error = String;
//!     fn err(&self, msg: impl Into<String>) -> Self::Error {
//!         format!("Invalid stack {:?}: {}", self.names, msg.into())
//!     }
//! }
//! impl Stack {
//!     fn top(&self) -> Result<&String, String> {
//!         self.assert(self.names.len() > 1, "needs at least two layers")?;
//!         self.names.last().unwrapper(self, "empty stack")
//!     }
//! }
//! ```
//!

///
/// # ErrorHelper
///
/// Implementers supply `err`, creating their error type from a message.
/// The provided methods `fail`, `unwrap` and `assert` are built on it.
///
pub trait ErrorHelper {
    type Error;

    /// Create and return a [Self::Error] value.
    fn err(&self, msg: impl Into<String>) -> Self::Error;
    /// Return failure
    fn fail<T>(&self, msg: impl Into<String>) -> Result<T, Self::Error> {
        Err(self.err(msg))
    }
    /// Unwrap the [Option] `opt` if it is [Some], and return our error if not.
    fn unwrap<T>(&self, opt: Option<T>, msg: impl Into<String>) -> Result<T, Self::Error> {
        match opt {
            Some(val) => Ok(val),
            None => self.fail(msg),
        }
    }
    /// Assert a boolean condition. Returns through `self.fail` if it is not satisfied.
    fn assert(&self, b: bool, msg: impl Into<String>) -> Result<(), Self::Error> {
        match b {
            true => Ok(()),
            false => self.fail(msg),
        }
    }
}

///
/// # Unwrapper
///
/// Post-fix application of an [`ErrorHelper`] to [`Option`]s and [`Result`]s.
/// Import the trait and call `unwrapper` in place of `unwrap` or `expect`.
///
pub trait Unwrapper {
    type Ok;
    fn unwrapper<H>(self, helper: &H, msg: impl Into<String>) -> Result<Self::Ok, H::Error>
    where
        H: ErrorHelper;
}

impl<T> Unwrapper for Option<T> {
    type Ok = T;
    fn unwrapper<H>(self, helper: &H, msg: impl Into<String>) -> Result<Self::Ok, H::Error>
    where
        H: ErrorHelper,
    {
        match self {
            Some(t) => Ok(t),
            None => helper.fail(msg),
        }
    }
}

/// Note the original error value is discarded in favor of `msg`.
impl<T, E> Unwrapper for Result<T, E> {
    type Ok = T;
    fn unwrapper<H>(
        self,
        helper: &H,
        msg: impl Into<String>,
    ) -> Result<<Self as Unwrapper>::Ok, H::Error>
    where
        H: ErrorHelper,
    {
        match self {
            Ok(t) => Ok(t),
            Err(_) => helper.fail(msg),
        }
    }
}
