//! Typenv - typed access to environment configuration.
//!
//! This crate reads variables out of a flat string-keyed source and converts
//! them into strongly-typed values, with optional defaults and uniform errors
//! for missing or malformed entries.
//!
//! # Defaults
//!
//! A default only covers absence (a missing variable, or one set to the empty
//! string). A present value that fails to parse is always an error, even when
//! a default was supplied:
//! - Missing variable, default given: the default is returned as-is.
//! - Missing variable, no default: [`Error::NotFound`].
//! - Present but malformed: [`Error::InvalidType`], default or no default.
//!
//! # Usage
//!
//! ```ignore
//! use typenv::Env;
//!
//! let env = Env::process();
//! let port = env.int_or("PORT", 8080)?;
//! let endpoint = env.url("ENDPOINT")?;
//! let flags = env.json_or("FLAGS", typenv::serde_json::json!({}))?;
//! ```

pub mod env;
pub mod errors;
pub mod path;
pub mod source;

pub use env::{Env, PathDefault, UrlDefault};
pub use errors::{Error, Result};
pub use path::ParsedPath;
pub use serde_json;
pub use source::{ProcessEnv, Source};
pub use url;
