//! Typed access to environment variables.
//!
//! Every accessor follows the same contract: look the variable up in the
//! source, fall back to the default when the variable is absent or empty,
//! otherwise parse the raw string into the target type. Defaults never mask
//! a malformed value.

use serde_json::Value;
use url::Url;

use crate::errors::{Error, Result};
use crate::path::ParsedPath;
use crate::source::{ProcessEnv, Source};

/// Typed reader over a key-value [`Source`].
///
/// The source is injected so the reader works against the live process
/// environment in production and against a plain map in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    /// Reader over the live process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: Source> Env<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The raw string value, unchanged. Any present value is valid.
    pub fn string(&self, name: &str) -> Result<String> {
        self.resolve(name, None, |raw| Ok(raw.to_string()))
    }

    pub fn string_or(&self, name: &str, default: impl Into<String>) -> Result<String> {
        self.resolve(name, Some(default.into()), |raw| Ok(raw.to_string()))
    }

    /// A floating-point value. The longest numeric prefix is used, so
    /// `"8080x"` reads as `8080.0`; a value without one is an error.
    pub fn number(&self, name: &str) -> Result<f64> {
        self.resolve(name, None, |raw| parse_number(name, raw))
    }

    pub fn number_or(&self, name: &str, default: f64) -> Result<f64> {
        self.resolve(name, Some(default), |raw| parse_number(name, raw))
    }

    /// An integer value with leading-integer semantics: `"3.7"` reads as `3`
    /// and `"12abc"` as `12`, while a value without a digit prefix is an
    /// error.
    pub fn int(&self, name: &str) -> Result<i64> {
        self.resolve(name, None, |raw| parse_int(name, raw))
    }

    pub fn int_or(&self, name: &str, default: i64) -> Result<i64> {
        self.resolve(name, Some(default), |raw| parse_int(name, raw))
    }

    /// A boolean: `"true"` or `"false"`, case-insensitively. Anything else is
    /// an error.
    pub fn boolean(&self, name: &str) -> Result<bool> {
        self.resolve(name, None, |raw| parse_boolean(name, raw))
    }

    pub fn boolean_or(&self, name: &str, default: bool) -> Result<bool> {
        self.resolve(name, Some(default), |raw| parse_boolean(name, raw))
    }

    /// An absolute URL, validated by [`Url::parse`].
    pub fn url(&self, name: &str) -> Result<Url> {
        self.resolve(name, None, |raw| parse_url(name, raw))
    }

    /// Like [`Env::url`], but with a fallback for the absent case. The
    /// default may be an already-parsed [`Url`], used verbatim, or a raw
    /// string parsed exactly like a live value would be.
    pub fn url_or(&self, name: &str, default: impl Into<UrlDefault>) -> Result<Url> {
        match self.fetch(name) {
            Some(raw) => parse_url(name, &raw),
            None => default.into().resolve(name),
        }
    }

    /// The structural parts of a path value. Decomposition accepts any
    /// string, so a present value never fails.
    pub fn path(&self, name: &str) -> Result<ParsedPath> {
        self.resolve(name, None, |raw| Ok(ParsedPath::parse(raw)))
    }

    /// Like [`Env::path`], but with a fallback for the absent case, either
    /// already decomposed or a raw string decomposed on use.
    pub fn path_or(&self, name: &str, default: impl Into<PathDefault>) -> Result<ParsedPath> {
        match self.fetch(name) {
            Some(raw) => Ok(ParsedPath::parse(&raw)),
            None => Ok(default.into().resolve()),
        }
    }

    /// A JSON document of any shape.
    pub fn json(&self, name: &str) -> Result<Value> {
        self.resolve(name, None, |raw| parse_json(name, raw))
    }

    pub fn json_or(&self, name: &str, default: Value) -> Result<Value> {
        self.resolve(name, Some(default), |raw| parse_json(name, raw))
    }

    /// Absent and empty are the same thing: the empty string is not a valid
    /// raw value for any type.
    fn fetch(&self, name: &str) -> Option<String> {
        self.source.get(name).filter(|raw| !raw.is_empty())
    }

    fn resolve<T>(
        &self,
        name: &str,
        default: Option<T>,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<T> {
        match self.fetch(name) {
            Some(raw) => parse(&raw),
            None => default.ok_or_else(|| Error::not_found(name)),
        }
    }
}

/// Default for [`Env::url_or`].
#[derive(Clone, Debug)]
pub enum UrlDefault {
    Parsed(Url),
    Raw(String),
}

impl UrlDefault {
    fn resolve(self, name: &str) -> Result<Url> {
        match self {
            Self::Parsed(url) => Ok(url),
            Self::Raw(raw) => parse_url(name, &raw),
        }
    }
}

impl From<Url> for UrlDefault {
    fn from(url: Url) -> Self {
        Self::Parsed(url)
    }
}

impl From<&str> for UrlDefault {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for UrlDefault {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

/// Default for [`Env::path_or`].
#[derive(Clone, Debug)]
pub enum PathDefault {
    Parsed(ParsedPath),
    Raw(String),
}

impl PathDefault {
    fn resolve(self) -> ParsedPath {
        match self {
            Self::Parsed(path) => path,
            Self::Raw(raw) => ParsedPath::parse(&raw),
        }
    }
}

impl From<ParsedPath> for PathDefault {
    fn from(path: ParsedPath) -> Self {
        Self::Parsed(path)
    }
}

impl From<&str> for PathDefault {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for PathDefault {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

fn parse_number(name: &str, raw: &str) -> Result<f64> {
    leading_float(raw).ok_or_else(|| Error::invalid_type(name, "number"))
}

fn parse_int(name: &str, raw: &str) -> Result<i64> {
    leading_int(raw).ok_or_else(|| Error::invalid_type(name, "int"))
}

fn parse_boolean(name: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_type(name, "boolean")),
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|_| Error::invalid_type(name, "url"))
}

fn parse_json(name: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|_| Error::invalid_type(name, "json"))
}

/// Longest `[+-]?digits` prefix as an `i64`. Leading whitespace is skipped
/// and anything after the digits is ignored; a prefix that overflows `i64`
/// counts as no integer at all.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix(['+', '-']) {
        Some(rest) => (&s[..1], rest),
        None => ("", s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    format!("{sign}{}", &digits[..end]).parse().ok()
}

/// Longest `[+-]? digits [. digits] [e[+-]digits]` prefix as an `f64`.
/// Leading whitespace is skipped and anything after the prefix is ignored.
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digit_run = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer = digit_run(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(end + 1);
        end += 1 + fraction;
    }
    if integer == 0 && fraction == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exponent = digit_run(exp_end);
        if exponent > 0 {
            end = exp_end + exponent;
        }
    }
    s[..end].parse().ok()
}
