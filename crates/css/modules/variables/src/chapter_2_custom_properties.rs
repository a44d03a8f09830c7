//! CSS Variables §2 — Defining custom properties.
//! Spec: <https://www.w3.org/TR/css-variables-1/#defining-variables>

use crate::ValidationError;
use crate::chapter_3_var_notation::{get_css_var_name, split_reference};
use core::fmt;
use core::str::FromStr;
use cssparser::serialize_identifier;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters allowed in a custom property name body, with a non-digit first character.
#[allow(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static IDENT_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_\-\\][a-zA-Z0-9_\-\\]*$").expect("valid ident pattern"));

/// A hex escape: backslash, one to six hex digits, optional trailing whitespace.
#[allow(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static HEX_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\[0-9a-fA-F]{1,6}\s?").expect("valid escape pattern"));

/// Whether `segment` is already in its serialized identifier form.
fn is_serialized_identifier(segment: &str) -> bool {
    let mut serialized = String::with_capacity(segment.len());
    serialize_identifier(segment, &mut serialized).is_ok() && serialized == segment
}

/// Check a custom property name body. A single leading `--` is ignored.
///
/// Besides the character set check, every run of text between hex escapes
/// (`\2665`, `\20 `) must already be serialized: names that would need further
/// escaping are rejected, pre-escaped unicode is accepted.
///
/// ```
/// use css_variables::is_valid_css_var_name;
///
/// assert!(is_valid_css_var_name("my-var"));
/// assert!(is_valid_css_var_name("foo\\2665"));
/// assert!(!is_valid_css_var_name("1foo"));
/// assert!(!is_valid_css_var_name("foo bar"));
/// ```
pub fn is_valid_css_var_name(name: &str) -> bool {
    let body = name.strip_prefix("--").unwrap_or(name);
    if body.is_empty() || body.contains(' ') || !IDENT_BODY.is_match(body) {
        return false;
    }
    HEX_ESCAPE
        .split(body)
        .all(|segment| segment.is_empty() || is_serialized_identifier(segment))
}

/// Check a full custom property name, including the `--` prefix.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#custom-property>
pub fn is_css_var_name(value: &str) -> bool {
    value.starts_with("--")
        && value != "--"
        && !value.starts_with("---")
        && is_valid_css_var_name(value)
}

/// A validated custom property name such as `--color-primary`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct CssVarName(String);

impl CssVarName {
    /// Validate `value` (which must include the `--` prefix).
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidName` when `value` fails [`is_css_var_name`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_css_var_name(&value) {
            Ok(Self(value))
        } else {
            debug!("Rejected custom property name {value:?}");
            Err(ValidationError::InvalidName(value))
        }
    }

    /// The name, including the `--` prefix.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssVarName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for CssVarName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CssVarName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for CssVarName {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

/// Value handed to [`assign_css_var`].
///
/// `Missing` is the absent value and is rejected; `Null` is an explicit
/// "no value" and is recorded as such.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CssVarValue {
    #[default]
    Missing,
    Null,
    Value(String),
}

impl From<&str> for CssVarValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for CssVarValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl<T: Into<String>> From<Option<T>> for CssVarValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, |text| Self::Value(text.into()))
    }
}

/// A custom property paired with the value assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssVarDefinition {
    name: CssVarName,
    value: Option<String>,
    fallback: Option<String>,
}

impl CssVarDefinition {
    /// The property being defined.
    #[inline]
    pub fn name(&self) -> &CssVarName {
        &self.name
    }

    /// The assigned value; `None` for an explicit null.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The inline fallback carried by the reference the definition was made from.
    #[inline]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

/// Renders the declaration, e.g. `--gap: 4px`. A null value renders as `initial`.
impl fmt::Display for CssVarDefinition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or("initial");
        write!(formatter, "{}: {value}", self.name)
    }
}

/// Pair the property named by `variable` (a `var()` reference) with `value`.
///
/// ```
/// use css_variables::{assign_css_var, create_css_var};
///
/// let gap = create_css_var("gap")?;
/// let definition = assign_css_var(&gap, "4px")?;
/// assert_eq!(definition.name().as_str(), "--gap");
/// assert_eq!(definition.value(), Some("4px"));
/// # Ok::<(), css_variables::ValidationError>(())
/// ```
///
/// # Errors
/// - `ValidationError::MissingValue` when `value` is [`CssVarValue::Missing`].
/// - `ValidationError::InvalidReference` when the referenced name is not a
///   custom property name.
pub fn assign_css_var(
    variable: impl AsRef<str>,
    value: impl Into<CssVarValue>,
) -> Result<CssVarDefinition, ValidationError> {
    let assigned = match value.into() {
        CssVarValue::Missing => return Err(ValidationError::MissingValue),
        CssVarValue::Null => None,
        CssVarValue::Value(text) => Some(text),
    };

    let reference = variable.as_ref();
    let name = get_css_var_name(reference);
    if !name.starts_with("--") || !is_css_var_name(name) {
        debug!("Cannot assign to {reference:?}: {name:?} is not a custom property");
        return Err(ValidationError::InvalidReference(name.to_owned()));
    }

    let fallback = split_reference(reference)
        .and_then(|(_, fallback)| fallback)
        .map(str::to_owned);

    Ok(CssVarDefinition {
        name: CssVarName(name.to_owned()),
        value: assigned,
        fallback,
    })
}

/// Serializes as the single-entry mapping `{ "--name": value }`.
#[cfg(feature = "serde")]
impl serde::Serialize for CssVarDefinition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name.as_str(), &self.value)?;
        map.end()
    }
}
