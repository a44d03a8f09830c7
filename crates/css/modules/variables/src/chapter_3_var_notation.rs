//! CSS Variables §3 — Using cascading variables: the `var()` notation.
//! Spec: <https://www.w3.org/TR/css-variables-1/#using-variables>

use crate::ValidationError;
use crate::chapter_2_custom_properties::is_valid_css_var_name;
use core::fmt;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// `var(--name)` or `var(--name,<fallback>)`; the fallback is checked separately.
#[allow(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static VAR_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^var\(--[a-zA-Z0-9_\-\\]+(?:,(.*))?\)$").expect("valid var() pattern")
});

/// Any text wrapped in `var(` ... `)`. Same flags as `VAR_FUNCTION`.
#[allow(clippy::expect_used, reason = "Pattern is a compile-time constant")]
static VAR_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^var\((.*)\)$").expect("valid var() wrapper pattern"));

/// Whether every `(` in `text` is closed and no `)` closes more than was opened.
fn has_balanced_parens(text: &str) -> bool {
    let mut depth = 0_usize;
    for character in text.chars() {
        match character {
            '(' => depth += 1,
            ')' => {
                let Some(remaining) = depth.checked_sub(1) else {
                    return false;
                };
                depth = remaining;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Whether `value` is a syntactically valid `var()` reference.
fn is_css_var_function(value: &str) -> bool {
    VAR_FUNCTION.captures(value).is_some_and(|captures| {
        captures
            .get(1)
            .is_none_or(|fallback| has_balanced_parens(fallback.as_str()))
    })
}

/// Split the inside of `var(...)` into its name and optional fallback, both trimmed.
pub(crate) fn split_reference(reference: &str) -> Option<(&str, Option<&str>)> {
    let arguments = VAR_WRAPPER.captures(reference)?.get(1)?.as_str();
    Some(arguments.split_once(',').map_or_else(
        || (arguments.trim(), None),
        |(name, fallback)| (name.trim(), Some(fallback.trim())),
    ))
}

/// A `var()` reference such as `var(--gap)` or `var(--gap, 4px)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct CssVarFunction(String);

impl CssVarFunction {
    /// Validate an existing `var()` string.
    ///
    /// # Errors
    /// Returns `ValidationError::NotAVarFunction` when `value` is not a
    /// well-formed `var()` reference.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if is_css_var_function(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(ValidationError::NotAVarFunction(value.to_owned()))
        }
    }

    /// The full reference text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The referenced property name, including `--`.
    #[inline]
    pub fn name(&self) -> &str {
        get_css_var_name(&self.0)
    }

    /// The inline fallback, if any.
    pub fn fallback(&self) -> Option<&str> {
        split_reference(&self.0).and_then(|(_, fallback)| fallback)
    }

    /// Consume the reference, returning its text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CssVarFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl AsRef<str> for CssVarFunction {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CssVarFunction> for String {
    #[inline]
    fn from(function: CssVarFunction) -> Self {
        function.0
    }
}

/// Options for [`create_css_var_with`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssVarOptions {
    /// Value used when the property is not defined. Inserted verbatim.
    pub fallback: Option<String>,
}

impl CssVarOptions {
    /// Set the fallback value.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// Create `var(--{name})`.
///
/// ```
/// use css_variables::create_css_var;
///
/// assert_eq!(create_css_var("my-var")?.as_str(), "var(--my-var)");
/// # Ok::<(), css_variables::ValidationError>(())
/// ```
///
/// # Errors
/// See [`create_css_var_with`].
#[inline]
pub fn create_css_var(name: &str) -> Result<CssVarFunction, ValidationError> {
    create_css_var_with(name, &CssVarOptions::default())
}

/// Create `var(--{name})`, or `var(--{name}, {fallback})` when a non-empty
/// fallback is set. `name` is given without the `--` prefix.
///
/// # Errors
/// - `ValidationError::EmptyName` when `name` is empty.
/// - `ValidationError::InvalidName` when `name` fails [`is_valid_css_var_name`].
pub fn create_css_var_with(
    name: &str,
    options: &CssVarOptions,
) -> Result<CssVarFunction, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !is_valid_css_var_name(name) {
        debug!("Rejected CSS variable name {name:?}");
        return Err(ValidationError::InvalidName(name.to_owned()));
    }

    let reference = match options.fallback.as_deref() {
        Some(fallback) if !fallback.is_empty() => format!("var(--{name}, {fallback})"),
        Some(_) | None => format!("var(--{name})"),
    };
    Ok(CssVarFunction(reference))
}

/// Chain references into nested fallbacks: each value falls back to the next.
///
/// Every value except the last must be a `var()` reference; the last may be
/// any value and becomes the innermost fallback.
///
/// ```
/// use css_variables::fallback_css_var;
///
/// let chained = fallback_css_var(&["var(--foo)", "var(--baz)", "12"])?;
/// assert_eq!(chained.as_str(), "var(--foo, var(--baz, 12))");
/// # Ok::<(), css_variables::ValidationError>(())
/// ```
///
/// # Errors
/// - `ValidationError::TooFewValues` when fewer than two values are given.
/// - `ValidationError::NotAVarFunction` when a value other than the last is
///   not a `var()` reference.
/// - `ValidationError::MalformedChain` when the composed result does not
///   validate as a `var()` reference.
pub fn fallback_css_var<S: AsRef<str>>(values: &[S]) -> Result<CssVarFunction, ValidationError> {
    let Some((last, references)) = values.split_last() else {
        return Err(ValidationError::TooFewValues(0));
    };
    if references.is_empty() {
        return Err(ValidationError::TooFewValues(values.len()));
    }
    if let Some(invalid) = references
        .iter()
        .map(AsRef::as_ref)
        .find(|reference| !is_css_var_function(reference))
    {
        debug!("Fallback chain rejected: {invalid:?} is not a var() reference");
        return Err(ValidationError::NotAVarFunction(invalid.to_owned()));
    }

    let chained = references
        .iter()
        .rev()
        .fold(last.as_ref().to_owned(), |accumulated, reference| {
            let text = reference.as_ref();
            let head = text.strip_suffix(')').unwrap_or(text);
            format!("{head}, {accumulated})")
        });

    if !is_css_var_function(&chained) {
        debug!("Composed fallback chain {chained:?} is not a var() reference");
        return Err(ValidationError::MalformedChain(chained));
    }
    debug!("Composed fallback chain {chained}");
    Ok(CssVarFunction(chained))
}

/// Extract the property name from a `var()` reference.
///
/// Input that is not wrapped in `var(` ... `)` is returned unchanged.
///
/// ```
/// use css_variables::get_css_var_name;
///
/// assert_eq!(get_css_var_name("var(--my-var)"), "--my-var");
/// assert_eq!(get_css_var_name("var(--my-var, red)"), "--my-var");
/// assert_eq!(get_css_var_name("--my-var"), "--my-var");
/// ```
pub fn get_css_var_name(variable: &str) -> &str {
    split_reference(variable).map_or(variable, |(name, _)| name)
}
