//! CSS Custom Properties for Cascading Variables Module Level 1 — authoring helpers.
//! Spec: <https://www.w3.org/TR/css-variables-1/>
//!
//! Builds and validates `var()` references without resolving them: names are
//! checked against the custom property grammar, references may carry
//! fallbacks, and references can be chained into nested fallback expressions.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_2_custom_properties;
pub mod chapter_3_var_notation;

pub use chapter_2_custom_properties::{
    CssVarDefinition, CssVarName, CssVarValue, assign_css_var, is_css_var_name,
    is_valid_css_var_name,
};
pub use chapter_3_var_notation::{
    CssVarFunction, CssVarOptions, create_css_var, create_css_var_with, fallback_css_var,
    get_css_var_name,
};

use core::fmt;

/// Validation failure raised by the constructors in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// An empty string was given as a variable name.
    EmptyName,
    /// The variable name does not follow custom property syntax.
    InvalidName(String),
    /// A fallback chain needs at least two values; holds the count received.
    TooFewValues(usize),
    /// A value other than the last one in a fallback chain is not a `var()` reference.
    NotAVarFunction(String),
    /// The composed fallback chain is not a well-formed `var()` reference.
    MalformedChain(String),
    /// No value was supplied for an assignment. An explicit null is allowed.
    MissingValue,
    /// The reference handed to an assignment does not name a custom property.
    InvalidReference(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(formatter, "CSS variable name cannot be empty"),
            Self::InvalidName(name) => write!(
                formatter,
                "Invalid CSS variable name: \"{name}\". Names must:\n\
                 - Start with a letter, underscore, or hyphen\n\
                 - Contain only letters, numbers, underscores, hyphens, or escaped unicode\n\
                 - Not contain spaces or special characters"
            ),
            Self::TooFewValues(count) => write!(
                formatter,
                "A CSS variable fallback chain needs at least two values, got {count}"
            ),
            Self::NotAVarFunction(_) => write!(
                formatter,
                "All values except the last must be valid CSS variable functions"
            ),
            Self::MalformedChain(_) => write!(formatter, "Invalid CSS variable function created"),
            Self::MissingValue => write!(formatter, "CSS variable value cannot be undefined"),
            Self::InvalidReference(_) => write!(formatter, "Invalid CSS variable name"),
        }
    }
}

impl std::error::Error for ValidationError {}
