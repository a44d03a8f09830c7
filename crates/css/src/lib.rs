//! CSS authoring utilities: `calc()` expressions and custom property references.
//!
//! ```
//! use css_utils::{calc, vars};
//!
//! let gap = vars::create_css_var("gap")?;
//! let width = calc::calc("100%").subtract([gap.as_str()]);
//! assert_eq!(width.to_string(), "calc(100% - var(--gap))");
//! # Ok::<(), vars::ValidationError>(())
//! ```

#![forbid(unsafe_code)]

/// Builder for `calc()` expressions.
pub mod calc {
    pub use css_calc::*;
}

/// Creation, validation and composition of `var()` references.
pub mod vars {
    pub use css_variables::*;
}
