//! Operands accepted by the `calc()` builder.

use crate::CalcChain;
use core::fmt;

/// A single `calc()` operand, stored as the text it contributes to the expression.
///
/// Numbers render as plain decimal text (`2.0_f64` becomes `2`); strings are
/// taken verbatim with no unit validation; a [`CalcChain`] contributes its
/// current `calc(...)` string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operand(String);

impl Operand {
    /// The operand text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the operand, returning its text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for Operand {
    #[inline]
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Operand {
    #[inline]
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for Operand {
    #[inline]
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<CalcChain> for Operand {
    #[inline]
    fn from(chain: CalcChain) -> Self {
        Self(chain.into_string())
    }
}

impl From<&CalcChain> for Operand {
    #[inline]
    fn from(chain: &CalcChain) -> Self {
        Self(chain.as_str().to_owned())
    }
}

macro_rules! operand_from_number {
    ($($number:ty),*) => {
        $(
            impl From<$number> for Operand {
                #[inline]
                fn from(number: $number) -> Self {
                    Self(number.to_string())
                }
            }
        )*
    };
}

operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Non-finite floats use the CSS `calc()` constants instead of Rust's `inf`.
macro_rules! operand_from_float {
    ($($float:ty),*) => {
        $(
            impl From<$float> for Operand {
                fn from(number: $float) -> Self {
                    if number.is_nan() {
                        Self(String::from("NaN"))
                    } else if number.is_infinite() {
                        let keyword = if number.is_sign_positive() { "infinity" } else { "-infinity" };
                        Self(String::from(keyword))
                    } else {
                        Self(number.to_string())
                    }
                }
            }
        )*
    };
}

operand_from_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    /// Numbers render the way they would be written in a stylesheet.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_numbers_render_as_decimal_text() {
        assert_eq!(Operand::from(2_i32).as_str(), "2");
        assert_eq!(Operand::from(-1_i64).as_str(), "-1");
        assert_eq!(Operand::from(2.0_f64).as_str(), "2");
        assert_eq!(Operand::from(0.5_f32).as_str(), "0.5");
    }

    /// Infinities and NaN render as the keywords `calc()` accepts.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Operand::from(f64::INFINITY).as_str(), "infinity");
        assert_eq!(Operand::from(f64::NEG_INFINITY).as_str(), "-infinity");
        assert_eq!(Operand::from(f64::NAN).as_str(), "NaN");
        assert_eq!(Operand::from(f32::INFINITY).as_str(), "infinity");
        assert_eq!(Operand::from(f32::NEG_INFINITY).as_str(), "-infinity");
    }

    /// Strings pass through untouched.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_strings_are_verbatim() {
        assert_eq!(Operand::from("not-a-length").as_str(), "not-a-length");
        assert_eq!(Operand::from(String::from("1e3px")).to_string(), "1e3px");
    }
}
