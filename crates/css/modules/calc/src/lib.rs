//! CSS Values and Units Module Level 4 — `calc()` expression builder.
//! Spec: <https://www.w3.org/TR/css-values-4/#calc-func>
//!
//! Operations come in two flavours. The free functions ([`add`], [`subtract`],
//! [`multiply`], [`divide`], [`negate`]) join all operands into one flat
//! expression. [`CalcChain`] feeds its current value back in as the first
//! operand, so each step becomes a parenthesised group:
//!
//! ```
//! use css_calc::calc;
//!
//! let width = calc("100px").add(["2rem"]).multiply([2]);
//! assert_eq!(width.to_string(), "calc((100px + 2rem) * 2)");
//! ```

#![forbid(unsafe_code)]

mod chain;
mod operand;

pub use chain::{CalcChain, calc};
pub use operand::Operand;

use core::fmt;
use log::trace;

/// Arithmetic operators accepted inside `calc()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The operator symbol as written in CSS.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// Join `operands` with ` {operator} ` into a bare expression (no `calc(...)` wrapper).
///
/// Every literal `calc` in the joined text is removed, so an operand that is
/// already a `calc(...)` string keeps only its parentheses as a group.
///
/// ```
/// use css_calc::{Operator, expression};
///
/// assert_eq!(expression(Operator::Add, ["1px", "2rem"]), "1px + 2rem");
/// assert_eq!(expression(Operator::Multiply, ["calc(1px + 2rem)", "2"]), "(1px + 2rem) * 2");
/// ```
pub fn expression<I>(operator: Operator, operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let separator = format!(" {operator} ");
    let joined = operands
        .into_iter()
        .map(Into::<Operand>::into)
        .map(Operand::into_string)
        .collect::<Vec<_>>()
        .join(separator.as_str());
    joined.replace("calc", "")
}

fn wrap<I>(operator: Operator, operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let wrapped = format!("calc({})", expression(operator, operands));
    trace!("calc: composed {wrapped}");
    wrapped
}

/// `calc(a + b + ...)`.
#[inline]
pub fn add<I>(operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    wrap(Operator::Add, operands)
}

/// `calc(a - b - ...)`.
#[inline]
pub fn subtract<I>(operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    wrap(Operator::Subtract, operands)
}

/// `calc(a * b * ...)`.
#[inline]
pub fn multiply<I>(operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    wrap(Operator::Multiply, operands)
}

/// `calc(a / b / ...)`.
#[inline]
pub fn divide<I>(operands: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    wrap(Operator::Divide, operands)
}

/// `calc(x * -1)`.
#[inline]
pub fn negate(operand: impl Into<Operand>) -> String {
    multiply([operand.into(), Operand::from(-1_i32)])
}

/// Build a `Vec<Operand>` from values of mixed types, like `vec!`.
///
/// ```
/// use css_calc::{add, operands};
///
/// assert_eq!(add(operands!["100%", -20]), "calc(100% + -20)");
/// ```
#[macro_export]
macro_rules! operands {
    ($($operand:expr),* $(,)?) => {
        ::std::vec![$($crate::Operand::from($operand)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat expressions join every operand with the operator.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_expression_joins_operands() {
        assert_eq!(expression(Operator::Add, ["1px", "2rem"]), "1px + 2rem");
        assert_eq!(expression(Operator::Multiply, ["2", "50%"]), "2 * 50%");
        assert_eq!(expression(Operator::Divide, ["10px"]), "10px");
    }

    /// The word `calc` is stripped but its parentheses survive.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_expression_strips_calc_keyword() {
        assert_eq!(
            expression(Operator::Subtract, ["calc(100% - 1px)", "2px"]),
            "(100% - 1px) - 2px"
        );
    }

    /// A `calc` inside an operand's own text is removed too.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_calc_stripped_inside_operands() {
        assert_eq!(add(["var(--calc-x)", "1px"]), "calc(var(---x) + 1px)");
    }

    /// Static operations produce single-level expressions.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_static_operations() {
        assert_eq!(add(["1px", "2rem"]), "calc(1px + 2rem)");
        assert_eq!(add(["100%", "-20px"]), "calc(100% + -20px)");
        assert_eq!(subtract(["100%", "20px"]), "calc(100% - 20px)");
        assert_eq!(multiply(operands!["50%", 2]), "calc(50% * 2)");
        assert_eq!(divide(operands!["100vw", 3]), "calc(100vw / 3)");
        assert_eq!(add(["1px", "2px", "3px"]), "calc(1px + 2px + 3px)");
    }

    /// Negation multiplies by minus one.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_negate() {
        assert_eq!(negate("10px"), "calc(10px * -1)");
        assert_eq!(negate("25%"), "calc(25% * -1)");
    }

    /// Operators render as their CSS symbols.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
        assert_eq!(Operator::Multiply.to_string(), "*");
        assert_eq!(Operator::Divide.to_string(), "/");
    }
}
