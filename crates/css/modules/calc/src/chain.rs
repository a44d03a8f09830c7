//! Fluent `calc()` builder.

use crate::{Operand, add, divide, multiply, negate, subtract};
use core::{fmt, iter};

/// Immutable handle on a `calc()` expression under construction.
///
/// Each operation returns a new chain whose value is the static operation
/// applied to `(current, operands...)`. The current value already carries its
/// own `calc(...)`, which becomes a parenthesised group in the next step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalcChain {
    value: String,
}

/// Start a chain from `initial`. The seed is kept verbatim, without a `calc(...)` wrapper.
///
/// ```
/// use css_calc::calc;
///
/// let value = calc("100px").add(["2rem"]).multiply([2]).divide([3]);
/// assert_eq!(value.to_string(), "calc(((100px + 2rem) * 2) / 3)");
/// ```
#[inline]
pub fn calc(initial: impl Into<Operand>) -> CalcChain {
    CalcChain {
        value: initial.into().into_string(),
    }
}

impl CalcChain {
    fn with_current<I>(&self, operands: I) -> impl Iterator<Item = Operand>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        iter::once(Operand::from(self)).chain(operands.into_iter().map(Into::<Operand>::into))
    }

    /// `calc(current + operands...)`.
    pub fn add<I>(&self, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        calc(add(self.with_current(operands)))
    }

    /// `calc(current - operands...)`.
    pub fn subtract<I>(&self, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        calc(subtract(self.with_current(operands)))
    }

    /// `calc(current * operands...)`.
    pub fn multiply<I>(&self, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        calc(multiply(self.with_current(operands)))
    }

    /// `calc(current / operands...)`.
    pub fn divide<I>(&self, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        calc(divide(self.with_current(operands)))
    }

    /// `calc(current * -1)`.
    pub fn negate(&self) -> Self {
        calc(negate(self))
    }

    /// The current expression text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the chain, returning the expression text.
    #[inline]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for CalcChain {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.value)
    }
}
