use core::ops::{Add, Div, Mul, Neg, Sub};

use super::Rational;
use crate::error::Error;
use crate::math::lcm;

impl Rational {
    /// Report an error when both operands are NaN, propagate a single
    /// NaN operand.
    fn propagate_nan(self, rhs: Rational) -> Result<bool, Error> {
        if self.is_nan() && rhs.is_nan() {
            Err(Error::InvalidOperation)
        } else {
            Ok(self.is_nan() || rhs.is_nan())
        }
    }

    /// Add two fractions over their least common denominator.
    ///
    /// Fails with [`Error::InvalidOperation`] when both operands are
    /// NaN; a single NaN operand yields NaN.
    pub fn checked_add(self, rhs: Rational) -> Result<Rational, Error> {
        if self.propagate_nan(rhs)? {
            return Ok(Self::NAN);
        }

        let l = lcm(self.den, rhs.den);
        let num = self.num * (l / self.den) + rhs.num * (l / rhs.den);

        Ok(Rational::new(num, l))
    }

    /// Subtract `rhs` over the least common denominator.
    ///
    /// Fails with [`Error::InvalidOperation`] when both operands are
    /// NaN; a single NaN operand yields NaN.
    pub fn checked_sub(self, rhs: Rational) -> Result<Rational, Error> {
        if self.propagate_nan(rhs)? {
            return Ok(Self::NAN);
        }

        let l = lcm(self.den, rhs.den);
        let num = self.num * (l / self.den) - rhs.num * (l / rhs.den);

        Ok(Rational::new(num, l))
    }

    /// Multiply two fractions.
    ///
    /// Fails with [`Error::InvalidOperation`] when both operands are
    /// NaN; a single NaN operand yields NaN.
    pub fn checked_mul(self, rhs: Rational) -> Result<Rational, Error> {
        if self.propagate_nan(rhs)? {
            return Ok(Self::NAN);
        }

        Ok(Rational::new(self.num * rhs.num, self.den * rhs.den))
    }

    /// Divide by `rhs` by cross-multiplying.
    ///
    /// Fails with [`Error::InvalidOperation`] when both operands are
    /// NaN; a single NaN operand yields NaN. Dividing by zero yields
    /// NaN through the zero-denominator construction path.
    pub fn checked_div(self, rhs: Rational) -> Result<Rational, Error> {
        if self.propagate_nan(rhs)? {
            return Ok(Self::NAN);
        }

        Ok(Rational::new(self.num * rhs.den, self.den * rhs.num))
    }
}

// Operator impls over (Rational, Rational), (Rational, i64) and
// (i64, Rational), delegating to the checked methods. Like integer
// division by zero in the standard library, the operator form panics
// on the one reportable error (both operands NaN); callers that need
// to observe it use the checked methods.
macro_rules! impl_rational_op {
    ($($op:ident :: $method:ident => $checked:ident),* $(,)?) => {$(
        impl $op for Rational {
            type Output = Rational;

            /// # Panics
            ///
            /// Panics when both operands are NaN; see the checked
            /// counterpart.
            fn $method(self, rhs: Rational) -> Rational {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $op<i64> for Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Rational {
                self.$method(Rational::from_int(rhs))
            }
        }

        impl $op<Rational> for i64 {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational::from_int(self).$method(rhs)
            }
        }
    )*};
}

impl_rational_op! {
    Add::add => checked_add,
    Sub::sub => checked_sub,
    Mul::mul => checked_mul,
    Div::div => checked_div,
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}
