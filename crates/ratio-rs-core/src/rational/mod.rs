use core::fmt::{self, Display};

use num_traits::{One, Zero};

use crate::math::gcd;

mod convert;
mod ops;


/// An exact fraction, reduced to lowest terms on construction.
///
/// For any numeric value the denominator is positive (the sign lives
/// on the numerator) and numerator and denominator share no common
/// divisor; zero is always represented as `0 / 1`. A zero denominator
/// is the sentinel for "not a number", see [`Rational::NAN`].
///
/// Equality is structural over the canonical fields, so unlike IEEE
/// floats `Rational::NAN == Rational::NAN` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// The value denoting an undefined result.
    ///
    /// NaN is a value, not an error: it is produced silently by
    /// constructing with a zero denominator or by dividing by zero,
    /// and it propagates through arithmetic with numeric operands.
    pub const NAN: Rational = Rational { num: 0, den: 0 };

    /// The canonical zero, `0 / 1`.
    pub const ZERO: Rational = Rational { num: 0, den: 1 };

    /// The canonical one, `1 / 1`.
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Create a fraction from a numerator and a denominator.
    ///
    /// The result is reduced by the greatest common divisor, a
    /// negative denominator's sign is folded into the numerator and a
    /// zero numerator canonicalizes the denominator to 1. A zero
    /// denominator yields [`Rational::NAN`] instead of an error.
    pub fn new(num: i64, den: i64) -> Rational {
        if den == 0 {
            return Self::NAN;
        }

        if num == 0 {
            return Self::ZERO;
        }

        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);

        if den < 0 {
            Rational { num: -num, den: -den }
        } else {
            Rational { num, den }
        }
    }

    /// Create a whole number, `n / 1`.
    pub const fn from_int(n: i64) -> Rational {
        Rational { num: n, den: 1 }
    }

    /// Get the numerator.
    ///
    /// For NaN this returns the canonical 0, which carries no meaning.
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Get the denominator. Positive for numeric values, 0 for NaN.
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// True if the value denotes an undefined result.
    pub const fn is_nan(&self) -> bool {
        self.den == 0
    }

    /// True if the value is zero.
    pub const fn is_zero(&self) -> bool {
        self.num == 0 && self.den != 0
    }

    /// True if the value is a whole number.
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Swap numerator and denominator.
    ///
    /// The reciprocal of zero is NaN, and the reciprocal of NaN is
    /// NaN.
    pub fn reciprocal(self) -> Rational {
        Rational::new(self.den, self.num)
    }

    /// Get the value as a floating point number. NaN maps to
    /// [`f64::NAN`].
    pub fn to_f64(&self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else {
            self.num as f64 / self.den as f64
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Numeric values render as `<numerator> / <denominator>`, NaN as the
/// dedicated `NaN` token.
impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            write!(f, "NaN")
        } else {
            write!(f, "{} / {}", self.num, self.den)
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }
}
