use num_traits::ToPrimitive;

use super::Rational;
use crate::error::Error;

// Total conversions for every integer type that widens losslessly
// into the numerator.
macro_rules! impl_from_int {
    ($($t:ty)*) => {$(
        impl From<$t> for Rational {
            fn from(n: $t) -> Rational {
                Rational::from_int(n as i64)
            }
        }
    )*};
}

impl_from_int!(i8 i16 i32 i64 u8 u16 u32);

/// The float view is total: NaN maps to [`f64::NAN`].
impl From<Rational> for f64 {
    fn from(r: Rational) -> f64 {
        r.to_f64()
    }
}

/// The integer view is explicit and fallible: only a non-NaN value
/// whose reduced denominator is 1 converts, yielding its numerator.
impl TryFrom<Rational> for i64 {
    type Error = Error;

    fn try_from(r: Rational) -> Result<i64, Error> {
        if r.is_nan() || r.den != 1 {
            Err(Error::NotAnInteger)
        } else {
            Ok(r.num)
        }
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.is_integer().then_some(self.num)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}
