//! Integer primitives backing fraction reduction.

use num_traits::PrimInt;

fn magnitude<T: PrimInt>(x: T) -> T {
    if x < T::zero() {
        T::zero() - x
    } else {
        x
    }
}

/// Greatest common divisor by magnitude, computed with the iterative
/// Euclidean algorithm.
///
/// `gcd(a, 0) == gcd(0, a) == |a|`, and `gcd(0, 0) == 1` so the result
/// is always safe to divide by.
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let mut a = magnitude(a);
    let mut b = magnitude(b);

    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }

    if a == T::zero() {
        T::one()
    } else {
        a
    }
}

/// Least common multiple by magnitude, `|a * b| / gcd(a, b)`.
///
/// A zero operand yields 1 so the result stays usable as a
/// denominator.
pub fn lcm<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::one();
    }

    magnitude(a * b) / gcd(a, b)
}
