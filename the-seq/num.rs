//! Numeric capability shared by the numeric producers and statistics.

use std::fmt::Debug;

/// Integer or floating-point value supporting ordering and arithmetic.
///
/// Integer arithmetic wraps on overflow in both debug and release builds.
/// Floating-point arithmetic is plain IEEE-754.
pub trait Number: Copy + PartialOrd + Default + Debug {
  const ZERO: Self;

  fn plus(self, rhs: Self) -> Self;

  fn times(self, rhs: Self) -> Self;

  /// Lossy conversion used for averages.
  fn to_f64(self) -> f64;
}

macro_rules! impl_number {
  (wrapping: $($int:ty),* $(,)?) => {
    $(
      impl Number for $int {
        const ZERO: Self = 0;

        #[inline]
        fn plus(self, rhs: Self) -> Self {
          self.wrapping_add(rhs)
        }

        #[inline]
        fn times(self, rhs: Self) -> Self {
          self.wrapping_mul(rhs)
        }

        #[inline]
        fn to_f64(self) -> f64 {
          self as f64
        }
      }
    )*
  };
  (float: $($float:ty),* $(,)?) => {
    $(
      impl Number for $float {
        const ZERO: Self = 0.0;

        #[inline]
        fn plus(self, rhs: Self) -> Self {
          self + rhs
        }

        #[inline]
        fn times(self, rhs: Self) -> Self {
          self * rhs
        }

        #[inline]
        fn to_f64(self) -> f64 {
          self as f64
        }
      }
    )*
  };
}

impl_number!(wrapping: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(float: f32, f64);
