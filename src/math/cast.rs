use num_complex::Complex;
use num_traits::Zero;

/// Numeric element conversion used by [`Matrix::convert`](crate::Matrix::convert).
///
/// One trait replaces the open set of per-type conversions: primitive pairs
/// convert with `as` semantics, real values promote to complex with a zero
/// imaginary part, and complex values narrow/widen component-wise.
pub trait CastTo<U> {
    fn cast(&self) -> U;
}

macro_rules! cast_primitive {
    ($src:ty => $($dst:ty),+ $(,)?) => {
        $(
            impl CastTo<$dst> for $src {
                #[inline]
                fn cast(&self) -> $dst {
                    *self as $dst
                }
            }

            impl CastTo<Complex<$dst>> for $src {
                #[inline]
                fn cast(&self) -> Complex<$dst> {
                    Complex::new(*self as $dst, <$dst>::zero())
                }
            }
        )+
    };
}

macro_rules! cast_primitive_grid {
    ($($src:ty),+ $(,)?) => {
        $(
            cast_primitive!($src => i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);
        )+
    };
}

cast_primitive_grid!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

impl<T, U> CastTo<Complex<U>> for Complex<T>
where
    T: CastTo<U>,
{
    #[inline]
    fn cast(&self) -> Complex<U> {
        Complex::new(self.re.cast(), self.im.cast())
    }
}
