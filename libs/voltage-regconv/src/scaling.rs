//! Scaling of raw register values
//!
//! Integer results are computed as `raw * factor` in f64, truncated toward
//! zero and then narrowed to the target width with two's-complement wrap.
//! A product that does not fit the target type therefore wraps around
//! instead of failing: `200u8` scaled by `2.0` is `144`, not an error.
//! NaN products become 0.
//!
//! A factor of exactly `1.0` returns the raw value untouched, so 64-bit
//! values above 2^53 survive an unscaled read bit-for-bit.

/// Integer types a scaled register value can be narrowed into
pub trait ScaledInt: Copy + Into<i128> {
    /// Keep the low bits of `value` that fit `Self`
    fn wrap_from(value: i128) -> Self;
}

macro_rules! impl_scaled_int {
    ($($ty:ty),*) => {
        $(
            impl ScaledInt for $ty {
                #[inline]
                fn wrap_from(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_scaled_int!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Scale an integer and narrow back with wrap-on-overflow
#[inline]
pub fn scale_int<T: ScaledInt>(raw: T, factor: f64) -> T {
    if factor == 1.0 {
        return raw;
    }

    let wide: i128 = raw.into();
    let product = wide as f64 * factor;
    // f64 -> i128 truncates toward zero and only saturates beyond +-1.7e38
    T::wrap_from(product as i128)
}

/// Scale a binary32 value; the product is formed in f64
#[inline]
pub fn scale_f32(raw: f32, factor: f64) -> f32 {
    (f64::from(raw) * factor) as f32
}

#[inline]
pub fn scale_f64(raw: f64, factor: f64) -> f64 {
    raw * factor
}
