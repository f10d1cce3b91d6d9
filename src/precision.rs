//! Conversion between f32 and IEEE binary16.
//!
//! Narrowing rounds to nearest with ties to even. Magnitudes past the f16
//! range become infinity and anything that rounds below the smallest
//! subnormal becomes a signed zero. Widening is exact.

use half::f16;
use half::slice::HalfFloatSliceExt;

/// Round an f32 to the nearest f16.
#[inline]
pub fn f32_to_f16(x: f32) -> f16 {
    f16::from_f32(x)
}

/// Widen an f16 to f32. Every f16 is exactly representable.
#[inline]
pub fn f16_to_f32(h: f16) -> f32 {
    h.to_f32()
}

/// Round through f16 and back.
///
/// This is the value the kernel will actually multiply by, so reference
/// results must be built on it.
#[inline]
pub fn round_to_f16(x: f32) -> f32 {
    f16_to_f32(f32_to_f16(x))
}

/// Narrow a slice. `src` and `dst` must have equal length.
pub fn convert_to_f16(src: &[f32], dst: &mut [f16]) {
    dst.convert_from_f32_slice(src);
}

/// Widen a slice. `src` and `dst` must have equal length.
#[inline]
pub fn convert_to_f32(src: &[f16], dst: &mut [f32]) {
    src.convert_to_f32_slice(dst);
}
