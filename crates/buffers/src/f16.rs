//! Half-precision (16-bit) floating point conversions.

/// Decodes a half-precision (16-bit) floating point value.
///
/// The input is the raw binary representation (u16) of an IEEE 754
/// half-precision float.
///
/// # Example
///
/// ```
/// use binbuf_buffers::decode_f16;
///
/// assert_eq!(decode_f16(0x0000), 0.0);
/// assert_eq!(decode_f16(0x3C00), 1.0);
/// assert_eq!(decode_f16(0xC000), -2.0);
/// assert!(decode_f16(0x7C00).is_infinite());
/// assert!(decode_f16(0x7C01).is_nan());
/// ```
pub fn decode_f16(binary: u16) -> f64 {
    let sign = if binary & 0x8000 != 0 { -1.0 } else { 1.0 };
    let exponent = ((binary >> 10) & 0x1F) as i32;
    let fraction = (binary & 0x03FF) as f64;

    if exponent == 0 {
        // Subnormal or zero: fraction * 2^-10 * 2^-14
        sign * fraction * 2f64.powi(-24)
    } else if exponent == 0x1F {
        if fraction != 0.0 {
            f64::NAN
        } else {
            sign * f64::INFINITY
        }
    } else {
        sign * (1.0 + fraction / 1024.0) * 2f64.powi(exponent - 15)
    }
}

/// Encodes a value as a half-precision (16-bit) float bit pattern, rounding
/// to nearest with ties to even.
///
/// Values whose magnitude rounds past the largest finite half (65504) become
/// ±infinity; NaN maps to a quiet NaN pattern.
///
/// # Example
///
/// ```
/// use binbuf_buffers::encode_f16;
///
/// assert_eq!(encode_f16(0.0), 0x0000);
/// assert_eq!(encode_f16(1.0), 0x3C00);
/// assert_eq!(encode_f16(-2.0), 0xC000);
/// assert_eq!(encode_f16(65504.0), 0x7BFF);
/// assert_eq!(encode_f16(65520.0), 0x7C00); // rounds up to +inf
/// assert_eq!(encode_f16(f64::INFINITY), 0x7C00);
/// ```
pub fn encode_f16(value: f64) -> u16 {
    const F32_INFTY: u32 = 255 << 23;
    // Smallest float32 magnitude that overflows binary16 after rounding.
    const F16_MAX: u32 = (127 + 16) << 23;
    // Bias shift used to round the mantissa of subnormal results via a
    // float addition: (127 - 15) + (23 - 10) + 1, as an exponent field.
    const DENORM_MAGIC: u32 = ((127 - 15) + (23 - 10) + 1) << 23;

    let bits = (value as f32).to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let abs = bits & 0x7FFF_FFFF;

    if abs >= F16_MAX {
        // Infinity, NaN, or a finite value that rounds to infinity.
        if abs > F32_INFTY {
            sign | 0x7E00
        } else {
            sign | 0x7C00
        }
    } else if abs < (113 << 23) {
        // Result is subnormal (or zero): let the float adder align and round
        // the mantissa, then strip the magic offset back out.
        let shifted = f32::from_bits(abs) + f32::from_bits(DENORM_MAGIC);
        sign | (shifted.to_bits() - DENORM_MAGIC) as u16
    } else {
        // Normalized: rebias the exponent and round to nearest even by
        // adding half an ulp (plus the mantissa's own lowest kept bit).
        let mant_odd = (abs >> 13) & 1;
        let rounded = abs
            .wrapping_add(((15i32 - 127) as u32) << 23)
            .wrapping_add(0xFFF)
            .wrapping_add(mant_odd);
        sign | (rounded >> 13) as u16
    }
}
