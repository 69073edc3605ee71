/// Reinterprets the low 16 bits of a register as a signed 16-bit value.
///
/// The conversion is spelled out as two's complement (mask, test the sign
/// bit, invert and add one) instead of going through an `as i16` cast, so the
/// behavior is pinned to what the 68k code did with a `move.w` of the low
/// half of a longword.
pub fn signed16(x: u32) -> i32 {
    let word = x & 0xFFFF;
    if word & 0x8000 != 0 {
        -((((!word) & 0xFFFF) + 1) as i32)
    }
    else {
        word as i32
    }
}

/// Absolute value of the signed low word. 0x8000 maps to 32768, which is why
/// this returns a u32 rather than a 16-bit type.
pub fn low16_signed_abs(x: u32) -> u32 {
    signed16(x).unsigned_abs()
}
