//! Quantized sine lookup table.

use fixed::types::U0F16;

/// Number of entries in the sine table.
pub const TABLE_LEN: usize = 64;

/// Bits of phase used as the table index.
pub const INDEX_BITS: u32 = TABLE_LEN.ilog2();

/// Shift extracting the index from the top of the 16-bit phase.
const INDEX_SHIFT: u32 = U0F16::FRAC_NBITS - INDEX_BITS;

/// One period of `round(sin(2 * pi * i / 64) * 32767)`.
pub static SINE_TABLE: [i16; TABLE_LEN] = [
    0, 3212, 6393, 9512, 12539, 15446, 18204, 20787, 23170, 25329, 27245, 28898, 30273, 31356,
    32137, 32609, 32767, 32609, 32137, 31356, 30273, 28898, 27245, 25329, 23170, 20787, 18204,
    15446, 12539, 9512, 6393, 3212, 0, -3212, -6393, -9512, -12539, -15446, -18204, -20787, -23170,
    -25329, -27245, -28898, -30273, -31356, -32137, -32609, -32767, -32609, -32137, -31356, -30273,
    -28898, -27245, -25329, -23170, -20787, -18204, -15446, -12539, -9512, -6393, -3212,
];

/// Sample the table at a phase given as a fraction of one turn.
///
/// The index is the top [`INDEX_BITS`] bits of the phase, so it cannot leave
/// the table for any input.
pub fn sample(phase: U0F16) -> i16 {
    SINE_TABLE[(phase.to_bits() >> INDEX_SHIFT) as usize]
}
