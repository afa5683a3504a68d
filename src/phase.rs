//! Fixed-point phase accumulator.
//!
//! The electrical angle is a [`U0F16`] fraction of one turn, so the 16 raw
//! bits span one cycle and `wrapping_add` is the modular arithmetic.

use fixed::types::U0F16;

/// Errors from deriving the per-tick phase increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateError {
    /// The update rate is zero.
    ZeroUpdateRate,
    /// The output frequency is too low for the phase resolution; the
    /// increment rounds to zero and the waveform would never move.
    OutputTooSlow,
    /// The output frequency is at or above the update rate; the increment
    /// reaches a full turn and the waveform would alias.
    OutputTooFast,
}

/// Derive the per-tick increment for an output frequency sampled at
/// `update_hz`, as a fraction of one turn.
///
/// Computed as `round(output_hz * 2^16 / update_hz)` raw bits, in 64-bit
/// intermediate math.
pub fn phase_increment(output_hz: u32, update_hz: u32) -> Result<U0F16, RateError> {
    if update_hz == 0 {
        return Err(RateError::ZeroUpdateRate);
    }
    let scaled = (output_hz as u64) << U0F16::FRAC_NBITS;
    let bits = (scaled + update_hz as u64 / 2) / update_hz as u64;
    if bits == 0 {
        return Err(RateError::OutputTooSlow);
    }
    if bits >= 1 << U0F16::FRAC_NBITS {
        return Err(RateError::OutputTooFast);
    }
    Ok(U0F16::from_bits(bits as u16))
}

/// Wrapping angle counter stepped by a fixed increment once per tick.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    phase: U0F16,
    increment: U0F16,
}

impl PhaseAccumulator {
    /// Accumulator for an output at `output_hz` updated at `update_hz`.
    ///
    /// The phase starts at zero; the increment is fixed for the lifetime of
    /// the accumulator.
    pub fn new(output_hz: u32, update_hz: u32) -> Result<Self, RateError> {
        Ok(Self::with_increment(phase_increment(output_hz, update_hz)?))
    }

    /// Accumulator with a precomputed per-tick increment.
    pub const fn with_increment(increment: U0F16) -> Self {
        Self {
            phase: U0F16::ZERO,
            increment,
        }
    }

    /// Step the phase by one tick and return the new value.
    ///
    /// Wraps silently at one turn. Call exactly once per tick, before
    /// evaluating any output that samples the phase.
    pub fn advance(&mut self) -> U0F16 {
        self.phase = self.phase.wrapping_add(self.increment);
        self.phase
    }

    /// Current phase.
    pub const fn phase(&self) -> U0F16 {
        self.phase
    }

    /// Per-tick increment.
    pub const fn increment(&self) -> U0F16 {
        self.increment
    }

    /// Return the phase to zero, keeping the increment.
    pub fn reset(&mut self) {
        self.phase = U0F16::ZERO;
    }
}
