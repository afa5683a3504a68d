//! Three-phase sinusoidal duty-cycle synthesis.
//!
//! One phase accumulator feeds three leg evaluations a third of a turn
//! apart; a tick advances the phase once, so every leg samples the same
//! base phase.

use fixed::types::U0F16;

use crate::duty::DutyCycle;
use crate::output::{DutySink, Leg};
use crate::phase::{PhaseAccumulator, RateError};
use crate::sine;

/// Duty cycle of one leg at the given base phase.
///
/// Adds the leg offset with wraparound, samples the sine table by the top
/// bits of the result and rescales into the duty range. Pure; total over
/// every phase and offset.
pub fn evaluate(base: U0F16, offset: U0F16) -> DutyCycle {
    DutyCycle::from_sample(sine::sample(base.wrapping_add(offset)))
}

/// Three-phase sine wave generator.
///
/// Owns the phase accumulator; the tick handler owns the generator. Each
/// call to [`tick`](Self::tick) or [`drive`](Self::drive) corresponds to one
/// period of the PWM carrier.
#[derive(Debug, Clone)]
pub struct ThreePhaseSine {
    accumulator: PhaseAccumulator,
}

impl ThreePhaseSine {
    /// Generator for an output at `output_hz`, ticked at `update_hz`.
    pub fn new(output_hz: u32, update_hz: u32) -> Result<Self, RateError> {
        Ok(Self {
            accumulator: PhaseAccumulator::new(output_hz, update_hz)?,
        })
    }

    /// Current base phase.
    pub const fn phase(&self) -> U0F16 {
        self.accumulator.phase()
    }

    /// Evaluate all three legs at the current phase, without advancing.
    pub fn duties(&self) -> [DutyCycle; 3] {
        let base = self.accumulator.phase();
        Leg::ALL.map(|leg| evaluate(base, leg.offset()))
    }

    /// Advance one tick and evaluate all three legs at the new phase.
    pub fn tick(&mut self) -> [DutyCycle; 3] {
        self.accumulator.advance();
        self.duties()
    }

    /// Run one tick and latch every leg into the sink.
    ///
    /// This is the whole body of the periodic update: call it once per
    /// carrier period.
    pub fn drive<S: DutySink>(&mut self, sink: &mut S) {
        let duties = self.tick();
        for (leg, duty) in Leg::ALL.into_iter().zip(duties) {
            sink.set_duty_cycle(leg, duty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LatchedBridge {
        a: Option<DutyCycle>,
        b: Option<DutyCycle>,
        c: Option<DutyCycle>,
    }

    impl DutySink for LatchedBridge {
        fn set_duty_cycle(&mut self, leg: Leg, duty: DutyCycle) {
            let slot = match leg {
                Leg::A => &mut self.a,
                Leg::B => &mut self.b,
                Leg::C => &mut self.c,
            };
            *slot = Some(duty);
        }
    }

    #[test]
    fn legs_sit_a_third_of_a_turn_apart() {
        let a = Leg::A.offset();
        let b = Leg::B.offset();
        let c = Leg::C.offset();
        assert_eq!(b.to_bits() - a.to_bits(), 0x5555);
        assert_eq!(c.to_bits() - b.to_bits(), 0x5555);
        // 3 * 0x5555 is one bit short of a full turn, so the closing step
        // from C back to A is 0x5556.
        assert_eq!(a.to_bits().wrapping_sub(c.to_bits()), 0x5556);
    }

    #[test]
    fn sample_phases_keep_leg_separation() {
        for base in [0u16, 1, 197, 0x5554, 0x8000, 0xFFFF] {
            let base = U0F16::from_bits(base);
            let tap = |leg: Leg| base.wrapping_add(leg.offset()).to_bits();
            assert_eq!(tap(Leg::B).wrapping_sub(tap(Leg::A)), 0x5555);
            assert_eq!(tap(Leg::C).wrapping_sub(tap(Leg::B)), 0x5555);
        }
    }

    #[test]
    fn every_phase_yields_valid_duties() {
        for bits in 0..=u16::MAX {
            let base = U0F16::from_bits(bits);
            for leg in Leg::ALL {
                let duty = evaluate(base, leg.offset());
                assert!(duty <= DutyCycle::MAX, "phase {bits:#06x} leg {leg:?}");
            }
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let base = U0F16::from_bits(0x1234);
        assert_eq!(
            evaluate(base, Leg::B.offset()),
            evaluate(base, Leg::B.offset())
        );

        let gen = ThreePhaseSine::new(60, 20_000).unwrap();
        assert_eq!(gen.duties(), gen.duties());
    }

    #[test]
    fn tick_advances_once_for_all_legs() {
        let mut gen = ThreePhaseSine::new(60, 20_000).unwrap();
        let duties = gen.tick();
        // One tick in: every leg saw the same base phase of one increment.
        assert_eq!(gen.phase().to_bits(), 197);
        for (leg, duty) in Leg::ALL.into_iter().zip(duties) {
            assert_eq!(duty, evaluate(gen.phase(), leg.offset()), "leg {leg:?}");
        }
    }

    #[test]
    fn waveform_reaches_both_rails_each_second() {
        // With an increment of 197 the phase lands in every table bin, so
        // each leg must hit the peak and the trough within one second.
        let mut gen = ThreePhaseSine::new(60, 20_000).unwrap();
        let mut lo = DutyCycle::MAX;
        let mut hi = DutyCycle::ZERO;
        for _ in 0..20_000 {
            let [a, _, _] = gen.tick();
            lo = lo.min(a);
            hi = hi.max(a);
        }
        assert_eq!(lo, DutyCycle::ZERO);
        assert_eq!(hi, DutyCycle::MAX);
    }

    #[test]
    fn drive_latches_every_leg() {
        let mut gen = ThreePhaseSine::new(60, 20_000).unwrap();
        let mut reference = gen.clone();

        let mut bridge = LatchedBridge::default();
        gen.drive(&mut bridge);

        let [a, b, c] = reference.tick();
        assert_eq!(bridge.a, Some(a));
        assert_eq!(bridge.b, Some(b));
        assert_eq!(bridge.c, Some(c));
    }

    #[test]
    fn stop_drives_all_legs_off() {
        let mut bridge = LatchedBridge::default();
        bridge.stop();
        assert_eq!(bridge.a, Some(DutyCycle::ZERO));
        assert_eq!(bridge.b, Some(DutyCycle::ZERO));
        assert_eq!(bridge.c, Some(DutyCycle::ZERO));
    }
}
