use fixed::types::U0F16;

use crate::duty::DutyCycle;

/// One leg of the inverter bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    A,
    B,
    C,
}

impl Leg {
    /// All legs, in evaluation order.
    pub const ALL: [Leg; 3] = [Leg::A, Leg::B, Leg::C];

    /// Fixed phase offset of this leg, as a fraction of one turn.
    ///
    /// The legs sit a third of a turn apart: 0x0000, 0x5555 and 0xAAAA raw,
    /// the closest 16-bit approximations of 0, 120 and 240 degrees.
    pub const fn offset(self) -> U0F16 {
        match self {
            Leg::A => U0F16::ZERO,
            Leg::B => U0F16::from_bits(0x5555),
            Leg::C => U0F16::from_bits(0xAAAA),
        }
    }
}

/// Receiver for the per-tick duty-cycle updates.
///
/// Implemented by the PWM driver, which owns dead-time insertion and the
/// carrier timer; the core never touches duty registers itself.
pub trait DutySink {
    /// Latch a new duty cycle for one leg.
    fn set_duty_cycle(&mut self, leg: Leg, duty: DutyCycle);

    /// Drive every leg fully off.
    fn stop(&mut self) {
        for leg in Leg::ALL {
            self.set_duty_cycle(leg, DutyCycle::ZERO);
        }
    }
}
