#![no_std]
#![forbid(unsafe_code)]

//! Three-phase sinusoidal PWM synthesis from a single periodic tick.
//!
//! A fixed-point phase accumulator advances once per tick; three taps a
//! third of a turn apart index a quantized sine table, and each sample is
//! rescaled into the duty range of the PWM peripheral. Everything on the
//! tick path is integer math over bounded domains: no trigonometry, no
//! allocation, no panics, so [`ThreePhaseSine::drive`] can run inside a
//! timer interrupt.
//!
//! The PWM peripheral itself stays behind the [`DutySink`] boundary;
//! implement it against your driver and call `drive` at the carrier rate.
//!
//! [`ThreePhaseSine::drive`]: three_phase::ThreePhaseSine::drive
//! [`DutySink`]: output::DutySink

pub mod duty;
pub mod output;
pub mod phase;
pub mod sine;
pub mod three_phase;
