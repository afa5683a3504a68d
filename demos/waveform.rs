use std::{collections::BTreeMap, f32::consts::TAU, fs::File, io::BufWriter, sync::Arc};

use fixed::types::I16F16;
use serde::Serialize;
use spwm::{
    duty::DutyCycle,
    output::{DutySink, Leg},
    three_phase::ThreePhaseSine,
};

const OUTPUT_HZ: u32 = 60;
const UPDATE_HZ: u32 = 20_000;

#[derive(Serialize)]
struct Values {
    tick: u32,
    time_us: u64,
    phase_turns: f32,
    duty: [u16; 3],
    duty_fraction: [f32; 3],
    ideal_fraction: [f32; 3],
}

/// Stand-in for the PWM driver: latches the most recent duty per leg.
struct LatchedBridge {
    duty: [DutyCycle; 3],
}

impl LatchedBridge {
    fn new() -> Self {
        Self {
            duty: [DutyCycle::ZERO; 3],
        }
    }
}

impl DutySink for LatchedBridge {
    fn set_duty_cycle(&mut self, leg: Leg, duty: DutyCycle) {
        self.duty[leg as usize] = duty;
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let mut writer = mcap::Writer::new(BufWriter::new(File::create("out.mcap")?))?;
    let my_channel = mcap::Channel {
        topic: String::from("spwm"),
        schema: Some(Arc::new(mcap::Schema {
            name: "".to_owned(),
            encoding: "".to_owned(),
            data: std::borrow::Cow::default(),
        })),
        message_encoding: "cbor".to_owned(),
        metadata: BTreeMap::default(),
    };
    let channel_id = writer.add_channel(&my_channel)?;

    let mut generator = ThreePhaseSine::new(OUTPUT_HZ, UPDATE_HZ).expect("valid rate pair");
    let mut bridge = LatchedBridge::new();
    let tick_us = 1_000_000 / UPDATE_HZ as u64;

    log::info!("synthesizing one second of {OUTPUT_HZ} Hz drive at {UPDATE_HZ} Hz");

    for tick in 0..UPDATE_HZ {
        generator.drive(&mut bridge);

        let phase_turns = generator.phase().to_num::<f32>();
        let ideal_fraction = Leg::ALL.map(|leg| {
            let tap = generator.phase().wrapping_add(leg.offset());
            let angle = I16F16::from_num(tap.to_num::<f32>() * TAU);
            (1. + cordic::sin(angle).to_num::<f32>()) / 2.
        });

        // Write to file
        let mut buffer = Vec::with_capacity(128);
        ciborium::into_writer(
            &Values {
                tick,
                time_us: tick as u64 * tick_us,
                phase_turns,
                duty: bridge.duty.map(DutyCycle::value),
                duty_fraction: bridge.duty.map(|d| d.as_fraction().to_num()),
                ideal_fraction,
            },
            &mut buffer,
        )
        .unwrap();
        writer
            .write_to_known_channel(
                &mcap::records::MessageHeader {
                    channel_id,
                    sequence: 0,
                    log_time: tick as u64 * tick_us * 1_000,
                    publish_time: tick as u64 * tick_us * 1_000,
                },
                &buffer,
            )
            .unwrap();
    }

    writer.finish().unwrap();
    log::info!("wrote out.mcap");

    Ok(())
}
