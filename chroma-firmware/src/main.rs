//! Chroma - HUB75 LED Matrix Firmware
//!
//! Drives a dual-panel 64x64 RGB matrix by bit-banged GPIO on an
//! STM32F401. Two content sources share the panel: a shaded spinning
//! cube and a bounced-sprite compositor; two buttons spin, spawn,
//! clear and switch.
//!
//! The render loop is deliberately single-threaded and cooperative.
//! Driving a scan address is a blocking operation whose duration
//! encodes brightness, so inputs are polled only at frame boundaries
//! and nothing preempts the scan.

#![no_std]
#![no_main]

mod buttons;
mod pins;

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::{Duration, Instant};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use chroma_core::config::TimingConfig;
use chroma_core::cube::{self, CubeAnimation};
use chroma_core::frame::FrameBuffer;
use chroma_core::layer::LayerEngine;
use chroma_core::panel::Panel;
use chroma_drivers::bus::{AddressPins, DataPins, GpioMatrixBus};

use crate::buttons::Button;
use crate::pins::{ButtonPin, CycleDelay, PanelPin};

/// Layer animation tick period
const LAYER_TICK: Duration = Duration::from_millis(33);

/// Active content source
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Cube,
    Layers,
}

// The frame buffer is 12 KiB; keep it off the task stack.
static FRAME: StaticCell<FrameBuffer> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("chroma firmware starting");

    let p = embassy_stm32::init(Default::default());

    // HUB75 data and address lines on port A, control on port B,
    // matching the stock wiring harness.
    let data = DataPins {
        r1: PanelPin::new(Output::new(p.PA0, Level::Low, Speed::VeryHigh)),
        g1: PanelPin::new(Output::new(p.PA1, Level::Low, Speed::VeryHigh)),
        b1: PanelPin::new(Output::new(p.PA2, Level::Low, Speed::VeryHigh)),
        r2: PanelPin::new(Output::new(p.PA3, Level::Low, Speed::VeryHigh)),
        g2: PanelPin::new(Output::new(p.PA4, Level::Low, Speed::VeryHigh)),
        b2: PanelPin::new(Output::new(p.PA5, Level::Low, Speed::VeryHigh)),
    };
    let address = AddressPins {
        a: PanelPin::new(Output::new(p.PA8, Level::Low, Speed::VeryHigh)),
        b: PanelPin::new(Output::new(p.PA9, Level::Low, Speed::VeryHigh)),
        c: PanelPin::new(Output::new(p.PA10, Level::Low, Speed::VeryHigh)),
        d: PanelPin::new(Output::new(p.PA11, Level::Low, Speed::VeryHigh)),
    };
    let clock = PanelPin::new(Output::new(p.PB7, Level::Low, Speed::VeryHigh));
    let latch = PanelPin::new(Output::new(p.PB8, Level::Low, Speed::VeryHigh));
    let output_enable = PanelPin::new(Output::new(p.PB5, Level::High, Speed::VeryHigh));

    let bus = GpioMatrixBus::new(data, address, clock, latch, output_enable, CycleDelay);
    let mut panel = Panel::new(bus, TimingConfig::default());
    info!("panel bus up");

    let fb = FRAME.init(FrameBuffer::new());
    let mut layers = LayerEngine::new();
    let mut anim = CubeAnimation::new();

    let mut spin_button = Button::new(ButtonPin::new(Input::new(p.PB0, Pull::Up)));
    let mut mode_button = Button::new(ButtonPin::new(Input::new(p.PB1, Pull::Up)));

    let mut mode = Mode::Cube;
    let mut next_tick = Instant::now();

    info!("entering render loop");
    loop {
        match mode {
            Mode::Cube => {
                let (angle_x, angle_y) = anim.angles();
                cube::render(angle_x, angle_y, fb);
                panel.show_frame(&*fb);

                let spin = spin_button.poll();
                let switch = mode_button.poll();
                if spin.held {
                    anim.step();
                }
                if switch.edge {
                    info!("mode -> layers");
                    mode = Mode::Layers;
                    next_tick = Instant::now();
                }
            }
            Mode::Layers => {
                let spawn = spin_button.poll();
                let switch = mode_button.poll();
                if spawn.edge {
                    layers.add_random();
                    info!("layer spawned ({} live)", layers.len());
                }
                if switch.edge {
                    layers.clear();
                    info!("layers cleared, mode -> cube");
                    mode = Mode::Cube;
                    continue;
                }

                if Instant::now() >= next_tick {
                    next_tick += LAYER_TICK;
                    let dirty = layers.advance();
                    panel.show_dirty(&layers, dirty);
                }
            }
        }
    }
}
