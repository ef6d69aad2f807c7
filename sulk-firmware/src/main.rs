//! Sulk - Moody Useless Machine Firmware
//!
//! Main firmware binary for RP2040-based useless machines. Flip the switch
//! and the machine wakes, powers its servos, plays one randomly chosen
//! choreography to flip the switch back, parks and goes back to sleep.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use sulk_core::motion::Actuators;
use sulk_core::random::Xorshift32;
use sulk_core::state::PowerStateMachine;
use sulk_drivers::relay::RelayRail;
use sulk_drivers::servo::PwmServo;
use sulk_drivers::trigger::TriggerInput;
use sulk_hal_rp2040::adc::sample_noise_seed;
use sulk_hal_rp2040::pwm::servo_config;
use sulk_hal_rp2040::{RpInput, RpOutput, RpServoPwm};

use crate::config::MACHINE_CONFIG;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sulk firmware starting...");

    let p = embassy_rp::init(Default::default());

    info!("Config: {:?}", MACHINE_CONFIG);

    // Status LED, on through boot
    // Pin assignment is board-specific (Pico onboard LED: GPIO25)
    let led = RpOutput::new(Output::new(p.PIN_25, Level::High));
    spawner.spawn(tasks::status_task(led)).unwrap();

    // Servo PWM at 50 Hz, no pulses until attached
    // Pin assignments are board-specific (door: GPIO10 = PWM5A, arm: GPIO8 = PWM4A)
    let door_pwm = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, servo_config());
    let arm_pwm = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, servo_config());
    let actuators = Actuators::new(
        PwmServo::new(RpServoPwm::new(door_pwm), MACHINE_CONFIG.servo),
        PwmServo::new(RpServoPwm::new(arm_pwm), MACHINE_CONFIG.servo),
        &MACHINE_CONFIG,
    );

    info!("Servos initialized");

    // Servo rail relay, starts off
    // Pin assignment is board-specific (GPIO11)
    let rail = RelayRail::new_active_high(RpOutput::new(Output::new(p.PIN_11, Level::Low)));
    if let Some(fault) = rail.startup_fault() {
        warn!("Rail relay did not switch off: {:?}", fault);
    }

    // Toggle switch to ground, wakes while it reads low
    // Pin assignment is board-specific (GPIO2)
    let trigger = TriggerInput::new_active_low(RpInput::new(Input::new(p.PIN_2, Pull::Up)));

    info!("Rail relay and trigger initialized");

    // Seed program selection from noise on a floating ADC input
    // Pin assignment is board-specific (ADC0: GPIO26, leave unconnected)
    let mut adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let mut noise = Channel::new_pin(p.PIN_26, Pull::None);
    let seed = sample_noise_seed(&mut adc, &mut noise).await;
    debug!("Random seed: {=u32:#x}", seed);

    let machine = PowerStateMachine::new(actuators, rail, trigger, Delay, &MACHINE_CONFIG);

    spawner
        .spawn(tasks::show_task(machine, Xorshift32::new(seed)))
        .unwrap();

    info!("All tasks spawned");
}
