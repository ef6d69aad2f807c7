//! Build script for sulk-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Parses and validates machine.toml, then bakes it in as a `const`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sulk_core::config::{clip_line, ConfigError, MachineConfig};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts for cortex-m-rt, the RP2040 boot stage and defmt
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate machine.toml at compile time
fn load_config() -> MachineConfig {
    // Re-run if machine.toml changes
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a machine.toml configuration file.        ║\n\
            ║  Please create one in the sulk-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read machine.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse into the core configuration types
    let config: MachineConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid machine.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid machine configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e))
        );
    }

    println!("cargo:warning=machine.toml validated successfully");
    config
}

/// Human-readable explanation of a validation error
fn describe(err: ConfigError) -> String {
    match err {
        ConfigError::DegenerateCalibration(id) => format!(
            "[{}] at_logical_0 and at_logical_100 must differ",
            id.name()
        ),
        ConfigError::CalibrationOutOfRange(id) => format!(
            "[{}] positions must not exceed servo.max_degrees",
            id.name()
        ),
        ConfigError::InvalidServoRange => {
            "[servo] need max_degrees > 0 and min_pulse_us < max_pulse_us".to_string()
        }
        ConfigError::InvalidStepTiming => {
            "[timing] need 0 < fast_step_ms <= slow_step_ms".to_string()
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", clip_line(line, 61))
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated configuration as Rust source into OUT_DIR
fn generate_config(config: &MachineConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "// Generated by build.rs from machine.toml\n\
         pub const MACHINE_CONFIG: MachineConfig = MachineConfig {{\n\
         \x20   door: ActuatorCalibration::new({}, {}),\n\
         \x20   arm: ActuatorCalibration::new({}, {}),\n\
         \x20   servo: ServoConfig {{\n\
         \x20       min_pulse_us: {},\n\
         \x20       max_pulse_us: {},\n\
         \x20       max_degrees: {},\n\
         \x20   }},\n\
         \x20   timing: TimingConfig {{\n\
         \x20       fast_step_ms: {},\n\
         \x20       slow_step_ms: {},\n\
         \x20       rail_settle_ms: {},\n\
         \x20       park_settle_ms: {},\n\
         \x20   }},\n\
         }};\n",
        config.door.at_logical_0,
        config.door.at_logical_100,
        config.arm.at_logical_0,
        config.arm.at_logical_100,
        config.servo.min_pulse_us,
        config.servo.max_pulse_us,
        config.servo.max_degrees,
        config.timing.fast_step_ms,
        config.timing.slow_step_ms,
        config.timing.rail_settle_ms,
        config.timing.park_settle_ms,
    );

    fs::write(out_dir.join("machine_config.rs"), source).unwrap();
}
