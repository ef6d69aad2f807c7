//! Choreography programs

use super::command::MotionCommand;
use crate::config::MachineConfig;
use crate::motion::{map_position, pacing_for, ActuatorId};

/// Named, fixed sequence of motion commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChoreographyProgram {
    /// Display name
    pub name: &'static str,
    /// Commands, executed strictly in order
    pub commands: &'static [MotionCommand],
}

impl ChoreographyProgram {
    /// Create a program
    pub const fn new(name: &'static str, commands: &'static [MotionCommand]) -> Self {
        Self { name, commands }
    }

    /// Number of commands
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the program has no commands
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Playback time when started with both actuators at home
    ///
    /// Sum of every stepped move and every hold. Ready and park time is not
    /// included.
    pub fn nominal_duration_ms(&self, config: &MachineConfig) -> u32 {
        let mut door = config.door.home();
        let mut arm = config.arm.home();
        let mut total: u32 = 0;

        for cmd in self.commands {
            let position = match cmd.actuator {
                ActuatorId::Door => &mut door,
                ActuatorId::Arm => &mut arm,
            };
            let target = map_position(cmd.target, config.calibration(cmd.actuator));
            let distance = position.abs_diff(target) as u32;
            let pacing = pacing_for(cmd.speed, &config.timing);

            total = total
                .saturating_add(pacing.duration_ms(distance))
                .saturating_add(cmd.hold_ms as u32);
            *position = target;
        }

        total
    }
}
