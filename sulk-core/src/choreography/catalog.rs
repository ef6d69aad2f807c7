//! Built-in choreography catalog
//!
//! Sequences from "Moody Useless Machine" by Lamja Electronics
//! (http://www.lamja.com/?p=451). Speeds are authored with a negative value
//! meaning instant.

use super::command::MotionCommand;
use super::library::ChoreographyLibrary;
use super::program::ChoreographyProgram;

type M = MotionCommand;

static PEEK: [MotionCommand; 6] = [
    M::door(40, 60, 1000),
    M::door(0, 100, 1000),
    M::door(100, 100, 50),
    M::arm(100, 100, 300),
    M::arm(0, 100, 100),
    M::door(0, 100, 400),
];

static CHATTER: [MotionCommand; 25] = [
    M::door(40, 80, 500),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(40, 80, 500),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(15, -1, 150),
    M::door(0, -1, 150),
    M::door(40, 80, 1500),
    M::door(100, 100, 100),
    M::arm(100, 100, 400),
    M::arm(0, 100, 200),
    M::door(0, 100, 0),
];

static QUICK: [MotionCommand; 4] = [
    M::door(100, 100, 10),
    M::arm(100, 100, 400),
    M::arm(0, 100, 10),
    M::door(0, 100, 10),
];

static HESITATE: [MotionCommand; 5] = [
    M::door(100, 100, 0),
    M::arm(70, 100, 500),
    M::arm(100, 0, 1000),
    M::arm(0, 100, 200),
    M::door(0, 100, 200),
];

static TEASE: [MotionCommand; 10] = [
    M::door(100, 100, 200),
    M::arm(100, 100, 500),
    M::arm(70, 100, 200),
    M::arm(100, 100, 400),
    M::arm(70, 100, 200),
    M::arm(100, 100, 400),
    M::arm(70, 100, 500),
    M::arm(100, 100, 600),
    M::arm(0, 100, 300),
    M::door(0, 100, 400),
];

static GRUMBLE: [MotionCommand; 9] = [
    M::door(100, 100, 400),
    M::arm(100, 100, 500),
    M::arm(0, 100, 500),
    M::door(20, 60, 1000),
    M::door(70, 90, 500),
    M::door(20, 30, 1000),
    M::door(70, 100, 500),
    M::door(40, 30, 500),
    M::door(0, 50, 100),
];

static PEEKABOO: [MotionCommand; 11] = [
    M::door(50, 100, 500),
    M::door(10, 50, 10),
    M::door(50, 100, 800),
    M::door(10, 50, 300),
    M::door(50, 100, 1500),
    M::door(10, 50, 500),
    M::door(0, 100, 1000),
    M::door(100, 100, 10),
    M::arm(100, 100, 400),
    M::arm(0, 100, 10),
    M::door(0, 100, 500),
];

static FLUTTER: [MotionCommand; 22] = [
    M::door(50, 100, 400),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(0, 100, 200),
    M::door(100, 100, 300),
    M::arm(100, 100, 400),
    M::arm(0, 100, 400),
    M::door(0, 100, 500),
];

static RATTLE: [MotionCommand; 24] = [
    M::door(20, 100, 500),
    M::door(40, 100, 100),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 50),
    M::door(65, 100, 50),
    M::door(40, 100, 500),
    M::door(100, 100, 1),
    M::arm(80, 100, 500),
    M::arm(100, 100, 100),
    M::arm(80, 100, 500),
    M::arm(0, 100, 500),
    M::door(0, 100, 500),
];

static SLOW_MOTION: [MotionCommand; 6] = [
    M::door(10, 100, 1),
    M::door(100, 30, 1),
    M::arm(100, 30, 1),
    M::arm(30, 30, 1),
    M::arm(0, 100, 1),
    M::door(0, 100, 1),
];

static STARE_DOWN: [MotionCommand; 15] = [
    M::door(100, 100, 200),
    M::arm(100, 100, 200),
    M::arm(80, 80, 1000),
    M::arm(40, 80, 1000),
    M::door(40, 60, 10),
    M::door(100, 100, 100),
    M::arm(100, 100, 2000),
    M::arm(30, 60, 1000),
    M::door(40, 40, 10),
    M::door(100, 100, 100),
    M::arm(100, 100, 2000),
    M::arm(60, 80, 500),
    M::arm(100, 100, 2000),
    M::arm(0, 60, 100),
    M::door(0, 40, 100),
];

static HOLD_OUT: [MotionCommand; 4] = [
    M::door(100, 100, 1),
    M::arm(100, 100, 10000),
    M::arm(0, 100, 1),
    M::door(0, 100, 1),
];

static TAP_TAP: [MotionCommand; 12] = [
    M::door(100, 100, 1),
    M::arm(100, 100, 200),
    M::arm(80, 100, 150),
    M::arm(100, 100, 150),
    M::arm(80, 100, 150),
    M::arm(100, 100, 150),
    M::arm(80, 100, 150),
    M::arm(100, 100, 150),
    M::arm(80, 100, 150),
    M::arm(100, 100, 150),
    M::arm(0, 100, 150),
    M::door(0, 100, 1),
];

static CREEP: [MotionCommand; 5] = [
    M::door(100, 100, 1),
    M::arm(80, 100, 200),
    M::arm(100, 0, 30),
    M::arm(0, 100, 100),
    M::door(0, 100, 1),
];

/// Every built-in program, in authoring order
pub static CATALOG: [ChoreographyProgram; 14] = [
    ChoreographyProgram::new("peek", &PEEK),
    ChoreographyProgram::new("chatter", &CHATTER),
    ChoreographyProgram::new("quick", &QUICK),
    ChoreographyProgram::new("hesitate", &HESITATE),
    ChoreographyProgram::new("tease", &TEASE),
    ChoreographyProgram::new("grumble", &GRUMBLE),
    ChoreographyProgram::new("peekaboo", &PEEKABOO),
    ChoreographyProgram::new("flutter", &FLUTTER),
    ChoreographyProgram::new("rattle", &RATTLE),
    ChoreographyProgram::new("slow motion", &SLOW_MOTION),
    ChoreographyProgram::new("stare down", &STARE_DOWN),
    ChoreographyProgram::new("hold out", &HOLD_OUT),
    ChoreographyProgram::new("tap tap", &TAP_TAP),
    ChoreographyProgram::new("creep", &CREEP),
];

/// Library over the built-in catalog
pub fn library() -> ChoreographyLibrary<'static> {
    ChoreographyLibrary::new(&CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineConfig;
    use crate::motion::{ActuatorId, LOGICAL_MAX};

    #[test]
    fn test_catalog_size() {
        let library = library();
        assert_eq!(library.len(), 14);
        assert!(library.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_targets_in_logical_range() {
        for program in library().iter() {
            for cmd in program.commands {
                assert!(cmd.target <= LOGICAL_MAX, "{}: {:?}", program.name, cmd);
            }
        }
    }

    #[test]
    fn test_every_program_ends_with_door_closed() {
        for program in library().iter() {
            let last = program.commands.last().unwrap();
            assert_eq!(last.actuator, ActuatorId::Door, "{}", program.name);
            assert_eq!(last.target, 0, "{}", program.name);
        }
    }

    #[test]
    fn test_arm_only_moves_with_door_open() {
        // The arm must never swing into a closed lid
        for program in library().iter() {
            let mut door = 0u8;
            for cmd in program.commands {
                match cmd.actuator {
                    ActuatorId::Door => door = cmd.target,
                    ActuatorId::Arm => assert_eq!(door, 100, "{}", program.name),
                }
            }
        }
    }

    #[test]
    fn test_names_unique() {
        let names: Vec<_> = library().iter().map(|p| p.name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn test_nominal_durations() {
        let config = MachineConfig::DEFAULT;
        // Quick: door 150 -> 60 and arm 120 -> 8 at 1 ms per degree, both ways
        let quick = library().get(2).unwrap();
        assert_eq!(quick.name, "quick");
        assert_eq!(
            quick.nominal_duration_ms(&config),
            90 + 10 + 112 + 400 + 112 + 10 + 90 + 10
        );

        // Hold out keeps the arm on the switch for ten seconds
        let hold_out = library().get(11).unwrap();
        assert!(hold_out.nominal_duration_ms(&config) > 10_000);
    }
}
