//! Host-side test doubles for the capability traits
//!
//! Every double appends to one shared [`Recorder`], so tests can check the
//! interleaving of outputs, rail switching and delays on a virtual clock.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::motion::ActuatorId;
use crate::state::Diagnostic;
use crate::traits::{
    ActuatorOutput, DiagnosticsSink, OutputError, RailError, RailPower, RandomSource, WakeSignal,
};

/// One observable hardware interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Attach(ActuatorId, u16),
    Write(ActuatorId, u16),
    Detach(ActuatorId),
    Rail(bool),
    Delay(u32),
    WakeWait,
    ReleaseWait,
    Draw(u32),
}

#[derive(Default)]
struct Inner {
    records: Vec<Record>,
    now_ms: u64,
    fail_writes: bool,
}

/// Shared interaction log with a virtual clock
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Inner>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: Record) {
        self.0.borrow_mut().records.push(record);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().records.clear();
    }

    pub fn records(&self) -> Vec<Record> {
        self.0.borrow().records.clone()
    }

    pub fn writes(&self, id: ActuatorId) -> Vec<u16> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                Record::Write(a, p) if a == id => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.records()
            .into_iter()
            .filter_map(|r| match r {
                Record::Delay(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }

    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }

    fn writes_fail(&self) -> bool {
        self.0.borrow().fail_writes
    }

    fn sleep(&self, ms: u32) {
        let mut inner = self.0.borrow_mut();
        inner.now_ms += ms as u64;
        inner.records.push(Record::Delay(ms));
    }
}

pub struct MockOutput {
    id: ActuatorId,
    attached: bool,
    recorder: Recorder,
}

impl MockOutput {
    pub fn new(id: ActuatorId, recorder: &Recorder) -> Self {
        Self {
            id,
            attached: false,
            recorder: recorder.clone(),
        }
    }
}

impl ActuatorOutput for MockOutput {
    fn attach(&mut self, position: u16) -> Result<(), OutputError> {
        self.attached = true;
        self.recorder.push(Record::Attach(self.id, position));
        Ok(())
    }

    fn write(&mut self, position: u16) -> Result<(), OutputError> {
        self.recorder.push(Record::Write(self.id, position));
        if self.recorder.writes_fail() {
            Err(OutputError::Unreachable)
        } else {
            Ok(())
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.recorder.push(Record::Detach(self.id));
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

pub struct MockDelay {
    recorder: Recorder,
}

impl MockDelay {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.recorder.sleep(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.recorder.sleep(ms);
    }
}

pub struct MockRail {
    powered: bool,
    fail: bool,
    recorder: Recorder,
}

impl MockRail {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            powered: false,
            fail: false,
            recorder: recorder.clone(),
        }
    }

    pub fn failing(recorder: &Recorder) -> Self {
        Self {
            fail: true,
            ..Self::new(recorder)
        }
    }
}

impl RailPower for MockRail {
    fn set_powered(&mut self, on: bool) -> Result<(), RailError> {
        self.powered = on;
        self.recorder.push(Record::Rail(on));
        if self.fail {
            Err(RailError::SwitchFault)
        } else {
            Ok(())
        }
    }

    fn is_powered(&self) -> bool {
        self.powered
    }
}

/// Wake signal replaying scripted level reads
pub struct MockWake {
    levels: VecDeque<bool>,
    idle_level: bool,
    recorder: Recorder,
}

impl MockWake {
    /// Reads return `levels` in order, then inactive forever
    pub fn new(recorder: &Recorder, levels: &[bool]) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            idle_level: false,
            recorder: recorder.clone(),
        }
    }
}

impl WakeSignal for MockWake {
    fn is_active(&mut self) -> bool {
        self.levels.pop_front().unwrap_or(self.idle_level)
    }

    async fn wait_for_wake(&mut self) {
        self.recorder.push(Record::WakeWait);
    }

    async fn wait_for_release(&mut self) {
        self.recorder.push(Record::ReleaseWait);
    }
}

/// Random source that always draws the same value
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.0 % bound
        }
    }
}

/// Random source that logs each draw into the shared [`Recorder`]
pub struct RecordedRandom {
    value: u32,
    recorder: Recorder,
}

impl RecordedRandom {
    pub fn new(recorder: &Recorder, value: u32) -> Self {
        Self {
            value,
            recorder: recorder.clone(),
        }
    }
}

impl RandomSource for RecordedRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.recorder.push(Record::Draw(bound));
        if bound == 0 {
            0
        } else {
            self.value % bound
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsSink for RecordingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
