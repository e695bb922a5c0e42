//! Loading indicator fed by several independent requests.
//!
//! Each source reports completion separately; whether the indicator clears
//! after the first report or only after all of them is decided by
//! `LoadingMode`, never by the order in which responses arrive.

use common::config::LoadingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Students,
    Programs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTracker {
    mode: LoadingMode,
    students_done: bool,
    programs_done: bool,
}

impl LoadTracker {
    /// A tracker with every source pending.
    pub fn new(mode: LoadingMode) -> Self {
        Self {
            mode,
            students_done: false,
            programs_done: false,
        }
    }

    pub fn complete(&mut self, source: Source) {
        match source {
            Source::Students => self.students_done = true,
            Source::Programs => self.programs_done = true,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.mode {
            LoadingMode::AllSources => !(self.students_done && self.programs_done),
            LoadingMode::FirstResponse => !(self.students_done || self.programs_done),
        }
    }
}
