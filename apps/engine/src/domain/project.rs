//! Community project entity: countdown-to-completion lifecycle.

/// What a single [`Project::pass_time`] tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTick {
    /// The project transitioned to complete on this tick.
    Completed,
    /// No state transition (still counting down, or already terminal).
    NoChange,
}

/// Derived lifecycle state, used for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Complete,
    Failed,
}

/// A community project. Active until its week counter runs out (Complete) or
/// it is failed outright; both end states are terminal under normal flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub weeks_remaining: u32,
    pub is_complete: bool,
    pub failed: bool,
}

impl Project {
    pub fn new(name: impl Into<String>, weeks: u32) -> Self {
        Self {
            name: name.into(),
            weeks_remaining: weeks,
            is_complete: false,
            failed: false,
        }
    }

    /// Advance the project by one week.
    ///
    /// Terminal projects are untouched. Otherwise the counter drops by one
    /// only when it is still above zero, and the project completes on the
    /// tick that observes the counter at zero while active. The decrement
    /// happening strictly before the zero check is what lets a zero-duration
    /// project complete on its first tick.
    pub fn pass_time(&mut self) -> ProjectTick {
        if self.failed || self.is_complete {
            return ProjectTick::NoChange;
        }

        if self.weeks_remaining > 0 {
            self.weeks_remaining -= 1;
        }

        if self.weeks_remaining == 0 {
            self.is_complete = true;
            return ProjectTick::Completed;
        }

        ProjectTick::NoChange
    }

    /// Force-complete the project regardless of its current state. Does not
    /// clear an existing failed flag.
    pub fn finish(&mut self) {
        self.weeks_remaining = 0;
        self.is_complete = true;
    }

    /// Mark the project failed. A failed project no longer counts down.
    pub fn fail(&mut self) {
        self.failed = true;
        self.is_complete = false;
    }

    /// Lifecycle state for display. Failed wins when both end flags are set
    /// (reachable via `finish` after `fail`).
    pub fn status(&self) -> ProjectStatus {
        if self.failed {
            ProjectStatus::Failed
        } else if self.is_complete {
            ProjectStatus::Complete
        } else {
            ProjectStatus::Active
        }
    }
}
