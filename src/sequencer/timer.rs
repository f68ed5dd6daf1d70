// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

/// Deadline-based periodic timer owned by a sequencer.
///
/// There is no background thread: the owner polls [`AutoplayTimer::fire_if_due`] from its event
/// loop. Cancellation only clears the deadline, so it cannot fail or race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl AutoplayTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Changes the period. A pending deadline restarts from `now` with the new period.
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        if self.is_armed() {
            self.arm(now);
        }
    }

    /// Returns `true` when the deadline has passed, then re-arms at `now + period`.
    ///
    /// At most one fire per call: a loop that stalled for several periods sees a single tick.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.arm(now);
                true
            }
            _ => false,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
