// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step sequencer: the position/playback state machine behind every animated scene.
//!
//! A sequencer is bound to one pattern's captions for its whole life. Positions run from `0`
//! (the "not yet started" pose) to `max_steps`, one position per caption. Autoplay is driven by
//! an owned [`AutoplayTimer`]; the event loop calls [`StepSequencer::poll`] and the sequencer
//! decides whether a tick is due. Switching patterns means building a new sequencer, which drops
//! the old timer with it.

use std::time::Duration;

use crate::model::{Pattern, PatternId};

mod clock;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::AutoplayTimer;

/// Period of one autoplay tick at [`Speed::Normal`].
pub const BASE_TICK_INTERVAL: Duration = Duration::from_millis(1500);
pub const MIN_TICK_MS: u64 = 100;
pub const MAX_TICK_MS: u64 = 60_000;

/// Number of positions used when a pattern has no captions.
pub const FALLBACK_MAX_STEPS: usize = 4;

pub const START_CAPTION: &str = "Press play to begin.";
pub const MISSING_CAPTION: &str = "No description for this step.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub fn multiplier(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Fast => 2,
        }
    }

    pub fn from_multiplier(multiplier: u32) -> Option<Self> {
        match multiplier {
            1 => Some(Self::Normal),
            2 => Some(Self::Fast),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Fast,
            Self::Fast => Self::Normal,
        }
    }

    pub fn period(self, base_interval: Duration) -> Duration {
        base_interval / self.multiplier()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerConfig {
    pub base_interval: Duration,
    pub initial_speed: Speed,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            base_interval: BASE_TICK_INTERVAL,
            initial_speed: Speed::Normal,
        }
    }
}

impl SequencerConfig {
    /// Base interval from a millisecond count, clamped to `MIN_TICK_MS..=MAX_TICK_MS`.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        let clamped = tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        if clamped != tick_ms {
            tracing::warn!(requested = tick_ms, clamped, "tick interval out of range");
        }
        self.base_interval = Duration::from_millis(clamped);
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.initial_speed = speed;
        self
    }
}

/// What a sequencer is animating: the pattern key, its renderer tag and its captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pattern_id: PatternId,
    visual_type: String,
    captions: Vec<String>,
}

impl Binding {
    pub fn new(pattern_id: PatternId, visual_type: impl Into<String>, captions: Vec<String>) -> Self {
        Self {
            pattern_id,
            visual_type: visual_type.into(),
            captions,
        }
    }

    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self::new(
            pattern.id().clone(),
            pattern.visual_type(),
            pattern.visual_steps().to_vec(),
        )
    }

    pub fn pattern_id(&self) -> &PatternId {
        &self.pattern_id
    }

    pub fn visual_type(&self) -> &str {
        &self.visual_type
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn max_steps(&self) -> usize {
        if self.captions.is_empty() {
            FALLBACK_MAX_STEPS
        } else {
            self.captions.len()
        }
    }
}

#[derive(Debug)]
pub struct StepSequencer<C: Clock = SystemClock> {
    binding: Binding,
    position: usize,
    playback: PlaybackState,
    speed: Speed,
    base_interval: Duration,
    timer: AutoplayTimer,
    clock: C,
}

impl<C: Clock> StepSequencer<C> {
    /// A fresh sequencer at `(Idle, 0)`.
    pub fn new(binding: Binding, config: SequencerConfig, clock: C) -> Self {
        if binding.captions().is_empty() {
            tracing::warn!(
                pattern_id = %binding.pattern_id(),
                fallback_steps = FALLBACK_MAX_STEPS,
                "pattern has no step captions"
            );
        }

        let speed = config.initial_speed;
        Self {
            binding,
            position: 0,
            playback: PlaybackState::Idle,
            speed,
            base_interval: config.base_interval,
            timer: AutoplayTimer::new(speed.period(config.base_interval)),
            clock,
        }
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    pub fn current_position(&self) -> usize {
        self.position
    }

    pub fn max_position(&self) -> usize {
        self.binding.max_steps()
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn tick_period(&self) -> Duration {
        self.timer.period()
    }

    /// `position / max_steps` in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.position as f64 / self.max_position() as f64
    }

    pub fn current_caption(&self) -> &str {
        if self.position == 0 {
            return START_CAPTION;
        }
        match self.binding.captions().get(self.position - 1) {
            Some(caption) => caption,
            None => {
                tracing::debug!(
                    pattern_id = %self.binding.pattern_id(),
                    position = self.position,
                    "caption index past end of captions"
                );
                MISSING_CAPTION
            }
        }
    }

    /// Time left before the next autoplay tick, `None` when idle.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.timer.time_until_due(self.clock.now())
    }

    pub fn seek_next(&mut self) {
        if self.position >= self.max_position() {
            self.position = 0;
        } else {
            self.position += 1;
        }
        self.trace("seek_next");
    }

    pub fn seek_prev(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.stop();
        self.trace("seek_prev");
    }

    pub fn toggle_play(&mut self) {
        match self.playback {
            PlaybackState::Idle => {
                if self.position >= self.max_position() {
                    self.position = 0;
                }
                self.playback = PlaybackState::Playing;
                self.timer.arm(self.clock.now());
            }
            PlaybackState::Playing => self.stop(),
        }
        self.trace("toggle_play");
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.stop();
        self.trace("reset");
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
        let period = speed.period(self.base_interval);
        self.timer.set_period(period, self.clock.now());
        tracing::debug!(?speed, period_ms = period.as_millis() as u64, "speed changed");
    }

    pub fn toggle_speed(&mut self) {
        self.set_speed(self.speed.toggled());
    }

    /// Applies at most one due autoplay tick. Returns `true` when state changed.
    pub fn poll(&mut self) -> bool {
        if self.playback != PlaybackState::Playing {
            return false;
        }
        if !self.timer.fire_if_due(self.clock.now()) {
            return false;
        }
        self.on_tick();
        true
    }

    fn on_tick(&mut self) {
        if self.position < self.max_position() {
            self.position += 1;
        } else {
            self.stop();
        }
        self.trace("tick");
    }

    fn stop(&mut self) {
        self.playback = PlaybackState::Idle;
        self.timer.cancel();
    }

    fn trace(&self, op: &'static str) {
        tracing::debug!(
            op,
            pattern_id = %self.binding.pattern_id(),
            position = self.position,
            playing = self.is_playing(),
            "sequencer transition"
        );
    }
}

#[cfg(test)]
mod tests;
