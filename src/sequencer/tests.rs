// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use rstest::{fixture, rstest};

use crate::model::PatternId;

use super::{
    Binding, ManualClock, PlaybackState, SequencerConfig, Speed, StepSequencer,
    BASE_TICK_INTERVAL, FALLBACK_MAX_STEPS, MISSING_CAPTION, START_CAPTION,
};

struct Ctx {
    clock: ManualClock,
    seq: StepSequencer<ManualClock>,
}

impl Ctx {
    fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Advances by exactly one tick period and polls once.
    fn tick(&mut self) -> bool {
        self.advance(self.seq.tick_period());
        self.seq.poll()
    }
}

fn binding(id: &str, steps: usize) -> Binding {
    Binding::new(
        PatternId::new(id).expect("pattern id"),
        id,
        (1..=steps).map(|n| format!("caption {n}")).collect(),
    )
}

fn ctx_with(steps: usize) -> Ctx {
    let clock = ManualClock::new();
    let seq = StepSequencer::new(binding("demo", steps), SequencerConfig::default(), clock.clone());
    Ctx { clock, seq }
}

#[fixture]
fn three_steps() -> Ctx {
    ctx_with(3)
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Next,
    Prev,
    Play,
    Reset,
    Speed,
    Tick,
    Stall,
}

fn apply(ctx: &mut Ctx, action: Action) {
    match action {
        Action::Next => ctx.seq.seek_next(),
        Action::Prev => ctx.seq.seek_prev(),
        Action::Play => ctx.seq.toggle_play(),
        Action::Reset => ctx.seq.reset(),
        Action::Speed => ctx.seq.toggle_speed(),
        Action::Tick => {
            ctx.tick();
        }
        Action::Stall => {
            ctx.advance(BASE_TICK_INTERVAL * 7);
            ctx.seq.poll();
        }
    }
}

/// Deterministic action stream (xorshift) so long mixed sequences stay reproducible.
fn action_stream(seed: u64, len: usize) -> Vec<Action> {
    const ACTIONS: [Action; 7] = [
        Action::Next,
        Action::Prev,
        Action::Play,
        Action::Reset,
        Action::Speed,
        Action::Tick,
        Action::Stall,
    ];
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ACTIONS[(state % ACTIONS.len() as u64) as usize]
        })
        .collect()
}

#[test]
fn new_sequencer_starts_idle_at_zero() {
    let ctx = ctx_with(3);
    assert_eq!(ctx.seq.current_position(), 0);
    assert_eq!(ctx.seq.playback(), PlaybackState::Idle);
    assert_eq!(ctx.seq.current_caption(), START_CAPTION);
    assert_eq!(ctx.seq.time_until_tick(), None);
}

#[rstest]
#[case(0, FALLBACK_MAX_STEPS)]
#[case(1, 1)]
#[case(4, 4)]
#[case(5, 5)]
fn max_steps_follows_caption_count(#[case] captions: usize, #[case] expected: usize) {
    let ctx = ctx_with(captions);
    assert_eq!(ctx.seq.max_position(), expected);
}

#[rstest]
fn scenario_play_then_one_tick_shows_first_caption(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    assert!(three_steps.tick());
    assert_eq!(three_steps.seq.current_position(), 1);
    assert_eq!(three_steps.seq.current_caption(), "caption 1");
    assert!(three_steps.seq.is_playing());
}

#[rstest]
fn scenario_seek_next_wraps_after_max(mut three_steps: Ctx) {
    for _ in 0..3 {
        three_steps.seq.seek_next();
    }
    assert_eq!(three_steps.seq.current_position(), 3);
    three_steps.seq.seek_next();
    assert_eq!(three_steps.seq.current_position(), 0);
}

#[rstest]
fn scenario_play_at_end_restarts_from_zero(mut three_steps: Ctx) {
    for _ in 0..3 {
        three_steps.seq.seek_next();
    }
    three_steps.seq.toggle_play();
    assert_eq!(three_steps.seq.current_position(), 0);
    assert!(three_steps.seq.is_playing());
}

#[rstest]
fn seek_next_keeps_play_state(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.seq.seek_next();
    assert!(three_steps.seq.is_playing());
    three_steps.seq.toggle_play();
    three_steps.seq.seek_next();
    assert!(!three_steps.seq.is_playing());
}

#[rstest]
fn seek_prev_always_stops(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.seq.seek_prev();
    assert!(!three_steps.seq.is_playing());
    assert_eq!(three_steps.seq.current_position(), 0);
    assert_eq!(three_steps.seq.time_until_tick(), None);

    // No tick lands after the stop.
    assert!(!three_steps.tick());
    assert_eq!(three_steps.seq.current_position(), 0);
}

#[rstest]
fn autoplay_runs_to_end_then_halts(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    for expected in 1..=3 {
        assert!(three_steps.tick());
        assert_eq!(three_steps.seq.current_position(), expected);
        assert!(three_steps.seq.is_playing());
    }

    // The tick after reaching the end stops playback without moving.
    assert!(three_steps.tick());
    assert_eq!(three_steps.seq.current_position(), 3);
    assert_eq!(three_steps.seq.playback(), PlaybackState::Idle);

    // End state is stable.
    assert!(!three_steps.tick());
    assert_eq!(three_steps.seq.current_position(), 3);
}

#[rstest]
fn tick_does_not_fire_before_deadline(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.advance(BASE_TICK_INTERVAL - Duration::from_millis(1));
    assert!(!three_steps.seq.poll());
    assert_eq!(three_steps.seq.current_position(), 0);
    assert_eq!(three_steps.seq.time_until_tick(), Some(Duration::from_millis(1)));
}

#[rstest]
fn stalled_loop_applies_a_single_tick(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.advance(BASE_TICK_INTERVAL * 10);
    assert!(three_steps.seq.poll());
    assert!(!three_steps.seq.poll());
    assert_eq!(three_steps.seq.current_position(), 1);
}

#[rstest]
fn pausing_keeps_position_and_cancels_timer(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.tick();
    three_steps.seq.toggle_play();
    assert_eq!(three_steps.seq.current_position(), 1);
    assert_eq!(three_steps.seq.time_until_tick(), None);
    assert!(!three_steps.tick());
}

#[rstest]
fn reset_is_unconditional(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.tick();
    three_steps.tick();
    three_steps.seq.reset();
    assert_eq!(three_steps.seq.current_position(), 0);
    assert!(!three_steps.seq.is_playing());
    three_steps.seq.reset();
    assert_eq!(three_steps.seq.current_position(), 0);
}

#[rstest]
fn set_speed_mid_flight_keeps_position_and_play_state(mut three_steps: Ctx) {
    three_steps.seq.toggle_play();
    three_steps.tick();
    three_steps.advance(Duration::from_millis(1000));

    three_steps.seq.set_speed(Speed::Fast);
    assert_eq!(three_steps.seq.current_position(), 1);
    assert!(three_steps.seq.is_playing());
    assert_eq!(three_steps.seq.tick_period(), BASE_TICK_INTERVAL / 2);
    // Pending deadline restarts from now with the new period.
    assert_eq!(three_steps.seq.time_until_tick(), Some(BASE_TICK_INTERVAL / 2));

    assert!(three_steps.tick());
    assert_eq!(three_steps.seq.current_position(), 2);
}

#[rstest]
fn set_speed_while_idle_does_not_arm(mut three_steps: Ctx) {
    three_steps.seq.toggle_speed();
    assert_eq!(three_steps.seq.speed(), Speed::Fast);
    assert_eq!(three_steps.seq.time_until_tick(), None);
    three_steps.seq.toggle_speed();
    assert_eq!(three_steps.seq.speed(), Speed::Normal);
}

#[test]
fn empty_captions_use_placeholder_for_every_step() {
    let mut ctx = ctx_with(0);
    for _ in 0..FALLBACK_MAX_STEPS {
        ctx.seq.seek_next();
        assert_eq!(ctx.seq.current_caption(), MISSING_CAPTION);
    }
    assert_eq!(ctx.seq.current_position(), FALLBACK_MAX_STEPS);
    assert!((ctx.seq.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn rebinding_drops_pending_ticks() {
    let mut ctx = ctx_with(3);
    ctx.seq.toggle_play();
    ctx.advance(BASE_TICK_INTERVAL / 2);

    ctx.seq = StepSequencer::new(
        binding("other", 2),
        SequencerConfig::default(),
        ctx.clock.clone(),
    );
    ctx.advance(BASE_TICK_INTERVAL * 3);
    assert!(!ctx.seq.poll());
    assert_eq!(ctx.seq.current_position(), 0);
    assert_eq!(ctx.seq.playback(), PlaybackState::Idle);
    assert_eq!(ctx.seq.binding().pattern_id().as_str(), "other");
}

#[test]
fn config_clamps_tick_interval() {
    assert_eq!(
        SequencerConfig::default().with_tick_ms(5).base_interval,
        Duration::from_millis(super::MIN_TICK_MS)
    );
    assert_eq!(
        SequencerConfig::default().with_tick_ms(10_000_000).base_interval,
        Duration::from_millis(super::MAX_TICK_MS)
    );
    assert_eq!(
        SequencerConfig::default().with_tick_ms(800).base_interval,
        Duration::from_millis(800)
    );
}

#[rstest]
#[case(1, 3)]
#[case(7, 0)]
#[case(42, 5)]
#[case(0xdead_beef, 2)]
#[case(2026, 4)]
fn position_stays_in_bounds_for_mixed_actions(#[case] seed: u64, #[case] captions: usize) {
    let mut ctx = ctx_with(captions);
    let max = ctx.seq.max_position();

    for action in action_stream(seed, 400) {
        let before_playing = ctx.seq.is_playing();
        let before_position = ctx.seq.current_position();
        apply(&mut ctx, action);

        let position = ctx.seq.current_position();
        assert!(position <= max, "{action:?} left position {position} > {max}");

        match action {
            Action::Prev => assert!(!ctx.seq.is_playing()),
            Action::Speed => {
                assert_eq!(position, before_position);
                assert_eq!(ctx.seq.is_playing(), before_playing);
            }
            Action::Next => assert_eq!(ctx.seq.is_playing(), before_playing),
            _ => {}
        }

        if !ctx.seq.is_playing() {
            assert_eq!(ctx.seq.time_until_tick(), None);
        }
    }
}
