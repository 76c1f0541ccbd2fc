use std::time::{Duration, Instant};

/// How long the outgoing panel animates before the new index is committed.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Direction implied by jumping from `current` to `target`.
    pub fn between(current: usize, target: usize) -> Self {
        if target > current {
            Self::Next
        } else {
            Self::Prev
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    pub is_animating: bool,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CommitTimer {
    Running { due: Instant },
    Paused { remaining: Duration },
}

/// The one scheduled commit a sequencer may hold at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingCommit {
    target: usize,
    timer: CommitTimer,
}

impl PendingCommit {
    fn remaining(&self, now: Instant) -> Duration {
        match self.timer {
            CommitTimer::Running { due } => due.saturating_duration_since(now),
            CommitTimer::Paused { remaining } => remaining,
        }
    }
}

/// Tracks the current slide and gates navigation behind a fixed-length
/// transition window. Requests that arrive while a transition is in flight
/// are dropped.
#[derive(Debug)]
pub struct SlideSequencer {
    state: NavigationState,
    len: usize,
    delay: Duration,
    pending: Option<PendingCommit>,
}

impl SlideSequencer {
    pub fn new(len: usize, start: usize, delay: Duration) -> Self {
        Self {
            state: NavigationState {
                current_index: start.min(len.saturating_sub(1)),
                is_animating: false,
                direction: Direction::Next,
            },
            len,
            delay,
            pending: None,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn request_transition(&mut self, target: usize, direction: Direction, now: Instant) -> bool {
        if self.state.is_animating {
            log::debug!("transition to {target} dropped: already animating");
            return false;
        }
        if target >= self.len {
            log::debug!("transition to {target} dropped: out of range");
            return false;
        }

        log::debug!(
            "transition {} -> {target} ({direction:?})",
            self.state.current_index
        );
        self.state.is_animating = true;
        self.state.direction = direction;
        self.pending = Some(PendingCommit {
            target,
            timer: CommitTimer::Running {
                due: now + self.delay,
            },
        });
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        let target = self.state.current_index + 1;
        self.request_transition(target, Direction::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        match self.state.current_index.checked_sub(1) {
            Some(target) => self.request_transition(target, Direction::Prev, now),
            None => false,
        }
    }

    pub fn jump_to(&mut self, target: usize, now: Instant) -> bool {
        let direction = Direction::between(self.state.current_index, target);
        self.request_transition(target, direction, now)
    }

    /// Fire the pending commit if it is due. Returns the newly committed
    /// index, if any.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let pending = self.pending?;
        let CommitTimer::Running { due } = pending.timer else {
            return None;
        };
        if now < due {
            return None;
        }
        self.pending = None;
        self.state.current_index = pending.target;
        self.state.is_animating = false;
        log::debug!("committed slide {}", pending.target);
        Some(pending.target)
    }

    /// Time left before the pending commit fires. `None` when nothing is
    /// scheduled or the timer is paused.
    pub fn time_until_commit(&self, now: Instant) -> Option<Duration> {
        match self.pending?.timer {
            CommitTimer::Running { due } => Some(due.saturating_duration_since(now)),
            CommitTimer::Paused { .. } => None,
        }
    }

    /// Fraction of the transition window elapsed, in `[0, 1]`.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        let pending = self.pending?;
        if self.delay.is_zero() {
            return Some(1.0);
        }
        let remaining = pending.remaining(now).as_secs_f32();
        Some((1.0 - remaining / self.delay.as_secs_f32()).clamp(0.0, 1.0))
    }

    /// Freeze the pending commit, keeping its remaining time.
    pub fn pause(&mut self, now: Instant) {
        if let Some(pending) = &mut self.pending {
            if let CommitTimer::Running { due } = pending.timer {
                pending.timer = CommitTimer::Paused {
                    remaining: due.saturating_duration_since(now),
                };
            }
        }
    }

    /// Restart a paused commit with whatever time it had left.
    pub fn resume(&mut self, now: Instant) {
        if let Some(pending) = &mut self.pending {
            if let CommitTimer::Paused { remaining } = pending.timer {
                pending.timer = CommitTimer::Running {
                    due: now + remaining,
                };
            }
        }
    }

    /// Drop the pending commit without applying it. Returns whether one was
    /// outstanding.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        log::debug!("cancelled pending commit to slide {}", pending.target);
        self.state.is_animating = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn sequencer() -> SlideSequencer {
        SlideSequencer::new(4, 0, TRANSITION_DELAY)
    }

    #[test]
    fn test_every_valid_target_commits() {
        for target in 0..4 {
            let t0 = Instant::now();
            let mut seq = sequencer();
            assert!(seq.request_transition(target, Direction::Next, t0));
            assert!(seq.state().is_animating);
            assert_eq!(seq.poll(t0 + ms(300)), Some(target));
            let state = seq.state();
            assert_eq!(state.current_index, target);
            assert!(!state.is_animating);
        }
    }

    #[test]
    fn test_commit_waits_for_delay() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        seq.next(t0);
        assert_eq!(seq.poll(t0 + ms(299)), None);
        assert_eq!(seq.current_index(), 0);
        assert_eq!(seq.poll(t0 + ms(300)), Some(1));
        assert_eq!(seq.poll(t0 + ms(600)), None);
    }

    #[test]
    fn test_request_while_animating_is_dropped() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        assert!(seq.next(t0));
        let before = seq.state();
        assert!(!seq.next(t0 + ms(100)));
        assert!(!seq.request_transition(3, Direction::Next, t0 + ms(100)));
        assert!(!seq.prev(t0 + ms(100)));
        assert_eq!(seq.state(), before);
        assert_eq!(seq.poll(t0 + ms(300)), Some(1));
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        assert!(!seq.request_transition(4, Direction::Next, t0));
        assert!(!seq.state().is_animating);
        assert_eq!(seq.time_until_commit(t0), None);
    }

    #[test]
    fn test_bounds() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        assert!(!seq.prev(t0));
        assert_eq!(seq.state().direction, Direction::Next);

        let mut seq = SlideSequencer::new(4, 3, TRANSITION_DELAY);
        assert!(!seq.next(t0));
        assert!(!seq.state().is_animating);
        assert_eq!(seq.current_index(), 3);
    }

    #[test]
    fn test_prev_records_direction() {
        let t0 = Instant::now();
        let mut seq = SlideSequencer::new(4, 2, TRANSITION_DELAY);
        assert!(seq.prev(t0));
        assert_eq!(seq.state().direction, Direction::Prev);
        assert_eq!(seq.poll(t0 + ms(300)), Some(1));
    }

    #[test]
    fn test_jump_direction() {
        let t0 = Instant::now();
        let mut seq = SlideSequencer::new(4, 1, TRANSITION_DELAY);
        seq.jump_to(3, t0);
        assert_eq!(seq.state().direction, Direction::Next);
        seq.poll(t0 + ms(300));

        seq.jump_to(0, t0 + ms(400));
        assert_eq!(seq.state().direction, Direction::Prev);
        seq.poll(t0 + ms(700));
        assert_eq!(seq.current_index(), 0);

        // Same index animates in place, reported as Prev.
        assert!(seq.jump_to(0, t0 + ms(800)));
        assert_eq!(seq.state().direction, Direction::Prev);
    }

    #[test]
    fn test_rapid_double_next_lands_once() {
        let t0 = Instant::now();
        let mut seq = SlideSequencer::new(4, 1, TRANSITION_DELAY);
        assert!(seq.next(t0));
        assert!(!seq.next(t0 + ms(50)));
        seq.poll(t0 + ms(300));
        seq.poll(t0 + ms(700));
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_pause_preserves_remaining_time() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        seq.next(t0);
        seq.pause(t0 + ms(100));
        assert_eq!(seq.time_until_commit(t0 + ms(100)), None);
        assert_eq!(seq.poll(t0 + ms(5_000)), None);
        assert!(seq.state().is_animating);

        seq.resume(t0 + ms(5_000));
        assert_eq!(seq.time_until_commit(t0 + ms(5_000)), Some(ms(200)));
        assert_eq!(seq.poll(t0 + ms(5_199)), None);
        assert_eq!(seq.poll(t0 + ms(5_200)), Some(1));
    }

    #[test]
    fn test_cancel_releases_pending_commit() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        assert!(!seq.cancel());
        seq.next(t0);
        assert!(seq.cancel());
        assert!(!seq.state().is_animating);
        assert_eq!(seq.poll(t0 + ms(1_000)), None);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_transition_progress() {
        let t0 = Instant::now();
        let mut seq = sequencer();
        assert_eq!(seq.transition_progress(t0), None);
        seq.next(t0);
        let half = seq.transition_progress(t0 + ms(150)).unwrap_or_default();
        assert!((half - 0.5).abs() < 0.01, "got {half}");
        assert_eq!(seq.transition_progress(t0 + ms(400)), Some(1.0));
    }

    #[test]
    fn test_start_is_clamped() {
        let seq = SlideSequencer::new(4, 10, TRANSITION_DELAY);
        assert_eq!(seq.current_index(), 3);
    }
}
