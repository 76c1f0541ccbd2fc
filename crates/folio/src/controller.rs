use std::time::{Duration, Instant};

use crate::deck::{self, SLIDES, Slide};
use crate::modal::{ModalOverlay, PreviewDescriptor};
use crate::sequencer::{Direction, NavigationState, SlideSequencer};

/// Owns all UI state for one presentation: slide position, the pending
/// transition commit and the preview modal.
///
/// While the modal is open, slide navigation is refused and any in-flight
/// transition is frozen, so closing the modal returns to exactly the
/// navigation state it covered. After [`teardown`](Self::teardown) the
/// controller ignores all input.
#[derive(Debug)]
pub struct PresentationController {
    sequencer: SlideSequencer,
    modal: ModalOverlay,
    torn_down: bool,
}

impl PresentationController {
    pub fn new(start: usize, delay: Duration) -> Self {
        Self {
            sequencer: SlideSequencer::new(deck::slide_count(), start, delay),
            modal: ModalOverlay::new(),
            torn_down: false,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.sequencer.state()
    }

    pub fn current_slide(&self) -> Slide {
        SLIDES[self.sequencer.current_index()]
    }

    pub fn modal(&self) -> &ModalOverlay {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    fn can_navigate(&self) -> bool {
        !self.torn_down && !self.modal.is_open()
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.can_navigate() && self.sequencer.next(now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.can_navigate() && self.sequencer.prev(now)
    }

    pub fn jump_to(&mut self, target: usize, now: Instant) -> bool {
        self.can_navigate() && self.sequencer.jump_to(target, now)
    }

    /// Return to the first slide, always animating backwards.
    pub fn back_to_start(&mut self, now: Instant) -> bool {
        self.can_navigate() && self.sequencer.request_transition(0, Direction::Prev, now)
    }

    pub fn open_preview(&mut self, descriptor: PreviewDescriptor, now: Instant) {
        if self.torn_down {
            return;
        }
        let replaced = self.modal.open(descriptor);
        if !replaced {
            self.sequencer.pause(now);
        }
    }

    pub fn close_preview(&mut self, now: Instant) -> bool {
        if self.torn_down || self.modal.close().is_none() {
            return false;
        }
        self.sequencer.resume(now);
        true
    }

    /// Advance timers. Returns the index committed this tick, if any.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        if self.torn_down {
            return None;
        }
        self.sequencer.poll(now)
    }

    pub fn time_until_commit(&self, now: Instant) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        self.sequencer.time_until_commit(now)
    }

    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        self.sequencer.transition_progress(now)
    }

    /// Width fraction of the progress bar.
    pub fn progress(&self) -> f32 {
        (self.sequencer.current_index() + 1) as f32 / self.sequencer.slide_count() as f32
    }

    /// "02 / 04" style position text.
    pub fn position_text(&self) -> String {
        format!(
            "{:02} / {:02}",
            self.sequencer.current_index() + 1,
            self.sequencer.slide_count()
        )
    }

    pub fn can_go_prev(&self) -> bool {
        self.sequencer.current_index() > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.sequencer.current_index() + 1 < self.sequencer.slide_count()
    }

    /// Release the pending commit and stop reacting to input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.sequencer.cancel() {
            log::debug!("teardown cancelled an in-flight transition");
        }
        self.modal.close();
        self.torn_down = true;
    }
}

impl Drop for PresentationController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideKind;
    use crate::sequencer::TRANSITION_DELAY;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> PresentationController {
        PresentationController::new(0, TRANSITION_DELAY)
    }

    #[test]
    fn test_opening_modal_keeps_index() {
        let t0 = Instant::now();
        let mut c = PresentationController::new(2, TRANSITION_DELAY);
        c.open_preview(PreviewDescriptor::file("demo.mp4"), t0);
        assert_eq!(c.state().current_index, 2);
        assert_eq!(c.current_slide().kind, SlideKind::Projects);
    }

    #[test]
    fn test_navigation_blocked_while_modal_open() {
        let t0 = Instant::now();
        let mut c = controller();
        c.open_preview(PreviewDescriptor::file("demo.mp4"), t0);
        assert!(!c.next(t0));
        assert!(!c.prev(t0));
        assert!(!c.jump_to(3, t0));
        assert!(!c.back_to_start(t0));
        assert!(!c.state().is_animating);
    }

    #[test]
    fn test_close_restores_mid_transition_state() {
        let t0 = Instant::now();
        let mut c = controller();
        assert!(c.next(t0));
        c.open_preview(PreviewDescriptor::remote("https://example.com/e"), t0 + ms(100));
        let before = c.state();

        // Time passes while the modal is up; nothing commits.
        assert_eq!(c.tick(t0 + ms(2_000)), None);
        assert!(c.close_preview(t0 + ms(2_000)));
        assert_eq!(c.state(), before);

        assert_eq!(c.tick(t0 + ms(2_199)), None);
        assert_eq!(c.tick(t0 + ms(2_200)), Some(1));
    }

    #[test]
    fn test_close_restores_idle_state() {
        let t0 = Instant::now();
        let mut c = PresentationController::new(1, TRANSITION_DELAY);
        let before = c.state();
        c.open_preview(PreviewDescriptor::file("a.mp4"), t0);
        c.open_preview(PreviewDescriptor::file("b.mp4"), t0);
        assert!(c.close_preview(t0 + ms(50)));
        assert_eq!(c.state(), before);
        assert!(!c.close_preview(t0 + ms(60)));
    }

    #[test]
    fn test_progress_and_position_text() {
        let t0 = Instant::now();
        let mut c = controller();
        assert_eq!(c.progress(), 0.25);
        assert_eq!(c.position_text(), "01 / 04");
        c.jump_to(3, t0);
        c.tick(t0 + ms(300));
        assert_eq!(c.progress(), 1.0);
        assert_eq!(c.position_text(), "04 / 04");
        assert!(!c.can_go_next());
        assert!(c.can_go_prev());
    }

    #[test]
    fn test_back_to_start_is_prev() {
        let t0 = Instant::now();
        let mut c = PresentationController::new(3, TRANSITION_DELAY);
        assert!(c.back_to_start(t0));
        assert_eq!(c.state().direction, Direction::Prev);
        c.tick(t0 + ms(300));
        assert_eq!(c.current_slide().kind, SlideKind::Intro);
    }

    #[test]
    fn test_teardown_cancels_pending_commit() {
        let t0 = Instant::now();
        let mut c = controller();
        c.next(t0);
        c.teardown();
        assert!(!c.state().is_animating);
        assert_eq!(c.tick(t0 + ms(1_000)), None);
        assert_eq!(c.state().current_index, 0);
        assert_eq!(c.time_until_commit(t0), None);
        assert!(!c.next(t0 + ms(1_000)));
        c.open_preview(PreviewDescriptor::file("x.mp4"), t0);
        assert!(!c.is_modal_open());
    }
}
