use crate::sequencer::Direction;

/// Seconds for an element to fade in once its stagger delay has passed.
pub const FADE_IN_DURATION: f32 = 0.5;
/// Delay between consecutive staggered elements.
pub const STAGGER_STEP: f32 = 0.1;
/// Horizontal drift at scale 1.0, in points.
pub const DRIFT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// The outgoing panel during the transition window.
    FadeOut { progress: f32 },
    /// The settled panel, `elapsed` seconds after it was committed.
    FadeIn { elapsed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f32,
    pub offset_x: f32,
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Outgoing panels leave toward the side the user is moving away from;
/// incoming ones arrive from the other side.
fn exit_sign(direction: Direction) -> f32 {
    match direction {
        Direction::Next => -1.0,
        Direction::Prev => 1.0,
    }
}

/// Motion of the element in stagger `slot` (0 = first to appear).
pub fn element_motion(phase: Phase, direction: Direction, slot: usize) -> Motion {
    match phase {
        Phase::FadeOut { progress } => {
            let t = ease_in_out(progress.clamp(0.0, 1.0));
            Motion {
                opacity: 1.0 - t,
                offset_x: exit_sign(direction) * t * DRIFT,
            }
        }
        Phase::FadeIn { elapsed } => {
            let local = (elapsed - slot as f32 * STAGGER_STEP) / FADE_IN_DURATION;
            let t = ease_out(local.clamp(0.0, 1.0));
            Motion {
                opacity: t,
                offset_x: -exit_sign(direction) * (1.0 - t) * DRIFT,
            }
        }
    }
}

/// Whether every element up to `last_slot` has finished fading in.
pub fn is_settled(phase: Phase, last_slot: usize) -> bool {
    match phase {
        Phase::FadeOut { .. } => false,
        Phase::FadeIn { elapsed } => {
            elapsed >= last_slot as f32 * STAGGER_STEP + FADE_IN_DURATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn test_fade_out_drifts_with_direction() {
        let next = element_motion(Phase::FadeOut { progress: 1.0 }, Direction::Next, 0);
        assert_eq!(next.opacity, 0.0);
        assert_eq!(next.offset_x, -DRIFT);

        let prev = element_motion(Phase::FadeOut { progress: 1.0 }, Direction::Prev, 0);
        assert_eq!(prev.offset_x, DRIFT);
    }

    #[test]
    fn test_fade_in_arrives_from_opposite_side() {
        let start = element_motion(Phase::FadeIn { elapsed: 0.0 }, Direction::Next, 0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset_x, DRIFT);

        let done = element_motion(Phase::FadeIn { elapsed: 10.0 }, Direction::Next, 0);
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.offset_x, 0.0);
    }

    #[test]
    fn test_stagger_delays_later_slots() {
        let phase = Phase::FadeIn { elapsed: 0.25 };
        let first = element_motion(phase, Direction::Next, 0);
        let fourth = element_motion(phase, Direction::Next, 3);
        assert!(first.opacity > 0.0);
        assert_eq!(fourth.opacity, 0.0);
    }

    #[test]
    fn test_settled() {
        assert!(!is_settled(Phase::FadeOut { progress: 1.0 }, 0));
        assert!(!is_settled(Phase::FadeIn { elapsed: 0.5 }, 2));
        assert!(is_settled(Phase::FadeIn { elapsed: 0.71 }, 2));
    }
}
