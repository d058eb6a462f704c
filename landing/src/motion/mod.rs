//! Timed interpolation for entrance and exit transitions.
//!
//! Two shapes cover everything the page animates:
//!
//! - [`Tween`]: a one-shot transition with a start delay, sampled by elapsed
//!   time. Goes `Pending -> Animating -> Settled` and never restarts.
//! - [`PresenceTrack`]: a reversible show/hide transition. Flipping the
//!   target mid-flight continues from the current progress instead of
//!   jumping to either end.
//!
//! Both are plain data; [`driver`] runs them on animation frames.

pub mod driver;

pub use driver::{Reveal, use_presence, use_tween};

/// Visual properties a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical translation in px
    pub offset_y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn hidden_offset(offset_y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            offset_y,
            scale: 1.0,
        }
    }

    pub const fn hidden_scale(scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            offset_y: 0.0,
            scale,
        }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Inline style for this pose.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.3});",
            self.opacity, self.offset_y, self.scale
        )
    }
}

/// Cubic ease-out.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting out the start delay
    Pending,
    Animating,
    Settled,
}

/// One-shot transition from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub const fn new(from: Pose, delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to: Pose::REST,
            delay_ms,
            duration_ms,
        }
    }

    pub fn phase(&self, elapsed_ms: f64) -> Phase {
        if elapsed_ms < self.delay_ms {
            Phase::Pending
        } else if elapsed_ms < self.end_ms() {
            Phase::Animating
        } else {
            Phase::Settled
        }
    }

    /// Elapsed time at which the tween settles.
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms.max(0.0)
    }

    pub fn sample(&self, elapsed_ms: f64) -> (Phase, Pose) {
        match self.phase(elapsed_ms) {
            Phase::Pending => (Phase::Pending, self.from),
            Phase::Settled => (Phase::Settled, self.to),
            Phase::Animating => {
                let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
                (Phase::Animating, self.from.lerp(self.to, ease_out(t)))
            }
        }
    }
}

/// Reversible presence transition.
///
/// `progress` is 0.0 when fully hidden and 1.0 when fully shown. It moves
/// linearly toward the target; easing is applied when producing a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceTrack {
    progress: f64,
    target: bool,
    duration_ms: f64,
}

impl PresenceTrack {
    pub fn new(shown: bool, duration_ms: f64) -> Self {
        Self {
            progress: if shown { 1.0 } else { 0.0 },
            target: shown,
            duration_ms: duration_ms.max(1.0),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn target(&self) -> bool {
        self.target
    }

    pub fn set_target(&mut self, shown: bool) {
        self.target = shown;
    }

    pub fn advance(&mut self, dt_ms: f64) {
        let step = dt_ms.max(0.0) / self.duration_ms;
        self.progress = if self.target {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    pub fn is_settled(&self) -> bool {
        if self.target {
            self.progress >= 1.0
        } else {
            self.progress <= 0.0
        }
    }

    /// Whether the element should be in the tree: shown, or still exiting.
    pub fn is_present(&self) -> bool {
        self.target || self.progress > 0.0
    }

    pub fn pose(&self, hidden: Pose, shown: Pose) -> Pose {
        hidden.lerp(shown, ease_out(self.progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RISE: Pose = Pose::hidden_offset(20.0);

    #[test]
    fn tween_phases_follow_delay_and_duration() {
        let tween = Tween::new(RISE, 100.0, 200.0);

        assert_eq!(tween.phase(0.0), Phase::Pending);
        assert_eq!(tween.phase(99.9), Phase::Pending);
        assert_eq!(tween.phase(100.0), Phase::Animating);
        assert_eq!(tween.phase(299.0), Phase::Animating);
        assert_eq!(tween.phase(300.0), Phase::Settled);
        assert_eq!(tween.phase(10_000.0), Phase::Settled);
    }

    #[test]
    fn tween_holds_start_pose_while_pending() {
        let tween = Tween::new(RISE, 300.0, 200.0);
        assert_eq!(tween.sample(150.0), (Phase::Pending, RISE));
    }

    #[test]
    fn tween_settles_at_rest() {
        let tween = Tween::new(RISE, 0.0, 200.0);
        assert_eq!(tween.sample(200.0), (Phase::Settled, Pose::REST));
    }

    #[test]
    fn tween_moves_monotonically_toward_rest() {
        let tween = Tween::new(RISE, 0.0, 200.0);
        let mut last = tween.sample(0.0).1;
        for ms in (20..=200).step_by(20) {
            let (_, pose) = tween.sample(ms as f64);
            assert!(pose.opacity >= last.opacity);
            assert!(pose.offset_y <= last.offset_y);
            last = pose;
        }
        assert_eq!(last, Pose::REST);
    }

    #[test]
    fn zero_duration_tween_settles_immediately_after_delay() {
        let tween = Tween::new(RISE, 50.0, 0.0);
        assert_eq!(tween.sample(49.0).0, Phase::Pending);
        assert_eq!(tween.sample(50.0), (Phase::Settled, Pose::REST));
    }

    #[test]
    fn scale_tween_interpolates_scale_only() {
        let tween = Tween::new(Pose::hidden_scale(0.95), 0.0, 100.0);
        let (_, mid) = tween.sample(50.0);
        assert_eq!(mid.offset_y, 0.0);
        assert!(mid.scale > 0.95 && mid.scale < 1.0);
    }

    #[test]
    fn presence_opens_and_closes() {
        let mut track = PresenceTrack::new(false, 200.0);
        assert!(!track.is_present());

        track.set_target(true);
        assert!(track.is_present());
        track.advance(100.0);
        assert_eq!(track.progress(), 0.5);
        track.advance(150.0);
        assert!(track.is_settled());
        assert_eq!(track.pose(RISE, Pose::REST), Pose::REST);

        track.set_target(false);
        track.advance(200.0);
        assert!(track.is_settled());
        assert!(!track.is_present());
    }

    #[test]
    fn presence_reverses_from_current_progress() {
        let mut track = PresenceTrack::new(false, 200.0);
        track.set_target(true);
        track.advance(60.0);
        let before = track.pose(RISE, Pose::REST);

        track.set_target(false);
        // Still mid-flight, not snapped to either end
        assert_eq!(track.pose(RISE, Pose::REST), before);
        assert!(track.is_present());

        track.advance(30.0);
        assert!((track.progress() - 0.15).abs() < 1e-9);
        assert!(!track.is_settled());
    }

    #[test]
    fn presence_ignores_negative_time() {
        let mut track = PresenceTrack::new(true, 200.0);
        track.advance(-50.0);
        assert_eq!(track.progress(), 1.0);
    }

    #[test]
    fn pose_style_renders_all_properties() {
        assert_eq!(
            Pose::hidden_offset(-20.0).style(),
            "opacity: 0.000; transform: translateY(-20.00px) scale(1.000);"
        );
    }
}
