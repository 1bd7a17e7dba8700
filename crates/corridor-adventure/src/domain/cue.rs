//! Timed cues: fixed-delay transitions out of cinematic scenes.
//!
//! A cue is scheduled when a cinematic scene is entered and stored on the
//! run. It fires once, the first time a command observes that its due time
//! has passed.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::scene::{CueLength, Scene};

/// Cinematic hold times, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueTimings {
    pub medium_ms: u32,
    pub long_ms: u32,
    pub death_blackout_ms: u32,
}

impl Default for CueTimings {
    fn default() -> Self {
        Self {
            medium_ms: 2_000,
            long_ms: 3_000,
            death_blackout_ms: 2_000,
        }
    }
}

impl CueTimings {
    /// Default timings multiplied by `factor`. Zero makes every cue due
    /// immediately; negative or non-finite factors are treated as zero.
    #[must_use]
    pub fn scaled(factor: f64) -> Self {
        let base = Self::default();
        Self {
            medium_ms: scale_ms(base.medium_ms, factor),
            long_ms: scale_ms(base.long_ms, factor),
            death_blackout_ms: scale_ms(base.death_blackout_ms, factor),
        }
    }

    #[must_use]
    pub fn millis(&self, length: CueLength) -> u32 {
        match length {
            CueLength::Medium => self.medium_ms,
            CueLength::Long => self.long_ms,
            CueLength::DeathBlackout => self.death_blackout_ms,
        }
    }

    /// Schedules the cue for `scene` entered at `entered_at`, if it is
    /// cinematic.
    #[must_use]
    pub fn schedule(&self, scene: Scene, entered_at: DateTime<Utc>) -> Option<PendingCue> {
        let length = scene.cue_length()?;
        let delay = TimeDelta::milliseconds(i64::from(self.millis(length)));
        Some(PendingCue {
            scene,
            due_at: entered_at + delay,
        })
    }
}

// Clamped to `0..=u32::MAX` before the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_ms(ms: u32, factor: f64) -> u32 {
    if !factor.is_finite() || factor <= 0.0 {
        return 0;
    }
    (f64::from(ms) * factor).round().min(f64::from(u32::MAX)) as u32
}

/// A cue waiting to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCue {
    /// The cinematic scene the cue moves on from.
    pub scene: Scene,
    pub due_at: DateTime<Utc>,
}

impl PendingCue {
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::puzzle::Room;
    use crate::domain::scene::DeathStage;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_schedule_uses_scene_length() {
        let timings = CueTimings::default();

        let failed = timings.schedule(Scene::PuzzleFailed(Room::Room1), t0()).unwrap();
        let shudder = timings.schedule(Scene::Death(DeathStage::Shudder), t0()).unwrap();

        assert_eq!(failed.due_at, t0() + TimeDelta::milliseconds(2_000));
        assert_eq!(shudder.due_at, t0() + TimeDelta::milliseconds(3_000));
    }

    #[test]
    fn test_schedule_returns_none_for_interactive_scene() {
        assert!(CueTimings::default().schedule(Scene::Hallway, t0()).is_none());
    }

    #[test]
    fn test_scaled_timings() {
        assert_eq!(CueTimings::scaled(1.0), CueTimings::default());
        assert_eq!(CueTimings::scaled(0.5).long_ms, 1_500);
        assert_eq!(CueTimings::scaled(0.0).medium_ms, 0);
        assert_eq!(CueTimings::scaled(-3.0).long_ms, 0);
        assert_eq!(CueTimings::scaled(f64::NAN).death_blackout_ms, 0);
    }

    #[test]
    fn test_is_due_at_exact_due_time() {
        let cue = PendingCue {
            scene: Scene::Blackout,
            due_at: t0(),
        };

        assert!(cue.is_due(t0()));
        assert!(!cue.is_due(t0() - TimeDelta::milliseconds(1)));
    }
}
