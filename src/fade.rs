use std::time::Duration;

/// Interval between two opacity updates of a fade-out.
pub const FADE_STEP: Duration = Duration::from_millis(50);

/// Timing of a status message that stays fully visible for `solid`, then fades out
/// linearly over `fade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeOut {
    pub solid: Duration,
    pub fade: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStep {
    /// Time since the message was shown.
    pub at: Duration,
    pub opacity: f32,
}

impl FadeOut {
    pub fn new(solid: Duration, fade: Duration) -> Self {
        FadeOut { solid, fade }
    }

    pub fn steps(&self) -> FadeSteps {
        FadeSteps { fade: *self, elapsed: Duration::ZERO, done: false }
    }

    fn opacity_after(&self, elapsed: Duration) -> f32 {
        self.opacity_after_nanos(elapsed.as_nanos())
    }

    fn opacity_after_nanos(&self, elapsed: u128) -> f32 {
        let fade = self.fade.as_nanos();
        if elapsed >= fade {
            return 0.0;
        }
        let remaining = (fade - elapsed) as f64;
        ((remaining / fade as f64) as f32).clamp(0.0, 1.0)
    }

    /// Opacity of the message at time `t` after it was shown.
    pub fn opacity_at(&self, t: Duration) -> f32 {
        let Some(since_solid) = t.checked_sub(self.solid) else {
            return 1.0;
        };

        let step = FADE_STEP.as_nanos();
        let ticks = since_solid.as_nanos() / step;
        if ticks == 0 {
            return 1.0;
        }

        self.opacity_after_nanos(ticks.saturating_mul(step))
    }

    pub fn total(&self) -> Duration {
        match self.steps().last() {
            Some(step) => step.at,
            None => self.solid,
        }
    }
}

pub struct FadeSteps {
    fade: FadeOut,
    elapsed: Duration,
    done: bool,
}

impl Iterator for FadeSteps {
    type Item = FadeStep;

    fn next(&mut self) -> Option<FadeStep> {
        if self.done {
            return None;
        }

        self.elapsed += FADE_STEP;
        if self.elapsed >= self.fade.fade {
            self.done = true;
        }

        Some(FadeStep {
            at: self.fade.solid + self.elapsed,
            opacity: self.fade.opacity_after(self.elapsed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn steps_are_evenly_spaced() {
        let fade = FadeOut::new(ms(1000), ms(200));
        let steps: Vec<_> = fade.steps().collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].at, ms(1050));
        assert_eq!(steps[3].at, ms(1200));
        for w in steps.windows(2) {
            assert_eq!(w[1].at - w[0].at, FADE_STEP);
            assert!(w[1].opacity < w[0].opacity);
        }
        assert_eq!(steps[1].opacity, 0.5);
        assert_eq!(steps[3].opacity, 0.0);
    }

    #[test]
    fn uneven_fade_overshoots() {
        let steps: Vec<_> = FadeOut::new(ms(0), ms(120)).steps().collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].at, ms(150));
        assert_eq!(steps[2].opacity, 0.0);
    }

    #[test]
    fn zero_fade() {
        let steps: Vec<_> = FadeOut::new(ms(300), Duration::ZERO).steps().collect();
        assert_eq!(steps, vec![FadeStep { at: ms(350), opacity: 0.0 }]);
    }

    #[test]
    fn opacity_over_time() {
        let fade = FadeOut::new(ms(1000), ms(200));
        assert_eq!(fade.opacity_at(ms(0)), 1.0);
        assert_eq!(fade.opacity_at(ms(1049)), 1.0);
        assert_eq!(fade.opacity_at(ms(1100)), 0.5);
        assert_eq!(fade.opacity_at(ms(1149)), 0.5);
        assert_eq!(fade.opacity_at(ms(5000)), 0.0);
        assert_eq!(fade.total(), ms(1200));
    }

    #[test]
    fn stays_faded_long_after() {
        let fade = FadeOut::new(Duration::ZERO, ms(200));
        assert_eq!(fade.opacity_at(FADE_STEP * u32::MAX + ms(100)), 0.0);
        assert_eq!(fade.opacity_at(Duration::MAX), 0.0);
    }
}
