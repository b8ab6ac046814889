//! Easing curves: map linear progress `t` in [0, 1] to eased progress.

use std::f32::consts::PI;

/// Easing applied to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity. Zero-duration steps use it.
    Linear,
    /// Quadratic ease-out, the default for tweens.
    #[default]
    EaseOut,
    /// Elastic ease-in-out; overshoots around both ends.
    ElasticInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => linear(t),
            Easing::EaseOut => ease_out(t),
            Easing::ElasticInOut => elastic_in_out(t),
        }
    }
}

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Elastic in-out with amplitude 1 and period 0.45.
pub fn elastic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let c = (2.0 * PI) / 0.45;
    if t < 0.5 {
        -(2f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c / 2.0).sin()) / 2.0
    } else {
        2f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c / 2.0).sin() / 2.0 + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOut, Easing::ElasticInOut];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(ease_out(0.25) > 0.25);
    }
}
