//! Timeline player: executes scheduled steps against a render target.
//!
//! The player owns a clock that only moves on [`Player::tick`], so tests
//! drive it with synthetic durations instead of real timers.

use std::time::Duration;

use crate::animation::{Step, Timeline};
use crate::render::RenderTarget;

#[derive(Debug, Clone)]
struct Scheduled {
    step: Step,
    start: Duration,
    /// Captured from the target when the step begins.
    from: Option<f32>,
}

impl Scheduled {
    fn end(&self) -> Duration {
        self.start.saturating_add(self.step.duration)
    }
}

#[derive(Debug, Default)]
pub struct Player {
    clock: Duration,
    queue: Vec<Scheduled>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules every step relative to the current clock.
    pub fn play(&mut self, timeline: Timeline) {
        let now = self.clock;
        self.queue
            .extend(timeline.into_steps().into_iter().map(|step| Scheduled {
                start: now.saturating_add(step.delay),
                step,
                from: None,
            }));
        // Stable: steps sharing a start keep timeline order.
        self.queue.sort_by_key(|scheduled| scheduled.start);
    }

    /// Writes the end value of every step immediately, in timeline order.
    pub fn apply<T: RenderTarget + ?Sized>(timeline: &Timeline, target: &mut T) {
        let mut steps = timeline.steps().to_vec();
        steps.sort_by_key(|step| step.delay);
        for step in steps {
            target.write(step.element, step.property, step.value);
        }
    }

    /// Advances the clock and writes interpolated values.
    pub fn tick<T: RenderTarget + ?Sized>(&mut self, dt: Duration, target: &mut T) {
        self.clock = self.clock.saturating_add(dt);
        let clock = self.clock;

        for scheduled in &mut self.queue {
            if clock < scheduled.start {
                continue;
            }
            let step = scheduled.step;
            let from = *scheduled
                .from
                .get_or_insert_with(|| target.property(step.element, step.property));

            let progress = if step.duration.is_zero() {
                1.0
            } else {
                let elapsed = clock - scheduled.start;
                (elapsed.as_secs_f64() / step.duration.as_secs_f64()).min(1.0) as f32
            };

            let value = if progress >= 1.0 {
                step.value
            } else {
                from + (step.value - from) * step.easing.apply(progress)
            };
            target.write(step.element, step.property, value);
        }

        self.queue.retain(|scheduled| scheduled.end() > clock);
    }

    /// Jumps every pending and running step to its end value and empties the queue.
    pub fn finish_all<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        let finished = self.queue.len();
        for scheduled in self.queue.drain(..) {
            target.write(
                scheduled.step.element,
                scheduled.step.property,
                scheduled.step.value,
            );
        }
        if finished > 0 {
            tracing::debug!(finished, "fast-forwarded in-flight animation steps");
        }
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
