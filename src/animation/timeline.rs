//! Declarative timelines: what to animate, separated from when it runs.

use std::time::Duration;

use crate::animation::Easing;
use crate::render::{Element, Property};

/// One timed property write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub element: Element,
    pub property: Property,
    /// Value reached at the end of the step.
    pub value: f32,
    /// Offset from the moment the timeline is played.
    pub delay: Duration,
    /// Zero for instantaneous sets.
    pub duration: Duration,
    pub easing: Easing,
}

impl Step {
    pub fn end(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }
}

/// Ordered list of steps with a sequencing cursor.
///
/// [`Timeline::to`] and [`Timeline::set`] place steps at the cursor;
/// `to` then moves the cursor past the tween so the next call runs after
/// it. [`Timeline::at`] places a step at an absolute offset and leaves the
/// cursor alone, for tracks that run alongside the sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
    cursor: Duration,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantaneous writes at the cursor.
    pub fn set(&mut self, element: Element, values: &[(Property, f32)]) -> &mut Self {
        let delay = self.cursor;
        for &(property, value) in values {
            self.steps.push(Step {
                element,
                property,
                value,
                delay,
                duration: Duration::ZERO,
                easing: Easing::Linear,
            });
        }
        self
    }

    /// Tweens all `values` together starting at the cursor, then advances it.
    pub fn to(
        &mut self,
        element: Element,
        values: &[(Property, f32)],
        duration: Duration,
        easing: Easing,
    ) -> &mut Self {
        let delay = self.cursor;
        for &(property, value) in values {
            self.steps.push(Step {
                element,
                property,
                value,
                delay,
                duration,
                easing,
            });
        }
        self.cursor = self.cursor.saturating_add(duration);
        self
    }

    /// Tween at an absolute offset; the cursor does not move.
    pub fn at(
        &mut self,
        offset: Duration,
        element: Element,
        property: Property,
        value: f32,
        duration: Duration,
        easing: Easing,
    ) -> &mut Self {
        self.steps.push(Step {
            element,
            property,
            value,
            delay: offset,
            duration,
            easing,
        });
        self
    }

    /// Moves the cursor to an absolute offset.
    pub fn seek(&mut self, offset: Duration) -> &mut Self {
        self.cursor = offset;
        self
    }

    /// Adds `other` in parallel, both starting at offset zero.
    pub fn merge(&mut self, other: Timeline) -> &mut Self {
        self.cursor = self.cursor.max(other.cursor);
        self.steps.extend(other.steps);
        self
    }

    /// Offset at which the last step finishes.
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(Step::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps_for(&self, element: Element) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |step| step.element == element)
    }
}
