//! Animation engine: the level state machine of the icon.
//!
//! Tracks the tier currently on screen and how many stack layers are
//! revealed, and turns each [`QuantityChange`] into a [`Timeline`].
//!
//! Slot geometry: the cap rests at `spacing * (3 - tier)`, so with the
//! default spacing of 5 it sits at 10 for one item, 5 for two and 0 for
//! three or more. Layers are revealed only on the plateau.

use std::time::Duration;

use crate::animation::stagger::stagger_offsets;
use crate::animation::{Easing, Timeline};
use crate::config::AnimationConfig;
use crate::render::{Element, Property, SurfaceLayout};
use crate::stack::{QuantityChange, TransitionKind, VisualLevel};

/// Vertical offsets of the three indicator bounce steps.
const BOUNCE_OFFSETS: [f32; 3] = [-3.0, 2.0, 0.0];

/// Geometry and durations used to build timelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub element_spacing: f32,
    pub tween: Duration,
    pub stagger: Duration,
    pub bounce_step: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from(&AnimationConfig::default())
    }
}

impl From<&AnimationConfig> for Timing {
    fn from(config: &AnimationConfig) -> Self {
        Self {
            element_spacing: config.element_spacing,
            tween: Duration::from_millis(config.tween_ms),
            stagger: Duration::from_millis(config.stagger_ms),
            bounce_step: Duration::from_millis(config.bounce_step_ms),
        }
    }
}

impl Timing {
    /// Resting vertical offset of the cap for `level`.
    pub fn cap_slot(&self, level: VisualLevel) -> f32 {
        self.element_spacing * f32::from(3 - level.tier())
    }
}

#[derive(Debug, Clone)]
pub struct AnimationEngine {
    timing: Timing,
    level: VisualLevel,
    revealed_layers: usize,
}

impl AnimationEngine {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            level: VisualLevel::One,
            revealed_layers: 0,
        }
    }

    /// Tier currently shown.
    pub fn level(&self) -> VisualLevel {
        self.level
    }

    pub fn revealed_layers(&self) -> usize {
        self.revealed_layers
    }

    /// Instantaneous resting visuals for `level`; the root stays hidden.
    pub fn snap(&mut self, level: VisualLevel, layout: &SurfaceLayout) -> Timeline {
        self.level = level;
        self.revealed_layers = if level.shows_layers() { layout.layers } else { 0 };

        let mut timeline = Timeline::new();
        if layout.root {
            timeline.set(Element::Root, &[(Property::Opacity, 0.0)]);
        }
        if layout.supports_levels() {
            timeline
                .set(
                    Element::Cap,
                    &[
                        (Property::OffsetY, self.timing.cap_slot(level)),
                        (Property::Opacity, 1.0),
                    ],
                )
                .set(
                    Element::CapGhost,
                    &[(Property::OffsetY, 0.0), (Property::Opacity, 0.0)],
                );
            let opacity = if level.shows_layers() { 1.0 } else { 0.0 };
            for index in 0..layout.layers {
                timeline.set(Element::Layer(index), &[(Property::Opacity, opacity)]);
            }
        }
        timeline
    }

    /// Level animation for an accepted change.
    ///
    /// Returns an empty timeline for plateau changes, and whenever the
    /// layout lacks the surface, the cap or every layer.
    pub fn transition(&mut self, change: &QuantityChange, layout: &SurfaceLayout) -> Timeline {
        let kind = change.transition().kind();
        let from_tier = self.level;
        self.level = change.to_level();

        if !layout.supports_levels() {
            if kind != TransitionKind::Plateau {
                tracing::debug!(?kind, "render target incomplete, level animation skipped");
            }
            self.revealed_layers = if self.level.shows_layers() { layout.layers } else { 0 };
            return Timeline::new();
        }

        tracing::debug!(
            previous = change.previous,
            current = change.current,
            ?kind,
            "level transition"
        );

        match kind {
            TransitionKind::Plateau => Timeline::new(),
            TransitionKind::Reposition(level) => {
                let mut timeline = Timeline::new();
                self.set_cap_slot(&mut timeline, level);
                timeline
            }
            TransitionKind::Grow { from } => self.grow(from, from_tier, layout),
            TransitionKind::Shrink { to } => self.shrink(to),
        }
    }

    /// Tweens the cap to the resting slot of `level` starting at the cursor.
    pub fn set_cap_slot(&self, timeline: &mut Timeline, level: VisualLevel) {
        timeline.to(
            Element::Cap,
            &[(Property::OffsetY, self.timing.cap_slot(level))],
            self.timing.tween,
            Easing::EaseOut,
        );
    }

    /// Fades `indices` in, one `stagger` apart, the first at `base`.
    pub fn reveal_layers(&self, timeline: &mut Timeline, indices: &[usize], base: Duration) {
        self.fade_layers(timeline, indices, base, 1.0, Easing::EaseOut);
    }

    /// Fades `indices` out in the given order, one `stagger` apart.
    pub fn hide_layers(&self, timeline: &mut Timeline, indices: &[usize], base: Duration) {
        self.fade_layers(timeline, indices, base, 0.0, Easing::EaseOut);
    }

    /// Three-step bounce of the indicator: up, overshoot down, rest.
    pub fn bounce_indicator(&self) -> Timeline {
        let mut timeline = Timeline::new();
        for offset in BOUNCE_OFFSETS {
            timeline.to(
                Element::Indicator,
                &[(Property::OffsetY, offset)],
                self.timing.bounce_step,
                Easing::ElasticInOut,
            );
        }
        timeline
    }

    /// Fades the whole widget into view.
    pub fn fade_in(&self) -> Timeline {
        let mut timeline = Timeline::new();
        timeline.to(
            Element::Root,
            &[(Property::Opacity, 1.0)],
            self.timing.tween,
            Easing::EaseOut,
        );
        timeline
    }

    fn fade_layers(
        &self,
        timeline: &mut Timeline,
        indices: &[usize],
        base: Duration,
        opacity: f32,
        easing: Easing,
    ) {
        let offsets = stagger_offsets(indices.len(), base, self.timing.stagger);
        for (&index, offset) in indices.iter().zip(offsets) {
            timeline.at(
                offset,
                Element::Layer(index),
                Property::Opacity,
                opacity,
                self.timing.tween,
                easing,
            );
        }
    }

    /// Entry to the plateau from below.
    ///
    /// A ghost of the cap drops from the top onto the starting slot while
    /// the cap climbs to the plateau slot; hidden layers fade in alongside.
    fn grow(&mut self, from: VisualLevel, shown: VisualLevel, layout: &SurfaceLayout) -> Timeline {
        let tween = self.timing.tween;
        let mut timeline = Timeline::new();

        timeline
            .set(
                Element::CapGhost,
                &[(Property::OffsetY, 0.0), (Property::Opacity, 0.0)],
            )
            .to(
                Element::CapGhost,
                &[
                    (Property::Opacity, 1.0),
                    (Property::OffsetY, self.timing.cap_slot(from)),
                ],
                tween,
                Easing::EaseOut,
            )
            .set(
                Element::CapGhost,
                &[(Property::Opacity, 0.0), (Property::OffsetY, 0.0)],
            );
        self.set_cap_slot(&mut timeline, VisualLevel::ThreeOrMore);

        // Jumping more than one tier reveals several layers at once, so the
        // first one starts with the ghost instead of after it.
        let jump = VisualLevel::ThreeOrMore.tier() - shown.tier().min(from.tier());
        let base = if jump > 1 { Duration::ZERO } else { tween };

        let hidden: Vec<usize> = (self.revealed_layers..layout.layers).collect();
        self.reveal_layers(&mut timeline, &hidden, base);
        self.revealed_layers = layout.layers;
        timeline
    }

    /// Exit from the plateau.
    ///
    /// A single visible layer fades out alone; several fade out top-down,
    /// staggered. The cap settles once the layers are gone.
    ///
    /// Every layer is hidden below the plateau, so the hide depends on how
    /// many layers are revealed and not on how many tiers the change drops:
    /// 3 -> 2 and 3 -> 1 hide the same layers and differ only in the cap slot.
    fn shrink(&mut self, to: VisualLevel) -> Timeline {
        let mut timeline = Timeline::new();
        let visible: Vec<usize> = (0..self.revealed_layers).rev().collect();

        match visible.as_slice() {
            [] => {}
            [single] => {
                timeline.at(
                    Duration::ZERO,
                    Element::Layer(*single),
                    Property::Opacity,
                    0.0,
                    self.timing.tween,
                    Easing::ElasticInOut,
                );
            }
            several => self.hide_layers(&mut timeline, several, Duration::ZERO),
        }
        self.revealed_layers = 0;

        let hidden_at = timeline.duration();
        timeline.seek(hidden_at);
        self.set_cap_slot(&mut timeline, to);
        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    fn change(previous: i64, current: i64) -> QuantityChange {
        QuantityChange { previous, current }
    }

    fn engine_at(level: VisualLevel) -> AnimationEngine {
        let mut engine = AnimationEngine::new(Timing::default());
        engine.snap(level, &SurfaceLayout::complete(2));
        engine
    }

    fn layer_steps(timeline: &Timeline) -> Vec<(usize, Duration, f32)> {
        timeline
            .steps()
            .iter()
            .filter_map(|step| match step.element {
                Element::Layer(index) => Some((index, step.delay, step.value)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cap_slots_follow_spacing() {
        let timing = Timing::default();
        assert_eq!(timing.cap_slot(VisualLevel::One), 10.0);
        assert_eq!(timing.cap_slot(VisualLevel::Two), 5.0);
        assert_eq!(timing.cap_slot(VisualLevel::ThreeOrMore), 0.0);
    }

    #[test]
    fn snap_sets_resting_visuals() {
        let mut engine = AnimationEngine::new(Timing::default());
        let timeline = engine.snap(VisualLevel::ThreeOrMore, &SurfaceLayout::complete(2));

        assert!(timeline.steps().iter().all(|step| step.duration.is_zero()));
        assert_eq!(engine.revealed_layers(), 2);
        let layers = layer_steps(&timeline);
        assert!(layers.iter().all(|&(_, _, value)| value == 1.0));
    }

    #[test]
    fn one_to_two_only_moves_cap() {
        let mut engine = engine_at(VisualLevel::One);
        let timeline = engine.transition(&change(1, 2), &SurfaceLayout::complete(2));

        assert_eq!(timeline.len(), 1);
        let step = timeline.steps()[0];
        assert_eq!(step.element, Element::Cap);
        assert_eq!(step.value, 5.0);
        assert_eq!(step.duration, MS_300);
        assert_eq!(engine.level(), VisualLevel::Two);
    }

    #[test]
    fn two_to_three_grows_with_delayed_reveal() {
        let mut engine = engine_at(VisualLevel::Two);
        let timeline = engine.transition(&change(2, 3), &SurfaceLayout::complete(2));

        let ghost: Vec<_> = timeline.steps_for(Element::CapGhost).collect();
        assert_eq!(ghost.len(), 6);
        assert!(ghost
            .iter()
            .any(|step| step.property == Property::OffsetY && step.value == 5.0));
        assert_eq!(
            ghost.last().map(|step| (step.delay, step.value)),
            Some((MS_300, 0.0))
        );

        let cap: Vec<_> = timeline.steps_for(Element::Cap).collect();
        assert_eq!(cap.len(), 1);
        assert_eq!(cap[0].value, 0.0);
        assert_eq!(cap[0].delay, MS_300);

        assert_eq!(
            layer_steps(&timeline),
            vec![(0, MS_300, 1.0), (1, MS_300 * 2, 1.0)]
        );
        assert_eq!(engine.revealed_layers(), 2);
    }

    #[test]
    fn one_to_many_compresses_stagger() {
        let mut engine = engine_at(VisualLevel::One);
        let timeline = engine.transition(&change(1, 7), &SurfaceLayout::complete(2));

        assert_eq!(
            layer_steps(&timeline),
            vec![(0, Duration::ZERO, 1.0), (1, MS_300, 1.0)]
        );
        assert!(timeline
            .steps_for(Element::CapGhost)
            .any(|step| step.property == Property::OffsetY && step.value == 10.0));
    }

    #[test]
    fn plateau_change_is_empty() {
        let mut engine = engine_at(VisualLevel::ThreeOrMore);
        let timeline = engine.transition(&change(5, 6), &SurfaceLayout::complete(2));
        assert!(timeline.is_empty());
        assert_eq!(engine.level(), VisualLevel::ThreeOrMore);
    }

    #[test]
    fn shrink_hides_layers_top_down_then_moves_cap() {
        let mut engine = engine_at(VisualLevel::ThreeOrMore);
        let timeline = engine.transition(&change(3, 2), &SurfaceLayout::complete(2));

        assert_eq!(
            layer_steps(&timeline),
            vec![(1, Duration::ZERO, 0.0), (0, MS_300, 0.0)]
        );
        let cap: Vec<_> = timeline.steps_for(Element::Cap).collect();
        assert_eq!(cap.len(), 1);
        assert_eq!(cap[0].value, 5.0);
        assert_eq!(cap[0].delay, MS_300 * 2);
        assert_eq!(engine.revealed_layers(), 0);
    }

    #[test]
    fn shrink_with_single_layer_fades_it_alone() {
        let layout = SurfaceLayout::complete(1);
        let mut engine = AnimationEngine::new(Timing::default());
        engine.snap(VisualLevel::ThreeOrMore, &layout);

        let timeline = engine.transition(&change(4, 1), &layout);
        let layers = layer_steps(&timeline);
        assert_eq!(layers, vec![(0, Duration::ZERO, 0.0)]);
        assert_eq!(
            timeline.steps_for(Element::Layer(0)).next().map(|step| step.easing),
            Some(Easing::ElasticInOut)
        );
        let cap: Vec<_> = timeline.steps_for(Element::Cap).collect();
        assert_eq!(cap[0].delay, MS_300);
        assert_eq!(cap[0].value, 10.0);
    }

    #[test]
    fn missing_cap_skips_level_animation() {
        let layout = SurfaceLayout {
            cap: false,
            ..SurfaceLayout::complete(2)
        };
        let mut engine = engine_at(VisualLevel::Two);
        let timeline = engine.transition(&change(2, 3), &layout);
        assert!(timeline.is_empty());
        assert_eq!(engine.level(), VisualLevel::ThreeOrMore);
    }

    #[test]
    fn bounce_has_three_sequential_steps() {
        let engine = AnimationEngine::new(Timing::default());
        let bounce = engine.bounce_indicator();
        let steps: Vec<_> = bounce
            .steps()
            .iter()
            .map(|step| (step.delay.as_millis(), step.value))
            .collect();
        assert_eq!(steps, vec![(0, -3.0), (150, 2.0), (300, 0.0)]);
    }

    #[test]
    fn shrink_hides_same_layers_for_one_and_two_tier_drops() {
        let to_two = engine_at(VisualLevel::ThreeOrMore)
            .transition(&change(3, 2), &SurfaceLayout::complete(2));
        let to_one = engine_at(VisualLevel::ThreeOrMore)
            .transition(&change(3, 1), &SurfaceLayout::complete(2));

        assert_eq!(layer_steps(&to_two), layer_steps(&to_one));
        assert_eq!(layer_steps(&to_two).len(), 2);

        let cap = |timeline: &Timeline| {
            timeline
                .steps_for(Element::Cap)
                .map(|step| step.value)
                .collect::<Vec<_>>()
        };
        assert_eq!(cap(&to_two), vec![5.0]);
        assert_eq!(cap(&to_one), vec![10.0]);
    }
}
