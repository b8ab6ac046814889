//! One stack icon instance: options, counter, engine, player and target.

use std::time::Duration;

use crate::animation::{AnimationEngine, Player, Timeline, Timing};
use crate::config::Options;
use crate::render::RenderTarget;
use crate::stack::{QuantityChange, VisualLevel};
use crate::ui::mvi::Reducer;
use crate::ui::quantity::{QuantityIntent, QuantityReducer, QuantityState};

/// Interactive stack icon bound to a render target.
///
/// Every public operation returns as soon as its animation is scheduled;
/// call [`StackIcon::tick`] from the host loop to let it play. When a
/// change is accepted while a previous animation is still running, the
/// running steps are fast-forwarded to their end values first.
pub struct StackIcon<T: RenderTarget> {
    quantity: QuantityState,
    engine: AnimationEngine,
    player: Player,
    target: T,
    initialized: bool,
}

impl<T: RenderTarget> StackIcon<T> {
    pub fn new(options: Options, timing: Timing, target: T) -> Self {
        Self {
            quantity: QuantityState::new(options),
            engine: AnimationEngine::new(timing),
            player: Player::new(),
            target,
            initialized: false,
        }
    }

    /// Snaps the icon to its lower bound, animates to the configured start
    /// value, and fades the widget in. Calling it again does nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("stack icon already initialized");
            return;
        }
        self.initialized = true;

        let layout = self.target.layout();
        let resting = VisualLevel::from_quantity(self.quantity.current());
        let snap = self.engine.snap(resting, &layout);
        Player::apply(&snap, &mut self.target);

        let start = self.quantity.options().start();
        if self.set_quantity(start).is_none() {
            let feedback = self.indicator_feedback();
            self.player.play(feedback);
        }

        if layout.root {
            let fade_in = self.engine.fade_in();
            self.player.play(fade_in);
        }
    }

    pub fn increment(&mut self) -> Option<QuantityChange> {
        self.dispatch(QuantityIntent::Increment)
    }

    pub fn decrement(&mut self) -> Option<QuantityChange> {
        self.dispatch(QuantityIntent::Decrement)
    }

    /// Jumps to `value`. Equal or out-of-bounds values are ignored.
    pub fn set_quantity(&mut self, value: i64) -> Option<QuantityChange> {
        self.dispatch(QuantityIntent::Set { value })
    }

    /// Advances running animations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.player.tick(dt, &mut self.target);
    }

    /// Jumps every running animation to its end.
    pub fn settle(&mut self) {
        self.player.finish_all(&mut self.target);
    }

    pub fn current(&self) -> i64 {
        self.quantity.current()
    }

    pub fn previous(&self) -> i64 {
        self.quantity.previous()
    }

    pub fn options(&self) -> &Options {
        self.quantity.options()
    }

    /// Tier shown once running animations finish.
    pub fn level(&self) -> VisualLevel {
        self.engine.level()
    }

    pub fn is_animating(&self) -> bool {
        !self.player.is_idle()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    fn dispatch(&mut self, intent: QuantityIntent) -> Option<QuantityChange> {
        let before = self.quantity;
        self.quantity = QuantityReducer::reduce(before, intent);

        let Some(change) = self.quantity.change_since(&before) else {
            tracing::debug!(?intent, current = before.current(), "quantity change rejected");
            return None;
        };

        self.on_change(&change);
        Some(change)
    }

    fn on_change(&mut self, change: &QuantityChange) {
        self.player.finish_all(&mut self.target);

        let layout = self.target.layout();
        let mut timeline = self.engine.transition(change, &layout);
        timeline.merge(self.indicator_feedback());
        self.player.play(timeline);
    }

    /// Sets the indicator text and returns its bounce.
    fn indicator_feedback(&mut self) -> Timeline {
        if !self.target.layout().indicator {
            return Timeline::new();
        }
        self.target
            .set_indicator_text(&self.quantity.current().to_string());
        self.engine.bounce_indicator()
    }
}
