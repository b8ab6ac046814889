//! Shared test utilities: a render target that records every write.

#![allow(dead_code, unused_imports)]

use stack_icon::animation::Timing;
use stack_icon::config::Options;
use stack_icon::render::{Element, Property, RenderTarget, StackView, SurfaceLayout};
use stack_icon::widget::StackIcon;
use std::time::Duration;

/// One primitive call observed by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Write(Element, Property, f32),
    Text(String),
}

/// [`StackView`] that also logs the calls it receives.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    pub view: StackView,
    pub calls: Vec<Call>,
}

impl RecordingTarget {
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            view: StackView::new(layout),
            calls: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Text(text) => Some(text.as_str()),
                Call::Write(..) => None,
            })
            .collect()
    }

    pub fn writes_to(&self, element: Element) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Write(e, _, _) if *e == element))
            .count()
    }

    pub fn touched(&self, element: Element) -> bool {
        self.writes_to(element) > 0
    }
}

impl RenderTarget for RecordingTarget {
    fn layout(&self) -> SurfaceLayout {
        self.view.layout()
    }

    fn property(&self, element: Element, property: Property) -> f32 {
        self.view.property(element, property)
    }

    fn write(&mut self, element: Element, property: Property, value: f32) {
        self.calls.push(Call::Write(element, property, value));
        self.view.write(element, property, value);
    }

    fn set_indicator_text(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
        self.view.set_indicator_text(text);
    }
}

/// Initialized icon with a complete two-layer surface, settled and with
/// an empty call log.
pub fn settled_icon(start: i64, min: i64, max: i64) -> StackIcon<RecordingTarget> {
    let options = Options::from_values(start, min, max).options;
    let target = RecordingTarget::new(SurfaceLayout::complete(2));
    let mut icon = StackIcon::new(options, Timing::default(), target);
    icon.initialize();
    icon.settle();
    icon.target_mut().clear();
    icon
}

/// Ticks `icon` in 16ms frames until it is idle or `limit` elapses.
pub fn play_out<T: RenderTarget>(icon: &mut StackIcon<T>, limit: Duration) {
    let frame = Duration::from_millis(16);
    let mut elapsed = Duration::ZERO;
    while icon.is_animating() && elapsed < limit {
        icon.tick(frame);
        elapsed += frame;
    }
}
