use crate::config::Options;
use crate::stack::QuantityChange;
use crate::ui::mvi::UiState;

/// Counter of one widget.
///
/// `current` always satisfies `options.contains(current)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityState {
    options: Options,
    current: i64,
    /// Value before the last accepted mutation.
    previous: i64,
}

impl Default for QuantityState {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl UiState for QuantityState {}

impl QuantityState {
    /// Seeds the counter at the lower bound.
    pub fn new(options: Options) -> Self {
        let floor = options.min().max(1);
        Self {
            options,
            current: floor,
            previous: floor,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn previous(&self) -> i64 {
        self.previous
    }

    /// Accepts `value` if it is a real change within bounds.
    pub(super) fn accept(self, value: i64) -> Self {
        if value == self.current || !self.options.contains(value) {
            return self;
        }
        Self {
            previous: self.current,
            current: value,
            ..self
        }
    }

    /// Change event between `before` and `self`, if the counter moved.
    pub fn change_since(&self, before: &QuantityState) -> Option<QuantityChange> {
        (self.current != before.current).then_some(QuantityChange {
            previous: before.current,
            current: self.current,
        })
    }
}
