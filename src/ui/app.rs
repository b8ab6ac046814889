use crate::animation::Timing;
use crate::config::{Options, OptionsWarning};
use crate::render::{StackView, SurfaceLayout};
use crate::widget::StackIcon;
use std::time::Duration;

/// A bootstrapped widget with its caption and resolver warnings.
pub struct StackEntry {
    pub label: String,
    pub icon: StackIcon<StackView>,
    pub warnings: Vec<OptionsWarning>,
}

/// Everything needed to build one widget.
#[derive(Debug, Clone)]
pub struct StackSetup {
    pub label: String,
    pub options: Options,
    pub warnings: Vec<OptionsWarning>,
}

pub struct App {
    should_quit: bool,
    stacks: Vec<StackEntry>,
    focused: usize,
    spacing: f32,
}

impl App {
    /// Builds and initializes one widget per setup.
    pub fn new(setups: Vec<StackSetup>, timing: Timing) -> Self {
        let stacks = setups
            .into_iter()
            .map(|setup| {
                let view = StackView::new(SurfaceLayout::default());
                let mut icon = StackIcon::new(setup.options, timing, view);
                icon.initialize();
                StackEntry {
                    label: setup.label,
                    icon,
                    warnings: setup.warnings,
                }
            })
            .collect();

        Self {
            should_quit: false,
            stacks,
            focused: 0,
            spacing: timing.element_spacing,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn stacks(&self) -> &[StackEntry] {
        &self.stacks
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused(&self) -> Option<&StackEntry> {
        self.stacks.get(self.focused)
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn focus_next(&mut self) {
        if !self.stacks.is_empty() {
            self.focused = (self.focused + 1) % self.stacks.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.stacks.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.stacks.len() - 1);
        }
    }

    pub fn increment(&mut self) {
        if let Some(entry) = self.stacks.get_mut(self.focused) {
            entry.icon.increment();
        }
    }

    pub fn decrement(&mut self) {
        if let Some(entry) = self.stacks.get_mut(self.focused) {
            entry.icon.decrement();
        }
    }

    pub fn set_quantity(&mut self, value: i64) {
        if let Some(entry) = self.stacks.get_mut(self.focused) {
            entry.icon.set_quantity(value);
        }
    }

    /// Resolver warnings of all stacks, in stack order.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &OptionsWarning)> {
        self.stacks.iter().flat_map(|entry| {
            entry
                .warnings
                .iter()
                .map(move |warning| (entry.label.as_str(), warning))
        })
    }

    pub fn on_tick(&mut self, dt: Duration) {
        for entry in &mut self.stacks {
            entry.icon.tick(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.stacks.iter().any(|entry| entry.icon.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(label: &str, start: i64) -> StackSetup {
        StackSetup {
            label: label.to_string(),
            options: Options::from_values(start, 1, 99).options,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn keys_affect_only_focused_stack() {
        let mut app = App::new(vec![setup("a", 1), setup("b", 4)], Timing::default());
        app.increment();
        app.focus_next();
        app.decrement();

        assert_eq!(app.stacks()[0].icon.current(), 2);
        assert_eq!(app.stacks()[1].icon.current(), 3);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = App::new(
            vec![setup("a", 1), setup("b", 1), setup("c", 1)],
            Timing::default(),
        );
        app.focus_previous();
        assert_eq!(app.focused_index(), 2);
        app.focus_next();
        assert_eq!(app.focused_index(), 0);
    }

    #[test]
    fn ticks_drain_animations() {
        let mut app = App::new(vec![setup("a", 3)], Timing::default());
        assert!(app.is_animating());
        for _ in 0..200 {
            app.on_tick(Duration::from_millis(16));
        }
        assert!(!app.is_animating());
    }
}
