//! Terminal rendering of a [`StackView`].
//!
//! Surface units map to rows: an offset of one `element_spacing` is one
//! row. Layer `k` sits `layers - k` rows below the top slot, so the cap
//! at offset 0 rests on top of every layer. Opacity maps to three bands:
//! hidden, dim, and full.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::render::{Element, RenderTarget, StackView, Visual};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, COIN_GOLD, COIN_SHADE, GHOST_TINT, HEADER_TEXT, INDICATOR_BG,
    INDICATOR_TEXT,
};

const CAP_GLYPH: &str = "▟█████▙";
const LAYER_GLYPH: &str = "▜█████▛";
const ICON_WIDTH: u16 = 7;
/// Indicator pixels per row of bounce displacement.
const INDICATOR_ROW_UNITS: f32 = 3.0;

/// Width of one icon slot including the indicator bubble.
pub const SLOT_WIDTH: u16 = 16;

pub struct StackIconWidget<'a> {
    view: &'a StackView,
    spacing: f32,
    label: &'a str,
    focused: bool,
}

impl<'a> StackIconWidget<'a> {
    pub fn new(view: &'a StackView, spacing: f32) -> Self {
        Self {
            view,
            spacing,
            label: "",
            focused: false,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows needed for an icon with `layers` stack layers.
    pub fn height(layers: usize) -> u16 {
        // bounce margin + cap/layer rows + label
        layers as u16 + 3
    }

    fn root_opacity(&self) -> f32 {
        self.view
            .visual(Element::Root)
            .map(|root| root.opacity)
            .unwrap_or(1.0)
    }

    fn slot_row(&self, offset_y: f32, layers: usize) -> u16 {
        let row = (offset_y / self.spacing).round().clamp(0.0, layers as f32);
        1 + row as u16
    }
}

impl Widget for StackIconWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let root = self.root_opacity();
        let layers = self.view.layout().layers;
        let base = Style::default().fg(COIN_GOLD);

        // Ghost first so the real cap and layers draw over it.
        if let Some(ghost) = self.view.visual(Element::CapGhost) {
            if let Some(style) = faded(Style::default().fg(GHOST_TINT), ghost, root) {
                let row = self.slot_row(ghost.offset_y, layers);
                put(buf, area, 0, row, CAP_GLYPH, style);
            }
        }

        for index in 0..layers {
            let Some(layer) = self.view.visual(Element::Layer(index)) else {
                continue;
            };
            if let Some(style) = faded(Style::default().fg(COIN_SHADE), layer, root) {
                let row = 1 + (layers - index) as u16;
                put(buf, area, 0, row, LAYER_GLYPH, style);
            }
        }

        if let Some(cap) = self.view.visual(Element::Cap) {
            if let Some(style) = faded(base, cap, root) {
                let row = self.slot_row(cap.offset_y, layers);
                put(buf, area, 0, row, CAP_GLYPH, style);
            }
        }

        if let Some(indicator) = self.view.visual(Element::Indicator) {
            let text = self.view.indicator_text();
            if !text.is_empty() {
                let shift = (indicator.offset_y / INDICATOR_ROW_UNITS)
                    .round()
                    .clamp(-1.0, 1.0) as i16;
                let row = (1 + shift).max(0) as u16;
                let style = Style::default()
                    .fg(INDICATOR_TEXT)
                    .bg(INDICATOR_BG)
                    .add_modifier(Modifier::BOLD);
                if let Some(style) = faded(style, indicator, root) {
                    put(buf, area, ICON_WIDTH + 1, row, &format!(" {text} "), style);
                }
            }
        }

        if !self.label.is_empty() {
            let mut style = Style::default().fg(HEADER_TEXT);
            if self.focused {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            put(buf, area, 0, Self::height(layers) - 1, self.label, style);
        }
    }
}

/// Style for an element at `opacity`, or `None` when it is invisible.
fn faded(style: Style, visual: Visual, root: f32) -> Option<Style> {
    let opacity = visual.opacity.clamp(0.0, 1.0) * root.clamp(0.0, 1.0);
    if opacity < 0.25 {
        None
    } else if opacity < 0.75 {
        Some(style.add_modifier(Modifier::DIM))
    } else {
        Some(style)
    }
}

/// Writes `text` at (`col`, `row`) relative to `area`, clipped to it.
fn put(buf: &mut Buffer, area: Rect, col: u16, row: u16, text: &str, style: Style) {
    if row >= area.height || col >= area.width {
        return;
    }
    let width = (area.width - col) as usize;
    let clipped: String = text.chars().take(width).collect();
    buf.set_string(area.x + col, area.y + row, clipped, style);
}
