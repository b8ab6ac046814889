use crate::stack::VisualLevel;
use crate::ui::app::App;
use crate::ui::input::KEY_MAP;
use crate::ui::theme::{COIN_GOLD, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left; focused stack level and version on the right.
pub struct Footer<'a> {
    app: &'a App,
}

impl<'a> Footer<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn hints(&self) -> Line<'static> {
        let key_style = Style::default().fg(HEADER_TEXT);
        let caption_style = key_style.add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        for (index, binding) in KEY_MAP.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(binding.keys_label(), key_style));
            spans.push(Span::styled(format!(": {}", binding.caption), caption_style));
        }
        Line::from(spans)
    }

    fn status(&self) -> Line<'static> {
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let mut spans = Vec::new();
        if let Some(entry) = self.app.focused() {
            let level = match entry.icon.level() {
                VisualLevel::One => "1",
                VisualLevel::Two => "2",
                VisualLevel::ThreeOrMore => "3+",
            };
            spans.push(Span::styled("level ", dim));
            spans.push(Span::styled(level, Style::default().fg(COIN_GOLD)));
            spans.push(Span::styled("  ", dim));
        }
        spans.push(Span::styled(format!("v{VERSION} "), dim));
        Line::from(spans).right_aligned()
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        // Status is drawn last so it stays readable when the row is narrow.
        self.hints().render(inner, buf);
        self.status().render(inner, buf);
    }
}
