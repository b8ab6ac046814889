use crate::ui::app::App;
use crate::ui::theme::{
    COIN_GOLD, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title, focused stack bounds, and the first resolver warning if any.
    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Stack Icon",
                Style::default().fg(COIN_GOLD).add_modifier(Modifier::BOLD),
            ),
        ];

        if let Some(entry) = app.focused() {
            let options = entry.icon.options();
            let max = if options.is_unbounded() {
                "∞".to_string()
            } else {
                options.max().to_string()
            };
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(entry.label.clone(), text_style));
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} ({}..{})", entry.icon.current(), options.min(), max),
                text_style,
            ));
        }

        spans.push(Span::styled("  │  ", separator_style));
        let mut warnings = app.warnings();
        match warnings.next() {
            Some((label, warning)) => {
                let more = warnings.count();
                let suffix = if more > 0 {
                    format!(" (+{more})")
                } else {
                    String::new()
                };
                spans.push(Span::styled(
                    format!("⚠ {label}: {warning}{suffix}"),
                    Style::default().fg(STATUS_WARN),
                ));
            }
            None => spans.push(Span::styled("ok", Style::default().fg(STATUS_OK))),
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
