use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press does to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    /// Set the focused quantity to the pressed digit.
    SetDigit,
    FocusNext,
    FocusPrevious,
    Quit,
}

/// A group of keys bound to one action, with its footer caption.
pub struct Binding {
    pub codes: &'static [KeyCode],
    pub action: Action,
    pub caption: &'static str,
}

/// Every key binding, in footer order. Ctrl+C always quits on top of these.
pub const KEY_MAP: &[Binding] = &[
    Binding {
        codes: &[KeyCode::Char('+'), KeyCode::Right, KeyCode::Up, KeyCode::Char('k')],
        action: Action::Increment,
        caption: "Add",
    },
    Binding {
        codes: &[KeyCode::Char('-'), KeyCode::Left, KeyCode::Down, KeyCode::Char('j')],
        action: Action::Decrement,
        caption: "Remove",
    },
    Binding {
        codes: &[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('3'),
            KeyCode::Char('4'),
            KeyCode::Char('5'),
            KeyCode::Char('6'),
            KeyCode::Char('7'),
            KeyCode::Char('8'),
            KeyCode::Char('9'),
        ],
        action: Action::SetDigit,
        caption: "Set",
    },
    Binding {
        codes: &[KeyCode::Tab],
        action: Action::FocusNext,
        caption: "Next",
    },
    Binding {
        codes: &[KeyCode::BackTab],
        action: Action::FocusPrevious,
        caption: "Prev",
    },
    Binding {
        codes: &[KeyCode::Char('q'), KeyCode::Esc],
        action: Action::Quit,
        caption: "Quit",
    },
];

impl Binding {
    /// Keys as shown in the footer: `+/→/↑/k`, or `1-9` for a digit run.
    pub fn keys_label(&self) -> String {
        let digits: Vec<char> = self
            .codes
            .iter()
            .filter_map(|code| match code {
                KeyCode::Char(ch) if ch.is_ascii_digit() => Some(*ch),
                _ => None,
            })
            .collect();
        if digits.len() > 1 && digits.len() == self.codes.len() {
            return format!("{}-{}", digits[0], digits[digits.len() - 1]);
        }

        self.codes
            .iter()
            .map(|&code| key_label(code))
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "S-Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{other:?}"),
    }
}

pub fn action_for(code: KeyCode) -> Option<Action> {
    KEY_MAP
        .iter()
        .find(|binding| binding.codes.contains(&code))
        .map(|binding| binding.action)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let Some(action) = action_for(key.code) else {
        return;
    };
    match action {
        Action::Increment => app.increment(),
        Action::Decrement => app.decrement(),
        Action::SetDigit => {
            if let KeyCode::Char(ch) = key.code {
                if let Some(value) = ch.to_digit(10) {
                    app.set_quantity(i64::from(value));
                }
            }
        }
        Action::FocusNext => app.focus_next(),
        Action::FocusPrevious => app.focus_previous(),
        Action::Quit => app.request_quit(),
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
