use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the interactive loop until the user quits.
pub fn run(mut app: App, frame: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(frame);

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|f| draw(f, &app))?;
        }
        if app.should_quit() {
            break;
        }

        dirty = match events.next(frame) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                true
            }
            Ok(AppEvent::Tick(dt)) => {
                // Idle ticks change nothing on screen.
                let animating = app.is_animating();
                app.on_tick(dt);
                animating
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => break,
        };
    }

    drop(guard);
    Ok(())
}
