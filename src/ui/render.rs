use crate::render::RenderTarget;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, stack_slots};
use crate::ui::stack_widget::{StackIconWidget, SLOT_WIDTH};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let layers = app
        .stacks()
        .iter()
        .map(|entry| entry.icon.target().layout().layers)
        .max()
        .unwrap_or(0);
    let height = StackIconWidget::height(layers);
    let slots = stack_slots(body, app.stacks().len(), SLOT_WIDTH, height);

    for (index, (entry, slot)) in app.stacks().iter().zip(slots).enumerate() {
        let widget = StackIconWidget::new(entry.icon.target(), app.spacing())
            .label(&entry.label)
            .focused(index == app.focused_index());
        frame.render_widget(widget, slot);
    }

    frame.render_widget(Footer::new(app), footer);
}
