use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits `body` into `count` slots of `width` x `height`, centered.
pub fn stack_slots(body: Rect, count: usize, width: u16, height: u16) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(body);

    Layout::horizontal(vec![Constraint::Length(width); count])
        .flex(Flex::Center)
        .split(row)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn slots_are_centered_side_by_side() {
        let slots = stack_slots(Rect::new(0, 0, 80, 20), 2, 16, 5);
        assert_eq!(slots.len(), 2);
        assert!(slots.iter().all(|slot| slot.width == 16 && slot.height == 5));
        assert_eq!(slots[1].x, slots[0].x + 16);
        assert!(slots[0].x > 0);
    }
}
