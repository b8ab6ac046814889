mod common;

use common::{play_out, RecordingTarget};
use stack_icon::animation::Timing;
use stack_icon::config::Options;
use stack_icon::render::{Element, SurfaceLayout};
use stack_icon::stack::VisualLevel;
use stack_icon::widget::StackIcon;
use std::time::Duration;

fn icon(layout: SurfaceLayout) -> StackIcon<RecordingTarget> {
    let options = Options::from_values(1, 1, 99).options;
    let mut icon = StackIcon::new(options, Timing::default(), RecordingTarget::new(layout));
    icon.initialize();
    icon.settle();
    icon.target_mut().clear();
    icon
}

#[test]
fn missing_surface_skips_level_animation_but_counts() {
    let layout = SurfaceLayout {
        surface: false,
        ..SurfaceLayout::complete(2)
    };
    let mut icon = icon(layout);

    for _ in 0..4 {
        assert!(icon.increment().is_some());
    }
    play_out(&mut icon, Duration::from_secs(5));

    assert_eq!(icon.current(), 5);
    assert_eq!(icon.level(), VisualLevel::ThreeOrMore);
    assert!(!icon.target().touched(Element::Cap));
    assert!(!icon.target().touched(Element::Layer(0)));
    assert_eq!(icon.target().texts(), vec!["2", "3", "4", "5"]);
    assert_eq!(icon.target().view.indicator_text(), "5");
}

#[test]
fn missing_layers_skip_level_animation() {
    let mut icon = icon(SurfaceLayout::complete(0));
    icon.set_quantity(3);
    icon.settle();

    assert!(!icon.target().touched(Element::Cap));
    assert!(!icon.target().touched(Element::CapGhost));
    assert_eq!(icon.target().view.indicator_text(), "3");
}

#[test]
fn missing_indicator_still_animates_levels() {
    let layout = SurfaceLayout {
        indicator: false,
        ..SurfaceLayout::complete(2)
    };
    let mut icon = icon(layout);
    icon.set_quantity(3);
    icon.settle();

    assert!(icon.target().texts().is_empty());
    assert!(!icon.target().touched(Element::Indicator));
    assert_eq!(icon.target().view.visible_layers(), 2);
}

#[test]
fn missing_root_skips_fade_in() {
    let layout = SurfaceLayout {
        root: false,
        ..SurfaceLayout::complete(2)
    };
    let options = Options::default();
    let mut icon = StackIcon::new(options, Timing::default(), RecordingTarget::new(layout));
    icon.initialize();
    icon.settle();

    assert!(!icon.target().touched(Element::Root));
    assert_eq!(icon.target().view.indicator_text(), "1");
}
