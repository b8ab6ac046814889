use crate::render::{Element, Property, RenderTarget, SurfaceLayout};

/// Position and opacity of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub offset_y: f32,
    pub opacity: f32,
}

impl Visual {
    const HIDDEN: Visual = Visual {
        offset_y: 0.0,
        opacity: 0.0,
    };
    const SHOWN: Visual = Visual {
        offset_y: 0.0,
        opacity: 1.0,
    };

    fn get(&self, property: Property) -> f32 {
        match property {
            Property::OffsetY => self.offset_y,
            Property::Opacity => self.opacity,
        }
    }

    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::OffsetY => self.offset_y = value,
            Property::Opacity => self.opacity = value.clamp(0.0, 1.0),
        }
    }
}

/// In-memory render target: the current visual properties of one icon.
///
/// Renderer-agnostic; the terminal UI draws it and tests inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    layout: SurfaceLayout,
    root: Visual,
    cap: Visual,
    ghost: Visual,
    layers: Vec<Visual>,
    indicator: Visual,
    indicator_text: String,
}

impl StackView {
    /// Root and layers start hidden; they are revealed by animations.
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            layout,
            root: Visual::HIDDEN,
            cap: Visual::SHOWN,
            ghost: Visual::HIDDEN,
            layers: vec![Visual::HIDDEN; layout.layers],
            indicator: Visual::SHOWN,
            indicator_text: String::new(),
        }
    }

    pub fn visual(&self, element: Element) -> Option<Visual> {
        if !self.layout.has(element) {
            return None;
        }
        match element {
            Element::Root => Some(self.root),
            Element::Cap => Some(self.cap),
            Element::CapGhost => Some(self.ghost),
            Element::Layer(index) => self.layers.get(index).copied(),
            Element::Indicator => Some(self.indicator),
        }
    }

    pub fn indicator_text(&self) -> &str {
        &self.indicator_text
    }

    /// Number of layers at least half visible.
    pub fn visible_layers(&self) -> usize {
        self.layers.iter().filter(|layer| layer.opacity >= 0.5).count()
    }

    fn slot(&mut self, element: Element) -> Option<&mut Visual> {
        if !self.layout.has(element) {
            return None;
        }
        match element {
            Element::Root => Some(&mut self.root),
            Element::Cap => Some(&mut self.cap),
            Element::CapGhost => Some(&mut self.ghost),
            Element::Layer(index) => self.layers.get_mut(index),
            Element::Indicator => Some(&mut self.indicator),
        }
    }
}

impl Default for StackView {
    fn default() -> Self {
        Self::new(SurfaceLayout::default())
    }
}

impl RenderTarget for StackView {
    fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    fn property(&self, element: Element, property: Property) -> f32 {
        self.visual(element)
            .map(|visual| visual.get(property))
            .unwrap_or_default()
    }

    fn write(&mut self, element: Element, property: Property, value: f32) {
        if let Some(visual) = self.slot(element) {
            visual.set(property, value);
        }
    }

    fn set_indicator_text(&mut self, text: &str) {
        if self.layout.indicator {
            self.indicator_text.clear();
            self.indicator_text.push_str(text);
        }
    }
}
