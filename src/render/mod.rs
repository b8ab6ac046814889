//! Render target seam.
//!
//! The animation engine never touches a concrete surface. It emits steps
//! addressed to an [`Element`] and a [`Property`]; a [`RenderTarget`]
//! stores the values and draws them however it likes (terminal cells,
//! SVG attributes, a test log).

mod view;

pub use view::{StackView, Visual};

/// Addressable parts of a stack icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The whole widget, faded in once on initialization.
    Root,
    /// Top-most item whose vertical slot encodes the level.
    Cap,
    /// Transient copy of the cap used by the grow animation.
    CapGhost,
    /// Stack layer by stacking index, `0` being the lowest.
    Layer(usize),
    /// Bubble showing the numeric quantity.
    Indicator,
}

/// Animatable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Vertical displacement in surface units.
    OffsetY,
    /// 0.0 (hidden) to 1.0 (opaque).
    Opacity,
}

/// Which elements a render target was able to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub root: bool,
    /// Drawing surface hosting the cap, ghost and layers.
    pub surface: bool,
    pub cap: bool,
    pub layers: usize,
    pub indicator: bool,
}

impl SurfaceLayout {
    /// A fully bound icon with `layers` stack layers.
    pub fn complete(layers: usize) -> Self {
        Self {
            root: true,
            surface: true,
            cap: true,
            layers,
            indicator: true,
        }
    }

    /// Level animations need the surface, the cap and at least one layer.
    pub fn supports_levels(&self) -> bool {
        self.surface && self.cap && self.layers > 0
    }

    pub fn has(&self, element: Element) -> bool {
        match element {
            Element::Root => self.root,
            Element::Cap | Element::CapGhost => self.surface && self.cap,
            Element::Layer(index) => self.surface && index < self.layers,
            Element::Indicator => self.indicator,
        }
    }
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self::complete(2)
    }
}

/// Primitive surface operations driven by the timeline player.
///
/// Writes to elements the layout does not have must be ignored.
pub trait RenderTarget {
    fn layout(&self) -> SurfaceLayout;

    /// Current value of a property; the starting point of a tween.
    fn property(&self, element: Element, property: Property) -> f32;

    fn write(&mut self, element: Element, property: Property, value: f32);

    fn set_indicator_text(&mut self, text: &str);
}
