use serde::{Deserialize, Serialize};

use crate::config::options::RawOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animation: AnimationConfig,
    /// One entry per widget instance. Empty means a single default stack.
    #[serde(default, rename = "stack")]
    pub stacks: Vec<StackConfig>,
}

/// Timing and geometry shared by every widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Vertical distance between two cap slots (default: 5).
    #[serde(default = "default_element_spacing")]
    pub element_spacing: f32,
    /// Duration of a single level tween in milliseconds (default: 300).
    #[serde(default = "default_tween_ms")]
    pub tween_ms: u64,
    /// Delay between consecutive layers of a staggered reveal/hide (default: 300).
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
    /// Duration of each of the three indicator bounce steps (default: 150).
    #[serde(default = "default_bounce_step_ms")]
    pub bounce_step_ms: u64,
    /// Frame interval of the terminal runtime (default: 16).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

/// Raw attributes of one stack, resolved later by the options resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Caption rendered under the icon.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub start: Option<AttrValue>,
    #[serde(default)]
    pub min: Option<AttrValue>,
    #[serde(default)]
    pub max: Option<AttrValue>,
}

/// An attribute as written in the config file: a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Attribute text as the resolver expects it.
    pub fn to_attr(&self) -> String {
        match self {
            AttrValue::Integer(value) => value.to_string(),
            AttrValue::Float(value) => value.to_string(),
            AttrValue::Text(text) => text.clone(),
        }
    }
}

impl StackConfig {
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            start: self.start.as_ref().map(AttrValue::to_attr),
            min: self.min.as_ref().map(AttrValue::to_attr),
            max: self.max.as_ref().map(AttrValue::to_attr),
        }
    }
}

impl Config {
    /// Configured stacks, or a single default stack when none are listed.
    pub fn stacks_or_default(&self) -> Vec<StackConfig> {
        if self.stacks.is_empty() {
            vec![StackConfig::default()]
        } else {
            self.stacks.clone()
        }
    }
}

fn default_element_spacing() -> f32 {
    5.0
}

fn default_tween_ms() -> u64 {
    300
}

fn default_stagger_ms() -> u64 {
    300
}

fn default_bounce_step_ms() -> u64 {
    150
}

fn default_frame_ms() -> u64 {
    16
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            element_spacing: default_element_spacing(),
            tween_ms: default_tween_ms(),
            stagger_ms: default_stagger_ms(),
            bounce_step_ms: default_bounce_step_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}
