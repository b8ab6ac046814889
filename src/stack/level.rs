//! Level mapper: derives direction and visual tier from a quantity change.

/// Direction of an accepted quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Equal,
}

/// The three renderable tiers of the icon.
///
/// `ThreeOrMore` is a plateau: every quantity from 3 upwards maps to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VisualLevel {
    One,
    Two,
    ThreeOrMore,
}

impl VisualLevel {
    pub fn from_quantity(quantity: i64) -> Self {
        match quantity {
            i64::MIN..=1 => VisualLevel::One,
            2 => VisualLevel::Two,
            _ => VisualLevel::ThreeOrMore,
        }
    }

    /// 1, 2 or 3.
    pub fn tier(self) -> u8 {
        match self {
            VisualLevel::One => 1,
            VisualLevel::Two => 2,
            VisualLevel::ThreeOrMore => 3,
        }
    }

    /// Stack layers are shown only on the plateau.
    pub fn shows_layers(self) -> bool {
        self == VisualLevel::ThreeOrMore
    }
}

/// Change event emitted by the quantity controller for every accepted mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityChange {
    pub previous: i64,
    pub current: i64,
}

impl QuantityChange {
    pub fn direction(&self) -> Direction {
        if self.current > self.previous {
            Direction::Up
        } else if self.current < self.previous {
            Direction::Down
        } else {
            Direction::Equal
        }
    }

    /// Tier the animation starts from: the previous quantity capped at 3.
    pub fn from_level(&self) -> VisualLevel {
        VisualLevel::from_quantity(self.previous.min(3))
    }

    pub fn to_level(&self) -> VisualLevel {
        VisualLevel::from_quantity(self.current)
    }

    /// Whether the change carries the count across the 2↔3 threshold.
    pub fn crosses_plateau(&self) -> bool {
        match self.direction() {
            Direction::Up => self.previous < 3 && self.current >= 3,
            Direction::Down => self.current < 3 && self.previous >= 3,
            Direction::Equal => false,
        }
    }

    pub fn transition(&self) -> LevelTransition {
        LevelTransition::from_change(self)
    }
}

/// What the animation engine has to play for a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Move the cap to the resting slot of `One` or `Two`.
    Reposition(VisualLevel),
    /// Enter the plateau from below.
    Grow { from: VisualLevel },
    /// Leave the plateau downwards.
    Shrink { to: VisualLevel },
    /// Nothing but the indicator changes.
    Plateau,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTransition {
    pub direction: Direction,
    pub from: VisualLevel,
    pub to: VisualLevel,
    pub crossing: bool,
}

impl LevelTransition {
    pub fn from_change(change: &QuantityChange) -> Self {
        Self {
            direction: change.direction(),
            from: change.from_level(),
            to: change.to_level(),
            crossing: change.crosses_plateau(),
        }
    }

    pub fn kind(&self) -> TransitionKind {
        match (self.direction, self.crossing) {
            (Direction::Equal, _) => TransitionKind::Plateau,
            (Direction::Up, true) => TransitionKind::Grow { from: self.from },
            (Direction::Down, true) => TransitionKind::Shrink { to: self.to },
            (_, false) if self.to == self.from => TransitionKind::Plateau,
            (_, false) => TransitionKind::Reposition(self.to),
        }
    }
}
