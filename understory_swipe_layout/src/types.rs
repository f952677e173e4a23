// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the layouts: orientation and side sets.

/// Which horizontal side a row of actions is revealed from.
///
/// The orientation is chosen when a swipe begins and stays fixed until the row
/// closes again.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Actions sit to the left of the content; the content moves right to reveal them.
    Left,
    /// Actions sit to the right of the content; the content moves left to reveal them.
    Right,
}

impl Orientation {
    /// Sign convention for offset math: `-1.0` for [`Left`](Self::Left), `+1.0` for [`Right`](Self::Right).
    ///
    /// Every horizontal offset computed by a layout is multiplied by this value.
    pub const fn scale(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The other side.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The [`Sides`] flag for this orientation.
    pub const fn side(self) -> Sides {
        match self {
            Self::Left => Sides::LEFT,
            Self::Right => Sides::RIGHT,
        }
    }
}

bitflags::bitflags! {
    /// A set of orientations, e.g. the sides of a row that currently offer actions.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        /// Actions revealed from the left edge.
        const LEFT  = 0b0000_0001;
        /// Actions revealed from the right edge.
        const RIGHT = 0b0000_0010;
    }
}

impl Sides {
    /// Whether this set includes `orientation`.
    pub const fn allows(self, orientation: Orientation) -> bool {
        self.contains(orientation.side())
    }
}

impl From<Orientation> for Sides {
    fn from(orientation: Orientation) -> Self {
        orientation.side()
    }
}
