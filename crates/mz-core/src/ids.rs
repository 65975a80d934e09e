//! Cell and ghost identifiers.
//!
//! A `NodeId` is a row index into the maze's node table and its distance
//! table; a `GhostId` is a slot in the game's ghost table and also seeds
//! that ghost's RNG stream.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident($inner:ty), $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Never assigned by a maze or game; also the `Default`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A maze cell.  `u32` matches the distance table's row arithmetic.
    NodeId(u32), "node"
}

typed_id! {
    /// A ghost.  At most `u8::MAX` ghosts share a game.
    GhostId(u8), "ghost"
}
