//! Strongly typed identifier wrappers.
//!
//! Both IDs are 1-based sequence numbers: passenger `#1` is the first one
//! generated, elevator `#1` is the first car in dispatch order.  Use
//! [`PassengerId::index`]/[`ElevatorId::index`] to turn them into 0-based
//! `Vec` indices.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first ID handed out in a run.
            pub const FIRST: $name = $name(1);

            /// The ID following `self`.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }

            /// 0-based position in creation order.
            ///
            /// # Panics
            /// Panics if `self` is the (never issued) ID 0.
            #[inline(always)]
            pub fn index(self) -> usize {
                assert!(self.0 > 0, "{} ids are 1-based", stringify!($name));
                (self.0 - 1) as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            /// Build the ID for 0-based position `n`.
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n + 1).map($name)
            }
        }
    };
}

typed_id! {
    /// Sequence number of a generated passenger.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Stable identifier of an elevator car.
    pub struct ElevatorId(u16);
}
