//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-brand `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.
//!
//! `CustomerId` and `EmployeeId` are monotonically increasing spawn counters;
//! they are never reused within a run.  `BrandId` is the index of a brand in
//! the dataset roster and doubles as the index into the stock ledger and all
//! per-brand daily arrays.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// Spawn-order index of a customer agent.  Never reused within a run.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Spawn-order index of a restocking employee agent.
    pub struct EmployeeId(u32);
}

typed_id! {
    /// Index of a brand in the dataset roster.  Using `u16` keeps per-brand
    /// arrays compact (max 65,535 brands — retail datasets have dozens).
    pub struct BrandId(u16);
}
