use serde::{Deserialize, Serialize};
use std::fmt;

/// Block height. Genesis is height 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(pub u64);

impl Height {
    pub const GENESIS: Height = Height(0);

    /// Number of blocks between two heights, regardless of order.
    pub fn distance(self, other: Height) -> u64 {
        self.0.abs_diff(other.0)
    }

    pub fn next(self) -> Height {
        Height(self.0.saturating_add(1))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
