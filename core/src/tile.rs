use serde::{Deserialize, Serialize};

/// Player-visible state of a single box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxCell {
    Covered,
    Faded,
}

impl BoxCell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Faded)
    }
}

impl Default for BoxCell {
    fn default() -> Self {
        Self::Covered
    }
}
