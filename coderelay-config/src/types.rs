//! Configuration enums shared across the settings records.

use serde::{Deserialize, Serialize};

/// Terminal cursor style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    /// Block cursor (fills the entire cell)
    #[default]
    Block,
    /// Vertical line cursor at the cell start
    Line,
    /// Horizontal line cursor at the cell bottom
    Underline,
}
