use serde::{Deserialize, Serialize};

use crate::domain::cart::CartItem;

/// Messages specific to CartState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartMsg {
    /// Append a fully-populated item
    Add(CartItem),
    /// Delete the item at a position; out-of-range positions are ignored
    Remove(usize),
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    Checkout,
}
