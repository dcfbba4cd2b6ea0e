use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    ToggleCart,
    CloseCart,
    /// Move keyboard focus between the catalog and the open cart
    SwitchFocus,
}
