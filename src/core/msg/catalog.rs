use serde::{Deserialize, Serialize};

/// Messages specific to CatalogState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogMsg {
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
}
