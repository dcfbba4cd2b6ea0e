use crate::{
    core::{cmd::Cmd, msg::catalog::CatalogMsg},
    domain::catalog::Product,
};

/// Product list state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub selected: Option<usize>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        let selected = if products.is_empty() { None } else { Some(0) };
        Self { products, selected }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.products.get(i))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Catalog-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CatalogMsg) -> Vec<Cmd> {
        if self.products.is_empty() {
            return vec![];
        }
        let last = self.products.len() - 1;
        let next = match (msg, self.selected) {
            (CatalogMsg::SelectNext, Some(current)) => (current + 1).min(last),
            (CatalogMsg::SelectPrevious, Some(current)) => current.saturating_sub(1),
            (CatalogMsg::SelectNext | CatalogMsg::SelectPrevious, None) => 0,
            (CatalogMsg::SelectFirst, _) => 0,
            (CatalogMsg::SelectLast, _) => last,
        };

        if self.selected == Some(next) {
            return vec![];
        }
        self.selected = Some(next);
        vec![Cmd::RequestRender]
    }
}
