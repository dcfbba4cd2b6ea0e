use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Catalog,
    Cart,
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cart_open: bool,
    pub focus: Focus,
}

impl UiState {
    pub fn is_cart_focused(&self) -> bool {
        self.cart_open && self.focus == Focus::Cart
    }

    fn open_cart(&mut self) -> Vec<Cmd> {
        self.cart_open = true;
        self.focus = Focus::Cart;
        vec![Cmd::RequestRender]
    }

    fn close_cart(&mut self) -> Vec<Cmd> {
        if !self.cart_open {
            return vec![];
        }
        self.cart_open = false;
        self.focus = Focus::Catalog;
        vec![Cmd::RequestRender]
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ToggleCart => {
                if self.cart_open {
                    self.close_cart()
                } else {
                    self.open_cart()
                }
            }
            UiMsg::CloseCart => self.close_cart(),
            UiMsg::SwitchFocus => {
                if !self.cart_open {
                    return vec![];
                }
                self.focus = match self.focus {
                    Focus::Catalog => Focus::Cart,
                    Focus::Cart => Focus::Catalog,
                };
                vec![Cmd::RequestRender]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cart_moves_focus() {
        let mut ui = UiState::default();

        assert_eq!(ui.update(UiMsg::ToggleCart), vec![Cmd::RequestRender]);
        assert!(ui.cart_open);
        assert!(ui.is_cart_focused());

        assert_eq!(ui.update(UiMsg::ToggleCart), vec![Cmd::RequestRender]);
        assert!(!ui.cart_open);
        assert_eq!(ui.focus, Focus::Catalog);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut ui = UiState::default();
        assert!(ui.update(UiMsg::CloseCart).is_empty());
    }

    #[test]
    fn test_switch_focus_requires_open_cart() {
        let mut ui = UiState::default();
        assert!(ui.update(UiMsg::SwitchFocus).is_empty());
        assert_eq!(ui.focus, Focus::Catalog);

        ui.update(UiMsg::ToggleCart);
        ui.update(UiMsg::SwitchFocus);
        assert_eq!(ui.focus, Focus::Catalog);
        assert!(ui.cart_open);
        assert!(!ui.is_cart_focused());
    }
}
