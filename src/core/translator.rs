use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{cart::CartMsg, catalog::CatalogMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Deferred tasks
        RawMsg::NotificationExpired(id) => {
            vec![Msg::System(SystemMsg::DismissNotification(id))]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // A shown alert swallows every other key
    if state.system.is_alert_shown() {
        return translate_alert_keys(key);
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

/// Key bindings while an alert is shown
fn translate_alert_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            vec![Msg::System(SystemMsg::DismissAlert)]
        }
        _ => vec![],
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let cart_focused = state.ui.is_cart_focused();
    match action {
        Action::SelectNext if cart_focused => vec![Msg::Cart(CartMsg::SelectNext)],
        Action::SelectNext => vec![Msg::Catalog(CatalogMsg::SelectNext)],
        Action::SelectPrevious if cart_focused => vec![Msg::Cart(CartMsg::SelectPrevious)],
        Action::SelectPrevious => vec![Msg::Catalog(CatalogMsg::SelectPrevious)],
        Action::SelectFirst if cart_focused => vec![Msg::Cart(CartMsg::SelectFirst)],
        Action::SelectFirst => vec![Msg::Catalog(CatalogMsg::SelectFirst)],
        Action::SelectLast if cart_focused => vec![Msg::Cart(CartMsg::SelectLast)],
        Action::SelectLast => vec![Msg::Catalog(CatalogMsg::SelectLast)],
        Action::AddToCart => translate_add_key(state),
        Action::RemoveFromCart => translate_remove_key(state),
        Action::ToggleCart => vec![Msg::Ui(UiMsg::ToggleCart)],
        Action::CloseCart => vec![Msg::Ui(UiMsg::CloseCart)],
        Action::SwitchFocus => vec![Msg::Ui(UiMsg::SwitchFocus)],
        Action::Checkout => vec![Msg::Cart(CartMsg::Checkout)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Add the highlighted product; only the catalog pane offers this
fn translate_add_key(state: &AppState) -> Vec<Msg> {
    if state.ui.is_cart_focused() {
        return vec![];
    }

    match state.catalog.selected_product() {
        Some(product) => vec![Msg::Cart(CartMsg::Add(product.to_cart_item()))],
        None => vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No product selected".to_string(),
        ))],
    }
}

/// Remove the highlighted cart line; only the cart pane offers this
fn translate_remove_key(state: &AppState) -> Vec<Msg> {
    if !state.ui.is_cart_focused() {
        return vec![];
    }

    match state.cart.selected_position() {
        Some(position) => vec![Msg::Cart(CartMsg::Remove(position))],
        None => vec![],
    }
}
