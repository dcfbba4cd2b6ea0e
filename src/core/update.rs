use crate::{
    core::{
        cmd::Cmd,
        msg::{system::SystemMsg, Msg},
        state::{cart::CartOutcome, system::Alert, AppState},
    },
    domain::notification::{added_to_cart, removed_from_cart},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Catalog messages (delegated to CatalogState)
        Msg::Catalog(catalog_msg) => {
            let commands = state.catalog.update(catalog_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        // Cart messages: CartState mutates, the coordinator turns the outcome
        // into notifications, alerts and side effects
        Msg::Cart(cart_msg) => {
            let outcome = state.cart.update(cart_msg);
            let commands = apply_cart_outcome(&mut state, outcome);
            (state, commands)
        }
    }
}

fn apply_cart_outcome(state: &mut AppState, outcome: CartOutcome) -> Vec<Cmd> {
    match outcome {
        CartOutcome::Added { name } => {
            log::info!(
                "Added {name} to cart ({} items, total {})",
                state.cart.cart.len(),
                state.cart.cart.total()
            );
            let mut cmds = clear_stale_status(state);
            cmds.extend(state.system.update(SystemMsg::Notify(added_to_cart(&name))));
            cmds.push(Cmd::RequestRender);
            cmds
        }

        CartOutcome::Removed { item } => {
            log::info!(
                "Removed {} from cart ({} items, total {})",
                item.name,
                state.cart.cart.len(),
                state.cart.cart.total()
            );
            let mut cmds = clear_stale_status(state);
            cmds.extend(state.system.update(SystemMsg::Notify(removed_from_cart())));
            cmds.push(Cmd::RequestRender);
            cmds
        }

        CartOutcome::Unchanged => vec![],

        CartOutcome::SelectionMoved => vec![Cmd::RequestRender],

        CartOutcome::CheckoutBlocked(error) => {
            log::info!("Checkout blocked: {error}");
            state.system.update(SystemMsg::ShowAlert(Alert::from(error)))
        }

        CartOutcome::CheckoutReady { url, message } => {
            let mut cmds = vec![
                Cmd::LogInfo {
                    message: format!("Order composed:\n{message}"),
                },
                Cmd::OpenOrderLink { url },
            ];
            cmds.extend(state.system.update(SystemMsg::UpdateStatusMessage(
                "[Checkout] Sending your order via the messaging link".to_string(),
            )));
            cmds
        }
    }
}

/// A cart mutation supersedes the last status line, so the key hints come back
fn clear_stale_status(state: &mut AppState) -> Vec<Cmd> {
    if state.system.status_message().is_some() {
        state.system.update(SystemMsg::ClearStatusMessage)
    } else {
        vec![]
    }
}
