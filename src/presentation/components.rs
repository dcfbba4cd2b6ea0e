//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod alert;
pub mod cart_sidebar;
pub mod catalog;
pub mod header;
pub mod notifications;
pub mod status_bar;

pub use alert::AlertComponent;
pub use cart_sidebar::CartSidebarComponent;
pub use catalog::CatalogComponent;
pub use header::HeaderComponent;
pub use notifications::NotificationsComponent;
pub use status_bar::StatusBarComponent;

/// Width of the cart sidebar when it is open
pub const SIDEBAR_WIDTH: u16 = 42;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub catalog: CatalogComponent,
    pub cart_sidebar: CartSidebarComponent,
    pub notifications: NotificationsComponent,
    pub alert: AlertComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// Overlays (notifications, then the alert) are drawn after the panes.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Catalog and cart
            Constraint::Length(1), // Status bar
        ])
        .areas(area);

        self.header.view(state, frame, header_area);

        if state.ui.cart_open {
            let [catalog_area, sidebar_area] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(SIDEBAR_WIDTH.min(main_area.width)),
            ])
            .areas(main_area);
            self.catalog.view(state, frame, catalog_area);
            self.cart_sidebar.view(state, frame, sidebar_area);
        } else {
            self.catalog.view(state, frame, main_area);
        }

        self.status_bar.view(state, frame, status_area);
        self.notifications.view(state, frame, main_area);
        self.alert.view(state, frame, area);
    }
}
