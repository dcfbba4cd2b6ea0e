use serde::{Deserialize, Serialize};

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::{
        cart::CheckoutError,
        notification::{Notifications, DEFAULT_NOTIFICATION_MS},
    },
};

/// Blocking alerts; while one is shown, every other input is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alert {
    EmptyCart,
}

impl Alert {
    pub fn message(&self) -> String {
        match self {
            Alert::EmptyCart => CheckoutError::EmptyCart.to_string(),
        }
    }
}

impl From<CheckoutError> for Alert {
    fn from(value: CheckoutError) -> Self {
        match value {
            CheckoutError::EmptyCart => Alert::EmptyCart,
        }
    }
}

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    pub notifications: Notifications,
    pub alert: Option<Alert>,
    /// How long a notification stays on screen
    pub notification_ms: u64,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::with_notification_ms(DEFAULT_NOTIFICATION_MS)
    }
}

impl SystemState {
    pub fn with_notification_ms(notification_ms: u64) -> Self {
        Self {
            should_quit: false,
            should_suspend: false,
            status_message: None,
            notifications: Notifications::new(),
            alert: None,
            notification_ms,
        }
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    pub fn is_alert_shown(&self) -> bool {
        self.alert.is_some()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message.replace('\n', " "));
                vec![Cmd::RequestRender]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {}", error.replace('\n', " ")));
                vec![
                    Cmd::LogError { message: error },
                    Cmd::RequestRender,
                ]
            }

            // Transient notifications
            SystemMsg::Notify(text) => {
                let id = self.notifications.push(text);
                vec![
                    Cmd::ScheduleNotificationDismiss {
                        id,
                        delay_ms: self.notification_ms,
                    },
                    Cmd::RequestRender,
                ]
            }

            SystemMsg::DismissNotification(id) => {
                if self.notifications.dismiss(id) {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }

            // Blocking alerts
            SystemMsg::ShowAlert(alert) => {
                self.alert = Some(alert);
                vec![Cmd::RequestRender]
            }

            SystemMsg::DismissAlert => match self.alert.take() {
                Some(_) => vec![Cmd::RequestRender],
                None => vec![],
            },
        }
    }
}
