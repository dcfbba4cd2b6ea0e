use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    domain::notification::NotificationId,
    infrastructure::handoff::Handoff,
};

/// Executes Elm commands: timers, the order hand-off, render/resize requests and logging.
/// Results of deferred work come back to the runtime as `RawMsg`s.
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    handoff: Arc<dyn Handoff>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>, handoff: Arc<dyn Handoff>) -> Self {
        Self {
            raw_sender,
            handoff,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ScheduleNotificationDismiss { id, delay_ms } => {
                self.schedule_dismiss(*id, *delay_ms);
            }

            Cmd::OpenOrderLink { url } => {
                log::info!("Handing order off to {url}");
                if let Err(e) = self.handoff.open(url) {
                    log::error!("Failed to open order link: {e}");
                    // Surface the URL so the user can open it by hand
                    self.raw_sender
                        .send(RawMsg::Error(format!("Could not open {url}: {e}")))?;
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Fire-and-forget timer; the notification is dismissed even if newer ones arrive
    fn schedule_dismiss(&self, id: NotificationId, delay_ms: u64) {
        let tx = self.raw_sender.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = tx.send(RawMsg::NotificationExpired(id));
                });
            }
            Err(_) => {
                log::warn!("No async runtime; notification {id} stays until dismissed");
            }
        }
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_raw_sender_closed: self.raw_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
            has_render_request_sender: self.render_req_sender.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_raw_sender_closed: bool,
    pub has_tui_sender: bool,
    pub has_render_request_sender: bool,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::ScheduleNotificationDismiss { .. } => "ScheduleNotificationDismiss".to_string(),
            Cmd::OpenOrderLink { .. } => "OpenOrderLink".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::handoff::RecordingHandoff;

    fn create_test_executor(
        handoff: Arc<RecordingHandoff>,
    ) -> (CmdExecutor, mpsc::UnboundedReceiver<RawMsg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (CmdExecutor::new(tx, handoff), rx)
    }

    #[test]
    fn test_open_order_link_uses_handoff() -> Result<()> {
        let handoff = Arc::new(RecordingHandoff::new());
        let (executor, mut rx) = create_test_executor(Arc::clone(&handoff));

        executor.execute_command(&Cmd::OpenOrderLink {
            url: "https://wa.me/919999999999?text=hi".to_string(),
        })?;

        assert_eq!(
            handoff.opened(),
            vec!["https://wa.me/919999999999?text=hi".to_string()]
        );
        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_handoff_failure_reports_url() -> Result<()> {
        let handoff = Arc::new(RecordingHandoff::failing("no browser"));
        let (executor, mut rx) = create_test_executor(handoff);

        executor.execute_command(&Cmd::OpenOrderLink {
            url: "https://wa.me/1?text=x".to_string(),
        })?;

        match rx.try_recv() {
            Ok(RawMsg::Error(message)) => {
                assert!(message.contains("https://wa.me/1?text=x"));
                assert!(message.contains("no browser"));
            }
            other => panic!("Expected RawMsg::Error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_schedule_dismiss_posts_expiry() -> Result<()> {
        let (executor, mut rx) = create_test_executor(Arc::new(RecordingHandoff::new()));

        executor.execute_command(&Cmd::ScheduleNotificationDismiss {
            id: NotificationId(7),
            delay_ms: 20,
        })?;
        assert!(rx.try_recv().is_err());

        let raw = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await?;
        assert_eq!(raw, Some(RawMsg::NotificationExpired(NotificationId(7))));
        Ok(())
    }

    #[test]
    fn test_render_and_resize_forwarding() -> Result<()> {
        let (mut executor, _rx) = create_test_executor(Arc::new(RecordingHandoff::new()));
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel();
        executor.set_render_request_sender(render_tx);
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::batch(vec![
            Cmd::RequestRender,
            Cmd::Tui(TuiCommand::Resize {
                width: 120,
                height: 40,
            }),
        ]))?;

        assert!(render_rx.try_recv().is_ok());
        assert_eq!(
            tui_rx.try_recv().ok(),
            Some(TuiCommand::Resize {
                width: 120,
                height: 40
            })
        );
        Ok(())
    }

    #[test]
    fn test_execute_commands_log() -> Result<()> {
        let (executor, _rx) = create_test_executor(Arc::new(RecordingHandoff::new()));

        let log = executor.execute_commands(&[
            Cmd::LogInfo {
                message: "hello".to_string(),
            },
            Cmd::None,
        ])?;

        assert_eq!(
            log,
            vec![
                "✓ Executed: LogInfo".to_string(),
                "✓ Executed: None".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_stats() {
        let (executor, rx) = create_test_executor(Arc::new(RecordingHandoff::new()));
        let stats = executor.get_stats();
        assert!(!stats.is_raw_sender_closed);
        assert!(!stats.has_tui_sender);

        drop(rx);
        assert!(executor.get_stats().is_raw_sender_closed);
    }
}
