use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        handoff::{BrowserHandoff, Handoff},
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Host loop: pulls terminal events, runs the update cycle and renders.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Wire a runtime to the given terminal, event source and order hand-off.
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
        handoff: Arc<dyn Handoff>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        crate::trace_dbg!(initial_state.storefront_name());

        let mut runtime = Runtime::new_with_executor(initial_state, handoff);
        let (render_tx, render_req_rx) = mpsc::unbounded_channel();
        let (tui_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_render_request_sender(render_tx).map_err(|e| eyre!(e))?;
        runtime.add_tui_sender(tui_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            render_req_rx,
            tui_cmd_rx,
        })
    }

    /// Production wiring: crossterm terminal and the platform URL opener.
    pub fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        let event_source = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, event_source, Arc::new(BrowserHandoff))
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        // Establish the empty-cart placeholder before any input arrives
        self.render().await?;

        loop {
            let saw_tui_render = match self.event_source.next().await {
                Some(event) => self.dispatch_event(event),
                None => {
                    log::info!("Event source exhausted, quitting");
                    self.runtime.send_raw_msg(RawMsg::Quit);
                    false
                }
            };

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            let mut resizes = Vec::new();
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
                resizes.push((width, height));
            }
            let resized = match Coalescer::decide_resize(None, &resizes) {
                Some((width, height)) => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    true
                }
                None => false,
            };

            let mut queued_render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                queued_render_reqs += 1;
            }
            if Coalescer::decide_render(queued_render_reqs, saw_tui_render || resized) {
                self.render().await?;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Feeds one terminal event into the runtime; returns true for a frame tick
    fn dispatch_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Render => return true,
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Error => {
                log::warn!("Terminal event stream reported an error");
                self.runtime
                    .send_raw_msg(RawMsg::Error("Terminal input error".to_string()));
            }
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => {}
        }
        false
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        self.tui.lock().await.suspend()?;

        self.runtime.send_raw_msg(RawMsg::Resume);
        self.tui.lock().await.resume()?;
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error after resume: {e}");
        }
        self.render().await
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::infrastructure::{
        config::default_config, handoff::RecordingHandoff, tui::test::TestTui,
    };

    fn key(c: char) -> tui::Event {
        tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn create_runner(
        events: Vec<tui::Event>,
    ) -> (AppRunner, Arc<Mutex<TestTui>>, Arc<RecordingHandoff>) {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30).expect("TestTui")));
        let handoff = Arc::new(RecordingHandoff::new());
        let runner = AppRunner::new_with_config(
            default_config().expect("embedded config"),
            Arc::clone(&test_tui) as Arc<Mutex<dyn tui::TuiLike + Send>>,
            EventSource::test(events),
            Arc::clone(&handoff) as Arc<dyn Handoff>,
        )
        .expect("runner");
        (runner, test_tui, handoff)
    }

    #[tokio::test]
    async fn test_run_renders_initial_frame_and_exits() -> Result<()> {
        let (mut runner, test_tui, _handoff) = create_runner(vec![]);

        runner.run().await?;

        let guard = test_tui.lock().await;
        assert!(guard.draw_count() >= 1);
        assert!(!guard.is_entered());
        assert!(guard.buffer_text().contains("Cart 0"));
        Ok(())
    }

    #[tokio::test]
    async fn test_add_then_checkout_hands_off() -> Result<()> {
        let (mut runner, _test_tui, handoff) = create_runner(vec![key('a'), key('o')]);

        runner.run().await?;

        let opened = handoff.opened();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/919999999999?text="));
        assert!(opened[0].contains("1.%20Gold%20Necklace%20-%20%E2%82%B91%2C500"));
        assert_eq!(runner.runtime().state().cart.cart.total(), 1500);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_is_applied_to_terminal() -> Result<()> {
        let (mut runner, test_tui, _handoff) =
            create_runner(vec![tui::Event::Resize(60, 20), tui::Event::Quit]);

        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.buffer().area, Rect::new(0, 0, 60, 20));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes() -> Result<()> {
        let suspend = tui::Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, test_tui, _handoff) = create_runner(vec![suspend]);

        runner.run().await?;

        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }
}
