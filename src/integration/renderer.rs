use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState, infrastructure::tui, presentation::components::Components,
};

/// Draws every component for a given state through a `TuiLike` backend
#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut tui::Frame<'_>| self.draw(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }

    pub fn draw(&self, frame: &mut tui::Frame<'_>, state: &AppState) {
        self.components.render(frame, state);
    }
}
