use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui;

/// Where the host loop pulls terminal events from
pub enum EventSource {
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    /// Scripted events; `None` once exhausted
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::{test::TestTui, Event};

    #[tokio::test]
    async fn test_scripted_source_drains() {
        let mut source = EventSource::test([Event::Tick, Event::Quit]);

        assert!(matches!(source.next().await, Some(Event::Tick)));
        assert!(matches!(source.next().await, Some(Event::Quit)));
        assert!(source.next().await.is_none());
    }

    #[tokio::test]
    async fn test_real_source_reads_from_tui() -> color_eyre::eyre::Result<()> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::new(Mutex::new(TestTui::with_events(10, 2, [Event::Render])?));
        let mut source = EventSource::real(tui);

        assert!(matches!(source.next().await, Some(Event::Render)));
        assert!(source.next().await.is_none());
        Ok(())
    }
}
