use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use cartui::infrastructure::{
    config::default_config,
    handoff::{Handoff, RecordingHandoff},
    tui::{event_source::EventSource, test::TestTui, Event, TuiLike},
};
use cartui::integration::app_runner::AppRunner;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

struct Harness {
    runner: AppRunner,
    tui: Arc<Mutex<TestTui>>,
    handoff: Arc<RecordingHandoff>,
}

fn harness(events: Vec<Event>) -> Result<Harness> {
    let tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
    let handoff = Arc::new(RecordingHandoff::new());
    let runner = AppRunner::new_with_config(
        default_config()?,
        Arc::clone(&tui) as Arc<Mutex<dyn TuiLike + Send>>,
        EventSource::test(events),
        Arc::clone(&handoff) as Arc<dyn Handoff>,
    )?;
    Ok(Harness {
        runner,
        tui,
        handoff,
    })
}

#[tokio::test]
async fn test_initial_render_shows_empty_cart() -> Result<()> {
    let mut h = harness(vec![key(KeyCode::Char('c'))])?;

    h.runner.run().await?;

    let text = h.tui.lock().await.buffer_text();
    assert!(text.contains("Your Cart (0)"));
    assert!(text.contains("Your cart is empty"));
    Ok(())
}

#[tokio::test]
async fn test_full_order_flow() -> Result<()> {
    let mut h = harness(vec![
        key(KeyCode::Char('a')),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('a')),
        key(KeyCode::Char('c')),
        key(KeyCode::Char('o')),
        key(KeyCode::Char('q')),
    ])?;

    h.runner.run().await?;

    let opened = h.handoff.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains(
        "1.%20Gold%20Necklace%20-%20%E2%82%B91%2C500%0A2.%20Diamond%20Ring%20-%20%E2%82%B92%2C500"
    ));
    assert!(opened[0].ends_with("Total%3A%20%E2%82%B94%2C000"));

    let state = h.runner.runtime().state();
    assert!(state.system.should_quit);
    assert_eq!(state.cart.cart.total(), 4000);

    let guard = h.tui.lock().await;
    assert!(!guard.is_entered());
    let text = guard.buffer_text();
    assert!(text.contains("Cart 2"));
    assert!(text.contains("Total: ₹4,000"));
    Ok(())
}

#[tokio::test]
async fn test_empty_checkout_shows_alert_without_hand_off() -> Result<()> {
    let mut h = harness(vec![key(KeyCode::Char('o'))])?;

    h.runner.run().await?;

    assert!(h.handoff.opened().is_empty());
    assert!(h.runner.runtime().state().system.is_alert_shown());
    assert!(h.tui.lock().await.buffer_text().contains("Your cart is empty!"));
    Ok(())
}

#[tokio::test]
async fn test_removed_line_disappears_from_sidebar() -> Result<()> {
    let mut h = harness(vec![
        key(KeyCode::Char('a')),
        key(KeyCode::Char('c')),
        key(KeyCode::Char('d')),
    ])?;

    h.runner.run().await?;

    let text = h.tui.lock().await.buffer_text();
    assert!(text.contains("Your Cart (0)"));
    assert!(text.contains("Item removed from cart"));
    assert!(text.contains("Your cart is empty"));
    Ok(())
}
