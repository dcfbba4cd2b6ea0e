//! Hand-off of the composed order to the external messaging service

use std::sync::Mutex;

use color_eyre::eyre::{eyre, Result};

/// Opens an order URL outside the application
pub trait Handoff: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens the URL with the platform's default handler (browser or messaging app)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHandoff;

impl Handoff for BrowserHandoff {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }
}

/// Records every URL instead of opening it; can be told to fail
#[derive(Debug, Default)]
pub struct RecordingHandoff {
    opened: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl RecordingHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl Handoff for RecordingHandoff {
    fn open(&self, url: &str) -> Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(eyre!("{reason}"));
        }
        self.opened
            .lock()
            .map_err(|e| eyre!("handoff log poisoned: {e}"))?
            .push(url.to_string());
        Ok(())
    }
}
