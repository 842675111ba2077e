//! Analytics collaborator.
//!
//! Signals are fire and forget, implementations must not fail
//! the caller.
use std::cell::RefCell;

use log::info;
use serde::Serialize;

/// Consent state for a storage category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl From<bool> for ConsentStatus {
    fn from(granted: bool) -> Self {
        if granted {
            ConsentStatus::Granted
        } else {
            ConsentStatus::Denied
        }
    }
}

/// Consent upgrade sent once the visitor allows analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsentUpdate {
    pub analytics_storage: ConsentStatus,
    pub ad_storage: ConsentStatus,
    pub functionality_storage: ConsentStatus,
}

/// A named event with a category, label and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub action: String,
    pub category: String,
    pub label: String,
    pub value: u32,
}

impl Event {
    pub fn new<S: Into<String>>(action: S, category: S, label: S, value: u32) -> Self {
        Self {
            action: action.into(),
            category: category.into(),
            label: label.into(),
            value,
        }
    }

    pub fn form_submit() -> Self {
        Self::new("form_submit", "Contact", "Contact Form", 1)
    }

    pub fn download(title: &str) -> Self {
        Self::new("download", "Asset Download", title, 1)
    }

    pub fn cta_click(label: &str) -> Self {
        Self::new("cta_click", "CTA", label, 1)
    }
}

pub trait Analytics {
    fn page_view(&self, path: &str);

    fn event(&self, event: &Event);

    fn consent(&self, update: &ConsentUpdate);
}

/// Writes every signal to the log.
#[derive(Debug, Default)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn page_view(&self, path: &str) {
        info!("page_view {}", path);
    }

    fn event(&self, event: &Event) {
        info!(
            "event {} ({} / {} / {})",
            event.action, event.category, event.label, event.value
        );
    }

    fn consent(&self, update: &ConsentUpdate) {
        info!(
            "consent update analytics_storage={} ad_storage={} functionality_storage={}",
            update.analytics_storage, update.ad_storage, update.functionality_storage
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Signal {
    PageView { path: String },
    Event(Event),
    Consent(ConsentUpdate),
}

/// Keeps signals in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    signals: RefCell<Vec<Signal>>,
}

impl Recorder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.signals.borrow().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.signals
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Signal::Event(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn consents(&self) -> Vec<ConsentUpdate> {
        self.signals
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Signal::Consent(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Recorded signals as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.signals.borrow())
    }
}

impl Analytics for Recorder {
    fn page_view(&self, path: &str) {
        self.signals.borrow_mut().push(Signal::PageView {
            path: path.to_string(),
        });
    }

    fn event(&self, event: &Event) {
        self.signals.borrow_mut().push(Signal::Event(event.clone()));
    }

    fn consent(&self, update: &ConsentUpdate) {
        self.signals.borrow_mut().push(Signal::Consent(*update));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let recorder = Recorder::new();
        recorder.page_view("/resources");
        recorder.event(&Event::download("Investor Pitch Deck 2024"));
        assert_eq!(
            vec![
                Signal::PageView {
                    path: "/resources".to_string()
                },
                Signal::Event(Event::new(
                    "download",
                    "Asset Download",
                    "Investor Pitch Deck 2024",
                    1
                )),
            ],
            recorder.signals()
        );
    }

    #[test]
    fn consent_status_from_flag() {
        assert_eq!(ConsentStatus::Granted, ConsentStatus::from(true));
        assert_eq!("denied", ConsentStatus::from(false).to_string());
    }

    #[test]
    fn signals_serialize_with_kind() -> serde_json::Result<()> {
        let recorder = Recorder::new();
        recorder.event(&Event::form_submit());
        let json = recorder.to_json()?;
        assert!(json.contains(r#""kind": "event""#));
        assert!(json.contains(r#""category": "Contact""#));
        Ok(())
    }
}
