//! Screen Reader Announcements
//!
//! Galleries announce through an injected `Notifier` instead of a
//! page-wide function.

use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

impl Politeness {
    fn region_id(self) -> &'static str {
        match self {
            Politeness::Polite => "live-region",
            Politeness::Assertive => "assertive-live-region",
        }
    }

    fn aria_live(self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

pub trait Notifier {
    fn announce(&self, message: &str, politeness: Politeness);
}

pub type SharedNotifier = Arc<dyn Notifier + Send + Sync>;

/// Writes into visually hidden `aria-live` regions, created on first use
#[derive(Debug, Clone)]
pub struct LiveRegionNotifier {
    clear_after_ms: u32,
}

impl Default for LiveRegionNotifier {
    fn default() -> Self {
        Self { clear_after_ms: 1000 }
    }
}

impl LiveRegionNotifier {
    fn region(politeness: Politeness) -> Option<web_sys::Element> {
        let doc = document();
        if let Some(existing) = doc.get_element_by_id(politeness.region_id()) {
            return Some(existing);
        }
        let region = doc.create_element("div").ok()?;
        region.set_id(politeness.region_id());
        region.set_class_name("sr-only");
        let _ = region.set_attribute("aria-live", politeness.aria_live());
        let _ = region.set_attribute("aria-atomic", "true");
        doc.body()?.append_child(&region).ok()?;
        Some(region)
    }
}

impl Notifier for LiveRegionNotifier {
    fn announce(&self, message: &str, politeness: Politeness) {
        let Some(region) = Self::region(politeness) else {
            log::warn!("no live region available for announcement: {}", message);
            return;
        };
        region.set_text_content(Some(message));

        let written = message.to_string();
        Timeout::new(self.clear_after_ms, move || {
            // A newer announcement may have replaced ours
            if region.text_content().as_deref() == Some(written.as_str()) {
                region.set_text_content(None);
            }
        })
        .forget();
    }
}

pub fn live_region_notifier() -> SharedNotifier {
    Arc::new(LiveRegionNotifier::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<(String, Politeness)>>,
    }

    impl Notifier for RecordingNotifier {
        fn announce(&self, message: &str, politeness: Politeness) {
            self.messages.lock().unwrap().push((message.to_string(), politeness));
        }
    }

    #[test]
    fn test_recording_notifier_through_shared_handle() {
        let recorder = Arc::new(RecordingNotifier::default());
        let shared: SharedNotifier = recorder.clone();
        shared.announce("Loaded 3 projects", Politeness::Polite);
        shared.announce("Unable to load projects", Politeness::Assertive);
        let messages = recorder.messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].1, Politeness::Assertive);
    }
}
