//! Transient notifications
//!
//! Each notice is shown for a fixed delay, then fades out and is removed.
//! Notices never queue: any number may be on screen at once, each on its own
//! timers. `NoticeBoard` tracks the lifecycle by id so a notice can also be
//! dismissed early; late timer callbacks for a gone id are no-ops.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::settings::FieldConfig;

/// Notification category, drives the background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    #[default]
    Info,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
            NoticeKind::Error => "error",
        }
    }

    /// Parse a kind name; anything unrecognized is treated as info
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "success" => NoticeKind::Success,
            "warning" => NoticeKind::Warning,
            "error" => NoticeKind::Error,
            _ => NoticeKind::Info,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#27ae60",
            NoticeKind::Warning => "#f39c12",
            NoticeKind::Info => "#3498db",
            NoticeKind::Error => "#e74c3c",
        }
    }
}

/// Overlay styling; fixed top-right, slides right while fading
pub mod style {
    pub const OVERLAY: &str = "position: fixed; top: 100px; right: 20px; \
        padding: 15px 20px; border-radius: 8px; color: white; font-weight: 500; \
        z-index: 10000; transition: all 0.3s ease; max-width: 300px;";
    pub const LEAVING_OPACITY: &str = "0";
    pub const LEAVING_TRANSFORM: &str = "translateX(100px)";

    /// Full inline style for a notice of the given kind
    pub fn overlay_css(kind: super::NoticeKind) -> String {
        format!("{} background-color: {};", OVERLAY, kind.color())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(pub u64);

impl NoticeId {
    /// Text form stored on the overlay element
    pub fn to_attr(self) -> String {
        self.0.to_string()
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(NoticeId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Fully visible
    Shown,
    /// Fading and sliding out
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
    pub posted_at: f64,
    pub phase: NoticePhase,
}

/// Lifecycle change reported by `NoticeBoard::advance_to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeEvent {
    Leaving(NoticeId),
    Removed(NoticeId),
}

/// Anything that can show a notification
pub trait Notify {
    fn notify(&mut self, message: &str, kind: NoticeKind) -> NoticeId;
}

/// Live notices keyed by id
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    notices: BTreeMap<NoticeId, Notice>,
    next_id: u64,
    now: f64,
    display_ms: f64,
    fade_ms: f64,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(&FieldConfig::default())
    }
}

impl NoticeBoard {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            notices: BTreeMap::new(),
            next_id: 0,
            now: 0.0,
            display_ms: config.notice_display_ms,
            fade_ms: config.notice_fade_ms,
        }
    }

    pub fn display_ms(&self) -> f64 {
        self.display_ms
    }

    pub fn fade_ms(&self) -> f64 {
        self.fade_ms
    }

    /// Add a notice at `now` and return its id
    pub fn post(&mut self, message: &str, kind: NoticeKind, now: f64) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.now = self.now.max(now);
        self.notices.insert(
            id,
            Notice {
                id,
                message: message.to_string(),
                kind,
                posted_at: now,
                phase: NoticePhase::Shown,
            },
        );
        id
    }

    /// Move a shown notice into its fade. Returns false if the notice is gone
    /// or already leaving.
    pub fn begin_leave(&mut self, id: NoticeId) -> bool {
        match self.notices.get_mut(&id) {
            Some(notice) if notice.phase == NoticePhase::Shown => {
                notice.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop a notice. Returns false if it was already gone.
    pub fn remove(&mut self, id: NoticeId) -> bool {
        self.notices.remove(&id).is_some()
    }

    /// Remove a notice ahead of its timers
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let removed = self.remove(id);
        if removed {
            log::debug!("Notice {} dismissed early", id.0);
        }
        removed
    }

    /// Advance the clock and apply every due transition, oldest first
    pub fn advance_to(&mut self, now: f64) -> Vec<NoticeEvent> {
        self.now = self.now.max(now);
        let mut events = Vec::new();
        let mut gone = Vec::new();
        for notice in self.notices.values_mut() {
            let age = self.now - notice.posted_at;
            if age >= self.display_ms + self.fade_ms {
                if notice.phase == NoticePhase::Shown {
                    events.push(NoticeEvent::Leaving(notice.id));
                }
                gone.push(notice.id);
            } else if age >= self.display_ms && notice.phase == NoticePhase::Shown {
                notice.phase = NoticePhase::Leaving;
                events.push(NoticeEvent::Leaving(notice.id));
            }
        }
        for id in gone {
            self.notices.remove(&id);
            events.push(NoticeEvent::Removed(id));
        }
        events
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices.get(&id)
    }

    pub fn contains(&self, id: NoticeId) -> bool {
        self.notices.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Most recent notice, if any is still live
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.values().next_back()
    }
}

impl Notify for NoticeBoard {
    fn notify(&mut self, message: &str, kind: NoticeKind) -> NoticeId {
        let now = self.now;
        log::info!("[{}] {}", kind.as_str(), message);
        self.post(message, kind, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors_and_fallback() {
        assert_eq!(NoticeKind::from_name("success").color(), "#27ae60");
        assert_eq!(NoticeKind::from_name("warning").color(), "#f39c12");
        assert_eq!(NoticeKind::from_name("error").color(), "#e74c3c");
        assert_eq!(NoticeKind::from_name("info").color(), "#3498db");
        assert_eq!(NoticeKind::from_name("shout"), NoticeKind::Info);
        assert_eq!(NoticeKind::from_name("shout").color(), NoticeKind::Info.color());
    }

    #[test]
    fn test_overlay_css_carries_kind_color() {
        let css = style::overlay_css(NoticeKind::Warning);
        assert!(css.starts_with("position: fixed; top: 100px; right: 20px;"));
        assert!(css.ends_with("background-color: #f39c12;"));
    }

    #[test]
    fn test_lifecycle() {
        let mut board = NoticeBoard::default();
        let id = board.post("hello", NoticeKind::Success, 1000.0);
        assert!(board.contains(id));
        assert_eq!(board.get(id).map(|n| n.phase), Some(NoticePhase::Shown));

        assert!(board.advance_to(3999.0).is_empty());
        assert_eq!(board.advance_to(4000.0), vec![NoticeEvent::Leaving(id)]);
        assert_eq!(board.get(id).map(|n| n.phase), Some(NoticePhase::Leaving));

        assert!(board.advance_to(4299.0).is_empty());
        assert!(board.contains(id));
        assert_eq!(board.advance_to(4300.0), vec![NoticeEvent::Removed(id)]);
        assert!(!board.contains(id));
    }

    #[test]
    fn test_gone_after_full_lifetime_in_one_step() {
        let mut board = NoticeBoard::default();
        let id = board.notify("x", NoticeKind::Info);
        assert_eq!(board.len(), 1);
        let events = board.advance_to(3300.0);
        assert_eq!(events, vec![NoticeEvent::Leaving(id), NoticeEvent::Removed(id)]);
        assert!(board.is_empty());
    }

    #[test]
    fn test_notices_stack_with_independent_timers() {
        let mut board = NoticeBoard::default();
        let a = board.post("a", NoticeKind::Info, 0.0);
        let b = board.post("b", NoticeKind::Warning, 2000.0);
        assert_eq!(board.len(), 2);
        board.advance_to(3300.0);
        assert!(!board.contains(a));
        assert!(board.contains(b));
        assert_eq!(board.latest().map(|n| n.id), Some(b));
        board.advance_to(5300.0);
        assert!(board.is_empty());
    }

    #[test]
    fn test_dismiss_makes_timers_noops() {
        let mut board = NoticeBoard::default();
        let id = board.post("bye", NoticeKind::Error, 0.0);
        assert!(board.dismiss(id));
        assert!(!board.begin_leave(id));
        assert!(!board.remove(id));
        assert!(board.advance_to(10_000.0).is_empty());
    }

    #[test]
    fn test_timer_driven_transitions() {
        let mut board = NoticeBoard::default();
        let id = board.post("t", NoticeKind::Info, 0.0);
        assert!(board.begin_leave(id));
        assert!(!board.begin_leave(id));
        assert!(board.remove(id));
        assert!(!board.remove(id));
    }

    #[test]
    fn test_ids_are_unique() {
        let mut board = NoticeBoard::default();
        let a = board.post("a", NoticeKind::Info, 0.0);
        let b = board.post("a", NoticeKind::Info, 0.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_increase_and_latest_is_newest() {
        let mut board = NoticeBoard::default();
        let mut last = None;
        for i in 0..1000 {
            let id = board.post(&format!("n{}", i), NoticeKind::Info, 0.0);
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
        assert_eq!(board.latest().map(|n| n.message.as_str()), Some("n999"));
        assert_eq!(last, Some(NoticeId(999)));
    }

    #[test]
    fn test_id_attr_round_trip() {
        let mut board = NoticeBoard::default();
        board.post("a", NoticeKind::Info, 0.0);
        let id = board.post("b", NoticeKind::Info, 0.0);
        assert_eq!(id.to_attr(), "1");
        assert_eq!(NoticeId::from_attr(&id.to_attr()), Some(id));
        assert_eq!(NoticeId::from_attr(" 42 "), Some(NoticeId(42)));
        assert_eq!(NoticeId::from_attr("-1"), None);
        assert_eq!(NoticeId::from_attr(""), None);
    }
}
