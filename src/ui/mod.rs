//! Page-level UI state

pub mod notice;

pub use notice::{Notice, NoticeBoard, NoticeEvent, NoticeId, NoticeKind, NoticePhase, Notify};
