// File: crates/diamond-studio/src/lib.rs
// Summary: Session layer for Diamond Studio: actions, file manager, notifications, path cache, CLI.

pub mod cache;
pub mod cli;
pub mod files;
pub mod notify;
pub mod report;
pub mod session;

pub use cache::PathCache;
pub use cli::{run, Cli};
pub use files::FileManager;
pub use notify::{Notification, NotificationCenter, SharedNotifications};
pub use session::{Action, ColorRole, DisplayFlag, FrameLayer, ResetTarget, Session};
