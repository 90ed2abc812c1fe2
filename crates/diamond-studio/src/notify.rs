// File: crates/diamond-studio/src/notify.rs
// Summary: File-operation notifications: observer list plus a transient banner.
// Notes:
// - The banner "timer" is a timestamp compared on read; nothing runs in the background.
// - Subscribers run while the center is borrowed and must not post back into it.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How long a posted banner stays visible.
pub const BANNER_DURATION: Duration = Duration::from_secs(3);

/// Outcome of a file operation, carrying the file name shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Saved(String),
    SaveFailed(String),
    Loaded(String),
    LoadFailed(String),
    Exported(String),
    ExportFailed(String),
}

impl Notification {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::SaveFailed(_) | Self::LoadFailed(_) | Self::ExportFailed(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved(name) => write!(f, "Saved {name}"),
            Self::SaveFailed(name) => write!(f, "Failed to save {name}"),
            Self::Loaded(name) => write!(f, "Loaded {name}"),
            Self::LoadFailed(name) => write!(f, "Failed to load {name}"),
            Self::Exported(name) => write!(f, "Exported {name}"),
            Self::ExportFailed(name) => write!(f, "Failed to export {name}"),
        }
    }
}

/// Name used in messages: the final path component, or the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

type Subscriber = Box<dyn FnMut(&Notification)>;

#[derive(Default)]
pub struct NotificationCenter {
    subscribers: Vec<Subscriber>,
    banner: Option<(Notification, Instant)>,
}

/// Handle shared between the session and its services.
pub type SharedNotifications = Rc<RefCell<NotificationCenter>>;

impl NotificationCenter {
    pub fn new() -> Self { Self::default() }

    pub fn shared() -> SharedNotifications { Rc::new(RefCell::new(Self::new())) }

    pub fn subscribe(&mut self, f: impl FnMut(&Notification) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    pub fn post(&mut self, n: Notification) { self.post_at(n, Instant::now()); }

    /// Deliver to every subscriber and replace the current banner.
    pub fn post_at(&mut self, n: Notification, now: Instant) {
        for s in &mut self.subscribers {
            s(&n);
        }
        self.banner = Some((n, now));
    }

    /// Banner still visible at `now`, if any.
    pub fn banner_at(&self, now: Instant) -> Option<&Notification> {
        self.banner
            .as_ref()
            .filter(|(_, posted)| now.saturating_duration_since(*posted) < BANNER_DURATION)
            .map(|(n, _)| n)
    }

    pub fn banner(&self) -> Option<&Notification> { self.banner_at(Instant::now()) }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("subscribers", &self.subscribers.len())
            .field("banner", &self.banner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_file_name_only() {
        let name = display_name(Path::new("/a/b/tulips.dmnds"));
        assert_eq!(Notification::Saved(name.clone()).to_string(), "Saved tulips.dmnds");
        assert_eq!(Notification::LoadFailed(name).to_string(), "Failed to load tulips.dmnds");
    }

    #[test]
    fn subscribers_see_every_post() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut center = NotificationCenter::new();
        let sink = Rc::clone(&seen);
        center.subscribe(move |n| sink.borrow_mut().push(n.clone()));
        center.post(Notification::Saved("a".into()));
        center.post(Notification::ExportFailed("b".into()));
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[1].is_failure());
    }

    #[test]
    fn banner_expires_after_three_seconds() {
        let mut center = NotificationCenter::new();
        let t0 = Instant::now();
        center.post_at(Notification::Loaded("x".into()), t0);
        assert_eq!(center.banner_at(t0 + Duration::from_millis(2999)), Some(&Notification::Loaded("x".into())));
        assert_eq!(center.banner_at(t0 + BANNER_DURATION), None);
    }
}
