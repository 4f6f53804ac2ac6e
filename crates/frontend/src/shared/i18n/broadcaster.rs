//! Locale change notifications.
//!
//! List screens subscribe here to refetch their current page when the display
//! language changes. The application uses one broadcaster per session
//! ([`global_broadcaster`]); tests create isolated ones with
//! [`create_locale_broadcaster`].

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;

/// Failure reported by a locale-change subscriber
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriberError {
    #[error("subscriber is no longer available")]
    Disposed,
    #[error("{0}")]
    Failed(String),
}

type Callback = Rc<dyn Fn() -> Result<(), SubscriberError>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

/// Publish/subscribe register for locale switches.
///
/// Cloning yields another handle to the same subscriber set.
#[derive(Clone, Default)]
pub struct LocaleBroadcaster {
    registry: Rc<RefCell<Registry>>,
    notifying: Rc<Cell<bool>>,
}

impl fmt::Debug for LocaleBroadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleBroadcaster")
            .field("subscribers", &self.subscriber_count())
            .field("notifying", &self.notifying.get())
            .finish()
    }
}

/// Outcome of one [`LocaleBroadcaster::notify`] cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotifyReport {
    pub invoked: usize,
    pub failed: usize,
}

struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl LocaleBroadcaster {
    /// Register a callback. It stays registered until the returned
    /// subscription is dropped or [`LocaleSubscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, callback: F) -> LocaleSubscription
    where
        F: Fn() -> Result<(), SubscriberError> + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.subscribers.push((id, Rc::new(callback)));
        LocaleSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Invoke every subscriber once. Call after the new locale is active.
    ///
    /// Subscribers are snapshotted first: registrations made during the cycle
    /// apply from the next notification, and unsubscribing from inside a
    /// callback is safe. A failing subscriber is logged and skipped.
    pub fn notify(&self) -> NotifyReport {
        if self.notifying.get() {
            log::warn!("locale notify re-entered while a cycle is running; ignored");
            return NotifyReport::default();
        }
        self.notifying.set(true);
        let _guard = NotifyingGuard(&self.notifying);

        let snapshot: Vec<(u64, Callback)> = self.registry.borrow().subscribers.clone();

        let mut report = NotifyReport::default();
        for (id, callback) in snapshot {
            report.invoked += 1;
            if let Err(e) = callback() {
                report.failed += 1;
                log::error!("locale subscriber #{} failed: {}", id, e);
            }
        }
        report
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    /// Drop every subscriber (session teardown)
    pub fn clear(&self) {
        self.registry.borrow_mut().subscribers.clear();
    }
}

/// Registration handle returned by [`LocaleBroadcaster::subscribe`]
pub struct LocaleSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for LocaleSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleSubscription").field("id", &self.id).finish()
    }
}

impl LocaleSubscription {
    pub fn unsubscribe(self) {
        // removal happens in Drop
    }

    /// Keep the callback registered for the lifetime of the broadcaster
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for LocaleSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.try_borrow_mut() {
                registry.subscribers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

thread_local! {
    static GLOBAL: LocaleBroadcaster = LocaleBroadcaster::default();
}

/// Session-wide broadcaster used by the application
pub fn global_broadcaster() -> LocaleBroadcaster {
    GLOBAL.with(Clone::clone)
}

/// Isolated broadcaster, independent from the session one
pub fn create_locale_broadcaster() -> LocaleBroadcaster {
    LocaleBroadcaster::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }

    fn counting(c: &Rc<Cell<usize>>) -> impl Fn() -> Result<(), SubscriberError> + 'static {
        let c = Rc::clone(c);
        move || {
            c.set(c.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_all_subscribers_are_notified() {
        let b = create_locale_broadcaster();
        let (a, c) = (counter(), counter());
        let _sa = b.subscribe(counting(&a));
        let _sc = b.subscribe(counting(&c));

        let report = b.notify();
        assert_eq!(report, NotifyReport { invoked: 2, failed: 0 });
        assert_eq!((a.get(), c.get()), (1, 1));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let b = create_locale_broadcaster();
        let a = counter();
        let sub = b.subscribe(counting(&a));
        b.notify();
        sub.unsubscribe();
        b.notify();
        assert_eq!(a.get(), 1);
        assert_eq!(b.subscriber_count(), 0);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let b = create_locale_broadcaster();
        let a = counter();
        {
            let _sub = b.subscribe(counting(&a));
            assert_eq!(b.subscriber_count(), 1);
        }
        b.notify();
        assert_eq!(a.get(), 0);
    }

    #[test]
    fn test_failing_subscriber_does_not_block_others() {
        let b = create_locale_broadcaster();
        let a = counter();
        let _bad = b.subscribe(|| Err(SubscriberError::Failed("boom".into())));
        let _good = b.subscribe(counting(&a));

        let report = b.notify();
        assert_eq!(report, NotifyReport { invoked: 2, failed: 1 });
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn test_subscriber_can_unsubscribe_itself_during_notify() {
        let b = create_locale_broadcaster();
        let slot: Rc<RefCell<Option<LocaleSubscription>>> = Rc::new(RefCell::new(None));
        let calls = counter();
        let other = counter();

        let sub = {
            let slot = Rc::clone(&slot);
            let calls = Rc::clone(&calls);
            b.subscribe(move || {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
                Ok(())
            })
        };
        *slot.borrow_mut() = Some(sub);
        let _other = b.subscribe(counting(&other));

        b.notify();
        b.notify();
        assert_eq!(calls.get(), 1);
        assert_eq!(other.get(), 2);
        assert_eq!(b.subscriber_count(), 1);
    }

    #[test]
    fn test_subscription_added_during_notify_applies_next_cycle() {
        let b = create_locale_broadcaster();
        let late = counter();
        let held: Rc<RefCell<Vec<LocaleSubscription>>> = Rc::new(RefCell::new(Vec::new()));

        let _adder = {
            let b2 = b.clone();
            let late = Rc::clone(&late);
            let held = Rc::clone(&held);
            b.subscribe(move || {
                if held.borrow().is_empty() {
                    let sub = b2.subscribe(counting(&late));
                    held.borrow_mut().push(sub);
                }
                Ok(())
            })
        };

        b.notify();
        assert_eq!(late.get(), 0);
        b.notify();
        assert_eq!(late.get(), 1);
    }

    #[test]
    fn test_reentrant_notify_is_ignored() {
        let b = create_locale_broadcaster();
        let inner_reports: Rc<RefCell<Vec<NotifyReport>>> = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let b2 = b.clone();
            let reports = Rc::clone(&inner_reports);
            b.subscribe(move || {
                reports.borrow_mut().push(b2.notify());
                Ok(())
            })
        };
        assert_eq!(b.notify().invoked, 1);
        assert_eq!(*inner_reports.borrow(), vec![NotifyReport::default()]);
        // flag is reset after the cycle
        assert_eq!(b.notify().invoked, 1);
    }

    #[test]
    fn test_isolated_broadcasters_do_not_share_subscribers() {
        let a = create_locale_broadcaster();
        let b = create_locale_broadcaster();
        let n = counter();
        let _s = a.subscribe(counting(&n));
        b.notify();
        assert_eq!(n.get(), 0);
        assert_eq!(global_broadcaster().subscriber_count(), 0);
    }

    #[test]
    fn test_clear_removes_everything() {
        let b = create_locale_broadcaster();
        let n = counter();
        let sub = b.subscribe(counting(&n));
        b.clear();
        b.notify();
        assert_eq!(n.get(), 0);
        drop(sub);
    }
}
