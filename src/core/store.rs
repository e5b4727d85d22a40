//! # Locale Store Module / 区域存储模块
//!
//! The locale store is where the initializer publishes the resolved locale.
//! It is injected into the initializer instead of living in a global, so each
//! caller (and each test) owns its own store.
//!
//! 区域存储是初始化器发布解析后区域设置的地方。
//! 它被注入初始化器而不是作为全局变量存在。
//!
//! Two implementations are provided:
//!
//! - [`Observable`] - a single-value observable with subscribers
//! - [`RustI18nStore`] - forwards the locale to `rust_i18n::set_locale`

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Receives the current locale. Set-only: readers use whatever API the
/// concrete store offers.
pub trait LocaleStore {
    fn set(&self, locale: Option<String>);
}

impl<S: LocaleStore + ?Sized> LocaleStore for &S {
    fn set(&self, locale: Option<String>) {
        (**self).set(locale)
    }
}

impl<S: LocaleStore + ?Sized> LocaleStore for Rc<S> {
    fn set(&self, locale: Option<String>) {
        (**self).set(locale)
    }
}

impl<S: LocaleStore + ?Sized> LocaleStore for Arc<S> {
    fn set(&self, locale: Option<String>) {
        (**self).set(locale)
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    /// Values still to be delivered, oldest first.
    pending: VecDeque<T>,
    notifying: bool,
}

/// Resets the notification state when a subscriber panics.
struct NotifyGuard<'a, T> {
    inner: &'a Mutex<Inner<T>>,
}

impl<T> Drop for NotifyGuard<'_, T> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut inner = lock(self.inner);
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// A single-value observable.
///
/// Subscribers are called once on subscription with the current value and
/// then after every `set` that changes the value. Setting an equal value does
/// not notify.
///
/// A `set` made from inside a subscriber is queued and delivered after the
/// current value has reached every subscriber, so all subscribers see the
/// changes in the order they were made and end on the stored value.
///
/// 单值可观察对象。订阅时立即以当前值调用一次，之后每次值发生变化时调用。
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

/// The store type used for the current locale.
pub type LocaleObservable = Observable<Option<String>>;

fn lock<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    // Subscribers never run under the lock.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                pending: VecDeque::new(),
                notifying: false,
            })),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Replaces the value and notifies subscribers if it changed.
    /// Returns `true` when the value changed.
    pub fn set_value(&self, value: T) -> bool {
        {
            let mut inner = lock(&self.inner);
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            inner.pending.push_back(value);
            if inner.notifying {
                // The running notification loop delivers it.
                return true;
            }
            inner.notifying = true;
        }

        let _guard = NotifyGuard { inner: &self.inner };
        loop {
            let (value, callbacks) = {
                let mut inner = lock(&self.inner);
                let Some(value) = inner.pending.pop_front() else {
                    inner.notifying = false;
                    break;
                };
                let callbacks = inner
                    .subscribers
                    .iter()
                    .map(|(_, cb)| Arc::clone(cb))
                    .collect::<Vec<_>>();
                (value, callbacks)
            };
            for callback in callbacks {
                callback(&value);
            }
        }
        true
    }

    /// Applies `f` to the current value and stores the result.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.get());
        self.set_value(next)
    }

    /// Registers `callback`, calling it right away with the current value.
    /// The callback stays registered until the returned `Subscription` drops.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let callback: Callback<T> = Arc::new(callback);
        let (id, current) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current);
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Observable<T> {
    /// Clones share the same underlying value and subscribers.
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl LocaleStore for Observable<Option<String>> {
    fn set(&self, locale: Option<String>) {
        self.set_value(locale);
    }
}

/// Handle returned by [`Observable::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    inner: Weak<Mutex<Inner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Publishes the locale to the process-wide `rust-i18n` translator.
/// `None` leaves the current `rust-i18n` locale untouched.
///
/// 将区域设置发布到 `rust-i18n` 翻译器。`None` 不会修改当前设置。
#[derive(Debug, Clone, Copy, Default)]
pub struct RustI18nStore;

impl LocaleStore for RustI18nStore {
    fn set(&self, locale: Option<String>) {
        if let Some(locale) = locale {
            rust_i18n::set_locale(&locale);
        }
    }
}
