//! Display language management.
//!
//! The active locale lives in a session-wide [`LocaleStore`]. Switching it
//! persists the choice, updates the document direction and then notifies the
//! [`LocaleBroadcaster`] so that list screens refetch locale-dependent data.

pub mod broadcaster;
pub mod format;
pub mod translations;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use contracts::enums::Locale;
use leptos::prelude::*;
use web_sys::window;

pub use broadcaster::{
    create_locale_broadcaster, global_broadcaster, LocaleBroadcaster, LocaleSubscription,
    SubscriberError,
};

/// Local storage key, shared with the previous JS client so the choice survives
const LOCALE_STORAGE_KEY: &str = "i18nextLng";

/// Read access to the active locale
pub trait LocaleSource {
    fn current_locale(&self) -> Locale;
}

type ApplyHook = Rc<dyn Fn(Locale)>;

/// Holder of the active locale
#[derive(Clone)]
pub struct LocaleStore {
    current: Rc<Cell<Locale>>,
    broadcaster: LocaleBroadcaster,
    on_apply: Option<ApplyHook>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.current.get())
            .field("broadcaster", &self.broadcaster)
            .finish()
    }
}

impl LocaleStore {
    pub fn new(initial: Locale, broadcaster: LocaleBroadcaster) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
            broadcaster,
            on_apply: None,
        }
    }

    /// Side effect run after the locale changes and before subscribers are notified
    pub fn with_apply_hook(mut self, hook: impl Fn(Locale) + 'static) -> Self {
        self.on_apply = Some(Rc::new(hook));
        self
    }

    pub fn broadcaster(&self) -> &LocaleBroadcaster {
        &self.broadcaster
    }

    /// Switch the active locale. Returns `false` when it was already active.
    ///
    /// Subscribers are notified exactly once, after the new locale is readable
    /// through [`LocaleSource::current_locale`].
    pub fn set_locale(&self, locale: Locale) -> bool {
        if self.current.get() == locale {
            return false;
        }
        log::info!("locale: {} -> {}", self.current.get(), locale);
        self.current.set(locale);
        if let Some(hook) = &self.on_apply {
            hook(locale);
        }
        self.broadcaster.notify();
        true
    }
}

impl LocaleSource for LocaleStore {
    fn current_locale(&self) -> Locale {
        self.current.get()
    }
}

thread_local! {
    static STORE: LocaleStore = LocaleStore::new(detect_locale(), global_broadcaster())
        .with_apply_hook(apply_locale);
}

/// Session-wide locale store
pub fn locale_store() -> LocaleStore {
    STORE.with(Clone::clone)
}

/// First supported candidate wins; falls back to [`Locale::default`]
pub fn resolve_locale<I, S>(candidates: I) -> Locale
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|c| Locale::from_code(c.as_ref()))
        .unwrap_or_default()
}

/// Detection order: saved choice, browser language, `<html lang>`
fn detect_locale() -> Locale {
    let w = window();
    let saved = w
        .as_ref()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LOCALE_STORAGE_KEY).ok().flatten());
    let navigator = w.as_ref().and_then(|w| w.navigator().language());
    let html_lang = w
        .as_ref()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.get_attribute("lang"));
    resolve_locale([saved, navigator, html_lang])
}

fn apply_locale(locale: Locale) {
    save_locale_to_storage(locale);
    apply_document_direction(locale);
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
    }
}

/// Set `dir`/`lang` on `<html>` and the `rtl`/`ltr` body class
fn apply_document_direction(locale: Locale) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };
    let dir = if locale.is_rtl() { "rtl" } else { "ltr" };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", dir);
        let _ = root.set_attribute("lang", locale.code());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force("rtl", locale.is_rtl());
        let _ = classes.toggle_with_force("ltr", !locale.is_rtl());
    }
}

/// Reactive view of the active locale for components
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn get(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        locale_store().set_locale(locale);
    }

    /// Translated text for `key`, tracked by the current reactive scope
    pub fn t(&self, key: &str) -> String {
        translations::translate(self.locale.get(), key)
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.get().is_rtl()
    }
}

/// Provides [`LocaleContext`] to children and applies the detected locale
#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let store = locale_store();
    let initial = store.current_locale();
    apply_document_direction(initial);

    let locale = RwSignal::new(initial);
    store
        .broadcaster()
        .subscribe(move || {
            let _ = locale.try_set(locale_store().current_locale());
            Ok(())
        })
        .detach();

    provide_context(LocaleContext { locale });

    children()
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Language dropdown
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ctx = use_locale();

    view! {
        <select
            class="language-select"
            prop:value=move || ctx.get().code().to_string()
            on:change=move |ev| {
                if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
                    ctx.set_locale(locale);
                }
            }
        >
            {Locale::all().into_iter().map(|locale| {
                view! {
                    <option value=locale.code() selected=move || ctx.get() == locale>
                        {locale.display_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_resolve_locale_order() {
        assert_eq!(resolve_locale([None, Some("fr-FR"), Some("en")]), Locale::Fr);
        assert_eq!(resolve_locale([Some("de"), Some("ru"), None]), Locale::Ru);
        assert_eq!(resolve_locale::<_, &str>([None, None, None]), Locale::Ar);
        assert_eq!(resolve_locale([Some("xx")]), Locale::Ar);
    }

    #[test]
    fn test_set_locale_notifies_after_switch() {
        let broadcaster = create_locale_broadcaster();
        let store = LocaleStore::new(Locale::Ar, broadcaster.clone());
        let seen: Rc<RefCell<Vec<Locale>>> = Rc::new(RefCell::new(Vec::new()));

        let _sub = {
            let store = store.clone();
            let seen = Rc::clone(&seen);
            broadcaster.subscribe(move || {
                seen.borrow_mut().push(store.current_locale());
                Ok(())
            })
        };

        assert!(store.set_locale(Locale::En));
        assert_eq!(*seen.borrow(), vec![Locale::En]);
    }

    #[test]
    fn test_set_same_locale_is_noop() {
        let broadcaster = create_locale_broadcaster();
        let store = LocaleStore::new(Locale::En, broadcaster.clone());
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = Rc::clone(&calls);
            broadcaster.subscribe(move || {
                calls.set(calls.get() + 1);
                Ok(())
            })
        };
        assert!(!store.set_locale(Locale::En));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_apply_hook_runs_before_notify() {
        let broadcaster = create_locale_broadcaster();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let store = {
            let order = Rc::clone(&order);
            LocaleStore::new(Locale::Ar, broadcaster.clone())
                .with_apply_hook(move |_| order.borrow_mut().push("apply"))
        };
        let _sub = {
            let order = Rc::clone(&order);
            broadcaster.subscribe(move || {
                order.borrow_mut().push("notify");
                Ok(())
            })
        };
        store.set_locale(Locale::Es);
        assert_eq!(*order.borrow(), vec!["apply", "notify"]);
    }
}
