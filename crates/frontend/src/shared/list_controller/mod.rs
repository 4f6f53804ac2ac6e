//! Generic controller behind every paginated list screen.
//!
//! One controller per screen owns the query state (page, keyword, filters,
//! sort) and the last good result. Fetches run on the injected [`Spawner`];
//! responses are applied in issue order through a request sequence number, so
//! a slow earlier request never overwrites a newer one. A mounted controller
//! refetches its current query whenever the locale broadcaster fires.

pub mod binding;
pub mod fetcher;
pub mod state;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use contracts::shared::pagination::ListResult;
use futures::future::LocalBoxFuture;

use crate::shared::i18n::{LocaleBroadcaster, LocaleSource, LocaleSubscription, SubscriberError};
use crate::shared::list_query::{compose, FilterValue, ListQueryState};
use crate::shared::pagination::PageWindow;

pub use binding::{leptos_spawner, use_list_controller, ListHandle};
pub use fetcher::{dispatch, FetchError, ListFetcher, ValidationError};
pub use state::ListViewState;

/// Runs a fetch future to completion on the UI event loop
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

type Observer<T> = Rc<dyn Fn(&ListViewState<T>)>;

struct Inner<T> {
    state: RefCell<ListViewState<T>>,
    defaults: ListQueryState,
    fetcher: Rc<dyn ListFetcher<T>>,
    locale: Rc<dyn LocaleSource>,
    spawner: Spawner,
    latest_request: Cell<u64>,
    observers: RefCell<Vec<Observer<T>>>,
    subscription: RefCell<Option<LocaleSubscription>>,
}

/// Handle to a list screen controller. Clones share the same state.
pub struct ListViewController<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for ListViewController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for ListViewController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("ListViewController")
            .field("query", &state.query)
            .field("items", &state.items.len())
            .field("loading", &state.loading)
            .field("latest_request", &self.inner.latest_request.get())
            .field("mounted", &self.inner.subscription.borrow().is_some())
            .finish()
    }
}

impl<T: Clone + 'static> ListViewController<T> {
    /// `initial` is also what [`clear_filters`](Self::clear_filters) returns to
    pub fn new(
        fetcher: Rc<dyn ListFetcher<T>>,
        locale: Rc<dyn LocaleSource>,
        spawner: Spawner,
        initial: ListQueryState,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ListViewState::new(initial.clone())),
                defaults: initial,
                fetcher,
                locale,
                spawner,
                latest_request: Cell::new(0),
                observers: RefCell::new(Vec::new()),
                subscription: RefCell::new(None),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Subscribe to locale changes and load the current page
    pub fn mount(&self, broadcaster: &LocaleBroadcaster) {
        let weak = Rc::downgrade(&self.inner);
        let subscription = broadcaster.subscribe(move || {
            let inner = weak.upgrade().ok_or(SubscriberError::Disposed)?;
            let controller = ListViewController { inner };
            log::debug!("locale changed, refetching {:?}", controller);
            controller.refresh();
            Ok(())
        });
        // replacing an earlier subscription drops (and unregisters) it
        *self.inner.subscription.borrow_mut() = Some(subscription);
        self.refresh();
    }

    /// Stop reacting to locale changes and detach observers.
    /// In-flight requests complete but nobody is told about them.
    pub fn unmount(&self) {
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
        self.inner.observers.borrow_mut().clear();
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.subscription.borrow().is_some()
    }

    /// Called with a fresh snapshot after every state change
    pub fn subscribe_state(&self, observer: impl Fn(&ListViewState<T>) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn state(&self) -> ListViewState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ListViewState<T>) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    pub fn page_window(&self, window_size: usize) -> PageWindow {
        self.with_state(|s| s.page_window(window_size))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Fetch an explicit query shape
    pub fn fetch(&self, page: u32, keyword: &str, filters: &[(&str, FilterValue)], sort: Option<&str>) {
        {
            let mut state = self.inner.state.borrow_mut();
            let page_size = state.query.page_size;
            state.query = ListQueryState {
                page,
                page_size,
                keyword: keyword.to_string(),
                filters: filters
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.clone()))
                    .collect(),
                sort: sort.map(str::to_string),
            };
        }
        self.issue();
    }

    /// Re-issue the current query with the current locale
    pub fn refresh(&self) {
        self.issue();
    }

    /// Retry after an error; same query as the last request
    pub fn retry(&self) {
        self.issue();
    }

    /// Go to `page`. Out-of-range pages leave the state untouched.
    pub fn on_page_change(&self, page: u32) -> Result<(), ValidationError> {
        let total_pages = self.with_state(|s| s.total_pages);
        if page < 1 || page > total_pages {
            let err = ValidationError::PageOutOfRange { page, total_pages };
            log::debug!("{}, ignored", err);
            return Err(err);
        }
        self.inner.state.borrow_mut().query.page = page;
        self.issue();
        Ok(())
    }

    pub fn on_filter_change(&self, name: &str, value: impl Into<FilterValue>) {
        let value = value.into();
        self.update_query(|q| {
            q.filters.insert(name.to_string(), value);
        });
    }

    pub fn on_search(&self, keyword: &str) {
        let keyword = keyword.to_string();
        self.update_query(|q| q.keyword = keyword);
    }

    pub fn on_sort_change(&self, sort: Option<&str>) {
        let sort = sort.map(str::to_string);
        self.update_query(|q| q.sort = sort);
    }

    pub fn on_page_size_change(&self, page_size: u32) {
        self.update_query(|q| q.page_size = page_size.max(1));
    }

    /// Back to the initial keyword, filters and sort; page size is kept
    pub fn clear_filters(&self) {
        let defaults = self.inner.defaults.clone();
        self.update_query(|q| {
            q.keyword = defaults.keyword;
            q.filters = defaults.filters;
            q.sort = defaults.sort;
        });
    }

    /// Change the result set: back to page 1, then fetch
    fn update_query(&self, f: impl FnOnce(&mut ListQueryState)) {
        {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state.query);
            state.query.page = 1;
        }
        self.issue();
    }

    fn issue(&self) {
        let seq = self.inner.latest_request.get() + 1;
        self.inner.latest_request.set(seq);

        let locale = self.inner.locale.current_locale();
        let query = {
            let mut state = self.inner.state.borrow_mut();
            state.loading = true;
            compose(&state.query, locale)
        };
        log::debug!(
            "list request #{}: {} page {} lang {}",
            seq,
            query.mode.as_str(),
            query.page,
            query.locale
        );
        self.emit();

        let inner = Rc::clone(&self.inner);
        let task = async move {
            let fetcher = Rc::clone(&inner.fetcher);
            let result = dispatch(fetcher.as_ref(), query).await;
            ListViewController { inner }.apply(seq, result);
        };
        (self.inner.spawner)(Box::pin(task));
    }

    fn apply(&self, seq: u64, result: Result<ListResult<T>, FetchError>) {
        let latest = self.inner.latest_request.get();
        if seq != latest {
            log::debug!("discarding response #{} (latest #{})", seq, latest);
            return;
        }
        let clamped = {
            let mut state = self.inner.state.borrow_mut();
            state.loading = false;
            match result {
                Ok(page) => {
                    state.items = page.items;
                    state.total_pages = page.total_pages;
                    state.total_items = page.total_items;
                    state.error = None;
                    state.is_loaded = true;
                    // the result set shrank under us (e.g. after a locale switch)
                    if state.total_pages > 0 && state.query.page > state.total_pages {
                        state.query.page = state.total_pages;
                        Some(state.total_pages)
                    } else {
                        None
                    }
                }
                Err(e) => {
                    log::warn!("list request #{} failed: {}", seq, e);
                    state.error = Some(e.to_string());
                    None
                }
            }
        };
        match clamped {
            Some(last_page) => {
                log::debug!("response #{} has {} pages, moving to last page", seq, last_page);
                self.issue();
            }
            None => self.emit(),
        }
    }

    fn emit(&self) {
        let observers: Vec<Observer<T>> = self.inner.observers.borrow().clone();
        if observers.is_empty() {
            return;
        }
        let snapshot = self.state();
        for observer in observers {
            observer(&snapshot);
        }
    }
}
