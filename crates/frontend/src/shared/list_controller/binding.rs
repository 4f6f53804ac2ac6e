//! Glue between [`ListViewController`] and Leptos components.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use super::{ListFetcher, ListViewController, ListViewState, Spawner};
use crate::shared::i18n::{global_broadcaster, locale_store};
use crate::shared::list_query::{FilterValue, ListQueryState};

/// Spawner backed by the Leptos local executor
pub fn leptos_spawner() -> Spawner {
    Rc::new(|fut: LocalBoxFuture<'static, ()>| leptos::task::spawn_local(fut))
}

/// Controller owned by a component, with its state mirrored into a signal
pub struct ListHandle<T: 'static> {
    pub state: RwSignal<ListViewState<T>>,
    controller: StoredValue<ListViewController<T>, LocalStorage>,
}

impl<T: 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListHandle<T> {}

/// Create a controller for the current component.
///
/// The controller is mounted on the session locale broadcaster right away and
/// unmounted when the component is cleaned up.
pub fn use_list_controller<T>(fetcher: Rc<dyn ListFetcher<T>>, initial: ListQueryState) -> ListHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    let controller = ListViewController::new(fetcher, Rc::new(locale_store()), leptos_spawner(), initial);
    let state = RwSignal::new(controller.state());
    controller.subscribe_state(move |snapshot| {
        let _ = state.try_set(snapshot.clone());
    });
    controller.mount(&global_broadcaster());

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        controller.try_with_value(|c| c.unmount());
    });

    ListHandle { state, controller }
}

impl<T: Clone + Send + Sync + 'static> ListHandle<T> {
    fn run(&self, f: impl FnOnce(&ListViewController<T>)) {
        self.controller.try_with_value(f);
    }

    pub fn go_to_page(&self, page: u32) {
        self.run(|c| {
            let _ = c.on_page_change(page);
        });
    }

    pub fn set_filter(&self, name: &'static str, value: String) {
        self.run(|c| c.on_filter_change(name, FilterValue::parse(&value)));
    }

    pub fn search(&self, keyword: String) {
        self.run(|c| c.on_search(&keyword));
    }

    pub fn sort_by(&self, sort: String) {
        self.run(|c| c.on_sort_change(Some(sort.as_str()).filter(|s| !s.is_empty())));
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.run(|c| c.on_page_size_change(page_size));
    }

    pub fn clear_filters(&self) {
        self.run(|c| c.clear_filters());
    }

    pub fn retry(&self) {
        self.run(|c| c.retry());
    }

    pub fn refresh(&self) {
        self.run(|c| c.refresh());
    }

    // Derived signals for the shared widgets

    pub fn current_page(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current_page()))
    }

    pub fn total_pages(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_pages))
    }

    pub fn total_items(&self) -> Signal<u64> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_items))
    }

    pub fn page_size(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.query.page_size))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn is_empty(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_empty()))
    }

    pub fn keyword(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.keyword().to_string()))
    }

    pub fn filter_value(&self, name: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filter(name).to_control_value()))
    }

    pub fn active_filter_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.query.active_filter_count()))
    }
}
