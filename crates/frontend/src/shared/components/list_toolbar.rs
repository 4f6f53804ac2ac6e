//! Search, filter and status widgets shared by the list screens.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::list_query::ALL_SENTINEL;

/// Text input that reports its value after typing pauses
#[component]
pub fn SearchInput(
    /// Value applied by the list (shown after external resets)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_search: Callback<String>,
    /// Translation key of the placeholder
    #[prop(optional, into)]
    placeholder_key: String,
) -> impl IntoView {
    let i18n = use_locale();
    let placeholder_key = if placeholder_key.is_empty() {
        "common.search".to_string()
    } else {
        placeholder_key
    };

    let input_value = RwSignal::new(value.get_untracked());
    // dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            input_value.set(applied);
        }
    });

    let schedule = move |text: String| {
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_search.run(text));
        pending.set_value(Some(timeout));
    };

    let submit_now = move || {
        pending.set_value(None);
        on_search.run(input_value.get_untracked());
    };

    on_cleanup(move || pending.set_value(None));

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="search"
                placeholder=move || i18n.t(&placeholder_key)
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    input_value.set(text.clone());
                    schedule(text);
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit_now();
                    }
                }
            />
        </div>
    }
}

/// Dropdown for one filter. The first option is always "all".
#[component]
pub fn FilterSelect(
    /// Control value; [`ALL_SENTINEL`] for no filter
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Translation key of the "all" option
    #[prop(into)]
    all_label_key: String,
    /// `(value, translation key)` pairs
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value=ALL_SENTINEL selected=move || value.get() == ALL_SENTINEL>
                {move || i18n.t(&all_label_key)}
            </option>
            {options.into_iter().map(|(option, key)| {
                view! {
                    <option value=option selected=move || value.get() == option>
                        {move || i18n.t(key)}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// "Clear filters" button with the number of active filters
#[component]
pub fn ClearFiltersButton(
    #[prop(into)]
    active_count: Signal<usize>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let i18n = use_locale();

    view! {
        <Show when=move || { active_count.get() > 0 }>
            <button class="button button--secondary" on:click=move |_| on_clear.run(())>
                {icon("x")}
                {move || i18n.t("common.clearFilters")}
                <span class="badge badge--primary">{move || active_count.get()}</span>
            </button>
        </Show>
    }
}

/// Loading, error and empty states around a list
#[component]
pub fn ListStatus(
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    is_empty: Signal<bool>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let i18n = use_locale();

    view! {
        {move || error.get().map(|e| view! {
            <div class="alert alert--error">
                <strong>{i18n.t("messages.errorLoadingData")}</strong>
                " "
                <span>{e}</span>
                <button class="button button--secondary" on:click=move |_| on_retry.run(())>
                    {icon("refresh")}
                    {i18n.t("common.retry")}
                </button>
            </div>
        })}
        <Show when=move || loading.get()>
            <div class="list-status list-status--loading">{move || i18n.t("common.loading")}</div>
        </Show>
        <Show when=move || { is_empty.get() && !loading.get() && error.get().is_none() }>
            <div class="list-status list-status--empty">{move || i18n.t("common.noResults")}</div>
        </Show>
    }
}
