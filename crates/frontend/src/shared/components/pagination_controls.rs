use crate::shared::config::DEFAULT_WINDOW_SIZE;
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::pagination::compute_window;
use leptos::prelude::*;

/// PaginationControls component - page window with ellipses
///
/// Pages are 1-based. Nothing is rendered while there is a single page or none.
/// Out-of-range requests never reach `on_page_change`.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_items: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes; hides the size selector when absent
    #[prop(optional)]
    on_page_size_change: Option<Callback<u32>>,

    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,

    /// Show a "go to page" input next to the buttons
    #[prop(optional)]
    show_go_to: bool,
) -> impl IntoView {
    let i18n = use_locale();
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    let window = Memo::new(move |_| {
        compute_window(
            current_page.get() as usize,
            total_pages.get() as usize,
            DEFAULT_WINDOW_SIZE,
        )
    });

    let go = move |page: u32| {
        if page >= 1 && page <= total_pages.get_untracked() && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    // arrows point the reading direction
    let prev_icon = move || if i18n.is_rtl() { icon("chevron-right") } else { icon("chevron-left") };
    let next_icon = move || if i18n.is_rtl() { icon("chevron-left") } else { icon("chevron-right") };

    let go_to_value = RwSignal::new(String::new());
    let submit_go_to = move || {
        if let Ok(page) = go_to_value.get_untracked().trim().parse::<u32>() {
            go(page);
        }
        go_to_value.set(String::new());
    };

    let page_button = move |page: usize| {
        let page = page as u32;
        view! {
            <button
                class=move || if current_page.get() == page { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                aria-current=move || (current_page.get() == page).then_some("page")
                on:click=move |_| go(page)
            >
                {page.to_string()}
            </button>
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                    disabled=move || !window.with(|w| w.has_previous())
                    title=move || i18n.t("pagination.previousPage")
                >
                    {prev_icon}
                </button>

                {move || window.with(|w| w.show_leading_ellipsis).then(|| view! {
                    {page_button(1)}
                    <span class="pagination-ellipsis">"…"</span>
                })}

                {move || window.with(|w| w.pages.clone()).into_iter().map(page_button).collect_view()}

                {move || {
                    let (trailing, last) = window.with(|w| (w.show_trailing_ellipsis, w.total_pages));
                    trailing.then(|| view! {
                        <span class="pagination-ellipsis">"…"</span>
                        {page_button(last)}
                    })
                }}

                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked() + 1)
                    disabled=move || !window.with(|w| w.has_next())
                    title=move || i18n.t("pagination.nextPage")
                >
                    {next_icon}
                </button>

                <span class="pagination-info">
                    {move || format!(
                        "{} {} {} ({}: {})",
                        current_page.get(),
                        i18n.t("pagination.of"),
                        total_pages.get(),
                        i18n.t("common.total"),
                        total_items.get(),
                    )}
                </span>

                {show_go_to.then(|| view! {
                    <label class="pagination-goto">
                        {move || i18n.t("pagination.goToPage")}
                        <input
                            type="number"
                            min="1"
                            prop:max=move || total_pages.get().to_string()
                            prop:value=move || go_to_value.get()
                            on:input=move |ev| go_to_value.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    submit_go_to();
                                }
                            }
                        />
                    </label>
                })}

                {on_page_size_change.map(|on_change| view! {
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                on_change.run(size);
                            }
                        }
                        prop:value=move || page_size.get().to_string()
                    >
                        {page_size_opts.iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                })}
            </div>
        </Show>
    }
}
