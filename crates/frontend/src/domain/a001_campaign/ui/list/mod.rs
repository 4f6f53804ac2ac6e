use std::rc::Rc;

use contracts::domain::a001_campaign::{Campaign, CampaignSort, CampaignStatus};
use leptos::prelude::*;

use crate::domain::a001_campaign::api::PublicCampaignsFetcher;
use crate::shared::components::list_toolbar::{ClearFiltersButton, FilterSelect, ListStatus, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::{CAMPAIGNS_PAGE_SIZE, CAMPAIGN_CURRENCY};
use crate::shared::i18n::format::format_currency;
use crate::shared::i18n::use_locale;
use crate::shared::list_controller::use_list_controller;
use crate::shared::list_query::ListQueryState;

pub(crate) const STATUS_FILTER: &str = "status";

pub(crate) fn status_label_key(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Draft => "campaign.status.draft",
        CampaignStatus::Pending => "campaign.status.pending",
        CampaignStatus::Active => "campaign.status.active",
        CampaignStatus::Completed => "campaign.status.completed",
        CampaignStatus::Cancelled => "campaign.status.cancelled",
    }
}

fn sort_label_key(sort: CampaignSort) -> &'static str {
    match sort {
        CampaignSort::Newest => "common.newest",
        CampaignSort::Oldest => "common.oldest",
        CampaignSort::MostRaised => "common.mostRaised",
        CampaignSort::LeastRaised => "common.leastRaised",
        CampaignSort::GoalAmount => "common.highestGoal",
    }
}

pub(crate) fn status_options() -> Vec<(&'static str, &'static str)> {
    CampaignStatus::all()
        .into_iter()
        .map(|s| (s.code(), status_label_key(s)))
        .collect()
}

/// Public campaign catalogue: search, status filter, sort and a card grid
#[component]
pub fn CampaignsPage() -> impl IntoView {
    let i18n = use_locale();
    let initial = ListQueryState::new(CAMPAIGNS_PAGE_SIZE)
        .with_filter(STATUS_FILTER, "all")
        .with_sort(CampaignSort::default().code());
    let list = use_list_controller::<Campaign>(Rc::new(PublicCampaignsFetcher), initial);

    let sort_value = Signal::derive(move || {
        list.state
            .with(|s| s.sort().unwrap_or(CampaignSort::default().code()).to_string())
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("nav.campaigns")}</h1>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <SearchInput
                        value=list.keyword()
                        on_search=Callback::new(move |kw: String| list.search(kw))
                        placeholder_key="campaign.searchPlaceholder"
                    />
                    <FilterSelect
                        value=list.filter_value(STATUS_FILTER)
                        on_change=Callback::new(move |v: String| list.set_filter(STATUS_FILTER, v))
                        all_label_key="common.allStatuses"
                        options=status_options()
                    />
                    <label class="sort-select">
                        {move || i18n.t("common.sortBy")}
                        <select
                            prop:value=move || sort_value.get()
                            on:change=move |ev| list.sort_by(event_target_value(&ev))
                        >
                            {CampaignSort::all().into_iter().map(|sort| {
                                view! {
                                    <option value=sort.code() selected=move || sort_value.get() == sort.code()>
                                        {move || i18n.t(sort_label_key(sort))}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>
                    <ClearFiltersButton
                        active_count=list.active_filter_count()
                        on_clear=Callback::new(move |_| list.clear_filters())
                    />
                </div>
            </div>

            <ListStatus
                loading=list.loading()
                error=list.error()
                is_empty=list.is_empty()
                on_retry=Callback::new(move |_| list.retry())
            />

            <div class="campaign-grid">
                <For
                    each=move || list.state.get().items
                    key=|c| c.id
                    children=move |campaign| view! { <CampaignCard campaign=campaign /> }
                />
            </div>

            <PaginationControls
                current_page=list.current_page()
                total_pages=list.total_pages()
                total_items=list.total_items()
                page_size=list.page_size()
                on_page_change=Callback::new(move |page| list.go_to_page(page))
            />
        </div>
    }
}

#[component]
fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let i18n = use_locale();
    let progress = campaign.progress_percent();
    let raised = campaign.current_amount;
    let goal = campaign.target_amount;
    let status = campaign.status;

    view! {
        <article class="campaign-card">
            {campaign.image_path.clone().map(|src| view! {
                <img class="campaign-card__image" src=src alt=campaign.title.clone() />
            })}
            <div class="campaign-card__body">
                <span class=format!("badge badge--{}", status.code())>
                    {move || i18n.t(status_label_key(status))}
                </span>
                <h3 class="campaign-card__title">{campaign.title.clone()}</h3>
                <p class="campaign-card__description">{campaign.description.clone()}</p>
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {:.0}%;", progress)></div>
                </div>
                <div class="campaign-card__amounts">
                    <span>
                        {move || i18n.t("campaign.raised")}
                        ": "
                        {move || format_currency(raised, CAMPAIGN_CURRENCY, i18n.get())}
                    </span>
                    <span>
                        {move || i18n.t("campaign.goal")}
                        ": "
                        {move || format_currency(goal, CAMPAIGN_CURRENCY, i18n.get())}
                    </span>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::translations::lookup;
    use contracts::enums::Locale;

    #[test]
    fn test_every_status_and_sort_has_a_label() {
        for status in CampaignStatus::all() {
            assert!(lookup(Locale::Ar, status_label_key(status)).is_some(), "{:?}", status);
        }
        for sort in CampaignSort::all() {
            assert!(lookup(Locale::Ru, sort_label_key(sort)).is_some(), "{:?}", sort);
        }
    }

    #[test]
    fn test_status_options_use_wire_codes() {
        let codes: Vec<&str> = status_options().into_iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["draft", "pending", "active", "completed", "cancelled"]);
    }
}
