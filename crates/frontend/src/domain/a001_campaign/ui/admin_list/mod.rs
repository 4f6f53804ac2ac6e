use std::rc::Rc;

use contracts::domain::a001_campaign::Campaign;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_campaign::api::AdminCampaignsFetcher;
use crate::domain::a001_campaign::ui::list::{status_label_key, status_options, STATUS_FILTER};
use crate::shared::components::list_toolbar::{ClearFiltersButton, FilterSelect, ListStatus, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::{ADMIN_PAGE_SIZE, ADMIN_PAGE_SIZE_OPTIONS, CAMPAIGN_CURRENCY};
use crate::shared::i18n::format::{format_currency, format_date, format_number};
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::list_controller::use_list_controller;
use crate::shared::list_query::ListQueryState;

#[component]
pub fn AdminCampaignsList() -> impl IntoView {
    let i18n = use_locale();
    let initial = ListQueryState::new(ADMIN_PAGE_SIZE).with_filter(STATUS_FILTER, "all");
    let list = use_list_controller::<Campaign>(Rc::new(AdminCampaignsFetcher), initial);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("nav.adminCampaigns")}</h1>
                    <Badge>{move || format_number(list.total_items().get() as f64, i18n.get())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.refresh()
                        disabled=list.loading()
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
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
                        <ClearFiltersButton
                            active_count=list.active_filter_count()
                            on_clear=Callback::new(move |_| list.clear_filters())
                        />
                    </div>
                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=list.current_page()
                            total_pages=list.total_pages()
                            total_items=list.total_items()
                            page_size=list.page_size()
                            on_page_change=Callback::new(move |page| list.go_to_page(page))
                            on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                            page_size_options=ADMIN_PAGE_SIZE_OPTIONS.to_vec()
                            show_go_to=true
                        />
                    </div>
                </div>
            </div>

            <ListStatus
                loading=list.loading()
                error=list.error()
                is_empty=list.is_empty()
                on_retry=Callback::new(move |_| list.retry())
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.title")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.status.label")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.raised")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.goal")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.createdAt")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.state.get().items
                            key=|c| c.id
                            children=move |campaign| {
                                let status = campaign.status;
                                let raised = campaign.current_amount;
                                let goal = campaign.target_amount;
                                let created = campaign.created_at.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{campaign.id.to_string()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{campaign.title.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=format!("badge badge--{}", status.code())>
                                                    {move || i18n.t(status_label_key(status))}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || format_currency(raised, CAMPAIGN_CURRENCY, i18n.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || format_currency(goal, CAMPAIGN_CURRENCY, i18n.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || format_date(&created, i18n.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
