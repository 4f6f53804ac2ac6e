use std::rc::Rc;

use contracts::domain::a002_donation::{Donation, PaymentStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_donation::api::AdminDonationsFetcher;
use crate::shared::components::list_toolbar::{ClearFiltersButton, FilterSelect, ListStatus, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::{ADMIN_PAGE_SIZE, ADMIN_PAGE_SIZE_OPTIONS};
use crate::shared::i18n::format::{format_currency, format_date, format_number};
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::list_controller::use_list_controller;
use crate::shared::list_query::ListQueryState;

const STATUS_FILTER: &str = "payment_status";

fn status_label_key(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "donation.status.pending",
        PaymentStatus::Completed => "donation.status.completed",
        PaymentStatus::Failed => "donation.status.failed",
        PaymentStatus::Refunded => "donation.status.refunded",
        PaymentStatus::Unknown => "donation.status.unknown",
    }
}

fn status_options() -> Vec<(&'static str, &'static str)> {
    PaymentStatus::filterable()
        .into_iter()
        .map(|s| (s.code(), status_label_key(s)))
        .collect()
}

#[component]
pub fn AdminDonationsList() -> impl IntoView {
    let i18n = use_locale();
    let initial = ListQueryState::new(ADMIN_PAGE_SIZE).with_filter(STATUS_FILTER, "all");
    let list = use_list_controller::<Donation>(Rc::new(AdminDonationsFetcher), initial);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("nav.adminDonations")}</h1>
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
                            placeholder_key="donation.searchPlaceholder"
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
                            <TableHeaderCell>{move || i18n.t("donation.donor")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("donation.campaign")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("donation.amount")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.status.label")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("donation.date")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.state.get().items
                            key=|d| d.id
                            children=move |donation| {
                                let donor = donation.donor_label().map(str::to_string);
                                let campaign = donation
                                    .campaign_title
                                    .clone()
                                    .unwrap_or_else(|| format!("#{}", donation.campaign_id));
                                let amount = donation.amount;
                                let currency = donation.currency.clone();
                                let status = donation.payment_status;
                                let created = donation.created_at.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || donor.clone().unwrap_or_else(|| i18n.t("donation.anonymous"))}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{campaign}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || format_currency(amount, &currency, i18n.get())}
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::translations::lookup;
    use contracts::enums::Locale;

    #[test]
    fn test_payment_status_labels_exist() {
        for status in PaymentStatus::filterable().into_iter().chain([PaymentStatus::Unknown]) {
            assert!(lookup(Locale::Fr, status_label_key(status)).is_some(), "{:?}", status);
        }
    }

    #[test]
    fn test_unknown_status_is_not_offered_as_filter() {
        assert!(status_options().iter().all(|(code, _)| *code != "unknown"));
        assert_eq!(status_options().len(), 4);
    }
}
