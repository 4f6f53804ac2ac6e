use std::rc::Rc;

use contracts::system::users::{User, UserRole, UserStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::list_toolbar::{ClearFiltersButton, FilterSelect, ListStatus, SearchInput};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::{ADMIN_PAGE_SIZE, ADMIN_PAGE_SIZE_OPTIONS};
use crate::shared::i18n::format::{format_date, format_number};
use crate::shared::i18n::use_locale;
use crate::shared::icons::icon;
use crate::shared::list_controller::use_list_controller;
use crate::shared::list_query::ListQueryState;
use crate::system::users::api::{self, UsersFetcher};

const ROLE_FILTER: &str = "role";
const STATUS_FILTER: &str = "status";

fn role_label_key(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "user.role.admin",
        UserRole::User => "user.role.user",
    }
}

fn status_label_key(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "user.status.active",
        UserStatus::Inactive => "user.status.inactive",
    }
}

/// Status the row action switches to
fn toggled(status: UserStatus) -> UserStatus {
    match status {
        UserStatus::Active => UserStatus::Inactive,
        UserStatus::Inactive => UserStatus::Active,
    }
}

#[component]
pub fn AdminUsersList() -> impl IntoView {
    let i18n = use_locale();
    let initial = ListQueryState::new(ADMIN_PAGE_SIZE)
        .with_filter(ROLE_FILTER, "all")
        .with_filter(STATUS_FILTER, "all");
    let list = use_list_controller::<User>(Rc::new(UsersFetcher), initial);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let change_status = move |id: i64, status: UserStatus| {
        set_action_error.set(None);
        spawn_local(async move {
            match api::update_user_status(id, status).await {
                Ok(()) => list.refresh(),
                Err(e) => {
                    log::error!("Failed to update user {}: {}", id, e);
                    set_action_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let role_options: Vec<(&'static str, &'static str)> =
        UserRole::all().into_iter().map(|r| (r.code(), role_label_key(r))).collect();
    let status_options: Vec<(&'static str, &'static str)> =
        UserStatus::all().into_iter().map(|s| (s.code(), status_label_key(s))).collect();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || i18n.t("nav.adminUsers")}</h1>
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
                            placeholder_key="user.searchPlaceholder"
                        />
                        <FilterSelect
                            value=list.filter_value(ROLE_FILTER)
                            on_change=Callback::new(move |v: String| list.set_filter(ROLE_FILTER, v))
                            all_label_key="common.allRoles"
                            options=role_options
                        />
                        <FilterSelect
                            value=list.filter_value(STATUS_FILTER)
                            on_change=Callback::new(move |v: String| list.set_filter(STATUS_FILTER, v))
                            all_label_key="common.allStatuses"
                            options=status_options
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

            {move || action_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

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
                            <TableHeaderCell>{move || i18n.t("user.username")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("user.fullName")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("user.email")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("user.role.label")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.status.label")}</TableHeaderCell>
                            <TableHeaderCell>{move || i18n.t("campaign.createdAt")}</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || list.state.get().items
                            key=|u| (u.id, u.is_active)
                            children=move |user| {
                                let id = user.id;
                                let role = user.role();
                                let status = user.status();
                                let created = user.created_at.clone();
                                let action_key = match status {
                                    UserStatus::Active => "admin.suspend",
                                    UserStatus::Inactive => "admin.activate",
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{user.username.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {user.full_name.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=format!("badge badge--{}", role.code())>
                                                    {move || i18n.t(role_label_key(role))}
                                                </span>
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
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| change_status(id, toggled(status))
                                            >
                                                {move || i18n.t(action_key)}
                                            </Button>
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
    fn test_toggled_flips_status() {
        assert_eq!(toggled(UserStatus::Active), UserStatus::Inactive);
        assert_eq!(toggled(UserStatus::Inactive), UserStatus::Active);
    }

    #[test]
    fn test_role_and_status_labels_exist() {
        for role in UserRole::all() {
            assert!(lookup(Locale::Es, role_label_key(role)).is_some());
        }
        for status in UserStatus::all() {
            assert!(lookup(Locale::Es, status_label_key(status)).is_some());
        }
    }
}
