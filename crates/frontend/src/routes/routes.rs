use crate::domain::a001_campaign::ui::admin_list::AdminCampaignsList;
use crate::domain::a001_campaign::ui::list::CampaignsPage;
use crate::domain::a002_donation::ui::list::AdminDonationsList;
use crate::layout::Shell;
use crate::shared::i18n::use_locale;
use crate::system::users::ui::list::AdminUsersList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    let i18n = use_locale();
    view! {
        <div class="page">
            <p class="list-status list-status--empty">{move || i18n.t("common.noResults")}</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CampaignsPage />
                    <Route path=path!("/campaigns") view=CampaignsPage />
                    <Route path=path!("/admin/campaigns") view=AdminCampaignsList />
                    <Route path=path!("/admin/users") view=AdminUsersList />
                    <Route path=path!("/admin/donations") view=AdminDonationsList />
                </Routes>
            </Shell>
        </Router>
    }
}
