//! TopHeader component - application top navigation bar.
//!
//! Brand, links to the list screens and the language selector.

use crate::shared::i18n::{use_locale, LanguageSelector};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let i18n = use_locale();

    let link = move |href: &'static str, icon_name: &'static str, key: &'static str| {
        view! {
            <A href=href attr:class="top-header__link">
                {icon(icon_name)}
                <span>{move || i18n.t(key)}</span>
            </A>
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Donation Platform"</span>
            </div>

            <nav class="top-header__nav">
                {link("/campaigns", "campaigns", "nav.campaigns")}
                {link("/admin/campaigns", "campaigns", "nav.adminCampaigns")}
                {link("/admin/users", "users", "nav.adminUsers")}
                {link("/admin/donations", "donations", "nav.adminDonations")}
            </nav>

            <div class="top-header__actions">
                {icon("globe")}
                <LanguageSelector />
            </div>
        </header>
    }
}
