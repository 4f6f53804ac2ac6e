use crate::routes::routes::AppRoutes;
use crate::shared::i18n::LocaleProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Locale first: every screen below reads it through context.
    view! {
        <LocaleProvider>
            <AppRoutes />
        </LocaleProvider>
    }
}
