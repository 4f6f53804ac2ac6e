pub mod api_utils;
pub mod components;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod list_controller;
pub mod list_query;
pub mod pagination;
