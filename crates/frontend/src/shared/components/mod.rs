pub mod list_toolbar;
pub mod pagination_controls;
