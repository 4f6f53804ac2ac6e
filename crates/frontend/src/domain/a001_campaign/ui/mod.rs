pub mod admin_list;
pub mod list;
