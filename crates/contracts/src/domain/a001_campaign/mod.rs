pub mod aggregate;

pub use aggregate::{Campaign, CampaignSort, CampaignStatus};
