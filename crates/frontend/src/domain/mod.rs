pub mod a001_campaign;
pub mod a002_donation;
