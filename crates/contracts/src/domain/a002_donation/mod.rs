pub mod aggregate;

pub use aggregate::{Donation, PaymentStatus};
