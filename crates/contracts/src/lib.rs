//! Wire contracts shared between the donation platform frontend and its REST API.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
