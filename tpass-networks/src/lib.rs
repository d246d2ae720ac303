pub mod data;
pub mod network;
pub mod station;

pub use network::{Network, Pricing};
pub use station::Station;
