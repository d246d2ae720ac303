mod bike_city;
mod period;
mod settings;
mod stats;
mod transport_mode;
mod trip;
pub mod validation;

pub use bike_city::BikeCity;
pub use period::{Period, PeriodStatus, DEFAULT_TICKET_PRICE, PERIOD_LENGTH_DAYS};
pub use settings::{UserSettings, DEFAULT_BUS_FARE};
pub use stats::{GlobalStats, ModeTally, PeriodStats};
pub use transport_mode::TransportMode;
pub use trip::Trip;
