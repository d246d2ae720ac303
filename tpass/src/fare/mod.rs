mod calculator;
mod fare_query;

pub use calculator::{bus_fare, compute_fare, youbike_fee};
pub use fare_query::FareQuery;
