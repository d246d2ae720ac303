use serde::{Deserialize, Serialize};

/// initial per-segment bus fare before the user changes it.
pub const DEFAULT_BUS_FARE: u32 = 15;

/// user-tunable settings supplied by the persistence collaborator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSettings {
    pub default_bus_fare: u32,
    pub favorite_stations: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> UserSettings {
        UserSettings {
            default_bus_fare: DEFAULT_BUS_FARE,
            favorite_stations: Vec::new(),
        }
    }
}
