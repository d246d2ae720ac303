use serde::{Deserialize, Serialize};

/// city a youbike ride took place in. determines the free-minutes
/// allowance before billing starts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BikeCity {
    Taipei,
    NewTaipei,
    Taoyuan,
    Keelung,
}

impl BikeCity {
    /// taoyuan sponsors 60 free minutes per ride, every other city 30.
    pub fn free_minutes(&self) -> u32 {
        match self {
            BikeCity::Taoyuan => 60,
            _ => 30,
        }
    }
}
