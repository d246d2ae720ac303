use serde::Serialize;

/// one station in a transit network. immutable reference data, bundled at
/// build time; identity is `code`, unique within its network.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Station {
    pub code: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub line: &'static str,
    /// line codes reachable by an in-station transfer, empty for
    /// non-transfer stations.
    pub transfer_lines: &'static [&'static str],
    /// airport-express stops served by express trains.
    pub is_express: bool,
}

impl Station {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        name_en: &'static str,
        line: &'static str,
    ) -> Station {
        Station {
            code,
            name,
            name_en,
            line,
            transfer_lines: &[],
            is_express: false,
        }
    }

    pub const fn with_transfers(
        code: &'static str,
        name: &'static str,
        name_en: &'static str,
        line: &'static str,
        transfer_lines: &'static [&'static str],
    ) -> Station {
        Station {
            code,
            name,
            name_en,
            line,
            transfer_lines,
            is_express: false,
        }
    }

    pub const fn express(
        code: &'static str,
        name: &'static str,
        name_en: &'static str,
        line: &'static str,
    ) -> Station {
        Station {
            code,
            name,
            name_en,
            line,
            transfer_lines: &[],
            is_express: true,
        }
    }
}
