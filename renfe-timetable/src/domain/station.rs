//! Station records from the renfe directory.

use serde::{Deserialize, Serialize};

/// A station as listed in renfe's static station directory.
///
/// `id` is the code the booking backend keys stations by (e.g. `"60000"`
/// for Madrid-Puerta de Atocha); `name` is the display name the search
/// form's autocomplete expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_name_and_id() {
        let station = Station {
            name: "Madrid-Puerta de Atocha".to_string(),
            id: "60000".to_string(),
        };

        let json = serde_json::to_string(&station).unwrap();
        assert_eq!(json, r#"{"name":"Madrid-Puerta de Atocha","id":"60000"}"#);
    }

    #[test]
    fn round_trips_through_json() {
        let station = Station {
            name: "Sils".to_string(),
            id: "79202".to_string(),
        };

        let json = serde_json::to_string(&station).unwrap();
        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, station);
    }
}
