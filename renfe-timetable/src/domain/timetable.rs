//! Timetable entries extracted from the booking results page.

use serde::{Deserialize, Serialize};

/// One train in a timetable search result.
///
/// Every field is text lifted straight off the results page; nothing is
/// validated or normalized beyond whitespace trimming in the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// Service type as displayed, e.g. "AVE" or "MD".
    #[serde(rename = "type")]
    pub train_type: String,
    /// Departure time, "HH:MM".
    pub departure: String,
    /// Arrival time, "HH:MM".
    pub arrival: String,
    /// Trip duration as displayed, e.g. "2 h. 45 min.".
    pub duration: String,
    /// Fare prices, or a single status message ("Tren Completo") when the
    /// train is not bookable.
    pub price: Vec<String>,
}
