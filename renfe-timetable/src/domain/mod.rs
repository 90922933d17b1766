//! Domain types for renfe timetable searches.
//!
//! Everything here is built from text the booking site serves, so these
//! types carry strings as-is rather than enforcing formats: a timetable
//! entry's times are whatever the results page showed.

mod dates;
mod station;
mod timetable;

pub use dates::{InvalidDate, date_after, days_between};
pub use station::Station;
pub use timetable::TimetableEntry;
