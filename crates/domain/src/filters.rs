//! Filter parameters for event and calendar listings
//!
//! Each filter set renders itself into [`QueryPairs`], carrying only the
//! values the caller actually supplied. Dates use `chrono::NaiveDate`,
//! which displays as `YYYY-MM-DD`, the format the server expects.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::request::QueryPairs;

/// Lifecycle status of a booking, as the server reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed by staff.
    Confirmed,
    /// The event has taken place.
    Completed,
    /// Cancelled by either party.
    Cancelled,
}

impl BookingStatus {
    /// Returns the status as the server's wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional filters for the event listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilters {
    /// Restrict to one event space.
    pub space_id: Option<u32>,
    /// Events starting from this date.
    pub start_date: Option<NaiveDate>,
    /// Events ending before this date.
    pub end_date: Option<NaiveDate>,
}

impl EventFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            space_id: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Restricts results to one event space.
    #[must_use]
    pub const fn in_space(mut self, space_id: u32) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Restricts results to events starting from this date.
    #[must_use]
    pub const fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Restricts results to events ending before this date.
    #[must_use]
    pub const fn ending(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Renders the present filters as query pairs, in a fixed order.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("space_id", self.space_id);
        pairs.push_opt("start_date", self.start_date);
        pairs.push_opt("end_date", self.end_date);
        pairs
    }
}

/// Optional filters for the calendar view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFilters {
    /// Window start date.
    pub start: Option<NaiveDate>,
    /// Window end date.
    pub end: Option<NaiveDate>,
    /// Restrict to one event space.
    pub space_id: Option<u32>,
    /// Restrict to one booking status.
    pub status: Option<BookingStatus>,
    /// Include cancelled events. Only emitted on the wire when true,
    /// encoded as the literal `1`.
    pub include_cancelled: bool,
}

impl CalendarFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
            space_id: None,
            status: None,
            include_cancelled: false,
        }
    }

    /// Restricts the window start.
    #[must_use]
    pub const fn starting(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Restricts the window end.
    #[must_use]
    pub const fn until(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Restricts results to one event space.
    #[must_use]
    pub const fn in_space(mut self, space_id: u32) -> Self {
        self.space_id = Some(space_id);
        self
    }

    /// Restricts results to one booking status.
    #[must_use]
    pub const fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Includes cancelled events in the results.
    #[must_use]
    pub const fn including_cancelled(mut self) -> Self {
        self.include_cancelled = true;
        self
    }

    /// Renders the present filters as query pairs, in a fixed order.
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        pairs.push_opt("start", self.start);
        pairs.push_opt("end", self.end);
        pairs.push_opt("space_id", self.space_id);
        pairs.push_opt("status", self.status);
        pairs.push_flag("include_cancelled", self.include_cancelled);
        pairs
    }
}
