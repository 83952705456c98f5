//! Reservation Model

use serde::{Deserialize, Serialize};

/// Reservation identifier
pub type ReservationId = i64;

/// Server-assigned reservation lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Booked, party not yet arrived
    #[default]
    Booked,
    /// Party seated at a table
    Seated,
    /// Visit finished
    Finished,
    /// Cancelled by staff
    Cancelled,
}

/// Reservation entity as persisted by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    /// Calendar date, YYYY-MM-DD
    pub reservation_date: String,
    /// Time of day, HH:MM
    pub reservation_time: String,
    pub people: u32,
    #[serde(default)]
    pub status: ReservationStatus,
}

/// Create / edit payload edited by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReservationDraft {
    /// Present only in edit mode, immutable once loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<ReservationId>,
    pub first_name: String,
    pub last_name: String,
    /// Normalized to (XXX) XXX-XXXX once at least four digits are typed
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: u32,
    /// Server-assigned, not user-editable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
}

impl ReservationDraft {
    /// All six user-editable fields filled in.
    ///
    /// Required-input semantics live at the UI boundary; the shell consults
    /// this before enabling submission.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.mobile_number.trim().is_empty()
            && !self.reservation_date.trim().is_empty()
            && !self.reservation_time.trim().is_empty()
            && self.people >= 1
    }
}

impl From<Reservation> for ReservationDraft {
    fn from(r: Reservation) -> Self {
        Self {
            reservation_id: Some(r.reservation_id),
            first_name: r.first_name,
            last_name: r.last_name,
            mobile_number: r.mobile_number,
            reservation_date: r.reservation_date,
            reservation_time: r.reservation_time,
            people: r.people,
            status: Some(r.status),
        }
    }
}
