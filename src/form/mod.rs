//! Reservation form core: normalization, field rules, controller

mod controller;
mod errors;
mod phone;
mod validate;

pub use controller::{FormState, ReservationForm};
pub use errors::{ErrorSource, FieldErrors};
pub use phone::normalize_phone;
pub use validate::{
    CLOSE_HHMM, CLOSED_WEEKDAY, MSG_CLOSED_TUESDAY, MSG_OUTSIDE_HOURS, MSG_PAST_DATE, OPEN_HHMM,
    validate_reservation_date, validate_reservation_time,
};
