//! Reserve Client - reservation form core for the booking front-end
//!
//! Provides the create/edit reservation form state machine, the field
//! validation rules and phone normalization behind it, and the HTTP
//! client used to persist reservations.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod models;
pub mod utils;

pub use api::{HttpReservationApi, Navigator, ReservationApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{ErrorSource, FieldErrors, FormState, ReservationForm};
pub use http::HttpClient;
pub use models::{Reservation, ReservationDraft, ReservationId, ReservationStatus};
