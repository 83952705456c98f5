//! External collaborator seams
//!
//! The form core consumes persistence and navigation only through these
//! traits; [`HttpReservationApi`] is the production implementation.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{ApiEnvelope, HttpClient};
use crate::models::{Reservation, ReservationDraft, ReservationId};

/// Remote persistence operations for reservations.
///
/// Every call carries the caller's cancellation token; implementations
/// must return [`ClientError::Cancelled`] instead of a result once the
/// token fires.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// Fetch one reservation (edit-mode hydration)
    async fn read_reservation(
        &self,
        id: ReservationId,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation>;

    /// Persist a new reservation
    async fn create_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation>;

    /// Persist changes to an existing reservation
    async fn update_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation>;
}

/// Navigation surface of the surrounding shell, fire-and-forget
pub trait Navigator: Send + Sync {
    /// Navigate to an app-internal path
    fn navigate(&self, path: &str);

    /// Go back without persisting anything
    fn back(&self);
}

/// HTTP-backed [`ReservationApi`] implementation
#[derive(Debug, Clone)]
pub struct HttpReservationApi {
    http: HttpClient,
}

impl HttpReservationApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }
}

#[async_trait]
impl ReservationApi for HttpReservationApi {
    async fn read_reservation(
        &self,
        id: ReservationId,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation> {
        self.http.get(&format!("reservations/{id}"), &cancel).await
    }

    async fn create_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation> {
        self.http
            .post("reservations", &ApiEnvelope::wrap(draft), &cancel)
            .await
    }

    async fn update_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: CancellationToken,
    ) -> ClientResult<Reservation> {
        let Some(id) = draft.reservation_id else {
            return Err(ClientError::Validation(
                "reservation_id is required for updates".to_string(),
            ));
        };
        self.http
            .put(&format!("reservations/{id}"), &ApiEnvelope::wrap(draft), &cancel)
            .await
    }
}
