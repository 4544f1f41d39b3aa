//! Seat reservation collaborator.
//!
//! Counterpart to [`crate::payment_gateway`]: the orchestrator hands over a
//! seat count for an account and the seating system does the rest. Seat
//! selection and availability are owned by the external service;
//! [`MockSeatReservation`] stands in for development and testing.

use crate::types::AccountId;
use std::sync::Arc;
use thiserror::Error;

/// Seat reservation result
pub type ReservationResult<T> = Result<T, SeatReservationError>;

/// Seat reservation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatReservationError {
    /// The venue could not seat the requested party
    #[error("seats unavailable: {reason}")]
    Unavailable {
        /// Why the seats could not be allocated
        reason: String,
    },

    /// Other error
    #[error("seat reservation error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Seat reservation trait
///
/// Abstraction over the external seat booking system. The contract is a
/// single opaque effect: reserve `seats` seats for an account.
pub trait SeatReservation: Send + Sync {
    /// Reserves `seats` seats for the given account
    ///
    /// # Errors
    ///
    /// Returns [`SeatReservationError`] if the reservation fails.
    fn reserve_seats(&self, account_id: AccountId, seats: u32) -> ReservationResult<()>;
}

/// Mock seat reservation service (always succeeds for development)
#[derive(Clone, Debug)]
pub struct MockSeatReservation;

impl MockSeatReservation {
    /// Creates a new mock seat reservation service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservation> {
        Arc::new(Self::new())
    }
}

impl Default for MockSeatReservation {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservation for MockSeatReservation {
    fn reserve_seats(&self, account_id: AccountId, seats: u32) -> ReservationResult<()> {
        tracing::info!(
            account_id = %account_id,
            seats,
            "Mock seat reservation processed successfully"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reservation_success() {
        let reservation = MockSeatReservation::new();
        let result = reservation.reserve_seats(AccountId::new(1), 3);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_messages_carry_reason() {
        let error = SeatReservationError::Unavailable {
            reason: "sold out".to_string(),
        };
        assert_eq!(error.to_string(), "seats unavailable: sold out");
    }
}
