//! In-memory collaborator doubles for fast, deterministic testing.
//!
//! Provides:
//! - [`RecordingPaymentGateway`] / [`RecordingSeatReservation`]: capture
//!   every call for assertion
//! - [`FailingPaymentGateway`] / [`FailingSeatReservation`]: always return
//!   their collaborator error

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity

use crate::payment_gateway::{GatewayResult, PaymentGateway, PaymentGatewayError};
use crate::seat_reservation::{ReservationResult, SeatReservation, SeatReservationError};
use crate::types::{AccountId, Money};
use std::sync::{Arc, Mutex};

/// Payment gateway double that records every charge it receives.
///
/// Clones share the same call log, so tests can hand a clone to the service
/// and keep one for assertions.
///
/// # Example
///
/// ```
/// use box_office::testing::RecordingPaymentGateway;
/// use box_office::{AccountId, Money, PaymentGateway};
///
/// let gateway = RecordingPaymentGateway::new();
/// gateway.make_payment(AccountId::new(1), Money::from_dollars(50)).unwrap();
/// assert_eq!(gateway.calls(), vec![(AccountId::new(1), Money::from_dollars(50))]);
/// ```
#[derive(Clone, Debug)]
pub struct RecordingPaymentGateway {
    calls: Arc<Mutex<Vec<(AccountId, Money)>>>,
}

impl RecordingPaymentGateway {
    /// Creates a double with an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded (account, amount) calls, in order
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, Money)> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear the call log (for test isolation)
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Check whether no payment has been made
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

impl Default for RecordingPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for RecordingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> GatewayResult<()> {
        self.calls.lock().unwrap().push((account_id, amount));
        Ok(())
    }
}

/// Seat reservation double that records every allocation it receives.
#[derive(Clone, Debug)]
pub struct RecordingSeatReservation {
    calls: Arc<Mutex<Vec<(AccountId, u32)>>>,
}

impl RecordingSeatReservation {
    /// Creates a double with an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded (account, seats) calls, in order
    #[must_use]
    pub fn calls(&self) -> Vec<(AccountId, u32)> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear the call log (for test isolation)
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Check whether no seats have been reserved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }
}

impl Default for RecordingSeatReservation {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservation for RecordingSeatReservation {
    fn reserve_seats(&self, account_id: AccountId, seats: u32) -> ReservationResult<()> {
        self.calls.lock().unwrap().push((account_id, seats));
        Ok(())
    }
}

/// Payment gateway double that declines every charge
#[derive(Clone, Debug)]
pub struct FailingPaymentGateway {
    reason: String,
}

impl FailingPaymentGateway {
    /// Creates a double that declines with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PaymentGateway for FailingPaymentGateway {
    fn make_payment(&self, _account_id: AccountId, _amount: Money) -> GatewayResult<()> {
        Err(PaymentGatewayError::Declined {
            reason: self.reason.clone(),
        })
    }
}

/// Seat reservation double that rejects every allocation
#[derive(Clone, Debug)]
pub struct FailingSeatReservation {
    reason: String,
}

impl FailingSeatReservation {
    /// Creates a double that rejects with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SeatReservation for FailingSeatReservation {
    fn reserve_seats(&self, _account_id: AccountId, _seats: u32) -> ReservationResult<()> {
        Err(SeatReservationError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}
