//! Purchase orchestration: validation, pricing, and collaborator dispatch.
//!
//! [`TicketService`] is the write path of the box office. A purchase runs
//! through four steps:
//!
//! 1. Tally the batch per ticket type.
//! 2. Enforce the business rules (batch limit, accompanying adult, one lap
//!    per infant).
//! 3. Price the batch and count the seats to allocate.
//! 4. Charge the payment gateway, then reserve the seats.
//!
//! Every failure surfaces as a single [`PurchaseError`], whether it came
//! from request construction, rule validation, or a collaborator; wrapped
//! sources keep their own message.

use crate::payment_gateway::{PaymentGateway, PaymentGatewayError};
use crate::seat_reservation::{SeatReservation, SeatReservationError};
use crate::types::{
    AccountId, InvalidRequestError, MAX_TICKETS_PER_PURCHASE, Money, TicketType,
    TicketTypeRequest,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by [`TicketService::purchase`]
///
/// A single wrapped error type: business-rule violations are variants of
/// their own, and request, payment, and seat reservation failures are
/// carried as sources so their message survives the wrap.
#[derive(Error, Debug)]
pub enum PurchaseError {
    /// The batch asks for more tickets than one purchase allows
    #[error("cannot purchase more than {MAX_TICKETS_PER_PURCHASE} tickets at a time")]
    TooManyTickets,

    /// Child or infant tickets requested without an accompanying adult
    #[error("child and infant tickets cannot be purchased without an adult ticket")]
    AdultRequired,

    /// More infants than adult laps to seat them on
    #[error("the number of infant tickets ({infants}) cannot exceed the number of adult tickets ({adults})")]
    InfantsExceedAdults {
        /// Requested infant tickets
        infants: u32,
        /// Requested adult tickets
        adults: u32,
    },

    /// A request could not be built from untyped input
    #[error("invalid ticket request: {0}")]
    InvalidRequest(#[from] InvalidRequestError),

    /// The payment gateway rejected the charge
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentGatewayError),

    /// The seat reservation service rejected the allocation
    #[error("seat reservation failed: {0}")]
    SeatReservation(#[from] SeatReservationError),
}

/// Outcome of a successful purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Total amount charged through the payment gateway
    pub amount_charged: Money,
    /// Number of seats reserved (infants excluded)
    pub seats_reserved: u32,
}

/// Per-type ticket counts for one purchase batch.
///
/// Counts saturate rather than wrap; any batch large enough to saturate is
/// rejected by the limit check regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TicketTally {
    adult: u32,
    child: u32,
    infant: u32,
}

impl TicketTally {
    fn of(requests: &[TicketTypeRequest]) -> Self {
        let mut tally = Self::default();
        for request in requests {
            let quantity = request.quantity();
            match request.ticket_type() {
                TicketType::Adult => tally.adult = tally.adult.saturating_add(quantity),
                TicketType::Child => tally.child = tally.child.saturating_add(quantity),
                TicketType::Infant => tally.infant = tally.infant.saturating_add(quantity),
            }
        }
        tally
    }

    const fn total(&self) -> u64 {
        self.adult as u64 + self.child as u64 + self.infant as u64
    }

    fn validate(&self) -> Result<(), PurchaseError> {
        if self.total() > u64::from(MAX_TICKETS_PER_PURCHASE) {
            return Err(PurchaseError::TooManyTickets);
        }
        if self.adult == 0 && (self.child > 0 || self.infant > 0) {
            return Err(PurchaseError::AdultRequired);
        }
        if self.infant > self.adult {
            return Err(PurchaseError::InfantsExceedAdults {
                infants: self.infant,
                adults: self.adult,
            });
        }
        Ok(())
    }

    /// Total price of the batch. Only meaningful after [`Self::validate`],
    /// which bounds every count at `MAX_TICKETS_PER_PURCHASE`.
    fn amount(&self) -> Money {
        let cents = u64::from(self.adult) * TicketType::Adult.price().cents()
            + u64::from(self.child) * TicketType::Child.price().cents()
            + u64::from(self.infant) * TicketType::Infant.price().cents();
        Money::from_cents(cents)
    }

    /// Seats to allocate: one per adult and child, none for infants.
    const fn seats(&self) -> u32 {
        self.adult + self.child
    }
}

/// Orchestrates ticket purchases end to end
///
/// Owns no state beyond handles to its two collaborators; every call is
/// independent and synchronous.
pub struct TicketService {
    payment: Arc<dyn PaymentGateway>,
    seats: Arc<dyn SeatReservation>,
}

impl TicketService {
    /// Creates a service backed by the given collaborators
    #[must_use]
    pub fn new(payment: Arc<dyn PaymentGateway>, seats: Arc<dyn SeatReservation>) -> Self {
        Self { payment, seats }
    }

    /// Validates, prices, and executes a ticket purchase
    ///
    /// On success the payment gateway has been charged and the seats
    /// reserved, in that order, and the computed totals are returned.
    /// Requests for the same ticket type accumulate across the batch.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError`] if a business rule is violated (in which
    /// case neither collaborator is invoked) or if a collaborator fails.
    pub fn purchase(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let tally = TicketTally::of(requests);
        if let Err(error) = tally.validate() {
            tracing::warn!(account_id = %account_id, %error, "Purchase rejected");
            return Err(error);
        }

        let amount = tally.amount();
        let seats = tally.seats();

        self.payment.make_payment(account_id, amount)?;
        self.seats.reserve_seats(account_id, seats)?;

        tracing::info!(
            account_id = %account_id,
            amount_cents = amount.cents(),
            seats,
            "Purchase completed"
        );

        Ok(PurchaseSummary {
            amount_charged: amount,
            seats_reserved: seats,
        })
    }

    /// Purchases from untyped (ticket type name, count) pairs
    ///
    /// Convenience entry point for callers at an unvalidated boundary; each
    /// pair is validated as a [`TicketTypeRequest`] before the purchase runs.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidRequest`] if any pair is malformed,
    /// otherwise behaves like [`Self::purchase`].
    pub fn purchase_raw(
        &self,
        account_id: AccountId,
        requests: &[(&str, i64)],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let requests = requests
            .iter()
            .map(|&(name, count)| TicketTypeRequest::from_raw(name, count))
            .collect::<Result<Vec<_>, _>>()?;
        self.purchase(account_id, &requests)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn batch(counts: &[(TicketType, u32)]) -> Vec<TicketTypeRequest> {
        counts
            .iter()
            .map(|&(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
            .collect()
    }

    #[test]
    fn test_tally_accumulates_across_requests() {
        let tally = TicketTally::of(&batch(&[
            (TicketType::Adult, 1),
            (TicketType::Child, 2),
            (TicketType::Adult, 3),
            (TicketType::Infant, 1),
        ]));
        assert_eq!(
            tally,
            TicketTally {
                adult: 4,
                child: 2,
                infant: 1
            }
        );
        assert_eq!(tally.total(), 7);
    }

    #[test]
    fn test_tally_of_empty_batch_is_zero() {
        let tally = TicketTally::of(&[]);
        assert_eq!(tally, TicketTally::default());
        assert!(tally.validate().is_ok());
    }

    #[test]
    fn test_tally_saturates_instead_of_wrapping() {
        let tally = TicketTally::of(&batch(&[
            (TicketType::Adult, u32::MAX),
            (TicketType::Adult, u32::MAX),
        ]));
        assert_eq!(tally.adult, u32::MAX);
        assert!(matches!(
            tally.validate(),
            Err(PurchaseError::TooManyTickets)
        ));
    }

    #[test]
    fn test_amount_and_seats_for_mixed_batch() {
        let tally = TicketTally::of(&batch(&[
            (TicketType::Adult, 2),
            (TicketType::Child, 1),
            (TicketType::Infant, 2),
        ]));
        assert_eq!(tally.amount(), Money::from_dollars(50));
        assert_eq!(tally.seats(), 3);
    }

    #[test]
    fn test_validate_enforces_batch_limit_boundary() {
        let at_limit = TicketTally::of(&batch(&[(TicketType::Adult, 20)]));
        assert!(at_limit.validate().is_ok());

        let over_limit = TicketTally::of(&batch(&[(TicketType::Adult, 21)]));
        assert!(matches!(
            over_limit.validate(),
            Err(PurchaseError::TooManyTickets)
        ));
    }

    #[test]
    fn test_validate_requires_accompanying_adult() {
        let children_alone = TicketTally::of(&batch(&[(TicketType::Child, 2)]));
        assert!(matches!(
            children_alone.validate(),
            Err(PurchaseError::AdultRequired)
        ));

        let infant_alone = TicketTally::of(&batch(&[(TicketType::Infant, 1)]));
        assert!(matches!(
            infant_alone.validate(),
            Err(PurchaseError::AdultRequired)
        ));
    }

    #[test]
    fn test_validate_caps_infants_at_adult_count() {
        let one_lap_short = TicketTally::of(&batch(&[
            (TicketType::Adult, 2),
            (TicketType::Infant, 3),
        ]));
        assert!(matches!(
            one_lap_short.validate(),
            Err(PurchaseError::InfantsExceedAdults {
                infants: 3,
                adults: 2
            })
        ));

        let exactly_enough_laps = TicketTally::of(&batch(&[
            (TicketType::Adult, 2),
            (TicketType::Infant, 2),
        ]));
        assert!(exactly_enough_laps.validate().is_ok());
    }
}
