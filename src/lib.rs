//! Ticket purchase validation and pricing for a venue box office.
//!
//! This crate owns the business rules of a ticket purchase and nothing else:
//! it validates a batch of ticket requests, prices it, counts the seats to
//! allocate, and hands the results to two external collaborators behind
//! narrow trait seams.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │  batch of TicketTypeRequest + AccountId
//!   ▼
//! ┌──────────────────┐   validate → price → count seats
//! │  TicketService   │
//! └──────────────────┘
//!   │                 │
//!   ▼                 ▼
//! ┌────────────────┐ ┌──────────────────┐
//! │ PaymentGateway │ │ SeatReservation  │   external collaborators
//! └────────────────┘ └──────────────────┘
//! ```
//!
//! # Business rules
//!
//! - At most 20 tickets per purchase.
//! - Child and infant tickets require at least one adult ticket.
//! - Infants sit on an adult's lap: no seat, no charge, and never more
//!   infants than adults.
//!
//! # Example
//!
//! ```
//! use box_office::{
//!     AccountId, MockPaymentGateway, MockSeatReservation, TicketService, TicketType,
//!     TicketTypeRequest,
//! };
//!
//! let service = TicketService::new(MockPaymentGateway::shared(), MockSeatReservation::shared());
//! let batch = [
//!     TicketTypeRequest::new(TicketType::Adult, 2),
//!     TicketTypeRequest::new(TicketType::Child, 1),
//! ];
//!
//! let summary = service.purchase(AccountId::new(1), &batch)?;
//! assert_eq!(summary.amount_charged.dollars(), 50);
//! assert_eq!(summary.seats_reserved, 3);
//! # Ok::<(), box_office::PurchaseError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod payment_gateway;
pub mod seat_reservation;
pub mod service;
pub mod testing;
pub mod types;

pub use payment_gateway::{GatewayResult, MockPaymentGateway, PaymentGateway, PaymentGatewayError};
pub use seat_reservation::{
    MockSeatReservation, ReservationResult, SeatReservation, SeatReservationError,
};
pub use service::{PurchaseError, PurchaseSummary, TicketService};
pub use types::{
    AccountId, InvalidRequestError, MAX_TICKETS_PER_PURCHASE, Money, TicketType,
    TicketTypeRequest,
};
