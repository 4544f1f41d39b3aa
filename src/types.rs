//! Domain types for ticket purchasing.
//!
//! This module contains the value objects the purchase orchestrator works
//! with: ticket types with their pricing and seating behavior, the immutable
//! per-type request, and the `Money` and `AccountId` newtypes shared with the
//! external collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of tickets that can be bought in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account making a purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an `AccountId` from its integer value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (cents-based to avoid floating point errors)
// ============================================================================

/// Represents money in cents to avoid floating-point arithmetic errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Creates a `Money` value from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a `Money` value from dollars
    ///
    /// # Panics
    ///
    /// Panics if the conversion would overflow (dollars * 100 > `u64::MAX`).
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn from_dollars(dollars: u64) -> Self {
        match dollars.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("Money::from_dollars overflow"),
        }
    }

    /// Returns the amount in cents
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the amount in dollars (rounded down)
    #[must_use]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.0 % 100)
    }
}

// ============================================================================
// Ticket Types
// ============================================================================

/// Ticket categories sold by the box office
///
/// Each type carries its unit price and whether a ticket of that type
/// occupies its own seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full-price ticket; occupies a seat
    Adult,
    /// Reduced-price ticket; occupies a seat
    Child,
    /// Free ticket; infants sit on an adult's lap and get no seat
    Infant,
}

impl TicketType {
    /// All ticket types, in pricing order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Unit price for one ticket of this type
    #[must_use]
    pub const fn price(self) -> Money {
        match self {
            Self::Adult => Money::from_dollars(20),
            Self::Child => Money::from_dollars(10),
            Self::Infant => Money::from_cents(0),
        }
    }

    /// Whether a ticket of this type is allocated its own seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    /// Canonical upper-case name, as accepted by [`FromStr`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InvalidRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(InvalidRequestError::UnknownTicketType {
                name: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Ticket Request Value Object
// ============================================================================

/// Errors raised when building a [`TicketTypeRequest`] from untyped input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The ticket type name is not one of the known categories
    #[error("unknown ticket type `{name}` (expected ADULT, CHILD or INFANT)")]
    UnknownTicketType {
        /// The rejected name
        name: String,
    },

    /// The number of tickets is negative or too large to represent
    #[error("number of tickets out of range: {count}")]
    QuantityOutOfRange {
        /// The rejected count
        count: i64,
    },
}

/// Immutable request for a number of tickets of a single type
///
/// Constructed once and never mutated; the orchestrator consumes batches of
/// these by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a request for `quantity` tickets of `ticket_type`
    ///
    /// Category membership and non-negative integer counts are enforced by
    /// the type system; this constructor cannot fail.
    #[must_use]
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Builds a request from an untyped (name, count) pair
    ///
    /// Entry point for callers holding unvalidated input, e.g. deserialized
    /// or user-supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if `name` is not a known ticket type
    /// or `count` does not fit a non-negative 32-bit integer.
    pub fn from_raw(name: &str, count: i64) -> Result<Self, InvalidRequestError> {
        let ticket_type = name.parse::<TicketType>()?;
        let quantity = u32::try_from(count)
            .map_err(|_| InvalidRequestError::QuantityOutOfRange { count })?;
        Ok(Self::new(ticket_type, quantity))
    }

    /// The requested ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// The requested number of tickets
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}
