//! Payment gateway collaborator.
//!
//! This module provides the narrow payment interface the purchase
//! orchestrator depends on. In production, this would be backed by an actual
//! payment provider integration; [`MockPaymentGateway`] stands in for
//! development and testing.

use crate::types::{AccountId, Money};
use std::sync::Arc;
use thiserror::Error;

/// Payment gateway result
pub type GatewayResult<T> = Result<T, PaymentGatewayError>;

/// Payment gateway error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentGatewayError {
    /// Payment declined by the processor
    #[error("payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },

    /// Other error
    #[error("payment error: {message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Payment gateway trait
///
/// Abstraction over an external payment processor. The contract is
/// deliberately narrow: charge an amount to an account, as a single opaque
/// effect. Argument validity (integer account id and amount) is enforced by
/// the [`AccountId`] and [`Money`] types.
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to the given account
    ///
    /// # Errors
    ///
    /// Returns [`PaymentGatewayError`] if the payment fails.
    fn make_payment(&self, account_id: AccountId, amount: Money) -> GatewayResult<()>;
}

/// Mock payment gateway (always succeeds for development)
#[derive(Clone, Debug)]
pub struct MockPaymentGateway;

impl MockPaymentGateway {
    /// Creates a new mock payment gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn PaymentGateway> {
        Arc::new(Self::new())
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> GatewayResult<()> {
        tracing::info!(
            account_id = %account_id,
            amount_cents = amount.cents(),
            "Mock payment processed successfully"
        );
        Ok(())
    }
}
