//! Message delivery
//!
//! The contact form hands finished messages to a [`MessageDelivery`]
//! implementation and maps its outcome onto the form status. No real network
//! service exists yet; [`SimulatedDelivery`] stands in for one.

use crate::error::DeliveryError;
use crate::form::ContactFields;

/// A service that accepts contact messages
pub trait MessageDelivery {
    /// Deliver one message
    fn deliver(&mut self, message: &ContactFields) -> Result<(), DeliveryError>;
}

/// Local stand-in for a delivery service
///
/// Logs each message and reports a fixed outcome.
#[derive(Debug, Clone, Default)]
pub struct SimulatedDelivery {
    failure: Option<DeliveryError>,
    delivered: usize,
}

impl SimulatedDelivery {
    /// A delivery that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// A delivery that always fails with `error`
    pub fn failing(error: DeliveryError) -> Self {
        Self {
            failure: Some(error),
            delivered: 0,
        }
    }

    /// Number of messages accepted so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl MessageDelivery for SimulatedDelivery {
    fn deliver(&mut self, message: &ContactFields) -> Result<(), DeliveryError> {
        if let Some(error) = &self.failure {
            tracing::warn!("SimulatedDelivery: refusing message from {}: {}", message.name, error);
            return Err(error.clone());
        }

        tracing::info!(
            name = %message.name,
            email = %message.email,
            "Form submitted: {}",
            message.message
        );
        self.delivered += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_delivery_succeeds() {
        let mut delivery = SimulatedDelivery::new();
        let message = ContactFields::new("A", "a@b.com", "hi");

        assert!(delivery.deliver(&message).is_ok());
        assert!(delivery.deliver(&message).is_ok());
        assert_eq!(delivery.delivered(), 2);
    }

    #[test]
    fn test_failing_delivery() {
        let error = DeliveryError::Unavailable("offline".into());
        let mut delivery = SimulatedDelivery::failing(error.clone());
        let message = ContactFields::new("A", "a@b.com", "hi");

        assert_eq!(delivery.deliver(&message), Err(error));
        assert_eq!(delivery.delivered(), 0);
    }
}
