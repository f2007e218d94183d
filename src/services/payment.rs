//! Payment checkout capability
//!
//! The checkout widget is hosted by a third party. The server only prepares
//! the options it is opened with and reacts to the outcome it reports.

use async_trait::async_trait;

use crate::{
    config::{PaymentConfig, PricingConfig},
    error::{AppError, AppResult},
    models::booking::{BookingIntent, CheckoutRequest, PaymentOutcome},
};

/// An opened checkout that resolves once the widget calls back
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn checkout(&self, request: &CheckoutRequest) -> AppResult<PaymentOutcome>;
}

/// Builds widget options from configuration
#[derive(Clone, Debug)]
pub struct CheckoutBuilder {
    payment: PaymentConfig,
    currency: String,
    registration_fee: u64,
}

impl CheckoutBuilder {
    pub fn new(payment: &PaymentConfig, pricing: &PricingConfig) -> Self {
        Self {
            payment: payment.clone(),
            currency: pricing.currency.clone(),
            registration_fee: pricing.registration_fee,
        }
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.payment.key_id.trim().is_empty() {
            return Err(AppError::Unavailable(
                "Payment gateway not loaded. Please refresh the page.".to_string(),
            ));
        }
        Ok(())
    }

    fn request(&self, amount: u64, currency: &str, name: String, description: String) -> CheckoutRequest {
        CheckoutRequest {
            key_id: self.payment.key_id.clone(),
            amount,
            currency: currency.to_string(),
            name,
            description,
            image: self.payment.image.clone(),
            theme_color: self.payment.theme_color.clone(),
        }
    }

    /// Checkout for a slot booking
    pub fn for_intent(&self, intent: &BookingIntent) -> AppResult<CheckoutRequest> {
        self.ensure_available()?;
        let merchant = &self.payment.merchant_name;
        Ok(self.request(
            intent.amount,
            &intent.currency,
            format!("{} Booking", merchant),
            format!("{} Slot Booking - {}", merchant, intent.duration),
        ))
    }

    /// Checkout for the membership registration fee
    pub fn for_registration(&self, terms_accepted: bool) -> AppResult<CheckoutRequest> {
        if !terms_accepted {
            return Err(AppError::TermsNotAccepted);
        }
        self.ensure_available()?;
        let merchant = &self.payment.merchant_name;
        Ok(self.request(
            self.registration_fee,
            &self.currency,
            format!("{} Registration", merchant),
            format!("{} Membership Registration Fee", merchant),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn builder(key_id: &str) -> CheckoutBuilder {
        let payment = PaymentConfig {
            key_id: key_id.to_string(),
            ..PaymentConfig::default()
        };
        CheckoutBuilder::new(&payment, &PricingConfig::default())
    }

    fn intent() -> BookingIntent {
        BookingIntent {
            reference: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            slot_index: 1,
            time: "9:30 AM".to_string(),
            duration: "3 Months".to_string(),
            amount: 2_250_000,
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn intent_checkout_carries_amount_and_description() {
        let request = builder("key_test").for_intent(&intent()).unwrap();
        assert_eq!(request.amount, 2_250_000);
        assert_eq!(request.currency, "INR");
        assert_eq!(request.name, "MSCA Booking");
        assert_eq!(request.description, "MSCA Slot Booking - 3 Months");
        assert_eq!(request.theme_color, "#00AEFF");
    }

    #[test]
    fn blank_key_means_unavailable() {
        let err = builder("  ").for_intent(&intent()).unwrap_err();
        assert!(matches!(err, AppError::Unavailable(_)));
    }

    #[test]
    fn registration_requires_terms() {
        let err = builder("key_test").for_registration(false).unwrap_err();
        assert!(matches!(err, AppError::TermsNotAccepted));

        let request = builder("key_test").for_registration(true).unwrap();
        assert_eq!(request.amount, 10_000);
        assert_eq!(request.description, "MSCA Membership Registration Fee");
    }

    #[test]
    fn terms_are_checked_before_availability() {
        let err = builder("").for_registration(false).unwrap_err();
        assert!(matches!(err, AppError::TermsNotAccepted));
    }
}
