//! Business logic services

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod members;
pub mod payment;

use crate::{config::AppConfig, error::AppResult, models::duration::PriceTable};

/// Container for all services
#[derive(Clone, Debug)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub calendar: calendar::CalendarService,
    pub booking: booking::BookingService,
    pub members: members::MembersService,
}

impl Services {
    /// Create all services from the loaded configuration
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let availability = availability::AvailabilityService::new(&config.booking)?;
        let checkout = payment::CheckoutBuilder::new(&config.payment, &config.pricing);

        Ok(Self {
            booking: booking::BookingService::new(
                availability.clone(),
                PriceTable::from(&config.pricing),
                checkout,
            ),
            availability,
            calendar: calendar::CalendarService::new(),
            members: members::MembersService::new(&config.members),
        })
    }
}
