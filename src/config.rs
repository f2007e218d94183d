//! Configuration management for the Ascent booking server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::slot::{SlotTime, StatusWording};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub directory: Option<String>,
}

/// Slot grid and availability settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    /// Daily slots, in display order (slot index = position)
    pub slot_times: Vec<SlotTime>,
    /// Weekday on which the wall is closed (e.g. "Tue")
    pub closed_weekday: String,
    /// Offset applied to a date's midnight before it seeds the slot generator
    pub seed_utc_offset_minutes: i32,
    /// Label set used for the Full tier
    pub status_wording: StatusWording,
}

/// Price table and currency, amounts in minor units
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: String,
    pub one_month: u64,
    pub three_months: u64,
    pub six_months: u64,
    pub yearly: u64,
    pub single_slot_pass: u64,
    pub full_day_pass: u64,
    pub registration_fee: u64,
}

/// Options handed to the hosted checkout widget
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentConfig {
    /// Public checkout key; blank means the checkout is not available
    pub key_id: String,
    pub merchant_name: String,
    pub image: Option<String>,
    pub theme_color: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MembersConfig {
    /// Prefix of the QR payload identifying a member
    pub pass_prefix: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub members: MembersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. ASCENT__PRICING__CURRENCY)
            .add_source(
                Environment::with_prefix("ASCENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the checkout key from PAYMENT_KEY_ID if present
            .set_override_option("payment.key_id", env::var("PAYMENT_KEY_ID").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: None,
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slot_times: vec![
                SlotTime::new("7:00", "AM"),
                SlotTime::new("9:30", "AM"),
                SlotTime::new("12:00", "PM"),
                SlotTime::new("12:00", "PM"),
            ],
            closed_weekday: "Tue".to_string(),
            seed_utc_offset_minutes: 0,
            status_wording: StatusWording::Short,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            one_month: 750_000,
            three_months: 2_250_000,
            six_months: 4_500_000,
            yearly: 9_000_000,
            single_slot_pass: 50_000,
            full_day_pass: 100_000,
            registration_fee: 10_000,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            merchant_name: "MSCA".to_string(),
            image: Some("/logo.png".to_string()),
            theme_color: "#00AEFF".to_string(),
        }
    }
}

impl Default for MembersConfig {
    fn default() -> Self {
        Self {
            pass_prefix: "MSCA-USER".to_string(),
        }
    }
}
