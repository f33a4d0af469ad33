//! Configuration management for Library Desk

use chrono::Days;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct LibraryConfig {
    /// Days between borrow date and due date
    #[validate(range(min = 1, max = 365, message = "Loan period must be 1-365 days"))]
    pub loan_period_days: u32,
    /// Entries shown in the recent activity feed
    pub recent_activity_limit: usize,
    /// Actor recorded for catalog and roster changes
    #[validate(length(min = 1, message = "Librarian name cannot be empty"))]
    pub librarian_name: String,
    /// Start from the sample catalog instead of an empty library
    pub seed_sample_data: bool,
}

impl LibraryConfig {
    pub fn loan_period(&self) -> Days {
        Days::new(u64::from(self.loan_period_days))
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables, e.g. LIBRARY_LIBRARY__LOAN_PERIOD_DAYS=21
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build and check a configuration from already layered sources
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> AppResult<Self> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.library.validate()?;
        Ok(config)
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            loan_period_days: 14,
            recent_activity_limit: 5,
            librarian_name: "Librarian".to_string(),
            seed_sample_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
