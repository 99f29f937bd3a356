//! Configuration module for environment variables and application settings

use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Order queue configuration
    pub queue: QueueConfig,

    /// Scheduled sales report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Bounded capacity of the in-process order queue
    pub capacity: usize,
    /// Delivery attempts per message before it is dead-lettered
    pub max_deliveries: u32,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Seconds between scheduled sales report emissions
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },

            queue: QueueConfig {
                capacity: env::var("ORDER_QUEUE_CAPACITY")
                    .unwrap_or_else(|_| "256".to_string())
                    .parse()
                    .unwrap_or(256),
                max_deliveries: env::var("ORDER_QUEUE_MAX_DELIVERIES")
                    .unwrap_or_else(|_| "3".to_string())
                    .parse()
                    .unwrap_or(3),
            },

            report: ReportConfig {
                // Daily cadence by default, matching the original report schedule
                interval_secs: env::var("REPORT_INTERVAL_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()
                    .unwrap_or(86400),
            },
        })
    }
}
