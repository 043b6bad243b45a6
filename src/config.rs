use anyhow::Result;
use dotenvy::dotenv;
use std::env;

use crate::engine::DEFAULT_FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub gps_sample_interval_secs: u64,
    pub fraud_efficiency_threshold: f64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let gps_sample_interval_secs = env::var("GPS_SAMPLE_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .unwrap_or(60);

        let fraud_efficiency_threshold = env::var("FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FRAUD_EFFICIENCY_THRESHOLD_KM_PER_L);

        Ok(Self {
            log_level,
            gps_sample_interval_secs,
            fraud_efficiency_threshold,
        })
    }
}
