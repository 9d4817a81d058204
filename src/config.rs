use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::FlexError;
use crate::fleet::Fleet;
use crate::flexibility::{GridSystem, TimeGrid};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub scenario: ScenarioConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Default evaluation scenario served when a client asks for it and used to
/// sanity-check the configuration at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub time: TimeGridConfig,
    pub system: GridSystem,
    pub fleet: Fleet,
}

/// Uniform time grid construction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGridConfig {
    /// First sample (s), must be > 0
    pub start_s: f64,

    /// Last sample (s)
    pub horizon_s: f64,

    /// Number of samples
    pub samples: usize,
}

impl TimeGridConfig {
    pub fn build(&self) -> Result<TimeGrid, FlexError> {
        TimeGrid::linspace(self.start_s, self.horizon_s, self.samples)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("FLEX__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_grid_config_builds() {
        let cfg = TimeGridConfig {
            start_s: 0.1,
            horizon_s: 5.0,
            samples: 1000,
        };
        let grid = cfg.build().unwrap();
        assert_eq!(grid.len(), 1000);
    }

    #[test]
    fn test_scenario_round_trips_through_toml() {
        let raw = r#"
            [time]
            start_s = 0.1
            horizon_s = 5.0
            samples = 1000

            [system]
            inertia_mws = 50.0
            freq_hz = 60.0
            freq_min_hz = 59.0
            freq_max_hz = 61.0

            [fleet.gas_fired]
            output_mw = 7.0
            max_output_mw = 10.0
            min_output_mw = 0.0
            latency_s = 1.0
            ramp_up_mw_per_s = 1.0
            ramp_down_mw_per_s = 1.5

            [fleet.battery]
            output_mw = -0.5
            max_output_mw = 0.5
            min_output_mw = -0.5
            latency_s = 0.1
            ramp_up_mw_per_s = 50.0
            ramp_down_mw_per_s = 50.0

            [fleet.battery.storage]
            charge_percent = 75.0
            energy_capacity_mws = 1000.0
        "#;
        let scenario: ScenarioConfig = toml::from_str(raw).unwrap();

        assert_eq!(scenario.fleet.enabled_count(), 2);
        assert!(scenario.fleet.hydro.is_none());
        let battery = scenario.fleet.battery.unwrap();
        assert_eq!(battery.storage.unwrap().charge_percent, 75.0);
    }
}
