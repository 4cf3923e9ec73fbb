//! Database settings loaded via OrthoConfig.
//!
//! Values come from `FORUM_DB_*` environment variables, configuration files,
//! and command-line flags, in OrthoConfig's usual precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

/// Connection settings for the forum database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FORUM_DB")]
pub struct DatabaseSettings {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[ortho_config(default = 10)]
    pub max_connections: u32,
    /// Connections kept open while idle.
    #[ortho_config(default = 2)]
    pub min_idle: u32,
    /// Seconds to wait for a pooled connection before giving up.
    #[ortho_config(default = 30)]
    pub connect_timeout_secs: u64,
}

impl DatabaseSettings {
    /// Pool configuration derived from these settings.
    pub fn to_pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.url.clone())
            .with_max_size(self.max_connections)
            .with_min_idle(Some(self.min_idle))
            .with_connection_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}
