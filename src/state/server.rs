//! Server identity and registration-burst attributes.

use crate::config::ServerConfig;
use crate::identity::Identity;
use chrono::{DateTime, Utc};

/// The local server as seen by its clients.
#[derive(Debug, Clone)]
pub struct Server {
    /// Server name (e.g., "irc.local"); also the line prefix for server replies.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Version string advertised in RPL_YOURHOST / RPL_MYINFO.
    pub version: String,
    /// Process start time, reported by RPL_CREATED.
    pub created: DateTime<Utc>,
}

impl Server {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: nomad_proto::VERSION.to_string(),
            created: Utc::now(),
        }
    }

    /// Build the server entity from its configuration block.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            version: config.version.clone(),
            created: Utc::now(),
        }
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Identity for Server {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn public_id(&self) -> String {
        self.name.clone()
    }

    fn nick(&self) -> String {
        self.name.clone()
    }
}
