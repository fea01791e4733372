//! HTTP server configuration object and helpers.

use std::time::Duration;

use documents_backend::outbound::persistence::DbPool;

/// Client request and disconnect timeout applied to every connection.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration listening on `bind_addr` and
    /// persisting documents through `db_pool`.
    #[must_use]
    pub fn new(bind_addr: (String, u16), db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
