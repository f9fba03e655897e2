use crate::config::Config;
use crate::database::Database;

/// Everything a request handler needs, injected into the Actix application
/// as `web::Data` at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Shared secret checked by `POST /api/auth` and by [`AdminAccess`].
    ///
    /// [`AdminAccess`]: crate::services::guard::AdminAccess
    pub admin_password: String,
    pub enforce_admin_auth: bool,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        AppState {
            db,
            admin_password: config.admin_password.clone(),
            enforce_admin_auth: config.enforce_admin_auth,
        }
    }
}
