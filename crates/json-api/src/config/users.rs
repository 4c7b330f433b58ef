//! Users Config

use clap::Args;
use roster_app::domain::users::IdScheme;

/// User store settings.
#[derive(Debug, Args)]
pub struct UsersConfig {
    /// Identifier scheme for new users (uuid, timestamp)
    #[arg(long, env = "USER_ID_SCHEME", value_enum, default_value_t = IdScheme::Uuid)]
    pub id_scheme: IdScheme,
}
