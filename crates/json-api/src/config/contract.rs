//! Contract Config

use std::path::PathBuf;

use clap::Args;

/// OpenAPI contract export settings.
#[derive(Debug, Args)]
pub struct ContractConfig {
    /// Where the OpenAPI document is written on every start
    #[arg(
        long,
        env = "OPENAPI_PATH",
        default_value = "packages/api/src/contracts/v1.json"
    )]
    pub openapi_path: PathBuf,
}
