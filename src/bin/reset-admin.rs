//! Operator script: reset the `admin` password hash once and report the outcome.

use std::process::ExitCode;
use tracing::error;
use xteam_storefront::config::Config;
use xteam_storefront::db::UserStorage;
use xteam_storefront::service::credential_reset::{notice, reset_admin_password};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    xteam_storefront::logging::init_stderr(&cfg.basic.loglevel);

    let storage = match UserStorage::connect_existing(&cfg.basic.database_url).await {
        Ok(storage) => storage,
        Err(e) => {
            error!(database_url = %cfg.basic.database_url, error = %e, "cannot open user store");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = reset_admin_password(&storage, &cfg.reset).await;
    storage.close().await;

    println!("{}", notice(&result));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
