use std::process::ExitCode;

use e2e_fixture::{config::Config, service::setup::E2eSetup, startup};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match E2eSetup::new(config.bcrypt_cost).run(&config).await {
        Ok(manifest) => {
            println!("DATABASE_URL={}", manifest.database_url);
            ExitCode::SUCCESS
        }
        Err(failure) => {
            tracing::error!(
                database = %failure.target,
                driver = %failure.driver,
                "{}",
                failure
            );
            ExitCode::FAILURE
        }
    }
}
