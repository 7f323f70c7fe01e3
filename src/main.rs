mod config;
mod handler;
mod report;
mod vision;

use config::VisionConfig;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use vision::vision_service::VisionService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let config = VisionConfig::from_env()?;
    log::info!("Vision API endpoint: {}", config.endpoint);

    let service = VisionService::new(config);

    run(service_fn(|event: LambdaEvent<Value>| {
        handler::function_handler(event, &service)
    }))
    .await
}
