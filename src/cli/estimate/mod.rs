//! Estimate command - prices a single property

use clap::Args;

use crate::api::types::EstimateResponse;
use crate::domain::EstimateRequest;
use crate::infrastructure::logging::init_cli_logging;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Built-up area in square feet
    #[arg(long)]
    pub area: f64,

    /// Floor number
    #[arg(long, allow_negative_numbers = true)]
    pub floor: f64,

    /// Number of bedrooms
    #[arg(long)]
    pub bedroom: u32,

    /// Region name as it appears in the dataset
    #[arg(long)]
    pub region: String,
}

impl From<EstimateArgs> for EstimateRequest {
    fn from(args: EstimateArgs) -> Self {
        EstimateRequest::new(args.area, args.floor, args.bedroom, args.region)
    }
}

/// Print the estimate as JSON on stdout
pub async fn run(args: EstimateArgs) -> anyhow::Result<()> {
    let config = super::load_config();
    init_cli_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    let estimate = state.prediction_service.estimate(&args.into()).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&EstimateResponse::from(estimate))?
    );

    Ok(())
}
