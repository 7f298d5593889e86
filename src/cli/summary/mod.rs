//! Summary command - prints the numeric column statistics

use crate::api::types::SummaryResponse;
use crate::infrastructure::logging::init_cli_logging;

/// Print the summary table as JSON on stdout
pub async fn run() -> anyhow::Result<()> {
    let config = super::load_config();
    init_cli_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    let columns = state.analytics_service.summary_table().await?;

    println!("{}", serde_json::to_string_pretty(&SummaryResponse { columns })?);

    Ok(())
}
