use mlprep::{init_tracing, DataIngestion, LoggingConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let log_path = init_tracing(&LoggingConfig::default())?;
    info!(log_path = ?log_path, "Logging initialized");

    let ingestion = DataIngestion::new();
    let (train_path, test_path) = ingestion.initiate_data_ingestion()?;

    println!("{}", train_path.display());
    println!("{}", test_path.display());

    Ok(())
}
