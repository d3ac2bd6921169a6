use amalgamate::{cli::parse_args, logging::init_logging, run_amalgamate};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = parse_args()?;
    init_logging(config.verbosity)?;
    run_amalgamate(config).await?;
    Ok(())
}
