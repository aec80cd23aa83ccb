use std::process::ExitCode;

use crate::prelude::*;

async fn run_signin(cli_args: CliArgs) -> Result<RunReport, CliError> {
    let settings = Settings::try_from(cli_args)?;
    info!(
        "Sending signin to {} on chain {} through {}, {} iterations, pause {}",
        settings.contract_address(),
        settings.chain_id(),
        settings.node_url(),
        settings.iterations(),
        settings.pause()
    );
    let mut runner = SigninRunner::bootstrap(&settings).await?;
    runner.run().await.map_err(CliError::CoreError)
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    if let Err(e) = init_logging(cli_args.log_level()) {
        eprintln!("💥 {e}");
        return ExitCode::FAILURE;
    }

    match run_signin(cli_args).await {
        Ok(report) => {
            info!(
                "{} ran successfully, {} transactions sent",
                BINARY_NAME,
                report.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}
