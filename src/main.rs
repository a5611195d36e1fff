use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use template_copier::config::toml_config::TomlConfig;
use template_copier::utils::{logger, validation::Validate};
use template_copier::{CliArgs, CopierError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match try_main(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Template copy failed: {:#}", e);
            eprintln!("Error: {:#}", e);

            let code = e
                .downcast_ref::<CopierError>()
                .map(CopierError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn try_main(args: CliArgs) -> anyhow::Result<()> {
    let file = match &args.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)
                .with_context(|| format!("loading config file {}", path.display()))?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    logger::init_logger(args.verbose(file.as_ref()), args.log_format(file.as_ref()));
    tracing::debug!("CLI args: {:?}", args);

    let config = args.copier_config(file.as_ref());
    config.validate()?;
    tracing::debug!(
        "Copying {} -> {}",
        config.template_path.display(),
        config.target_path.display()
    );

    let report = template_copier::run(config).await?;
    println!("{}", report);

    Ok(())
}
