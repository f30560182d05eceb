mod cli;

use cli::Args;
use depsize::config::{discover_config, load_config_from_path, Settings};
use depsize::prelude::*;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "depsize=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(args.overrides(), config)?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let package_index = PyPiPackageIndex::with_options(&settings.index_url, settings.timeout)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CalculateSizeUseCase::new(package_index, progress_reporter);

    let request = SizeRequest::builder()
        .packages(args.packages)
        .normalize_names(settings.normalize_names)
        .build()?;

    let response = use_case.execute(request).await?;

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.reports, &response.metadata)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}
