use anyhow::{Context, Result};
use clap::Parser;
use gamebox_filetypes::cli::{self, Commands, FileTypesCli};
use gamebox_filetypes::registry::{HandlerOverrides, TypeRegistry};
use tracing::{debug, info};

fn main() -> Result<()> {
    let args = FileTypesCli::parse();

    // Initialize tracing
    let level = match args.verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting gamebox-filetypes v{}", env!("CARGO_PKG_VERSION"));

    let registry = match &args.overrides {
        Some(path) => {
            let overrides = HandlerOverrides::from_file(path)
                .with_context(|| format!("Failed to load overrides from {}", path.display()))?;
            info!("Using {} handler overrides", overrides.len());
            TypeRegistry::install(overrides)?
        }
        None => TypeRegistry::global(),
    };

    match &args.command {
        Commands::Classify { paths } => {
            let reports = cli::classify_paths(registry, paths);
            cli::emit(args.format, &reports, |r| cli::print_classifications(r))?;
        }
        Commands::Sniff { files } => {
            let reports = cli::sniff_files(files);
            cli::emit(args.format, &reports, |r| cli::print_sniff_results(r))?;
        }
        Commands::Check { files } => {
            let reports = cli::check_files(registry, files);
            cli::emit(args.format, &reports, |r| cli::print_compatibility(r))?;
            if reports.iter().any(|report| !report.compatible) {
                std::process::exit(1);
            }
        }
        Commands::Strategy { paths } => {
            let reports = cli::select_strategies(registry, paths);
            cli::emit(args.format, &reports, |r| cli::print_strategies(r))?;
        }
        Commands::OpenWith { file } => {
            let report = cli::open_with(registry, file);
            cli::emit(args.format, &report, cli::print_open_with)?;
        }
        Commands::Scan {
            directory,
            max_depth,
        } => {
            let reports = cli::scan_directory(registry, directory, *max_depth);
            cli::emit(args.format, &reports, |r| cli::print_compatibility(r))?;
        }
    }

    Ok(())
}
