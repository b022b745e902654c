//! CLI entrypoint for dorkforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use dorkforge_application::{
    BatchDorks, BrowseTemplatesUseCase, GenerateDorksUseCase, InspectQueryUseCase,
    LoadCatalogUseCase, NoProgress,
};
use dorkforge_domain::{Severity, TemplateCatalog};
use dorkforge_infrastructure::{ConfigLoader, FileConfig, source_for};
use dorkforge_presentation::{
    Cli, Command, ExportFormat, ExportMetadata, GenerateArgs, OutputFormatter, ProgressReporter,
    exporter_for, formatter_for,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting dorkforge");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    report_config_issues(&file_config)?;

    // === Dependency Injection ===
    let engine_config = file_config.to_engine_config()?;
    let engine = Arc::new(engine_config.build_engine());
    let output_format = file_config.output.resolve_format(cli.json);
    let formatter = formatter_for(output_format);
    let templates_path = cli
        .templates
        .clone()
        .or_else(|| file_config.templates.path.clone());

    match command {
        Command::Validate { query } => {
            let inspect = InspectQueryUseCase::new(engine);
            println!("{}", formatter.query_report(&inspect.validate(query)));
        }
        Command::Explain { query } => {
            let inspect = InspectQueryUseCase::new(engine);
            println!("{}", formatter.explanation(query, &inspect.explain(query)));
        }
        Command::Permute { query } => {
            let inspect = InspectQueryUseCase::new(engine);
            println!("{}", formatter.variations(query, &inspect.permute(query)));
        }
        Command::Sanitize { text } => {
            let inspect = InspectQueryUseCase::new(engine);
            println!("{}", formatter.sanitize_report(&inspect.sanitize(text)));
        }
        Command::Combine { queries } => {
            let inspect = InspectQueryUseCase::new(engine);
            println!("{}", formatter.combine_report(&inspect.combine(queries)));
        }
        Command::Categories => {
            let browse = BrowseTemplatesUseCase::new(load_catalog(templates_path)?);
            println!("{}", formatter.categories(&browse.list()));
        }
        Command::Show { category } => {
            let browse = BrowseTemplatesUseCase::new(load_catalog(templates_path)?);
            println!("{}", formatter.category_detail(&browse.show(category)?));
        }
        Command::Search { keyword } => {
            let browse = BrowseTemplatesUseCase::new(load_catalog(templates_path)?);
            println!("{}", formatter.template_matches(keyword, &browse.search(keyword)));
        }
        Command::Generate(args) => {
            let catalog = load_catalog(templates_path)?;
            let use_case = GenerateDorksUseCase::new(catalog, engine, engine_config);
            let show_progress = !cli.quiet && !output_format.is_json() && file_config.output.progress;
            let batch = generate(&use_case, args, show_progress);

            if batch.results.is_empty() {
                bail!(
                    "No dorks generated: unknown categories {}",
                    batch.skipped.join(", ")
                );
            }

            write_generated(&batch, args, formatter.as_ref())?;
        }
    }

    Ok(())
}

/// Print configuration issues; any error-level issue aborts
fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        let label = match issue.severity {
            Severity::Error => "config error:".red().bold(),
            Severity::Warning => "config warning:".yellow().bold(),
        };
        eprintln!("{} {}", label, issue.message);
    }

    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<Arc<TemplateCatalog>> {
    let source = source_for(path.as_deref());
    debug!("Template source: {}", source.describe());
    let catalog = LoadCatalogUseCase::new(source).execute()?;
    Ok(Arc::new(catalog))
}

fn generate(use_case: &GenerateDorksUseCase, args: &GenerateArgs, show_progress: bool) -> BatchDorks {
    let request = args.to_request();
    if show_progress {
        let reporter = ProgressReporter::new();
        let batch = use_case.execute_batch(&args.categories, &request, &reporter);
        reporter.finish();
        batch
    } else {
        use_case.execute_batch(&args.categories, &request, &NoProgress)
    }
}

/// Export format from `--export`, else from the output file's extension
fn export_format(args: &GenerateArgs) -> Option<ExportFormat> {
    args.export.or_else(|| {
        let extension = args.output_file.as_ref()?.extension()?.to_str()?;
        ExportFormat::from_str(extension, true).ok()
    })
}

fn write_generated(
    batch: &BatchDorks,
    args: &GenerateArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let Some(format) = export_format(args) else {
        if args.output_file.is_some() {
            bail!("Cannot infer export format from output file; use --export");
        }
        println!("{}", formatter.batch(batch));
        return Ok(());
    };

    let exporter = exporter_for(format);
    let metadata = ExportMetadata::new(args.domain.clone(), args.keyword.clone());

    match &args.output_file {
        Some(path) => {
            exporter
                .export_to_file(&batch.results, &metadata, path)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            eprintln!(
                "{} {} dorks to {}",
                "Exported".green().bold(),
                batch.total_count,
                path.display()
            );
        }
        None => print!("{}", exporter.export(&batch.results, &metadata)?),
    }
    Ok(())
}
