//! CLI entry point for contrast-check.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};

use contrast_check::cli::{Cli, FormatArg};
use contrast_check::config::AuditConfig;
use contrast_check::logging::init_logging;
use contrast_check::render::{render_json, render_text};
use contrast_check::report::{Report, attach_suggestions, run_report};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref(), Some(&cli.log_level));

    let config = match &cli.config {
        Some(path) => AuditConfig::load(path)
            .wrap_err_with(|| format!("Failed to load config from {}", path.display()))?,
        None => AuditConfig::builtin(),
    };

    let registry = config
        .build_registry()
        .wrap_err("Failed to build palette registry")?;
    let candidates = config
        .candidates()
        .wrap_err("Failed to parse alternative candidates")?;

    let mut reports: Vec<Report> = Vec::new();
    for variant in cli.variant.variants() {
        let specs = config.check_specs(variant);
        let mut report = run_report(&registry, variant, &specs);
        if cli.suggest {
            attach_suggestions(&mut report, &registry, &candidates);
        }
        reports.push(report);
    }

    match cli.format {
        FormatArg::Text => {
            for report in &reports {
                print!("{}", render_text(report));
            }
        }
        FormatArg::Json => {
            let json = render_json(&reports).wrap_err("Failed to serialize reports")?;
            println!("{json}");
        }
    }

    if cli.strict && reports.iter().any(Report::has_defects) {
        bail!("Contrast audit failed");
    }

    Ok(())
}
