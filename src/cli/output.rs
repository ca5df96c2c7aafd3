use anyhow::Result;
use serde::Serialize;

use crate::cli::commands::{
    ClassificationReport, CompatibilityReport, OpenWithReport, SniffReport, StrategyReport,
};
use crate::cli::options::OutputFormat;
use crate::types::ExecutableType;

/// Print `reports` as pretty JSON, or through `text` otherwise
pub fn emit<T: Serialize>(format: OutputFormat, reports: &T, text: impl FnOnce(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => text(reports),
    }
    Ok(())
}

pub fn print_classifications(reports: &[ClassificationReport]) {
    for report in reports {
        let kind = if report.is_directory { "📁" } else { "📄" };
        println!("{} {}", kind, report.path.display());
        println!("  • Category: {}", report.category);
        if let Some(identifier) = report.identifier {
            println!("  • Identifier: {}", identifier);
        }
        if !report.derived_sets.is_empty() {
            println!("  • Type sets: {}", report.derived_sets.join(", "));
        }
    }
}

pub fn print_sniff_results(reports: &[SniffReport]) {
    for report in reports {
        match (&report.header, &report.error) {
            (Some(header), _) => {
                let icon = match header.executable_type {
                    ExecutableType::Dos => "✅",
                    ExecutableType::Unknown => "❓",
                    ExecutableType::Windows | ExecutableType::Os2 => "⚠️ ",
                };
                println!(
                    "{} {}: {}",
                    icon,
                    report.path.display(),
                    header.executable_type
                );
                println!(
                    "  • Relocation table offset: {:#06x}",
                    header.relocation_table_offset
                );
                if let Some(offset) = header.extended_header_offset {
                    println!("  • Extended header offset: {:#010x}", offset);
                }
                if let Some(signature) = header.extended_signature {
                    println!("  • Extended signature: {:?}", signature);
                }
            }
            (None, Some(error)) => {
                println!("❌ {}: {} (code {})", report.path.display(), error.kind, error.code);
                println!("  • {}", error.message);
            }
            (None, None) => println!("❓ {}: no result", report.path.display()),
        }
    }
}

pub fn print_compatibility(reports: &[CompatibilityReport]) {
    if reports.is_empty() {
        println!("No programs found");
        return;
    }

    for report in reports {
        if report.compatible {
            println!("✅ {}: runs under DOS emulation", report.path.display());
        } else {
            println!("❌ {}: not compatible", report.path.display());
            if let Some(error) = &report.error {
                println!("  • {}", error.message);
            }
        }
    }

    let compatible = reports.iter().filter(|r| r.compatible).count();
    println!();
    println!("📊 {}/{} compatible", compatible, reports.len());
}

pub fn print_strategies(reports: &[StrategyReport]) {
    for report in reports {
        match (&report.strategy, &report.error) {
            (Some(strategy), _) => println!("🔧 {}: {}", report.path.display(), strategy),
            (None, Some(error)) => println!("❌ {}: {}", report.path.display(), error),
            (None, None) => println!("❓ {}: no strategy", report.path.display()),
        }
    }
}

pub fn print_open_with(report: &OpenWithReport) {
    match &report.application {
        Some(application) => println!("{}: {}", report.path.display(), application),
        None => println!("{}: platform default", report.path.display()),
    }
}
