use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use fra_intake::form::ClaimForm;
use fra_intake::report::export_report;
use fra_intake::{config, extract_fields_detailed};

#[derive(Parser)]
#[command(name = "fra-intake", version, about = "Read FRA claim fields from OCR text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract claim fields from a raw OCR text file ("-" for stdin) and print them as JSON
    Extract {
        file: PathBuf,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Also list which fields were read from the text
        #[arg(long)]
        detailed: bool,
    },
    /// Extract claim fields and write the claim report PDF
    Report {
        file: PathBuf,
        /// Directory for the PDF (defaults to ~/FRA-Intake/exports)
        #[arg(long, env = "FRA_EXPORTS_DIR")]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    fra_intake::init_tracing();
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();
    match cli.command {
        Command::Extract {
            file,
            pretty,
            detailed,
        } => {
            let text = read_raw_text(&file)?;
            let extraction = extract_fields_detailed(&text);
            let json = match (detailed, pretty) {
                (true, true) => serde_json::to_string_pretty(&extraction)?,
                (true, false) => serde_json::to_string(&extraction)?,
                (false, true) => serde_json::to_string_pretty(&extraction.fields)?,
                (false, false) => serde_json::to_string(&extraction.fields)?,
            };
            println!("{json}");
        }
        Command::Report { file, out_dir } => {
            let text = read_raw_text(&file)?;
            let mut form = ClaimForm::new();
            form.apply_extraction(extract_fields_detailed(&text).fields);

            let dir = out_dir.unwrap_or_else(config::exports_dir);
            let path = export_report(&form, &dir)
                .with_context(|| format!("writing claim report to {}", dir.display()))?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn read_raw_text(file: &Path) -> anyhow::Result<String> {
    if file == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading OCR text from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}
