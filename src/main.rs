use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexcheck::{
    config::Config,
    constants::{find_contract_type, ContractType, CONTRACT_TYPES},
    extractor::SourceFactory,
    gateway::GeminiProvider,
    ocr::TesseractOcr,
    service::Analyzer,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lexcheck")]
#[command(about = "Legal-document assistant — spell-check, risk-score and compare contracts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check spelling and document format
    Check {
        /// Contract file (.docx, .pdf or image)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Contract type id (see `lexcheck types`)
        #[arg(long, default_value = "general")]
        contract_type: String,
    },
    /// Score legal risk and collect per-clause feedback
    Evaluate {
        /// Contract file (.docx, .pdf or image)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Contract type id (see `lexcheck types`)
        #[arg(long, default_value = "general")]
        contract_type: String,
    },
    /// Compare two documents for matching passages
    Compare {
        #[arg(value_name = "FILE1")]
        file1: PathBuf,
        #[arg(value_name = "FILE2")]
        file2: PathBuf,
    },
    /// Look up current regulations for a contract type
    Details {
        /// Contract type id (see `lexcheck types`)
        #[arg(value_name = "CONTRACT_TYPE")]
        contract_type: String,
    },
    /// Recognize text in an image or scanned document
    Ocr {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Extract plain text from a document without calling the model
    Extract {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List the known contract types
    Types,
}

/// Extract a file's text using the configured OCR engine and PDF threshold
async fn extract_text(path: &Path, config: &Config) -> Result<String> {
    let ocr = Arc::new(TesseractOcr::from_config(config));
    let source = SourceFactory::create(
        path.to_path_buf(),
        ocr,
        config.extract.min_pdf_text_chars,
    )?;
    source
        .to_text()
        .await
        .with_context(|| format!("Failed to extract text from {}", path.display()))
}

fn resolve_contract_type(id: &str) -> Result<&'static ContractType> {
    find_contract_type(id).with_context(|| {
        format!(
            "Unknown contract type '{}'. Run `lexcheck types` for the list of ids.",
            id
        )
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Commands::Check {
            file,
            contract_type,
        } => {
            let contract = resolve_contract_type(&contract_type)?;
            let analyzer = Analyzer::new(Arc::new(GeminiProvider::from_config(&config)?));

            println!("Extracting text from {}", file.display());
            let text = extract_text(&file, &config).await?;

            println!("Checking spelling and format ({})", contract.name);
            let result = analyzer.check_spelling(&text, contract.name).await?;
            print_json(&result)?;
        }
        Commands::Evaluate {
            file,
            contract_type,
        } => {
            let contract = resolve_contract_type(&contract_type)?;
            let analyzer = Analyzer::new(Arc::new(GeminiProvider::from_config(&config)?));

            println!("Extracting text from {}", file.display());
            let text = extract_text(&file, &config).await?;

            println!("Evaluating legal risks ({})", contract.name);
            let result = analyzer.evaluate_legality(&text, contract.name).await?;
            print_json(&result)?;
        }
        Commands::Compare { file1, file2 } => {
            let analyzer = Analyzer::new(Arc::new(GeminiProvider::from_config(&config)?));

            println!("Extracting text from {}", file1.display());
            let text1 = extract_text(&file1, &config).await?;
            println!("Extracting text from {}", file2.display());
            let text2 = extract_text(&file2, &config).await?;

            println!("Comparing documents");
            let result = analyzer.compare_documents(&text1, &text2).await?;
            print_json(&result)?;
        }
        Commands::Details { contract_type } => {
            let contract = resolve_contract_type(&contract_type)?;
            let analyzer = Analyzer::new(Arc::new(GeminiProvider::from_config(&config)?));

            let result = analyzer.contract_details(contract.name).await?;
            println!("{}", result.details);
        }
        Commands::Ocr { file } => {
            // Pure extraction; no model call involved
            let text = extract_text(&file, &config).await?;
            print_json(&lexcheck::models::OcrResult { text })?;
        }
        Commands::Extract { file } => {
            let text = extract_text(&file, &config).await?;
            println!("{}", text);
        }
        Commands::Types => {
            for ct in CONTRACT_TYPES {
                println!("{:<20} {}", ct.id, ct.name);
            }
        }
    }

    Ok(())
}
