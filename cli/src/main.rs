//! pdfsift CLI - batch driver for outline extraction and collection ranking

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfsift::{
    CollectionConfig, JsonFormat, OutlineExtractor, OutlineOptions, RankOptions, RelevanceRanker,
};

/// Name of the configuration file that marks a collection directory.
const COLLECTION_CONFIG: &str = "input.json";

/// Subdirectory of a collection that holds its PDF files.
const COLLECTION_PDF_DIR: &str = "PDFs";

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(version)]
#[command(about = "Extract PDF outlines and rank collection pages by relevance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a heading outline from a PDF file or every PDF in a directory
    Outline {
        /// Input PDF file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory for the per-document JSON files
        /// (defaults to the input directory; stdout for a single file)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Minimum span length considered for heading analysis
        #[arg(long, default_value = "4")]
        min_heading_length: usize,

        /// Maximum number of heading levels to infer
        #[arg(long, default_value = "3")]
        max_levels: usize,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Rank collection pages against their persona/task configuration
    Rank {
        /// Base directory containing collection subdirectories
        /// (each with an input.json and a PDFs/ folder)
        #[arg(value_name = "DIR")]
        base: PathBuf,

        /// Maximum number of ranked sections in the output
        #[arg(long, default_value = "5")]
        max_sections: usize,

        /// Maximum snippet length in characters
        #[arg(long, default_value = "500")]
        max_text_length: usize,

        /// A page qualifies when its score is strictly above this
        #[arg(long, default_value = "1")]
        threshold: u32,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline {
            input,
            output,
            min_heading_length,
            max_levels,
            compact,
        } => {
            let options = OutlineOptions::new()
                .with_min_heading_length(min_heading_length)
                .with_max_heading_levels(max_levels);
            let format = json_format(compact);
            cmd_outline(&input, output.as_deref(), options, format)
        }
        Commands::Rank {
            base,
            max_sections,
            max_text_length,
            threshold,
            compact,
        } => {
            let options = RankOptions::new()
                .with_max_sections(max_sections)
                .with_max_text_length(max_text_length)
                .with_score_threshold(threshold);
            let format = json_format(compact);
            cmd_rank(&base, options, format)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    options: OutlineOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = OutlineExtractor::with_options(options);

    if input.is_file() {
        return outline_single(&extractor, input, output, format);
    }

    let pdf_files = discover_pdfs(input)?;
    if pdf_files.is_empty() {
        println!("{} no PDF files found in {}", "Note:".yellow(), input.display());
        return Ok(());
    }

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| input.to_path_buf());
    fs::create_dir_all(&output_dir)?;

    println!(
        "{} {} PDF files to process",
        "Found".cyan().bold(),
        pdf_files.len()
    );

    let pb = ProgressBar::new(pdf_files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut successful = 0;
    let mut failed = 0;

    for pdf_file in &pdf_files {
        let name = pdf_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match extractor.extract_file(pdf_file) {
            Ok(Some(outline)) => {
                let stem = pdf_file.file_stem().unwrap_or_default().to_string_lossy();
                let out_path = output_dir.join(format!("{}.json", stem));
                match pdfsift::json::write_json(&out_path, &outline, format) {
                    Ok(()) => {
                        log::info!("{}: {} headings", name, outline.headings_found);
                        successful += 1;
                    }
                    Err(e) => {
                        log::error!("failed to write output for {}: {}", name, e);
                        failed += 1;
                    }
                }
            }
            Ok(None) => {
                log::warn!("no outline extractable from {}", name);
                failed += 1;
            }
            Err(e) => {
                log::error!("failed to process {}: {}", name, e);
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    println!("\n{}", "Processing complete:".green().bold());
    println!("  {} {}", "Successful:".bold(), successful);
    println!("  {} {}", "Failed:".bold(), failed);
    println!("  {} {}", "Output directory:".bold(), output_dir.display());

    if successful == 0 && failed > 0 {
        return Err("all documents failed".into());
    }
    Ok(())
}

fn outline_single(
    extractor: &OutlineExtractor,
    input: &Path,
    output: Option<&Path>,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match extractor.extract_file(input)? {
        Some(outline) => {
            let json = pdfsift::json::to_json(&outline, format)?;
            if let Some(dir) = output {
                fs::create_dir_all(dir)?;
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                let out_path = dir.join(format!("{}.json", stem));
                fs::write(&out_path, &json)?;
                println!("{} {}", "Saved to".green(), out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }
        None => Err(format!("no outline extractable from {}", input.display()).into()),
    }
}

fn cmd_rank(
    base: &Path,
    options: RankOptions,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let collections = discover_collections(base)?;
    if collections.is_empty() {
        return Err(format!(
            "no collections found in {} (expected subdirectories with {})",
            base.display(),
            COLLECTION_CONFIG
        )
        .into());
    }

    println!(
        "{} {} collection(s) to process",
        "Found".cyan().bold(),
        collections.len()
    );

    let ranker = RelevanceRanker::with_options(options);
    let mut successful = 0;
    let mut failed = 0;

    for collection in &collections {
        let name = collection
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{} {}", "Processing".cyan(), name);

        match rank_one(&ranker, collection, format) {
            Ok(sections) => {
                println!("  {} {} ranked section(s)", "OK".green().bold(), sections);
                successful += 1;
            }
            Err(e) => {
                log::error!("failed to process collection {}: {}", name, e);
                println!("  {} {}", "Failed:".red().bold(), e);
                failed += 1;
            }
        }
    }

    println!("\n{}", "Processing complete:".green().bold());
    println!("  {} {}/{}", "Successful:".bold(), successful, collections.len());

    if successful == 0 && failed > 0 {
        return Err("all collections failed".into());
    }
    Ok(())
}

fn rank_one(
    ranker: &RelevanceRanker,
    collection: &Path,
    format: JsonFormat,
) -> Result<usize, Box<dyn std::error::Error>> {
    let config = CollectionConfig::load(collection.join(COLLECTION_CONFIG))?;
    let pdf_dir = collection.join(COLLECTION_PDF_DIR);

    let result = ranker.rank_collection(&config, &pdf_dir);
    let count = result.extracted_sections.len();

    pdfsift::json::write_json(collection.join("output.json"), &result, format)?;
    Ok(count)
}

/// All *.pdf files directly inside a directory, sorted by name.
fn discover_pdfs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Subdirectories that carry a collection configuration, sorted by name.
/// The base directory itself counts when it carries one.
fn discover_collections(base: &Path) -> std::io::Result<Vec<PathBuf>> {
    if base.join(COLLECTION_CONFIG).is_file() {
        return Ok(vec![base.to_path_buf()]);
    }

    let mut dirs: Vec<PathBuf> = fs::read_dir(base)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && path.join(COLLECTION_CONFIG).is_file())
        .collect();
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_discover_pdfs_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(dir.path().join("a.PDF"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let files = discover_pdfs(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_discover_collections() {
        let base = tempfile::tempdir().unwrap();

        let col1 = base.path().join("Collection 1");
        fs::create_dir(&col1).unwrap();
        let mut f = fs::File::create(col1.join(COLLECTION_CONFIG)).unwrap();
        f.write_all(b"{}").unwrap();

        // Directory without a config is not a collection
        fs::create_dir(base.path().join("misc")).unwrap();

        let found = discover_collections(base.path()).unwrap();
        assert_eq!(found, vec![col1]);
    }

    #[test]
    fn test_base_dir_as_collection() {
        let base = tempfile::tempdir().unwrap();
        fs::write(base.path().join(COLLECTION_CONFIG), b"{}").unwrap();

        let found = discover_collections(base.path()).unwrap();
        assert_eq!(found, vec![base.path().to_path_buf()]);
    }
}
