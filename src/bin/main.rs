use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use log::{debug, error};
use nrclex::persistence::{save_analysis, save_lexicon};
use nrclex::{AnalyzerConfig, Analysis, EmotionAnalyzer, Result};
use std::io::{stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const BAR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "nrclex", version, about = "Emotion affect profile of text using the NRC lexicon")]
struct Cli {
    /// Lexicon JSON file (word -> list of emotion labels). Defaults to the bundled lexicon.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Path to config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the full analysis as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Also write the JSON analysis to this file
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize raw text and analyze it.
    Text {
        /// Text to analyze
        text: String,
    },
    /// Analyze pre-tokenized words, used verbatim.
    Tokens {
        /// Tokens, already in lexicon casing
        tokens: Vec<String>,
    },
    /// Write the resolved lexicon to a JSON file.
    ExportLexicon {
        /// Destination file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    }
    .with_env_overrides();
    if cli.lexicon.is_some() {
        config.lexicon = cli.lexicon.clone();
    }
    debug!("effective config: {config:?}");

    let analyzer = EmotionAnalyzer::from_config(&config)?;

    let analysis = match cli.command {
        Commands::Text { text } => analyzer.load_raw_text(&text)?,
        Commands::Tokens { tokens } => analyzer.load_token_list(tokens),
        Commands::ExportLexicon { path } => {
            save_lexicon(analyzer.lexicon(), &path)?;
            println!(
                "Lexicon ({} words) saved to '{}'",
                analyzer.lexicon().len(),
                path.display()
            );
            return Ok(());
        }
    };

    if let Some(path) = &cli.output {
        save_analysis(&analysis, path, config.pretty)?;
    }

    if cli.json {
        let rendered = if config.pretty {
            serde_json::to_string_pretty(&analysis)?
        } else {
            serde_json::to_string(&analysis)?
        };
        println!("{rendered}");
    } else {
        print_summary(&analysis)?;
    }
    Ok(())
}

fn print_summary(analysis: &Analysis) -> Result<()> {
    let mut out = stdout().lock();

    writeln!(
        out,
        "Words: {}  Matched: {}  Labels triggered: {}",
        analysis.words.len(),
        analysis.affect_dict().len(),
        analysis.total_matches()
    )?;
    if !analysis.sentences.is_empty() {
        writeln!(out, "Sentences: {}", analysis.sentences.len())?;
    }
    writeln!(out)?;

    let top = analysis.top_emotion_labels();
    for (label, value) in analysis.affect_frequencies().iter() {
        let filled = (value * BAR_WIDTH as f64).round() as usize;
        let bar = format!("{:<width$}", "#".repeat(filled), width = BAR_WIDTH);
        let count = analysis.raw_emotion_scores().get(label).copied().unwrap_or(0);
        let line = format!("{label:>13} {bar} {value:>6.3} ({count})");
        if analysis.has_matches() && top.contains(&label) {
            writeln!(out, "{}", line.green().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    writeln!(out)?;
    if analysis.has_matches() {
        writeln!(out, "Top emotions: {}", top.join(", "))?;
    } else {
        writeln!(out, "{}", "No lexicon matches.".yellow())?;
    }
    out.flush()?;
    Ok(())
}
