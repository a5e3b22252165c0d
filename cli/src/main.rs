//! markpage CLI - tagged Markdown to paginated PDF worksheets

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use markpage::{
    export_raw, export_views, strip_known_tags, Audience, BlockScanner, ExportOptions, PageStyle,
    RawDocument,
};

#[derive(Parser)]
#[command(name = "markpage")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export tagged Markdown worksheets to paginated PDFs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export both student and teacher views
    Export {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Document title (defaults to the file stem)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Export a single audience view
    #[command(alias = "view")]
    Single {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Audience to export for
        #[arg(value_enum)]
        audience: AudienceArg,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title (defaults to the file stem)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Dump the scanned block structure as JSON
    Blocks {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Audience whose selection policy to apply
        #[arg(value_enum, default_value = "student")]
        audience: AudienceArg,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the text with known tags stripped (screen display form)
    Display {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AudienceArg {
    Student,
    Teacher,
}

impl From<AudienceArg> for Audience {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::Student => Audience::Student,
            AudienceArg::Teacher => Audience::Teacher,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            title,
        } => cmd_export(&input, output.as_deref(), title),
        Commands::Single {
            input,
            audience,
            output,
            title,
        } => cmd_single(&input, audience.into(), output.as_deref(), title),
        Commands::Blocks {
            input,
            audience,
            compact,
        } => cmd_blocks(&input, audience.into(), compact),
        Commands::Display { input } => cmd_display(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "worksheet".to_string())
}

fn read_input(input: &Path) -> markpage::Result<String> {
    Ok(fs::read_to_string(input)?)
}

fn cmd_export(input: &Path, output: Option<&Path>, title: Option<String>) -> markpage::Result<()> {
    let text = read_input(input)?;
    let stem = file_stem(input);
    let title = title.unwrap_or_else(|| stem.clone());

    let dir = output.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let base = dir.join(&stem);
    let base = base.to_string_lossy().into_owned();

    export_views(&text, &title, &base, &PageStyle::default())?;
    for audience in [Audience::Student, Audience::Teacher] {
        println!(
            "{} {}_{}.pdf",
            "created".green().bold(),
            base,
            audience.file_suffix()
        );
    }
    Ok(())
}

fn cmd_single(
    input: &Path,
    audience: Audience,
    output: Option<&Path>,
    title: Option<String>,
) -> markpage::Result<()> {
    let text = read_input(input)?;
    let stem = file_stem(input);
    let title = title.unwrap_or_else(|| stem.clone());

    let source = audience
        .select_source(&text)
        .ok_or(markpage::Error::NoContent)?;
    let name = match output {
        Some(path) => path.to_string_lossy().into_owned(),
        None => format!("{}_{}.pdf", stem, audience.file_suffix()),
    };

    let options = ExportOptions::for_audience(audience);
    let doc = RawDocument::new(source, title, name);
    export_raw(&doc, &options)?;
    println!("{} {}", "created".green().bold(), doc.output_name);
    Ok(())
}

fn cmd_blocks(input: &Path, audience: Audience, compact: bool) -> markpage::Result<()> {
    let text = read_input(input)?;
    let source = audience
        .select_source(&text)
        .ok_or(markpage::Error::NoContent)?;
    let blocks = BlockScanner::new()
        .with_forced_breaks(audience.forces_page_breaks())
        .scan(&source);

    let json = if compact {
        serde_json::to_string(&blocks)
    } else {
        serde_json::to_string_pretty(&blocks)
    }
    .map_err(|e| markpage::Error::Other(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn cmd_display(input: &Path) -> markpage::Result<()> {
    let text = read_input(input)?;
    println!("{}", strip_known_tags(&text));
    Ok(())
}
