//! paperback CLI - print-ready paperback PDFs from .docx and Markdown

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paperback::layout::prompt_stdin;
use paperback::{
    ChromeRenderer, LayoutInput, LayoutParams, OutputMode, PageTemplate, Paperback,
    PaperbackResult, ReaderRegistry, RenderOptions, Typography, UnknownStylePolicy,
};

const USAGE: &str = "Usage: paperback <INPUT> <OUTPUT.pdf>";

#[derive(Parser)]
#[command(name = "paperback")]
#[command(version)]
#[command(about = "Turn a .docx or .md manuscript into a print-ready paperback PDF", long_about = None)]
struct Cli {
    /// Input manuscript (.docx or .md)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF file
    #[arg(value_name = "OUTPUT.pdf")]
    output: PathBuf,

    /// Render the first level-1 heading as a separate title page, or everything in one pass
    #[arg(long, value_enum, default_value = "split")]
    mode: Mode,

    /// Read layout values from a JSON file
    #[arg(long, value_name = "FILE.json")]
    layout: Option<PathBuf>,

    /// Trim width in inches
    #[arg(long, value_name = "IN", env = "PAPERBACK_TRIM_WIDTH")]
    width: Option<f64>,

    /// Trim height in inches
    #[arg(long, value_name = "IN", env = "PAPERBACK_TRIM_HEIGHT")]
    height: Option<f64>,

    /// Enable bleed (true/false)
    #[arg(long, value_name = "BOOL", env = "PAPERBACK_BLEED", value_parser = parse_bool)]
    bleed: Option<bool>,

    /// Inside gutter in inches
    #[arg(long, value_name = "IN", env = "PAPERBACK_GUTTER")]
    gutter: Option<f64>,

    /// Outside margin in inches
    #[arg(long, value_name = "IN", env = "PAPERBACK_MARGIN")]
    margin: Option<f64>,

    /// Body font size in points
    #[arg(long, value_name = "PT", env = "PAPERBACK_FONT_SIZE")]
    font_size: Option<f64>,

    /// Font family for all text
    #[arg(long, value_name = "NAME", env = "PAPERBACK_FONT_FAMILY")]
    font_family: Option<String>,

    /// Leave out paragraphs whose style has no mapping instead of rendering them as body text
    #[arg(long)]
    drop_unknown_styles: bool,

    /// Use defaults for missing layout values instead of prompting
    #[arg(short = 'y', long)]
    defaults: bool,

    /// Chrome or Chromium executable
    #[arg(long, value_name = "PATH", env = "PAPERBACK_CHROME")]
    chrome: Option<PathBuf>,

    /// Run the browser without its sandbox
    #[arg(long)]
    no_sandbox: bool,

    /// Also write the generated HTML pages into DIR
    #[arg(long, value_name = "DIR")]
    emit_html: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Title page rendered separately and prepended
    Split,
    /// One document, one render
    Single,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Split => OutputMode::Split,
            Mode::Single => OutputMode::Single,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected true or false, got {:?}", value))
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", USAGE.yellow());
                println!("       paperback --help for more information");
                process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Reject unknown formats before reading or prompting
    ReaderRegistry::with_defaults().reader_for(&cli.input)?;

    let mut typography = Typography::default();
    if let Some(ref family) = cli.font_family {
        typography = typography.with_font_family(family.as_str());
    }
    let policy = if cli.drop_unknown_styles {
        UnknownStylePolicy::Drop
    } else {
        UnknownStylePolicy::Paragraph
    };

    let result = Paperback::new()
        .with_mode(cli.mode.into())
        .with_unknown_styles(policy)
        .with_typography(typography)
        .read(&cli.input)?;
    report_unmapped_styles(&result, cli.drop_unknown_styles);

    let layout = collect_layout(cli)?;
    log::info!("layout: {:?}", layout);

    if let Some(ref dir) = cli.emit_html {
        emit_html(&result, &layout, dir)?;
    }

    let mut options = RenderOptions::new().with_sandbox(!cli.no_sandbox);
    if let Some(ref chrome) = cli.chrome {
        options = options.with_chrome_path(chrome);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let rendered = render(&result, &layout, &options, &cli.output, &pb);
    pb.finish_and_clear();
    rendered?;

    println!(
        "{} {}",
        "PDF successfully created:".green().bold(),
        cli.output.display()
    );
    Ok(())
}

fn render(
    result: &PaperbackResult,
    layout: &LayoutParams,
    options: &RenderOptions,
    output: &Path,
    pb: &ProgressBar,
) -> paperback::Result<()> {
    pb.set_message("Starting Chrome...");
    let renderer = ChromeRenderer::launch(options)?;

    pb.set_message("Rendering PDF...");
    result.write_pdf(layout, &renderer, output)
}

/// Layout from the JSON file, overridden by flags, then prompted or defaulted.
fn collect_layout(cli: &Cli) -> paperback::Result<LayoutParams> {
    let from_file = match cli.layout {
        Some(ref path) => LayoutInput::from_path(path)?,
        None => LayoutInput::new(),
    };
    let from_flags = LayoutInput {
        trim_width: cli.width,
        trim_height: cli.height,
        bleed: cli.bleed,
        inside_gutter: cli.gutter,
        outside_margin: cli.margin,
        font_size: cli.font_size,
    };
    let preset = from_file.merge(from_flags);

    if cli.defaults || preset.is_complete() {
        preset.resolve()
    } else {
        prompt_stdin(&preset)
    }
}

fn report_unmapped_styles(result: &PaperbackResult, dropped: bool) {
    let action = if dropped {
        "left out"
    } else {
        "rendered as body text"
    };
    for (style, count) in &result.report().unmapped_styles {
        eprintln!(
            "{}: {} paragraph(s) with unmapped style \"{}\" {}",
            "Warning".yellow().bold(),
            count,
            style,
            action
        );
    }
}

fn emit_html(
    result: &PaperbackResult,
    layout: &LayoutParams,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    for document in result.html_documents(layout)? {
        let name = match document.template {
            PageTemplate::TitlePage => "title.html",
            PageTemplate::Body => "body.html",
        };
        let path = dir.join(name);
        fs::write(&path, &document.html)?;
        println!("{} {}", "Saved".green(), path.display());
    }

    Ok(())
}
