//! postfmt CLI - post formatting tool

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use postfmt::{Document, FormatOptions, JsonFormat, NumberingMode, Platform};

#[derive(Parser)]
#[command(name = "postfmt")]
#[command(version)]
#[command(about = "Reformat text for Telegram and LinkedIn posts", long_about = None)]
struct Cli {
    /// Input text file ("-" or omitted for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Target platform
    #[arg(short, long, value_enum, env = "POSTFMT_PLATFORM")]
    platform: Option<PlatformArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format text for a platform
    #[command(alias = "fmt")]
    Format {
        /// Input text file ("-" or omitted for stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Target platform
        #[arg(short, long, value_enum, env = "POSTFMT_PLATFORM")]
        platform: PlatformArg,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Numbering behavior across paragraphs
        #[arg(long, value_enum, default_value = "carry-over")]
        numbering: NumberingArg,

        /// Normalize input to Unicode NFC first
        #[arg(long)]
        nfc: bool,

        /// Print formatting statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Show how each line is classified, as JSON
    Classify {
        /// Input text file ("-" or omitted for stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    /// Telegram message (bold headings)
    Telegram,
    /// LinkedIn post (uppercase headings)
    Linkedin,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Telegram => Platform::Telegram,
            PlatformArg::Linkedin => Platform::LinkedIn,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum NumberingArg {
    /// Continue numbering after paragraphs with bare markers (default)
    CarryOver,
    /// Restart numbering in every paragraph
    PerParagraph,
}

impl From<NumberingArg> for NumberingMode {
    fn from(arg: NumberingArg) -> Self {
        match arg {
            NumberingArg::CarryOver => NumberingMode::CarryOver,
            NumberingArg::PerParagraph => NumberingMode::PerParagraph,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Format {
            input,
            platform,
            output,
            numbering,
            nfc,
            stats,
        }) => {
            let options = FormatOptions::for_platform(platform.into())
                .with_numbering(numbering.into())
                .with_unicode_normalization(nfc);
            cmd_format(input.as_deref(), output.as_deref(), &options, stats)
        }
        Some(Commands::Classify { input, compact }) => cmd_classify(input.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match cli.platform {
            // Default behavior: format stdin or the given file
            Some(platform) => {
                let options = FormatOptions::for_platform(platform.into());
                cmd_format(cli.input.as_deref(), None, &options, false)
            }
            None => {
                println!(
                    "{}",
                    "Usage: postfmt --platform <telegram|linkedin> [FILE]".yellow()
                );
                println!("       postfmt --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            log::debug!("reading stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn cmd_format(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &FormatOptions,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let result = postfmt::format_with_stats(&text, options);

    if let Some(path) = output {
        fs::write(path, &result.content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        write_verbatim(&mut io::stdout().lock(), &result.content)?;
    }

    if show_stats {
        let stats = &result.stats;
        eprintln!("{}", "Formatting Statistics".cyan().bold());
        eprintln!("{}", "─".repeat(40).dimmed());
        eprintln!("{}: {}", "Platform".bold(), result.platform);
        eprintln!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
        eprintln!("{}: {}", "Lines".bold(), stats.line_count);
        eprintln!("{}: {}", "Headings".bold(), stats.heading_count);
        eprintln!("{}: {}", "Numbered items".bold(), stats.numbered_item_count);
        eprintln!("{}: {}", "Bullets".bold(), stats.bullet_count);
        eprintln!("{}: {}", "Link lines".bold(), stats.link_line_count);
        eprintln!("{}: {}", "Plain lines".bold(), stats.plain_count);
        eprintln!("{}: {}", "Counter carry-overs".bold(), stats.counter_carry_overs);
        eprintln!("{}: {}", "Dashes replaced".bold(), stats.dashes_replaced);
    }

    Ok(())
}

/// Write the formatted text as is; the text is the whole message, so no
/// trailing newline is added.
fn write_verbatim<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}

fn cmd_classify(input: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = Document::parse(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    println!("{}", postfmt::render::to_json(&doc, format)?);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "postfmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Post formatting tool for Telegram and LinkedIn");
    println!();
    println!("Platforms: {}", "telegram, linkedin".dimmed());
    println!("License: MIT");
}
