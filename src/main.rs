use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use wordslive::{ChordError, NotationStyle};

#[derive(Parser)]
#[command(name = "chords", about = "Strip, pretty-print and transpose chords in song lyrics")]
#[command(version)]
struct Cli {
    /// YAML file with notation settings (german-notation, long-chord-names)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use German note names (H for B natural, B for B flat); `--german=false` turns it off
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    german: Option<bool>,

    /// Write accidentals as suffixes (Cis, Des) instead of signs; `--long-names=false` turns it off
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    long_names: Option<bool>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Input {
    /// Lyrics file; reads stdin when omitted
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Remove all chord annotations
    Strip(Input),

    /// Show accidentals in chords as ♭ and ♯
    Pretty(Input),

    /// Transpose every chord
    Transpose {
        /// Key the song is written in
        #[arg(long)]
        from: String,

        /// Semitones to shift by (may be negative)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "to", required_unless_present = "to")]
        by: Option<i32>,

        /// Key to transpose to
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        input: Input,
    },

    /// List chords and their character offsets as YAML
    List(Input),

    /// Produce plain search-index text
    Index(Input),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let output = match run(&cli) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }
}

fn run(cli: &Cli) -> Result<String, ChordError> {
    let style = resolve_style(cli)?;

    match &cli.command {
        Command::Strip(input) => Ok(wordslive::strip_chords(&read_input(input)?)),
        Command::Pretty(input) => Ok(wordslive::pretty_print_chords(&read_input(input)?)),
        Command::Transpose { from, by, to, input } => {
            let text = read_input(input)?;
            match (by, to) {
                (_, Some(to)) => wordslive::transpose_chords_to(&text, from, to, style),
                (Some(by), None) => wordslive::transpose_chords(&text, from, *by, style),
                (None, None) => wordslive::transpose_chords(&text, from, 0, style),
            }
        }
        Command::List(input) => wordslive::list_chords_yaml(&read_input(input)?),
        Command::Index(input) => Ok(wordslive::searchable_text(&read_input(input)?)),
    }
}

/// Config file first, then command-line flags on top
fn resolve_style(cli: &Cli) -> Result<NotationStyle, ChordError> {
    let style = match &cli.config {
        Some(path) => NotationStyle::load(path)?,
        None => NotationStyle::default(),
    };
    Ok(style.with_overrides(cli.german, cli.long_names))
}

fn read_input(input: &Input) -> Result<String, ChordError> {
    match &input.file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
