use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use polyominoes::parse_size;

mod enumerate;
use enumerate::{enumerate, enumerate_all};

fn finish_bar(bar: &ProgressBar, duration: Duration, expansions: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {expansions} polyominoes (N = {n}) in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64) -> indicatif::ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}} remaining: [{{eta_precise}}]");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Enumerate polyominoes with a specific amount of cells and print them
    /// as a table
    Enumerate(EnumerateOpts),
    /// Print the tables for all named sizes, triominos up to decominos
    All(AllOpts),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to calculate all unique polyominoes.
    #[clap(value_parser = parse_size)]
    pub n: usize,

    /// The name of the emitted table. Defaults to the conventional name for
    /// N, such as `pentominos`.
    #[clap(long)]
    pub name: Option<String>,

    /// The value written for `POLYOMINO_FORCE`. Left as a placeholder if
    /// not provided.
    #[clap(long)]
    pub force: Option<f32>,

    /// The value written for `POLYOMINO_ANG_FORCE`. Left as a placeholder if
    /// not provided.
    #[clap(long)]
    pub ang_force: Option<f32>,

    #[clap(flatten)]
    pub output: OutputOpts,

    #[clap(flatten)]
    pub run: RunOpts,
}

#[derive(Clone, Args)]
pub struct AllOpts {
    #[clap(flatten)]
    pub output: OutputOpts,

    #[clap(flatten)]
    pub run: RunOpts,
}

#[derive(Clone, Args)]
pub struct OutputOpts {
    /// The format of the emitted table.
    #[clap(long, short = 'f', value_enum, default_value = "rust")]
    pub format: OutputFormat,
}

#[derive(Clone, Args)]
pub struct RunOpts {
    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Rust,
    Json,
    Ascii,
}

impl From<OutputFormat> for polyominoes::emit::Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Rust => polyominoes::emit::Format::Rust,
            OutputFormat::Json => polyominoes::emit::Format::Json,
            OutputFormat::Ascii => polyominoes::emit::Format::Ascii,
        }
    }
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(r) => enumerate(&r),
        Opts::All(a) => enumerate_all(&a),
    }
}
