mod generate;
mod probe;

use {
    crate::{colors::DEFAULT_PQ_REFERENCE_LUMINANCE, viewer::start_viewer},
    ::log::Level,
    clap::{Args, Parser, Subcommand, ValueEnum},
    clap_complete::Shell,
};

/// An HDR image viewer for Wayland.
#[derive(Parser, Debug)]
struct Hdrview {
    #[clap(flatten)]
    global: GlobalArgs,
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// The log level.
    #[clap(value_enum, long, default_value = "info")]
    pub log_level: CliLogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run the viewer.
    Run(RunArgs),
    /// Print the detected format of image files.
    Probe(ProbeArgs),
    /// Generate shell completion scripts for hdrview.
    GenerateCompletion(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// The image file to open.
    pub file: String,
    /// The reference luminance in nits used for the default HDR10 mode.
    #[clap(long, default_value_t = DEFAULT_PQ_REFERENCE_LUMINANCE)]
    pub reference_nits: u32,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// The files to classify.
    #[clap(required = true)]
    pub files: Vec<String>,
}

#[derive(ValueEnum, Debug, Copy, Clone, Hash)]
pub enum CliLogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Into<Level> for CliLogLevel {
    fn into(self) -> Level {
        match self {
            CliLogLevel::Trace => Level::Trace,
            CliLogLevel::Debug => Level::Debug,
            CliLogLevel::Info => Level::Info,
            CliLogLevel::Warn => Level::Warn,
            CliLogLevel::Error => Level::Error,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The shell to generate completions for.
    #[clap(value_enum)]
    shell: Shell,
}

pub fn main() {
    let cli = Hdrview::parse();
    match cli.command {
        Cmd::Run(a) => start_viewer(cli.global, a),
        Cmd::Probe(a) => probe::main(cli.global, a),
        Cmd::GenerateCompletion(g) => generate::main(g),
    }
}
