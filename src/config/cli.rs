use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "ci-demo")]
#[command(about = "Arithmetic and utility demo for CI pipelines")]
#[command(version)]
pub struct CliConfig {
    /// Optional TOML file overriding the demo inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
