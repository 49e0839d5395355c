use clap::{Args, Subcommand};
use compass_core::enums::Role;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Generate one roadmap and print it
    Generate(GenerateArgs),
    /// Print a JSON Schema
    Schema(SchemaArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config and PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file path, or `:memory:`
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// What the roadmap should aim at (e.g. "career change")
    #[arg(long)]
    pub focus: String,

    /// Comma-separated interests (e.g. "AI, web")
    #[arg(long)]
    pub interests: String,

    /// Branch or course name
    #[arg(long)]
    pub branch: Option<String>,

    /// pre-university or undergraduate
    #[arg(long, default_value = "undergraduate")]
    pub role: Role,
}

#[derive(Debug, Clone, Args)]
pub struct SchemaArgs {
    /// Schema name; see `--list`
    #[arg(default_value = "roadmap")]
    pub name: String,

    /// List registered schema names instead
    #[arg(long)]
    pub list: bool,
}
