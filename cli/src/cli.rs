use std::path::PathBuf;

/// Street works impact map CLI
#[derive(clap::Parser, Debug)]
#[command(name = "impactmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the highway authorities present in a CSV export
    Authorities(AuthoritiesArgs),

    /// Render one authority's streets to GeoJSON
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct AuthoritiesArgs {
    /// Street rows with WKT geometry in EPSG:27700
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Street rows with WKT geometry in EPSG:27700
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Highway authority to draw
    #[arg(short, long)]
    pub authority: String,

    /// Output GeoJSON file, stdout if omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Style config (JSON); defaults apply to anything it leaves out
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Categorical attribute to filter on
    #[arg(long, requires = "only")]
    pub category: Option<String>,

    /// Allowed values of --category (repeatable)
    #[arg(long, requires = "category")]
    pub only: Vec<String>,
}
