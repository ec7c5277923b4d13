use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "esgrisk", version, about = "ESG reputational risk assessment for commodity suppliers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a named supplier for a material
    Assess(AssessArgs),
    /// Discover and rank suppliers for a material
    Discover(DiscoverArgs),
    /// Print the active risk keyword taxonomy
    Keywords(KeywordsArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct AssessArgs {
    /// Supplier or company name (e.g. Glencore)
    #[arg(short, long)]
    pub supplier: String,

    /// Material or commodity (e.g. cobalt, lithium)
    #[arg(short, long)]
    pub material: String,

    #[command(flatten)]
    pub weights: WeightArgs,

    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Args, Clone)]
pub struct DiscoverArgs {
    /// Material or commodity to find suppliers for
    #[arg(short, long)]
    pub material: String,

    #[command(flatten)]
    pub weights: WeightArgs,

    #[command(flatten)]
    pub backend: BackendArgs,
}

#[derive(Args, Clone)]
pub struct WeightArgs {
    /// Labor risk weighting percent (default 40)
    #[arg(long)]
    pub labor: Option<u32>,

    /// Environmental risk weighting percent (default 30)
    #[arg(long)]
    pub environment: Option<u32>,

    /// Governance risk weighting percent (default 30)
    #[arg(long)]
    pub governance: Option<u32>,
}

#[derive(Args, Clone)]
pub struct BackendArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Search backend: google, serpapi
    #[arg(long)]
    pub search_provider: Option<String>,

    /// Search API key (or use env vars)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Google Programmable Search engine id
    #[arg(long)]
    pub cse_id: Option<String>,

    /// Text extraction backend: diffbot, none
    #[arg(long)]
    pub extractor: Option<String>,

    /// Diffbot API token
    #[arg(long)]
    pub diffbot_token: Option<String>,

    /// Maximum search results to assess
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Directory to write a markdown report into
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the result as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct KeywordsArgs {
    /// Only show one category: labor, environment, governance
    #[arg(long)]
    pub category: Option<String>,

    /// YAML configuration file (for keyword overrides)
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
