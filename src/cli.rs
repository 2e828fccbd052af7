use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "synthgen", about = "Synthetic dataset generation pipeline", version)]
pub struct Cli {
    /// Free-form description of the dataset to generate.
    #[arg(value_name = "REQUEST")]
    pub request: Option<String>,

    /// Large language model to use.
    #[arg(long)]
    pub model: Option<String>,

    /// Randomness of generated output.
    #[arg(long, default_value_t = 0.0, value_parser = clap::value_parser!(f32))]
    pub temperature: f32,

    /// Limits highest probable tokens (words).
    #[arg(long = "top-p", default_value_t = 1.0, value_parser = clap::value_parser!(f32))]
    pub top_p: f32,

    /// Wall-clock limit for each sandboxed script run, in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path the dataset-generation script is instructed to write.
    #[arg(long = "dataset-path")]
    pub dataset_path: Option<String>,

    /// Print the full pipeline outcome as JSON.
    #[arg(long)]
    pub json: bool,

    /// Suppress echo of the intermediate specification and scripts.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
