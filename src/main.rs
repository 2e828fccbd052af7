use std::io::{self, Read};
use std::time::Duration;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use synthgen::cli;
use synthgen::config::Config;
use synthgen::llm::{ChatOptions, LlmClient};
use synthgen::pipeline::Pipeline;
use synthgen::sandbox::{ExecStatus, ExecutionResult, Sandbox};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let cfg = Config::load();

    // Resolve model: CLI overrides config; fall back to DEFAULT_MODEL
    let effective_model = args
        .model
        .clone()
        .or_else(|| cfg.get("DEFAULT_MODEL"))
        .unwrap_or_else(|| "gpt-4o".to_string());

    // stdin handling (pipe support)
    let mut request_from_stdin = String::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_string(&mut request_from_stdin)?;
    }

    // Resolve request: stdin + optional positional
    let arg_request = args.request.unwrap_or_default();
    let request = if !request_from_stdin.trim().is_empty() && !arg_request.is_empty() {
        format!("{}\n\n{}", request_from_stdin.trim(), arg_request)
    } else if !request_from_stdin.trim().is_empty() {
        request_from_stdin.trim().to_string()
    } else {
        arg_request
    };
    if request.trim().is_empty() {
        bail!("Provide a dataset request as an argument or via stdin");
    }

    let opts = ChatOptions {
        model: effective_model,
        temperature: args.temperature,
        top_p: args.top_p,
    };
    let client = LlmClient::from_config(&cfg)?.with_options(opts);

    let timeout_secs = args
        .timeout
        .or_else(|| cfg.get_u64("SCRIPT_TIMEOUT"))
        .unwrap_or(60);
    let sandbox = Sandbox::new(cfg.python_bin(), Duration::from_secs(timeout_secs));

    let dataset_path = args
        .dataset_path
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| cfg.dataset_path());

    let pipeline = Pipeline::new(&client, sandbox, dataset_path.clone());
    let outcome = pipeline.run(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if !args.quiet {
        println!("{}\n{}\n", "Specification".cyan(), outcome.specification.trim());
        println!("{}\n{}\n", "Dataset script".cyan(), outcome.dataset_script.trim());
        if let Some(viz) = &outcome.viz_script {
            println!("{}\n{}\n", "Visualization script".cyan(), viz.trim());
        }
    }

    print_result("dataset", &outcome.dataset, args.quiet);
    print_result("visualization", &outcome.visualization, args.quiet);

    if outcome.dataset.is_success() {
        println!("Dataset written to {}", dataset_path.display());
    }

    Ok(())
}

fn print_result(stage: &str, result: &ExecutionResult, quiet: bool) {
    let status = match result.status {
        ExecStatus::Success => format!("{}", "success".green()),
        ExecStatus::Error => format!("{}", "error".red()),
        ExecStatus::Timeout => format!("{}", "timeout".yellow()),
        ExecStatus::Skipped => "skipped (upstream stage failed)".to_string(),
    };
    println!("{}: {}", stage, status);
    if !quiet && !result.stdout.trim().is_empty() {
        println!("{}", result.stdout.trim());
    }
    if result.status == ExecStatus::Error && !result.stderr.trim().is_empty() {
        eprintln!("{}", result.stderr.trim());
    }
}
