use std::time::{Duration, Instant};

use anyhow::Result;
use synthgen::sandbox::{ExecStatus, Sandbox};

fn python_bin() -> Option<String> {
    for candidate in ["python3", "python"] {
        let found = std::process::Command::new(candidate)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Some(candidate.to_string());
        }
    }
    None
}

#[tokio::test]
async fn test_successful_script_captures_stdout() -> Result<()> {
    let Some(python) = python_bin() else {
        println!("Warning: no Python interpreter on PATH, skipping test");
        return Ok(());
    };

    let sandbox = Sandbox::new(python, Duration::from_secs(30));
    let result = sandbox.execute("print('hello from sandbox')").await?;

    assert_eq!(result.status, ExecStatus::Success);
    assert_eq!(result.stdout.trim(), "hello from sandbox");
    assert!(!result.script_path.as_os_str().is_empty());
    assert!(
        !result.script_path.exists(),
        "transient script file must be removed after execution"
    );
    Ok(())
}

#[tokio::test]
async fn test_failing_script_reports_error_with_stderr() -> Result<()> {
    let Some(python) = python_bin() else {
        println!("Warning: no Python interpreter on PATH, skipping test");
        return Ok(());
    };

    let sandbox = Sandbox::new(python, Duration::from_secs(30));
    let result = sandbox
        .execute("print('partial output')\nraise ValueError('boom')")
        .await?;

    assert_eq!(result.status, ExecStatus::Error);
    assert_eq!(result.stdout.trim(), "partial output");
    assert!(result.stderr.contains("ValueError"), "stderr: {}", result.stderr);
    assert!(!result.script_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_nonzero_exit_code_is_error() -> Result<()> {
    let Some(python) = python_bin() else {
        println!("Warning: no Python interpreter on PATH, skipping test");
        return Ok(());
    };

    let sandbox = Sandbox::new(python, Duration::from_secs(30));
    let result = sandbox.execute("import sys\nsys.exit(3)").await?;

    assert_eq!(result.status, ExecStatus::Error);
    assert!(!result.script_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_infinite_loop_times_out_within_bound() -> Result<()> {
    let Some(python) = python_bin() else {
        println!("Warning: no Python interpreter on PATH, skipping test");
        return Ok(());
    };

    let limit = Duration::from_secs(2);
    let sandbox = Sandbox::new(python, limit);
    let started = Instant::now();
    let result = sandbox.execute("while True: pass").await?;
    let elapsed = started.elapsed();

    assert_eq!(result.status, ExecStatus::Timeout);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
    assert!(
        elapsed >= limit && elapsed < limit + Duration::from_secs(8),
        "elapsed {:?} not within a bounded margin of {:?}",
        elapsed,
        limit
    );
    assert!(
        !result.script_path.exists(),
        "transient script file must be removed after a timeout"
    );
    Ok(())
}

#[tokio::test]
async fn test_fence_wrapped_script_runs_as_if_clean() -> Result<()> {
    let Some(python) = python_bin() else {
        println!("Warning: no Python interpreter on PATH, skipping test");
        return Ok(());
    };

    let sandbox = Sandbox::new(python, Duration::from_secs(30));
    let wrapped = "```python\nprint('fenced')\n```";
    let result = sandbox.execute(wrapped).await?;

    assert_eq!(result.status, ExecStatus::Success);
    assert_eq!(result.stdout.trim(), "fenced");
    Ok(())
}

#[tokio::test]
async fn test_missing_interpreter_is_a_sandbox_fault() -> Result<()> {
    let sandbox = Sandbox::new("definitely-not-an-interpreter", Duration::from_secs(5));
    let result = sandbox.execute("print('never runs')").await;
    assert!(result.is_err(), "spawn failure must surface as Err, not a script outcome");
    Ok(())
}
