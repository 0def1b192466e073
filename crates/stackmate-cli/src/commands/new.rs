//! Implementation of the `stackmate new` command.
//!
//! Responsibility: resolve the project name (argument, prompt, or default),
//! call the core wizard service with real adapters, and display the result.
//! No scaffolding logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use stackmate_adapters::{LocalFilesystem, SystemRunner};
use stackmate_core::{
    application::{FrontendStatus, WizardReport, WizardService},
    domain::{
        ProjectLayout, ProjectName,
        templates::{BACKEND_PORT, FRONTEND_PORT},
    },
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute the `stackmate new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name (positional arg > prompt > configured default)
/// 2. Build the standard layout rooted in the current directory
/// 3. Run the wizard service with the local filesystem and process runner
/// 4. Render the report (human summary or JSON)
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name
    let name = match resolve_name(&args, &global, &config)? {
        Some(name) => name,
        None => prompt_name(&config)?,
    };
    debug!(project = %name, "project name resolved");

    // 2. Layout rooted in the current working directory
    let layout = ProjectLayout::new(name, PathBuf::from("."));

    // 3. Run the wizard
    output
        .header(&format!("Setting up '{}'...", layout.project_name()))
        .with_cli_context(|| "failed to write to the terminal")?;
    info!(project = %layout.project_name(), "wizard started");

    let service = WizardService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
    );
    let report = service.run(&layout).map_err(CliError::Core)?;

    info!(project = %report.project_name, "wizard finished");

    // 4. Render
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::IoError {
            message: "cannot serialize report".into(),
            source: std::io::Error::other(e),
        })?;
        // payload, not print: explicit machine output bypasses --quiet
        output
            .payload(&json)
            .with_cli_context(|| "failed to write to the terminal")?;
        return Ok(());
    }

    render_report(&report, &output)?;
    Ok(())
}

// ── Name resolution ───────────────────────────────────────────────────────────

/// Resolve the project name without prompting.
///
/// Returns `Ok(None)` when an interactive prompt is required: no positional
/// name, and neither `--yes` nor `--quiet` asked us to skip it.
fn resolve_name(
    args: &NewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Option<ProjectName>> {
    if let Some(raw) = &args.name {
        let name = ProjectName::parse(raw).map_err(|e| CliError::Core(e.into()))?;
        return Ok(Some(name));
    }

    if args.yes || global.quiet {
        let name = ProjectName::parse(&config.defaults.project_name)
            .map_err(|e| CliError::Core(e.into()))?;
        return Ok(Some(name));
    }

    Ok(None)
}

/// Ask for a project name on the terminal.
///
/// A blank answer falls through to the configured default.
#[cfg(feature = "interactive")]
fn prompt_name(config: &AppConfig) -> CliResult<ProjectName> {
    let raw: String = dialoguer::Input::new()
        .with_prompt("Enter project name")
        .default(config.defaults.project_name.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::IoError {
            message: "failed to read project name".into(),
            source: std::io::Error::other(e),
        })?;

    let trimmed = raw.trim();
    let effective = if trimmed.is_empty() {
        config.defaults.project_name.as_str()
    } else {
        trimmed
    };
    ProjectName::parse(effective).map_err(|e| CliError::Core(e.into()))
}

/// Plain-stdin fallback when the `interactive` feature is disabled.
#[cfg(not(feature = "interactive"))]
fn prompt_name(config: &AppConfig) -> CliResult<ProjectName> {
    use std::io::Write as _;

    print!(
        "Enter project name (default '{}'): ",
        config.defaults.project_name
    );
    std::io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read project name")?;

    let trimmed = input.trim();
    let effective = if trimmed.is_empty() {
        config.defaults.project_name.as_str()
    } else {
        trimmed
    };
    ProjectName::parse(effective).map_err(|e| CliError::Core(e.into()))
}

// ── Report rendering ──────────────────────────────────────────────────────────

/// Human-readable summary of a completed run.
fn render_report(report: &WizardReport, output: &OutputManager) -> CliResult<()> {
    output
        .success(&format!(
            "Backend ready at {}",
            report.backend_dir.display()
        ))
        .with_cli_context(|| "failed to write summary")?;

    let frontend_hint = match &report.frontend {
        FrontendStatus::Detected {
            dir_name,
            app_entry,
            dev_config,
            used_fallback,
        } => {
            if *used_fallback {
                output
                    .info("Primary generator unavailable; used the Vite fallback")
                    .with_cli_context(|| "failed to write summary")?;
            }
            output
                .success(&format!("Frontend configured in '{dir_name}'"))
                .with_cli_context(|| "failed to write summary")?;
            if app_entry.is_none() {
                output
                    .warning("No src/App.jsx or src/App.tsx found; app entry left untouched")
                    .with_cli_context(|| "failed to write summary")?;
            }
            if dev_config.is_none() {
                output
                    .warning("No vite.config.ts or vite.config.js found; proxy not configured")
                    .with_cli_context(|| "failed to write summary")?;
            }
            Some(dir_name.clone())
        }
        FrontendStatus::NotDetected { used_fallback } => {
            if *used_fallback {
                output
                    .info("Primary generator unavailable; used the Vite fallback")
                    .with_cli_context(|| "failed to write summary")?;
            }
            output
                .error("Could not detect frontend folder; skipping frontend configuration")
                .with_cli_context(|| "failed to write summary")?;
            None
        }
    };

    if output.is_quiet() {
        return Ok(());
    }

    // Next-steps block
    let name = &report.project_name;
    output.print("").with_cli_context(|| "failed to write summary")?;
    output
        .header("Project setup complete!")
        .with_cli_context(|| "failed to write summary")?;
    output
        .print("To run the backend:")
        .with_cli_context(|| "failed to write summary")?;
    output
        .print(&format!(
            "  cd {name}/backend && pip install -r requirements.txt && uvicorn main:app --reload"
        ))
        .with_cli_context(|| "failed to write summary")?;
    if let Some(frontend) = frontend_hint {
        output
            .print("To run the frontend:")
            .with_cli_context(|| "failed to write summary")?;
        output
            .print(&format!("  cd {name}/{frontend} && npm install && npm run dev"))
            .with_cli_context(|| "failed to write summary")?;
    }
    output
        .print(&format!(
            "Backend at http://localhost:{BACKEND_PORT}, frontend at http://localhost:{FRONTEND_PORT}"
        ))
        .with_cli_context(|| "failed to write summary")?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
