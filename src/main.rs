//! CLI entry point for wcag-colors.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use tracing::info;

use wcag_colors::cli::{Cli, Command};
use wcag_colors::config::WcagConfig;
use wcag_colors::convert::parse_color;
use wcag_colors::engine::{CandidateRole, ContrastEngine};
use wcag_colors::logging::init_logging;
use wcag_colors::report::{
    CheckReport, PickReport, RatioReport, SelectionReport, TextReport, render,
};
use wcag_colors::rgba::RgbaColor;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "wcag-colors", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.as_ref() else {
        bail!("No command given, see --help");
    };

    let _guard = init_logging(cli.log_file.as_deref(), &cli.log_level);

    if let Some(path) = cli.config.as_deref() {
        if !path.is_file() {
            bail!("Config file {} does not exist", path.display());
        }
    }

    let config = WcagConfig::extract(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;
    let engine = config.engine();
    info!(
        luminance_threshold = engine.luminance_threshold(),
        element = %config.check.element,
        level = %config.check.level,
        "configuration loaded"
    );

    match command {
        Command::Ratio {
            foreground,
            background,
        } => {
            let report = RatioReport::new(&engine, &color(foreground)?, &color(background)?);
            emit(&report, &cli)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            foreground,
            background,
            ..
        } => {
            let report = CheckReport::new(
                &engine,
                &color(foreground)?,
                &color(background)?,
                config.check.element,
                config.check.level,
            );
            emit(&report, &cli)?;
            Ok(exit_code(report.passes))
        }
        Command::TextColor { background } => {
            let report = PickReport::new(&engine, &color(background)?, CandidateRole::Foreground);
            emit(&report, &cli)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::BackgroundColor { foreground } => {
            let report = PickReport::new(&engine, &color(foreground)?, CandidateRole::Background);
            emit(&report, &cli)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::PickForeground {
            background,
            candidates,
            ..
        } => select(
            &engine,
            &config,
            background,
            candidates,
            CandidateRole::Foreground,
            &cli,
        ),
        Command::PickBackground {
            foreground,
            candidates,
            ..
        } => select(
            &engine,
            &config,
            foreground,
            candidates,
            CandidateRole::Background,
            &cli,
        ),
    }
}

fn color(input: &str) -> Result<RgbaColor> {
    parse_color(input).map_err(|e| eyre!(e))
}

fn select(
    engine: &ContrastEngine,
    config: &WcagConfig,
    fixed: &str,
    candidates: &[String],
    role: CandidateRole,
    cli: &Cli,
) -> Result<ExitCode> {
    let fixed = color(fixed)?;
    let parsed = candidates
        .iter()
        .map(|c| color(c))
        .collect::<Result<Vec<_>>>()?;

    let selection = engine.select_first_conforming(
        &parsed,
        &fixed,
        role,
        config.check.element,
        config.check.level,
    );
    let report = SelectionReport::new(
        &fixed,
        role,
        config.check.element,
        config.check.level,
        candidates,
        selection,
    );
    emit(&report, cli)?;

    Ok(exit_code(report.found()))
}

fn emit<R>(report: &R, cli: &Cli) -> Result<()>
where
    R: serde::Serialize + TextReport,
{
    let output = render(report, cli.format).map_err(|e| eyre!("Failed to render output: {e}"))?;
    println!("{output}");
    Ok(())
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
