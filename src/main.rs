/// Command-line entry point: load a sample workbook, render a chart.
///
/// Usage:
///   thermoplot [WORKBOOK_DIR] [--mode bars|curves|clustered|stacked]
///              [--config PATH] [--verify] [--dev]

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use thermoplot::analysis::merge::merge_on_hour;
use thermoplot::chart::clustered::{ClusteredPlot, ClusteredPlotError};
use thermoplot::config::{self, AppConfig, DEFAULT_CONFIG_PATH};
use thermoplot::dev_mode;
use thermoplot::ingest::workbook;
use thermoplot::logging::{self, LogLevel, Source};
use thermoplot::model::MergedSample;
use thermoplot::plots;
use thermoplot::verify;

const USAGE: &str = "Usage: thermoplot [WORKBOOK_DIR] [--mode bars|curves|clustered|stacked] \
                     [--config PATH] [--verify] [--dev]";

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Bars,
    Curves,
    Clustered,
    Stacked,
}

impl Mode {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "bars" => Ok(Mode::Bars),
            "curves" => Ok(Mode::Curves),
            "clustered" => Ok(Mode::Clustered),
            "stacked" => Ok(Mode::Stacked),
            other => Err(format!("Unknown mode: {}", other)),
        }
    }
}

struct CliArgs {
    workbook_dir: Option<String>,
    mode: Mode,
    config_path: String,
    verify: bool,
    dev: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        workbook_dir: None,
        mode: Mode::Bars,
        config_path: DEFAULT_CONFIG_PATH.to_string(),
        verify: false,
        dev: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let value = args.next().ok_or("--mode requires a value")?;
                cli.mode = Mode::parse(&value)?;
            }
            "--config" => {
                cli.config_path = args.next().ok_or("--config requires a value")?;
            }
            "--verify" => cli.verify = true,
            "--dev" => cli.dev = true,
            other if other.starts_with("--") => {
                return Err(format!("Unknown flag: {}", other));
            }
            other => {
                if cli.workbook_dir.is_some() {
                    return Err(format!("Unexpected extra argument: {}", other));
                }
                cli.workbook_dir = Some(other.to_string());
            }
        }
    }

    Ok(cli)
}

// ---------------------------------------------------------------------------
// Clustered demo wiring
// ---------------------------------------------------------------------------

fn day_part(hour: u32) -> &'static str {
    match hour {
        0..=5 => "night",
        6..=11 => "morning",
        12..=17 => "afternoon",
        _ => "evening",
    }
}

/// Bucket merged per-hour rows into day-part groups, one subgroup per
/// source sheet.
fn build_day_part_plot(
    merged: &[MergedSample],
    first_name: &str,
    second_name: &str,
    width: usize,
) -> Result<ClusteredPlot, ClusteredPlotError> {
    let mut plot = ClusteredPlot::new(
        "Temperatures by Day Part",
        "Temperature (°C)",
        "Hour",
        &["night", "morning", "afternoon", "evening"],
    );
    plot.set_width(width);

    for row in merged {
        let label = format!("{:02}", row.hour);
        plot.add_subgroup_with_data(
            day_part(row.hour),
            first_name,
            &[row.first_average],
            &[row.first_deviation],
            &[&label],
        )?;
        plot.add_subgroup_with_data(
            day_part(row.hour),
            second_name,
            &[row.second_average],
            &[row.second_deviation],
            &[&label],
        )?;
    }

    Ok(plot)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    logging::init_logger(LogLevel::Info, None, false);

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match config::load_config(Path::new(&cli.config_path)) {
        Ok(Some(config)) => config,
        Ok(None) => AppConfig::default(),
        Err(e) => {
            logging::warn(
                Source::Config,
                None,
                &format!("Could not load configuration: {}", e),
            );
            AppConfig::default()
        }
    };

    let dir = cli
        .workbook_dir
        .clone()
        .unwrap_or_else(|| config.workbook.dir.clone());
    let dir = Path::new(&dir);

    if cli.verify {
        let report = verify::run_workbook_verification(dir, &config.workbook);
        verify::print_summary(&report);
        logging::log_load_summary(
            Source::Workbook,
            report.summary.total,
            report.summary.working,
            report.summary.failed,
        );
        return if report.summary.failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match run(&cli, &config, dir) {
        Ok(code) => code,
        Err(e) => {
            logging::error(Source::System, None, &e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CliArgs, config: &AppConfig, dir: &Path) -> Result<ExitCode, Box<dyn Error>> {
    match cli.mode {
        Mode::Bars | Mode::Curves => {
            let sheet = if cli.dev {
                dev_mode::synthetic_day()
            } else {
                match workbook::load_sample_average_deviation(dir, &config.workbook) {
                    Ok(Some(sheet)) => sheet,
                    Ok(None) => return Ok(ExitCode::FAILURE),
                    Err(e) => {
                        logging::log_workbook_failure(&config.workbook.sheet_one, "Load", &e);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            };

            let figure = match cli.mode {
                Mode::Bars => plots::temperature_bars(&sheet, config.chart.width),
                _ => plots::temperature_curves(&sheet, config.chart.curve_height),
            };
            print!("{}", figure);
        }
        Mode::Clustered | Mode::Stacked => {
            let (merged, first_name, second_name) = if cli.dev {
                let (indoor, outdoor) = dev_mode::synthetic_pair();
                (
                    merge_on_hour(&indoor, &outdoor),
                    indoor.name.clone(),
                    outdoor.name.clone(),
                )
            } else {
                match workbook::load_sample_data(dir, &config.workbook) {
                    Ok(Some(merged)) => (
                        merged,
                        config.workbook.sheet_one.clone(),
                        config.workbook.sheet_two.clone(),
                    ),
                    Ok(None) => return Ok(ExitCode::FAILURE),
                    Err(e) => {
                        logging::log_workbook_failure(&config.workbook.sheet_one, "Load", &e);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            };

            if merged.is_empty() {
                logging::warn(Source::Chart, None, "No shared hours between the two sheets");
            }

            let mut plot =
                build_day_part_plot(&merged, &first_name, &second_name, config.chart.width)?;
            let figure = match cli.mode {
                Mode::Stacked => plot.render_stacked(),
                _ => plot.render_clustered(),
            };
            print!("{}", figure);
        }
    }

    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
