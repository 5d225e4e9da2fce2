mod agenda;
mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::info;

use dayplan_core::compute_task_layout_with_lanes;
use dayplan_core::loader::{parse_params, parse_schedule};
use dayplan_core::schedule::parse_clock;
use dayplan_core::svg::render_svg;
use dayplan_core::views::render_timeline;

use cli::{Cli, Format};

fn main() -> Result<()> {
    let args = Cli::parse();
    let _logger = init_logging(args.verbose)?;

    let data = std::fs::read(&args.schedule)
        .with_context(|| format!("failed to read {}", args.schedule.display()))?;
    let mut schedule = parse_schedule(&data)
        .with_context(|| format!("failed to load {}", args.schedule.display()))?;

    if let Some(path) = &args.params {
        let data =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        schedule.params = parse_params(&data)?;
    }
    if let Some(now) = &args.now {
        schedule.options.now_minutes = Some(parse_clock(now)?);
    }

    let laid_out = compute_task_layout_with_lanes(&schedule.tasks, &schedule.params);
    info!(
        "laid out {} tasks from {}",
        laid_out.len(),
        args.schedule.display()
    );

    let output = match args.format {
        Format::Json => serde_json::to_string_pretty(&laid_out)?,
        Format::Svg => {
            let commands = render_timeline(&laid_out, &schedule.params, &schedule.options);
            let width = schedule.options.label_column_px + schedule.params.container_width_px;
            render_svg(
                &commands,
                width,
                schedule.params.timeline_height_px(),
                args.dark,
            )
        }
        Format::Agenda => agenda::render_agenda(&laid_out, schedule.options.now_minutes),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}

/// Log to stderr. `RUST_LOG` applies unless `-v` asks for more.
fn init_logging(verbose: u8) -> Result<LoggerHandle> {
    let logger = match verbose {
        0 => Logger::try_with_env_or_str("warn")?,
        1 => Logger::try_with_str("debug")?,
        _ => Logger::try_with_str("trace")?,
    };
    Ok(logger.log_to_stderr().start()?)
}
