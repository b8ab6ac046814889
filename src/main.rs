use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use stack_icon::animation::Timing;
use stack_icon::config::{AttrValue, Config, Options, StackConfig};
use stack_icon::logging::init_tracing;
use stack_icon::ui::app::{App, StackSetup};
use stack_icon::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "stack-icon", version, about = "Animated stack icon counter")]
struct Cli {
    /// Config file path (default: ~/.config/stack-icon/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial quantity; replaces the configured stacks with one stack
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    start: Option<String>,

    /// Lower bound; replaces the configured stacks with one stack
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    min: Option<String>,

    /// Upper bound, 0 for unbounded; replaces the configured stacks with one stack
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    max: Option<String>,
}

impl Cli {
    fn stack_override(&self) -> Option<StackConfig> {
        if self.start.is_none() && self.min.is_none() && self.max.is_none() {
            return None;
        }
        Some(StackConfig {
            label: None,
            start: self.start.clone().map(AttrValue::Text),
            min: self.min.clone().map(AttrValue::Text),
            max: self.max.clone().map(AttrValue::Text),
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let stacks = match cli.stack_override() {
        Some(stack) => vec![stack],
        None => config.stacks_or_default(),
    };

    let setups = stacks
        .iter()
        .enumerate()
        .map(|(index, stack)| {
            let resolved = Options::resolve(&stack.raw_options());
            StackSetup {
                label: stack
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("stack {}", index + 1)),
                options: resolved.options,
                warnings: resolved.warnings,
            }
        })
        .collect();

    let timing = Timing::from(&config.animation);
    let frame = Duration::from_millis(config.animation.frame_ms);
    tracing::info!(stacks = stacks.len(), ?frame, "starting stack icon");

    let app = App::new(setups, timing);
    runtime::run(app, frame).context("Terminal UI failed")?;
    Ok(())
}
