#![deny(clippy::all, clippy::pedantic)]
//! # Coverage Runtime
//!
//! Headless driver for the coverage simulation. Loads a scenario (JSON
//! overrides of [`sim::SimConfig`]), runs one episode against the
//! [`rl::Env`] surface with a scripted baseline policy, and logs progress.
//! The scripted policy steers toward the centroid of currently visible
//! targets, falling back to the arena center when nothing is in sensor
//! range; it stands in for the external training loop that would normally
//! drive the environment.

mod visualizer;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rl::{CoverageEnv, Env};
use sim::SimConfig;

use crate::visualizer::{TraceVisualizer, Visualizer};

#[derive(Parser)]
#[command(about = "Headless driver for the coverage simulation")]
struct Args {
    /// Scenario JSON file; fields override the built-in defaults.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// RNG seed for spawn placement and target waypoints.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Stop after this many macro-steps even if the episode is not done.
    #[arg(long)]
    macro_steps: Option<u32>,

    /// Emit a per-macro-step frame of agent/target positions at debug level.
    #[arg(long)]
    trace_frames: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = load_scenario(args.scenario.as_deref())?;
    tracing::info!(
        targets = config.num_targets,
        sensor_range = config.sensor_range,
        update_rate = config.update_rate,
        budget = config.episode_budget(),
        "scenario loaded"
    );

    let center = [config.width / 2.0, config.height / 2.0];
    let mut env = CoverageEnv::new(config, args.seed)?;
    let mut sink: Option<TraceVisualizer> = args.trace_frames.then(TraceVisualizer::default);

    let mut total_reward = 0.0_f64;
    let mut obs = env.reset();
    loop {
        let action = chase_centroid(&obs, center);
        let result = env.step(action);
        total_reward += f64::from(result.reward);

        if let Some(sink) = sink.as_mut() {
            sink.frame(&env.session().view());
        }
        let macro_step = env.session().curr_episode();
        if macro_step % 10 == 0 {
            tracing::info!(macro_step, reward = result.reward, total_reward, "progress");
        }
        if result.done {
            break;
        }
        if let Some(cap) = args.macro_steps {
            if macro_step >= cap {
                tracing::info!(cap, "macro-step cap reached");
                break;
            }
        }
        obs = result.obs;
    }

    tracing::info!(
        macro_steps = env.session().curr_episode(),
        total_reward,
        "episode finished"
    );
    Ok(())
}

fn load_scenario(path: Option<&std::path::Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(config)
}

/// Centroid of the visible (non-zero) observation pairs, or the fallback
/// point when nothing is in range.
fn chase_centroid(observation: &[f32], fallback: [f32; 2]) -> [f32; 2] {
    let mut count = 0u32;
    let mut sum = [0.0_f32, 0.0];
    for pair in observation.chunks_exact(2) {
        if pair[0] != 0.0 || pair[1] != 0.0 {
            count += 1;
            sum[0] += pair[0];
            sum[1] += pair[1];
        }
    }
    if count == 0 {
        return fallback;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = count as f32;
    [sum[0] / n, sum[1] / n]
}
