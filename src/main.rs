//! Chase Env entry point
//!
//! Headless host loop: random policy -> step -> frame build, logging every
//! step. Usage: `chase-env [--steps N] [--seed S] [--config PATH] [--realtime]`

use std::process::ExitCode;
use std::time::{Duration, Instant};

use chase_env::consts::FRAME_RATE;
use chase_env::input;
use chase_env::renderer::{self, Visuals};
use chase_env::sim::{self, ChaseEnv};
use chase_env::{ChaseConfig, ConfigError};

struct Args {
    steps: u64,
    seed: u64,
    config: Option<String>,
    realtime: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            steps: 1000,
            seed: 0,
            config: None,
            realtime: false,
        }
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--steps" => args.steps = parse_value(&arg, iter.next())?,
            "--seed" => args.seed = parse_value(&arg, iter.next())?,
            "--config" => {
                args.config = Some(iter.next().ok_or_else(|| format!("{arg} needs a value"))?)
            }
            "--realtime" => args.realtime = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|e| format!("invalid value for {flag}: {value} ({e})"))
}

fn load_config(path: Option<&str>) -> Result<ChaseConfig, ConfigError> {
    match path {
        Some(path) => ChaseConfig::load(path),
        None => Ok(ChaseConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let visuals = Visuals::from_config(&config);
    let mut env = match ChaseEnv::new(config, args.seed) {
        Ok(env) => env,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    // Separate stream so the policy never perturbs the simulation's draws
    let mut policy = sim::seeded(args.seed.wrapping_add(1));

    log::info!("Chase Env starting (seed {}, {} steps)", args.seed, args.steps);

    let frame_time = Duration::from_secs_f64(1.0 / FRAME_RATE as f64);
    // `new` already reset the episode; a second reset would shift the seeded stream
    let mut obs = env.observe();
    let mut total_reward = 0.0f64;
    let mut vertex_count = 0usize;

    for _ in 0..args.steps {
        let started = Instant::now();

        let action = input::action_or_random(&[], &mut policy);
        let outcome = env.step(action);
        obs = outcome.observation;
        total_reward += outcome.reward as f64;

        // Stand-in render sink: build the frame and count what would be uploaded
        let frame = renderer::frame(&obs, env.score(), &visuals);
        vertex_count = frame.vertices().len();

        log::info!(
            "Action: {} ({}), Reward: {}, Done: {}, Speed: {:.1}",
            action.index(),
            action.as_str(),
            outcome.reward,
            outcome.done,
            obs.chaser_speed
        );

        if args.realtime {
            let elapsed = started.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
    }

    let stats = env.stats();
    log::info!(
        "Finished: score {}, steps {}, tracked reward {:.1}, summed reward {:.1}, distance {:.1}, {} vertices/frame",
        stats.score,
        stats.steps,
        stats.cumulative_reward,
        total_reward,
        obs.distance,
        vertex_count
    );

    ExitCode::SUCCESS
}
