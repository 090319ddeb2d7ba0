//! CLI command implementations

pub mod config;
pub mod frames;
pub mod run;

use anyhow::{Context, Result};
use clap::Args;
use silhouette_core::SpawnMode;
use silhouette_particles::{SimConfig, SimRng, Simulation};
use silhouette_runtime::{
    EventBus, FrameClock, InputScript, InputState, PointerSweep, RuntimeSystem, PRIMARY_BUTTON,
};
use std::path::Path;

/// Options shared by every command that drives the simulation
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Number of frames to run
    #[arg(long, default_value = "600")]
    pub frames: u64,

    /// Seed for the random source (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<String>,

    /// Path to a TOML input script
    #[arg(long)]
    pub script: Option<String>,

    /// Starting spawn mode (click, cursor or auto)
    #[arg(long, default_value = "click")]
    pub mode: SpawnMode,

    /// Click every N frames in addition to the script (0 disables)
    #[arg(long, default_value = "0")]
    pub click_every: u64,
}

pub fn load_config(path: Option<&str>) -> Result<SimConfig> {
    match path {
        Some(path) => SimConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config '{path}'")),
        None => Ok(SimConfig::default()),
    }
}

/// A simulation wired to scripted input and a frame clock
pub struct Session {
    pub sim: Simulation,
    pub clock: FrameClock,
    input: InputState,
    script: InputScript,
    click_every: u64,
}

impl Session {
    pub fn new(args: &SessionArgs) -> Result<Self> {
        let config = load_config(args.config.as_deref())?;

        let script = match &args.script {
            Some(path) => InputScript::load(Path::new(path))
                .with_context(|| format!("Failed to load input script '{path}'"))?,
            None => default_script(&config),
        };

        let rng = match args.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_entropy(),
        };
        let mut sim = Simulation::new(config, rng)
            .context("Failed to build simulation")?
            .with_mode(args.mode);
        sim.initialize()?;

        Ok(Self {
            sim,
            clock: FrameClock::new(),
            input: InputState::new(),
            script,
            click_every: args.click_every,
        })
    }

    /// Feed this frame's input and run one tick. Returns the frame index.
    pub fn step(&mut self, events: &mut EventBus) -> Result<u64> {
        let frame = self.clock.tick();
        self.script.apply(frame, &mut self.input);
        if self.click_every > 0 && frame % self.click_every == 0 {
            self.input.process_mouse_button_down(PRIMARY_BUTTON);
            self.input.process_mouse_button_up(PRIMARY_BUTTON);
        }
        let input = self.input.take_frame(frame);
        self.sim.update(&input, events)?;
        Ok(frame)
    }
}

/// Without a script the pointer sweeps across the middle of the scene.
fn default_script(config: &SimConfig) -> InputScript {
    let [w, h] = config.scene_size;
    InputScript {
        sweep: Some(PointerSweep {
            from: [w * 0.1, h * 0.5],
            to: [w * 0.9, h * 0.5],
            period: 240,
        }),
        events: Vec::new(),
    }
}
