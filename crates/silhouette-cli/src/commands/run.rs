//! Run command - drives the simulation headless and reports totals

use super::{Session, SessionArgs};
use anyhow::Result;
use silhouette_runtime::{EventBus, FrameClock, RuntimeSystem, SimEventKind};
use std::time::{Duration, Instant};

pub struct RunArgs {
    pub session: SessionArgs,
    pub realtime: bool,
    pub fps: f64,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut session = Session::new(&args.session)?;
    let mut events = EventBus::new();

    if args.realtime {
        session.clock = FrameClock::with_rate(args.fps);
        let mut last = Instant::now();
        while session.clock.frame() < args.session.frames {
            let now = Instant::now();
            session.clock.accumulate(now.duration_since(last).as_secs_f64());
            last = now;
            while session.clock.should_step() && session.clock.frame() < args.session.frames {
                session.clock.consume_step();
                session.step(&mut events)?;
                events.drain();
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    } else {
        for _ in 0..args.session.frames {
            session.step(&mut events)?;
            events.drain();
        }
    }

    let stats = session.sim.stats();
    tracing::info!(
        frames = stats.frames,
        mode = %session.sim.mode(),
        mode_changes = events.total(SimEventKind::ModeChanged),
        emitters = session.sim.emitters().len(),
        live_particles = session.sim.particles().len(),
        spawned = stats.particles_spawned,
        bounced = stats.bounced,
        culled = stats.culled,
        "run complete"
    );
    session.sim.shutdown()?;
    Ok(())
}
