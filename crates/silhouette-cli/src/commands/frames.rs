//! Frames command - streams draw lists as JSON lines

use super::{Session, SessionArgs};
use anyhow::Result;
use silhouette_runtime::{EventBus, RuntimeSystem};
use std::io::Write;

pub fn run(args: &SessionArgs, every: u64) -> Result<()> {
    let mut session = Session::new(args)?;
    let mut events = EventBus::new();
    let every = every.max(1);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.frames {
        let frame = session.step(&mut events)?;
        events.drain();
        if frame % every == 0 {
            serde_json::to_writer(&mut out, &session.sim.draw())?;
            writeln!(out)?;
        }
    }

    session.sim.shutdown()?;
    Ok(())
}
