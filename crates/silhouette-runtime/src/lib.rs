//! Silhouette Runtime - Frame loop infrastructure
//!
//! Provides the building blocks around a simulation tick:
//! - `FrameClock` - frame counter with a fixed-timestep accumulator for paced playback
//! - `InputState` - device events latched into one-tick `FrameInput` signals
//! - `SimEvent` / `EventBus` - typed event queue with running per-kind totals
//! - `RuntimeSystem` - trait for systems ticked by the frame loop
//! - `InputScript` - TOML-described scripted input for headless runs

mod clock;
mod event;
mod event_bus;
mod input;
mod script;
mod system;

pub use clock::FrameClock;
pub use event::{EventTotals, SimEvent, SimEventKind};
pub use event_bus::EventBus;
pub use input::{FrameInput, InputState, PRIMARY_BUTTON};
pub use script::{InputScript, PointerSweep, ScriptEvent, ScriptEventKind};
pub use system::RuntimeSystem;
