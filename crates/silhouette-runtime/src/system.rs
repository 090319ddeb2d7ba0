//! Runtime system trait

use crate::event_bus::EventBus;
use crate::input::FrameInput;
use silhouette_core::Result;

/// A system that can be ticked by the frame loop
///
/// `update` runs exactly once per frame and must complete before the next
/// frame begins.
pub trait RuntimeSystem {
    /// Called once before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with that frame's latched input
    fn update(&mut self, input: &FrameInput, events: &mut EventBus) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
