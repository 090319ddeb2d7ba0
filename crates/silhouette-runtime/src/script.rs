//! Scripted input for headless runs.
//!
//! A script is a TOML file with an optional pointer sweep and a list of
//! discrete events keyed by frame:
//!
//! ```toml
//! [sweep]
//! from = [200.0, 450.0]
//! to = [1400.0, 450.0]
//! period = 240
//!
//! [[event]]
//! frame = 0
//! kind = "click"
//! x = 400.0
//! y = 300.0
//!
//! [[event]]
//! frame = 120
//! kind = "toggle"
//! ```

use crate::input::{InputState, PRIMARY_BUTTON};
use glam::Vec2;
use serde::Deserialize;
use silhouette_core::{Result, SilhouetteError};
use std::path::Path;

/// What a script event does to the input state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEventKind {
    /// Move the pointer to `(x, y)`
    Move,
    /// Click the primary button, optionally after moving to `(x, y)`
    Click,
    /// Press the mode toggle key
    Toggle,
    /// Request an emitter, optionally after moving to `(x, y)`
    Emitter,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptEvent {
    pub frame: u64,
    pub kind: ScriptEventKind,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl ScriptEvent {
    fn position(&self) -> Option<Vec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// Pointer moving back and forth between two points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointerSweep {
    pub from: [f32; 2],
    pub to: [f32; 2],
    /// Frames for a full there-and-back cycle; zero behaves as one
    pub period: u64,
}

impl PointerSweep {
    pub fn position(&self, frame: u64) -> Vec2 {
        let from = Vec2::from_array(self.from);
        let to = Vec2::from_array(self.to);
        let period = self.period.max(1);
        let phase = (frame % period) as f32 / period as f32;
        let t = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        from.lerp(to, t)
    }
}

/// A parsed input script
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputScript {
    pub sweep: Option<PointerSweep>,
    #[serde(rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl InputScript {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut script: InputScript = toml::from_str(content)?;
        script.validate()?;
        script.events.sort_by_key(|e| e.frame);
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if let Some(sweep) = &self.sweep {
            if sweep.period == 0 {
                return Err(SilhouetteError::ScriptError(
                    "sweep period must be at least 1 frame".into(),
                ));
            }
        }
        for event in &self.events {
            if event.x.is_some() != event.y.is_some() {
                return Err(SilhouetteError::ScriptError(format!(
                    "event at frame {} gives only one of x/y",
                    event.frame
                )));
            }
            if event.kind == ScriptEventKind::Move && event.position().is_none() {
                return Err(SilhouetteError::ScriptError(format!(
                    "move event at frame {} needs x and y",
                    event.frame
                )));
            }
        }
        Ok(())
    }

    /// Events scheduled for `frame`, in file order
    pub fn events_at(&self, frame: u64) -> &[ScriptEvent] {
        let start = self.events.partition_point(|e| e.frame < frame);
        let end = self.events.partition_point(|e| e.frame <= frame);
        &self.events[start..end]
    }

    /// Feed this frame's scripted device events into `input`.
    pub fn apply(&self, frame: u64, input: &mut InputState) {
        if let Some(sweep) = &self.sweep {
            let p = sweep.position(frame);
            input.process_mouse_move(p.x, p.y);
        }

        for event in self.events_at(frame) {
            if let Some(p) = event.position() {
                input.process_mouse_move(p.x, p.y);
            }
            match event.kind {
                ScriptEventKind::Move => {}
                ScriptEventKind::Click => {
                    input.process_mouse_button_down(PRIMARY_BUTTON);
                    input.process_mouse_button_up(PRIMARY_BUTTON);
                }
                ScriptEventKind::Toggle => {
                    if let Some(key) = input.toggle_key() {
                        input.process_key_down(key);
                        input.process_key_up(key);
                    }
                }
                ScriptEventKind::Emitter => input.request_emitter(),
            }
        }
    }
}
