//! Configuration for the machine driver.
//!
//! This module defines the externally-owned knobs the core accepts as plain
//! data. It provides:
//! 1. **Defaults:** Baseline driver constants (tick rate, instruction budget).
//! 2. **Structure:** A single flat `Config`, deserializable from JSON.
//!
//! The display dimensions themselves are fixed by the instruction set; only
//! the rendering scale and the timing knobs live here. Use
//! `Config::default()` when no configuration file is supplied.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Number of instructions executed per driver tick.
    ///
    /// The interpreter has no timing model of its own; this budget is the
    /// only notion of speed. Five instructions per 60 Hz tick approximates
    /// the pace the original hardware ran typical programs at.
    pub const INSTRUCTIONS_PER_TICK: u32 = 5;

    /// Driver tick rate in Hz. Timers decay once per tick.
    pub const TICK_HZ: u32 = 60;

    /// Pixels drawn per framebuffer cell by an external display sink.
    pub const PIXEL_SCALE: u32 = 10;
}

/// Driver configuration.
///
/// All fields have defaults, so a partial JSON document is accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Instructions executed per tick before timers decay.
    pub instructions_per_tick: u32,
    /// Tick rate in Hz; owned by the external driver clock.
    pub tick_hz: u32,
    /// Display scale factor for an external rendering sink.
    pub pixel_scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instructions_per_tick: defaults::INSTRUCTIONS_PER_TICK,
            tick_hz: defaults::TICK_HZ,
            pixel_scale: defaults::PIXEL_SCALE,
        }
    }
}
