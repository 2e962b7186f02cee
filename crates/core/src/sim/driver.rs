//! Per-tick driver over the machine.
//!
//! The interpreter itself knows nothing about time. The driver owns the
//! machine and realizes the tick contract:
//! 1. **Budget:** Execute the configured number of instructions.
//! 2. **Decay:** Decrement both timers exactly once.
//! 3. **Report:** Surface the aggregated redraw flag and the audio edge.
//!
//! Pacing the ticks against a wall clock is the caller's job; one `tick`
//! call is one fixed external time slice.

use tracing::trace;

use crate::common::Fault;
use crate::config::Config;
use crate::machine::Machine;

/// Observable outputs of one driver tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutput {
    /// The framebuffer changed during this tick and should be re-rendered.
    ///
    /// OR of the per-instruction redraw flags, so a draw early in the
    /// budget is not lost behind later instructions.
    pub redraw: bool,
    /// The sound timer was running this tick; an audio sink beeps on this.
    pub sound: bool,
}

/// Top-level driver: machine state plus the per-tick instruction budget.
#[derive(Debug)]
pub struct Driver {
    /// The machine being driven.
    pub machine: Machine,
    instructions_per_tick: u32,
}

impl Driver {
    /// Creates a driver around an already-loaded machine.
    #[must_use]
    pub fn new(machine: Machine, config: &Config) -> Self {
        Self {
            machine,
            instructions_per_tick: config.instructions_per_tick,
        }
    }

    /// Advances the machine by one tick.
    ///
    /// Runs the instruction budget, then decays the timers once. A waiting
    /// machine (key-wait rewinding `pc`) still consumes its budget; each
    /// call re-executes the waiting instruction, so timers keep decaying
    /// while a program blocks on input.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Fault`] raised inside the budget; the
    /// remaining budget is abandoned and timers do not decay for the
    /// faulted tick.
    pub fn tick(&mut self) -> Result<TickOutput, Fault> {
        let mut redraw = false;
        for _ in 0..self.instructions_per_tick {
            redraw |= self.machine.step()?;
        }
        let sound = self.machine.tick_timers();
        trace!(redraw, sound, "tick complete");
        Ok(TickOutput { redraw, sound })
    }
}
