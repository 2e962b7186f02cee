//! CHIP-8 headless driver CLI.
//!
//! This binary loads a ROM image and drives the machine core tick by tick.
//! It performs:
//! 1. **Setup:** Optional JSON configuration, tracing subscriber, ROM load.
//! 2. **Run loop:** A fixed number of ticks (or unbounded), surfacing faults.
//! 3. **Inspection:** Optional ASCII framebuffer dump when the run ends.
//!
//! There is no window, sound, or keyboard here: those are external sinks
//! and sources. This driver exists to run and inspect programs headlessly.

use std::fs;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chip8_core::sim::loader;
use chip8_core::{Config, Driver, Machine};

#[derive(Parser, Debug)]
#[command(
    name = "c8",
    author,
    version,
    about = "CHIP-8 virtual machine (headless driver)",
    long_about = "Load a ROM image and run it for a number of ticks.\n\nEach tick executes the configured instruction budget and decays the timers once. Use RUST_LOG=chip8_core=trace for a per-instruction trace.\n\nExamples:\n  c8 roms/ibm-logo.ch8 --dump\n  c8 roms/maze.ch8 --ticks 0 --ipt 20\n  c8 roms/pong.ch8 --config machine.json"
)]
struct Cli {
    /// ROM image to execute (raw big-endian instruction stream).
    rom: String,

    /// JSON configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<String>,

    /// Instructions per tick; overrides the configured budget.
    #[arg(long)]
    ipt: Option<u32>,

    /// Ticks to run before exiting; 0 runs until a fault.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Print the framebuffer as ASCII when the run ends.
    #[arg(long)]
    dump: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path),
        None => Config::default(),
    };
    if let Some(ipt) = cli.ipt {
        config.instructions_per_tick = ipt;
    }

    println!("[*] Running {}", cli.rom);
    println!(
        "    ipt: {}  tick rate: {} Hz  ticks: {}",
        config.instructions_per_tick,
        config.tick_hz,
        if cli.ticks == 0 {
            "unbounded".to_string()
        } else {
            cli.ticks.to_string()
        }
    );

    let mut machine = Machine::new();
    if let Err(e) = loader::load_rom_into(&cli.rom, &mut machine) {
        eprintln!("\n[!] FATAL: could not load '{}': {}", cli.rom, e);
        process::exit(1);
    }

    let mut driver = Driver::new(machine, &config);

    let mut tick = 0u64;
    while cli.ticks == 0 || tick < cli.ticks {
        if let Err(e) = driver.tick() {
            eprintln!("\n[!] FATAL FAULT: {}", e);
            eprintln!("    {:?}", driver.machine);
            process::exit(1);
        }
        tick += 1;
    }

    println!("[*] Ran {} ticks", tick);
    if cli.dump {
        dump_framebuffer(&driver.machine);
    }
}

/// Reads and parses a JSON configuration file; exits on any failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path, e);
        process::exit(1);
    })
}

/// Prints the 64×32 framebuffer, one character per pixel.
fn dump_framebuffer(machine: &Machine) {
    use chip8_core::common::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

    let gfx = machine.framebuffer();
    for row in 0..DISPLAY_HEIGHT {
        let line: String = (0..DISPLAY_WIDTH)
            .map(|col| {
                if gfx[row * DISPLAY_WIDTH + col] == 0 {
                    '.'
                } else {
                    '#'
                }
            })
            .collect();
        println!("{}", line);
    }
}
