use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use retroboy_z80::{Cpu, ResetConfig, StepError};

const USAGE: &str = "Usage: z80_trace <image_path> [load_addr] [max_steps]";
const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Parse a decimal or `0x`-prefixed hexadecimal number.
fn parse_number(text: &str) -> Result<u64> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.with_context(|| format!("invalid number '{text}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path: PathBuf = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let load_addr = match args.next() {
        Some(text) => {
            let value = parse_number(&text)?;
            u16::try_from(value).with_context(|| format!("load address {value:#x} exceeds 0xFFFF"))?
        }
        None => 0x0000,
    };
    let max_steps = match args.next() {
        Some(text) => parse_number(&text)?,
        None => DEFAULT_MAX_STEPS,
    };

    let image = std::fs::read(&image_path)
        .with_context(|| format!("failed to read image '{}'", image_path.display()))?;
    if image.len() > retroboy_z80::MEMORY_SIZE {
        bail!(
            "image '{}' is {} bytes, larger than the 64 KiB address space",
            image_path.display(),
            image.len()
        );
    }

    let mut cpu = Cpu::with_config(ResetConfig::builder().pc(load_addr).build());
    cpu.memory.load(load_addr, &image);

    let mut steps = 0u64;
    let mut stopped: Option<StepError> = None;
    while steps < max_steps {
        match cpu.step() {
            Ok(_) => steps += 1,
            Err(err) => {
                stopped = Some(err);
                break;
            }
        }
    }

    match stopped {
        Some(err) => println!("Stopped after {steps} instructions: {err}"),
        None => println!("Instruction budget of {max_steps} exhausted"),
    }
    println!("{}", cpu.regs);
    println!("Flags: {:?}", cpu.flags());
    println!("Cycles: {}", cpu.cycles);
    Ok(())
}
