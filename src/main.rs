use anyhow::{Context, Result};
use clap::Parser;
use fft::{CLIArgs, PHASE_COUNT};

fn main() -> Result<()> {
    fft::init_tracing();
    let args = CLIArgs::parse();
    fft::self_check().context("Transforms don't give known messages of known signals.")?;

    let signal = fft::read_signal(&args.input_path).with_context(|| {
        format!(
            "Failed to read input signal from given file({}).",
            args.input_path.display()
        )
    })?;
    let direct_message = fft::direct_message(&signal, PHASE_COUNT)?;
    let offset_message = fft::offset_message(&signal, PHASE_COUNT)?;
    println!("{}", direct_message);
    println!("{}", offset_message);

    Ok(())
}
