use anyhow::{Context, Result};
use clap::Parser;
use fft::{CLIArgs, PHASE_COUNT};

fn main() -> Result<()> {
    fft::init_tracing();
    let args = CLIArgs::parse();
    let signal = fft::read_signal(&args.input_path).with_context(|| {
        format!(
            "Failed to read input signal from given file({}).",
            args.input_path.display()
        )
    })?;

    let first_eight_digits = fft::direct_message(&signal, PHASE_COUNT)?;
    println!(
        "After {} phases, the first eight signal digits are {}",
        PHASE_COUNT, first_eight_digits
    );

    Ok(())
}
