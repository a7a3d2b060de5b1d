use anyhow::{Context, Result};
use clap::Parser;
use fft::{CLIArgs, PHASE_COUNT, REPEAT_COUNT};

fn main() -> Result<()> {
    fft::init_tracing();
    let args = CLIArgs::parse();
    let signal = fft::read_signal(&args.input_path).with_context(|| {
        format!(
            "Failed to read input signal from given file({}).",
            args.input_path.display()
        )
    })?;

    let output_offset = signal.message_offset()?;
    let offset_eight_digits = fft::offset_message(&signal, PHASE_COUNT)?;
    println!(
        "After {} phases on the signal repeated {} times, the offset({}) eight signal digits are {}.",
        PHASE_COUNT, REPEAT_COUNT, output_offset, offset_eight_digits
    );

    Ok(())
}
