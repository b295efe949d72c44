use anyhow::{bail, Context, Result};
use std::process::Command;

/// Run `bin` with `args`, capturing stdout. On a non-zero exit the error
/// carries the command line and trimmed stderr; stdout is never included so
/// secret material cannot leak into diagnostics.
pub fn run_capture(bin: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(bin)
        .args(args)
        .output()
        .with_context(|| format!("failed to run {bin}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{bin} {} failed: {}", args.join(" "), stderr.trim());
    }

    String::from_utf8(output.stdout).with_context(|| format!("{bin} produced non-UTF-8 output"))
}

/// Run `bin` with `args` for its side effect, discarding stdout.
pub fn run_checked(bin: &str, args: &[&str]) -> Result<()> {
    run_capture(bin, args).map(|_| ())
}
