use std::io::Write;

use anyhow::Context;
use forgehr_employees::{Company, demo};
use forgehr_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    forgehr_observability::init_with(LogConfig::compact("info"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    demo::run(Company::global(), &mut out).context("failed to write demo transcript")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
