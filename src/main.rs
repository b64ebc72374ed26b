use anyhow::{Context as _, Result};
use favicon_gen::favicon::{self, FAVICON_PATH};

fn main() -> Result<()> {
    env_logger::init();

    favicon::write_favicon()
        .with_context(|| format!("failed to write favicon to {}", FAVICON_PATH))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    favicon::report(&mut handle).context("failed to output status")?;

    Ok(())
}
