use anyhow::Result;

fn main() -> Result<()> {
    pomoclock::logging::init_tracing();
    pomoclock::ui::run()?;
    Ok(())
}
