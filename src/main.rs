use anyhow::Result;
use autofilm::{APP_NAME, APP_VERSION, Settings, logging};
use log::info;

fn main() -> Result<()> {
    let settings = Settings::new()?;
    logging::init(&settings)?;

    info!("{} v{} started", APP_NAME, APP_VERSION);
    info!(
        "running in {} mode, logging to {}",
        if settings.is_debug() { "debug" } else { "production" },
        settings.log_file().display()
    );

    let servers = settings.alist_server_list()?;
    let ani_sources = settings.ani2alist_list()?;
    let posters = settings.library_poster_list()?;
    info!(
        "configured: {} Alist2Strm server(s), {} Ani2Alist source(s), {} library poster task(s)",
        servers.len(),
        ani_sources.len(),
        posters.len()
    );
    info!(
        "rate limit retry wait: {:?}",
        settings.rate_limit_retry_wait()?
    );

    Ok(())
}
