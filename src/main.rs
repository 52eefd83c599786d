use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io;

use luxestay_core::synthesis::LuxurySynthesis;
use luxestay_gateways::{gemini::Gemini, json_file_session::JsonFileSession};

mod cli;
mod config;
mod render;
mod repl;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;

    let location = args.location().or(cfg.location);
    if let Some(c) = location {
        anyhow::ensure!(c.is_valid(), "Invalid location: {}, {}", c.lat, c.lng);
    }

    log::info!("Keeping the session in {}", cfg.storage.dir.display());
    let session = JsonFileSession::try_new(&cfg.storage.dir)?;

    let config::Gemini {
        api_url,
        model,
        api_key,
    } = cfg.gemini;
    if api_key.is_none() {
        log::warn!("No Gemini API key configured: searches will fail");
    }
    let gateway = Gemini::new(api_url, model, api_key);
    let synthesis = LuxurySynthesis::new(StdRng::from_entropy());

    let mut repl = repl::Repl::new(session, gateway, synthesis, location);
    repl.run(io::stdin().lock(), io::stdout())?;
    Ok(())
}
