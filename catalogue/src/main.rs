//! Catalogue entry-point: loads settings, seeds the catalogue and runs the
//! terminal session on stdin and stdout.

use std::env;
use std::io;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::info;

use catalogue::domain::RandomIdGenerator;
use catalogue::inbound::terminal::{Session, run};
use catalogue::seeding::seed_catalogue_on_startup;
use catalogue::settings::CatalogueSettings;
use catalogue::telemetry::init_tracing;

fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = CatalogueSettings::load_from_iter(env::args_os())
        .map_err(|e| eyre!("failed to load settings: {e}"))?;
    init_tracing(settings.json_logs());

    let store = seed_catalogue_on_startup(&settings).wrap_err("failed to seed the catalogue")?;
    info!(item_count = store.len(), "catalogue ready");

    let mut session = Session::new(store, RandomIdGenerator);
    run(&mut session, io::stdin().lock(), io::stdout().lock())
        .wrap_err("terminal session failed")?;
    Ok(())
}
