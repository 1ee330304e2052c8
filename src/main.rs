use clap::Parser;
use log::info;

use ocean_notes::{App, Cli, Config, FileSlotStore, NotesStore, Result};

pub fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() -> Result<()> {
    initialize_logger();

    let cli = Cli::parse();

    let config = Config::resolve(cli.data_dir)?;
    info!("Using data directory: {}", config.data_dir.display());

    let slots = FileSlotStore::new(config.data_dir.clone())?;
    let store = NotesStore::open(slots);

    let mut app = App::new(store, cli.verbose);
    app.run(cli.command)
}
