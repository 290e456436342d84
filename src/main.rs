use std::process;

use clap::Parser as _;

mod cli;
mod config;
mod error;
mod json;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli::Cli {
        config,
        db_url,
        command,
    } = cli::Cli::parse();

    let mut cfg = match config::Config::try_load_from_file_or_default(config) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            process::exit(1);
        }
    };
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = match agora_db_sqlite::Connections::init(
        &cfg.db.conn_sqlite,
        cfg.db.conn_pool_size.into(),
    )
    .and_then(|connections| {
        agora_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
        Ok(connections)
    }) {
        Ok(connections) => connections,
        Err(err) => {
            log::error!("Failed to open database: {err}");
            process::exit(1);
        }
    };

    match cli::run(command, &connections, &cfg) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::debug!("Command failed: {err:?}");
            let err = error::to_json(&err);
            match serde_json::to_string_pretty(&err) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            process::exit(1);
        }
    }
}
