use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use agora_core::{entities::CommentSort, util::validate::MAX_PAGE_LIMIT};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "agora.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub threads: Threads,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

#[derive(Debug)]
pub struct Threads {
    pub default_sort: CommentSort,
    pub page_size: u64,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, threads } = from.or(raw::Config::embedded_default()?);

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Threads {
            default_sort,
            page_size,
        } = threads.ok_or_else(|| anyhow!("Missing threads configuration"))?;
        let default_sort = default_sort
            .parse()
            .map_err(|_| anyhow!("Invalid default sort order '{default_sort}'"))?;
        if page_size == 0 || page_size > MAX_PAGE_LIMIT {
            return Err(anyhow!(
                "The page size must be between 1 and {MAX_PAGE_LIMIT}"
            ));
        }
        let threads = Threads {
            default_sort,
            page_size,
        };

        Ok(Self { db, threads })
    }
}
