use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("agora.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub threads: Option<Threads>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fills missing sections from `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        let Self { db, threads } = self;
        Self {
            db: db.or(defaults.db),
            threads: threads.or(defaults.threads),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Threads {
    pub default_sort: String,
    pub page_size: u64,
}
