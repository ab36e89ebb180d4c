use clap::Subcommand;
use learnlog_core::{Config, SnapshotStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "tracker.max_freezes", "calendar.week_start")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

/// Refuse a config that the saved tracker state could not be restored under,
/// e.g. a freeze budget below the freezes already spent.
fn check_against_snapshot(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;
    if let Some(snapshot) = store.load()? {
        config
            .restore_tracker(snapshot)
            .map_err(|e| format!("saved progress is incompatible with this value: {e}"))?;
    }
    Ok(())
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.apply(&key, &value)?;
            check_against_snapshot(&config)?;
            config.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            check_against_snapshot(&config)?;
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
