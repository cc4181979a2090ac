use std::env;
use std::path::PathBuf;

use postdex::config::{read_config, Config};

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_path = env::current_exe().unwrap();
    let exe_dir = exe_path.parent().unwrap();
    let cur_dir = env::current_dir().unwrap();

    if exe_dir.join(CFG_FILE_NAME).exists() {
        return Some(exe_dir.join(CFG_FILE_NAME));
    }

    if cur_dir.join(CFG_FILE_NAME).exists() {
        return Some(cur_dir.join(CFG_FILE_NAME));
    }

    let cfg_dir = dirs::config_dir().expect("Could not find user config dir");
    if cfg_dir.join(CFG_FILE_NAME).exists() {
        return Some(cfg_dir.join(CFG_FILE_NAME));
    }

    None
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        // No config anywhere: index ./posts into the current directory
        None => return Ok(Config::with_default_paths()),
        Some(x) => x,
    };

    println!("Reading config from {}", config_path.to_str().unwrap());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.unwrap_or_else(|| {
            dirs::cache_dir().unwrap().join("Postdex").join("log").join("indexer.log")
        });
        log.location = Some(location);
        println!("Log enabled. Files will be written in {}", log.location.as_ref().unwrap().to_str().unwrap());
        config.log = Some(log);
    }

    Ok(config)
}
