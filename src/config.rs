use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub log: Option<Log>,
}

impl Config {
    /// Running from a blog root with no config file: posts are read from
    /// ./posts and the indexes are written next to it.
    pub fn with_default_paths() -> Config {
        Config {
            paths: Paths {
                posts_dir: PathBuf::from("posts"),
                output_dir: PathBuf::from("."),
            },
            log: None,
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe().unwrap();
        let exe_dir = cur_exe.parent().unwrap().to_str().unwrap();
        let str_path = path.to_str().unwrap();
        PathBuf::from(str_path.replace("${exe_dir}", exe_dir))
    } else {
        path
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.to_str().unwrap(), e))),
    };

    let mut cfg: Config = match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
        output_dir: parse_path(cfg.paths.output_dir),
    };

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_read_config() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("postdex.toml");
        fs::write(
            &cfg_path,
            "[paths]\nposts_dir = \"content/posts\"\noutput_dir = \"site\"\n",
        )
        .unwrap();

        let config = read_config(&cfg_path).unwrap();
        assert_eq!(config.paths.posts_dir, PathBuf::from("content/posts"));
        assert_eq!(config.paths.output_dir, PathBuf::from("site"));
        assert!(config.log.is_none());
    }

    #[test]
    fn test_read_config_with_log_section() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("postdex.toml");
        fs::write(
            &cfg_path,
            "[paths]\nposts_dir = \"posts\"\noutput_dir = \".\"\n\n[log]\nlevel = \"Info\"\nlog_to_console = true\n",
        )
        .unwrap();

        let config = read_config(&cfg_path).unwrap();
        let log = config.log.unwrap();
        assert!(log.log_to_console);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_read_config_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("postdex.toml");
        fs::write(&cfg_path, "[paths\n").unwrap();

        assert!(read_config(&cfg_path).is_err());
    }
}
