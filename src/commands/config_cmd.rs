use clap::{Args, Subcommand};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::OutputFormat;
use menucat::config::{Config, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        cli_config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            let path = cli_config_path.unwrap_or_else(Config::default_config_path);
                            println!("Config file: {} (not found)", path.display());
                        }
                        println!();

                        println!("server_url: {}", config.server_url.value);
                        println!("  source: {}", config.server_url.source);
                        println!();

                        println!("prefs_path: {}", config.prefs_path.value.display());
                        println!("  source: {}", config.prefs_path.source);
                        println!();

                        println!("timeout_secs: {}", config.timeout_secs.value);
                        println!("  source: {}", config.timeout_secs.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = cli_config_path.unwrap_or_else(Config::default_config_path);

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'menucat config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let mut file = fs::File::create(&config_path)?;
                file.write_all(default_config_contents().as_bytes())?;

                println!("Created config file: {}", config_path.display());
                println!("\nEdit this file to customize your settings.");
                Ok(())
            }
        }
    }
}

fn default_config_contents() -> String {
    format!(
        r#"# menucat configuration

# URL of the menu item collection
server_url: {}

# Where the theme preference is stored (default: platform data dir)
# prefs_path: prefs.yaml

# Request timeout in seconds (at least 1)
timeout_secs: {}
"#,
        DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use menucat::config::ConfigSource;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("menucat").join("config.yaml");
        let config = Config::load(Some(config_path.clone())).unwrap();

        let cmd = ConfigCommand {
            command: ConfigSubcommand::Init,
        };
        cmd.run(&config, Some(config_path.clone())).unwrap();
        assert!(config_path.exists());

        let reloaded = Config::load(Some(config_path)).unwrap();
        assert_eq!(reloaded.server_url.value, DEFAULT_SERVER_URL);
        assert_eq!(reloaded.server_url.source, ConfigSource::File);
        assert_eq!(reloaded.prefs_path.source, ConfigSource::Default);
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "timeout_secs: 99\n").unwrap();
        let config = Config::load(Some(config_path.clone())).unwrap();

        let cmd = ConfigCommand {
            command: ConfigSubcommand::Init,
        };
        cmd.run(&config, Some(config_path.clone())).unwrap();
        assert_eq!(fs::read_to_string(config_path).unwrap(), "timeout_secs: 99\n");
    }
}
