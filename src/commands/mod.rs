mod config_cmd;
mod item;
mod theme;

use clap::ValueEnum;

pub use config_cmd::ConfigCommand;
pub use item::ItemCommand;
pub use theme::ThemeCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
