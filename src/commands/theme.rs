use clap::{Args, Subcommand, ValueEnum};
use menucat_core::Theme;

use menucat::config::Config;
use menucat::prefs::PreferenceStore;

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Args)]
pub struct ThemeCommand {
    #[command(subcommand)]
    pub command: ThemeSubcommand,
}

#[derive(Subcommand)]
pub enum ThemeSubcommand {
    /// Show the current theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

impl ThemeCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let store = PreferenceStore::new(config.prefs_path.value.clone());

        let theme = match &self.command {
            ThemeSubcommand::Show => store.theme(),
            ThemeSubcommand::Toggle => store.toggle_theme()?,
            ThemeSubcommand::Set { theme } => {
                let theme = Theme::from(*theme);
                store.set_theme(theme)?;
                theme
            }
        };

        println!("{} {}", theme.icon(), theme);
        Ok(())
    }
}
