use clap::{Args, Subcommand};
use menucat_core::{CatalogSession, MenuItemForm, Theme};
use std::io::{self, Write};

use super::OutputFormat;
use menucat::render::{render_header, render_list, render_notice};

#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand)]
pub enum ItemSubcommand {
    /// List all menu items
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Reload the menu from the server
    Refresh,

    /// Show one menu item
    Show {
        /// Menu item ID
        id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a menu item
    Create {
        /// Name of the item
        name: String,

        /// Price, e.g. 9.99
        #[arg(long, allow_hyphen_values = true)]
        price: String,

        /// Description
        #[arg(long, default_value = "")]
        description: String,

        /// Category label, e.g. "Main Course"
        #[arg(long, default_value = "")]
        category: String,
    },

    /// Edit an existing menu item
    Update {
        /// Menu item ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New price
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a menu item
    Delete {
        /// Menu item ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl ItemCommand {
    pub async fn run(
        &self,
        session: &mut CatalogSession,
        theme: Theme,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let result = self.execute(session, theme).await;
        // Failures leave their notice behind; show it before the error exits.
        flush_notice(session);
        result
    }

    async fn execute(
        &self,
        session: &mut CatalogSession,
        theme: Theme,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ItemSubcommand::List { format } => {
                let view = session.load().await?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(view.items())?);
                    }
                    OutputFormat::Text => {
                        println!("{}\n", render_header(theme));
                        println!("{}", render_list(view));
                    }
                }
                Ok(())
            }

            ItemSubcommand::Refresh => {
                session.refresh().await?;
                flush_notice(session);
                print_list(session, theme);
                Ok(())
            }

            ItemSubcommand::Show { id, format } => {
                let item = session.inspect(*id).await?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&item)?),
                    OutputFormat::Text => println!("{}", item),
                }
                Ok(())
            }

            ItemSubcommand::Create {
                name,
                price,
                description,
                category,
            } => {
                let form = MenuItemForm {
                    name: name.clone(),
                    description: description.clone(),
                    price: price.clone(),
                    category: category.clone(),
                };
                session.create(form).await?;
                flush_notice(session);
                print_list(session, theme);
                Ok(())
            }

            ItemSubcommand::Update {
                id,
                name,
                price,
                description,
                category,
            } => {
                let has_updates = name.is_some()
                    || price.is_some()
                    || description.is_some()
                    || category.is_some();

                if !has_updates {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                let mut form = session.open_edit(*id).await?;
                if let Some(name) = name {
                    form.name = name.clone();
                }
                if let Some(price) = price {
                    form.price = price.clone();
                }
                if let Some(description) = description {
                    form.description = description.clone();
                }
                if let Some(category) = category {
                    form.category = category.clone();
                }

                session.update(form).await?;
                flush_notice(session);
                print_list(session, theme);
                Ok(())
            }

            ItemSubcommand::Delete { id, force } => {
                let deleted = session
                    .delete(*id, |_| *force || confirm_delete())
                    .await?;
                if !deleted {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
                flush_notice(session);
                print_list(session, theme);
                Ok(())
            }
        }
    }
}

fn confirm_delete() -> bool {
    print!("Are you sure you want to delete this menu item? [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

fn flush_notice(session: &mut CatalogSession) {
    if let Some(notice) = session.take_notice() {
        if notice.is_error() {
            eprintln!("{}", render_notice(&notice));
        } else {
            println!("{}", render_notice(&notice));
        }
    }
}

fn print_list(session: &CatalogSession, theme: Theme) {
    if let Some(view) = session.list() {
        println!("\n{}\n", render_header(theme));
        println!("{}", render_list(view));
    }
}
