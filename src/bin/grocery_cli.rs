//! Terminal front end for the grocery list.
//!
//! Each invocation loads the list from the server, applies one action and prints the
//! rendered markup of the selected view to stdout. Alerts and confirmations use
//! stderr/stdin.

use clap::{Parser, Subcommand};
use grocery_list::client::{Filter, GroceryApp, HttpGroceryApi, TerminalPrompt};
use grocery_list::infra::{config, telemetry};
use std::io::{stderr, stdin};

#[derive(Parser, Debug)]
#[command(name = "grocery_cli", about = "Manage the grocery list from a terminal")]
struct Cli {
    /// Server base URL (defaults to GROCERY_API_URL or http://localhost:3000).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Which items to show: all, active or purchased.
    #[arg(long, global = true, default_value = "all")]
    filter: Filter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the list.
    List,
    /// Add an item.
    Add {
        name: String,
        #[arg(long, default_value_t = 1)]
        quantity: i64,
        #[arg(long)]
        category: Option<String>,
    },
    /// Flip an item's purchased flag.
    Toggle { id: u64 },
    /// Change an item's name, quantity or category.
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete an item (asks for confirmation).
    Delete {
        id: u64,
        /// Skip the confirmation question.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing("warn")?;

    let cli = Cli::parse();
    let api = HttpGroceryApi::new(cli.api_url.unwrap_or_else(config::api_url));
    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let prompt = TerminalPrompt::new(stdin().lock(), stderr()).assume_yes(assume_yes);
    let mut app = GroceryApp::new(api, prompt);

    if !app.load().await {
        anyhow::bail!("could not load the grocery list");
    }

    let applied = match cli.command {
        Command::List => true,
        Command::Add {
            name,
            quantity,
            category,
        } => {
            let form = app.form_mut();
            form.name = name;
            form.quantity = quantity;
            if let Some(category) = category {
                form.category = category;
            }
            app.add().await
        }
        Command::Toggle { id } => app.toggle_purchased(id).await,
        Command::Edit {
            id,
            name,
            quantity,
            category,
        } => {
            if !app.open_edit(id) {
                anyhow::bail!("no item with id {}", id);
            }
            if let Some(draft) = app.modal_mut() {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(quantity) = quantity {
                    draft.quantity = quantity;
                }
                if let Some(category) = category {
                    draft.category = category;
                }
            }
            app.save_edit().await
        }
        Command::Delete { id, .. } => app.delete(id).await,
    };

    app.set_filter(cli.filter);
    println!("{}", app.view().to_html());

    if !applied {
        anyhow::bail!("action was not applied");
    }
    Ok(())
}
