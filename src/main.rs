// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use christoffel_cutlery::{init_logging, AppConfig, Course, LogTarget, MenuCatalog, MenuItem};

#[derive(Parser, Debug)]
#[command(name = "christoffel-cutlery", version, about = "Christoffel Cutlery menu manager")]
struct Cli {
    /// Config file (TOML); falls back to $CUTLERY_CONFIG, then built-in defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu manager (default)
    Ui,

    /// Print the menu
    List {
        /// Only this course (STARTER, MAIN, DESSERT)
        #[arg(long)]
        course: Option<Course>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Dish count and average price per course
    Stats,

    /// Find dishes by name, description or ingredient
    Search { query: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("❌ {}", error);
        }
        bail!("Invalid configuration ({} problem(s))", errors.len());
    }

    let command = cli.command.unwrap_or(Command::Ui);
    let target = match command {
        Command::Ui => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    init_logging(&config.log, target)?;

    let catalog = if config.menu.seed_defaults {
        MenuCatalog::with_defaults(config.intensity)
    } else {
        MenuCatalog::new(config.intensity)
    };

    match command {
        Command::Ui => run_ui_mode(catalog, &config)?,
        Command::List { course, json } => {
            let items: Vec<&MenuItem> = match course {
                Some(course) => catalog.filter_by_category(course).collect(),
                None => catalog.list_items().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_items(&items, &config.menu.currency);
            }
        }
        Command::Stats => {
            println!("🍽️  {}", config.menu.restaurant_name);
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            for summary in catalog.category_summary() {
                println!(
                    "{:<8} {:>3} dishes   avg {}{}",
                    summary.course.as_str(),
                    summary.count,
                    config.menu.currency,
                    summary.average_price
                );
            }
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            println!("Total: {} dishes", catalog.len());
        }
        Command::Search { query } => {
            let hits = catalog.search_items(&query);
            if hits.is_empty() {
                println!("No dishes match {:?}", query);
            } else {
                print_items(&hits, &config.menu.currency);
            }
        }
    }

    Ok(())
}

fn print_items(items: &[&MenuItem], currency: &str) {
    if items.is_empty() {
        println!("No items found");
        return;
    }

    for item in items {
        println!(
            "{:<28} {:<8} {:>10}  {}",
            item.name,
            item.category.as_str(),
            item.display_price(currency),
            item.intensity
        );
        if !item.ingredients.is_empty() {
            println!("    {}", item.ingredients.join(", "));
        }
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: MenuCatalog, config: &AppConfig) -> Result<()> {
    let mut app = ui::App::new(catalog, config.menu.clone());
    ui::run_ui(&mut app)?;

    println!("\n✅ Closed {}. See you next time!", config.menu.restaurant_name);

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: MenuCatalog, _config: &AppConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: christoffel-cutlery list | stats | search <query>");
    std::process::exit(1);
}
