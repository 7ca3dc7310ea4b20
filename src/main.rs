use clap::{Parser, Subcommand};
use log::{debug, error};

use mealdb_search::controller::Outcome;
use mealdb_search::quotes::today_quote;
use mealdb_search::{
    FaultPolicy, MealDbSource, RecipeDetail, SearchAggregator, SearchConfig, SearchController,
};

#[derive(Parser, Debug)]
#[command(name = "mealdb-search", version, about = "Find recipes by ingredient")]
struct Cli {
    /// Override the recipe service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Reaction to a failing query: fail-fast or isolated
    #[arg(long, global = true)]
    policy: Option<FaultPolicy>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by ingredient
    Search {
        /// Ingredient term, e.g. "pasta" or "chicken"
        term: String,
    },
    /// Pick one random recipe
    Random,
    /// Show the full recipe for an identifier
    Show {
        /// Recipe identifier, e.g. 52772
        id: String,
    },
    /// Print today's quote
    Quote,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SearchConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    debug!("{:?}", config);

    let source = MealDbSource::from_config(&config)?;
    let controller = SearchController::new(SearchAggregator::from_config(source, &config));

    match cli.command {
        Command::Search { term } => {
            let outcome = controller.search(&term).await;
            if let Ok(Outcome::Skipped) = outcome {
                println!("Search for an ingredient to get started");
                return Ok(());
            }
            if let Err(e) = outcome {
                error!("Error fetching recipes: {}", e);
            }
            print_results(&controller);
        }
        Command::Random => {
            if let Err(e) = controller.random().await {
                error!("Error fetching random recipe: {}", e);
            }
            print_results(&controller);
        }
        Command::Show { id } => match controller.aggregator().lookup(&id).await {
            Ok(Some(detail)) => print_detail(&detail),
            Ok(None) => println!("Recipe details not found"),
            Err(e) => {
                error!("Error fetching recipe details: {}", e);
                println!("Failed to fetch recipe details");
            }
        },
        Command::Quote => println!("\"{}\"", today_quote()),
    }

    Ok(())
}

fn print_results<S: mealdb_search::RecipeSource>(controller: &SearchController<S>) {
    let results = controller.results();
    if let Some(label) = controller.label() {
        println!("Results for \"{}\"", label);
    }
    println!("{}", controller.summary_line());

    if results.is_empty() {
        println!("No recipes found. Try searching for a different ingredient");
        return;
    }

    for recipe in &results {
        println!(
            "{:>8}  {}  {}",
            recipe.id,
            recipe.name,
            recipe.thumbnail.as_deref().unwrap_or("-")
        );
    }
}

fn print_detail(detail: &RecipeDetail) {
    println!("{}", detail.name);

    let meta: Vec<&str> = [detail.category.as_deref(), detail.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !meta.is_empty() {
        println!("{}", meta.join(" | "));
    }
    let tags = detail.tag_list();
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }

    println!("\nIngredients");
    for item in detail.ingredients() {
        if item.measure.is_empty() {
            println!("  - {}", item.ingredient);
        } else {
            println!("  - {} {}", item.measure, item.ingredient);
        }
    }

    println!("\nInstructions\n");
    println!("{}", detail.formatted_instructions());

    if let Some(video) = detail.video_url() {
        println!("\nVideo: {}", video);
    }
    if let Some(source) = detail.source_url() {
        println!("Source: {}", source);
    }
}
