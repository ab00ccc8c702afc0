use clap::{Parser, Subcommand};

use recipe_hub::listing::{self, ListingQuery, SortKey};
use recipe_hub::model::{Category, Difficulty};
use recipe_hub::{render, AppConfig, FavoritesStore, RecipeError, RecipeService, RecipeSource};

#[derive(Parser)]
#[command(name = "recipe-hub", about = "Browse, search, and favorite recipes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category overview
    Home,
    /// Full recipe listing with live search, filters, and sorting
    List {
        /// Match against name, category, description, or any ingredient
        #[arg(long)]
        search: Option<String>,
        /// Sort key: name, time, or difficulty
        #[arg(long, default_value = "name")]
        sort: SortKey,
        /// Only show one difficulty level
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Fetch one cuisine instead of the full listing
        #[arg(long)]
        cuisine: Option<String>,
    },
    /// Recipes in one category
    Category { name: String },
    /// One recipe in full
    Show {
        id: u32,
        /// Render a plain print-friendly sheet
        #[arg(long)]
        printable: bool,
    },
    /// Search the recipe source
    Search { query: String },
    /// List favorite recipes
    Favorites {
        /// Remove one id from the favorites list
        #[arg(long)]
        remove: Option<u32>,
    },
    /// Toggle favorite status for a recipe id
    Favorite { id: u32 },
}

#[tokio::main]
async fn main() -> Result<(), RecipeError> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let service = RecipeService::new(&config);
    let favorites = FavoritesStore::open(&config.favorites_path)?;

    match cli.command {
        Commands::Home => home(),
        Commands::List {
            search,
            sort,
            difficulty,
            cuisine,
        } => {
            let recipes = match &cuisine {
                Some(area) => service.recipes_by_area(area).await,
                None => service.all_recipes().await,
            };
            let query = ListingQuery {
                search,
                difficulty,
                sort,
            };
            let filtered = listing::apply(&recipes, &query);
            if query.search.is_some() {
                println!(
                    "Found {} recipe{}",
                    filtered.len(),
                    if filtered.len() == 1 { "" } else { "s" }
                );
            }
            render_list(&filtered, &favorites);
        }
        Commands::Category { name } => {
            let recipes = service.recipes_by_category(&name).await;
            println!("{} Recipes\n", titlecase(&name));
            render_list(&recipes, &favorites);
        }
        Commands::Show { id, printable } => match service.recipe_by_id(id).await {
            Some(recipe) if printable => print!("{}", render::printable(&recipe)),
            Some(recipe) => print!("{}", render::detail(&recipe, favorites.contains(id))),
            None => println!("Recipe not found!"),
        },
        Commands::Search { query } => {
            let results = service.search(&query).await;
            render_list(&results, &favorites);
        }
        Commands::Favorites { remove } => {
            if let Some(id) = remove {
                if !favorites.remove(id)? {
                    println!("{} was not a favorite", id);
                }
            }
            let ids = favorites.ids();
            let recipes = service.resolve_favorites(&ids).await;
            println!(
                "❤️ My Favorite Recipes ({} saved {})\n",
                recipes.len(),
                if recipes.len() == 1 { "recipe" } else { "recipes" }
            );
            if recipes.is_empty() {
                println!("No favorites yet!");
                println!("Start exploring recipes and save your favorites.");
            } else {
                for recipe in &recipes {
                    println!("{}\n", render::card(recipe, true));
                }
            }
        }
        Commands::Favorite { id } => {
            if favorites.toggle(id)? {
                println!("❤️ Saved recipe {}", id);
            } else {
                println!("🤍 Removed recipe {}", id);
            }
        }
    }

    Ok(())
}

fn home() {
    println!("🍴 Welcome to Recipe Hub");
    println!("Browse by Category\n");
    for category in Category::ALL {
        println!("  {} {}", category.icon(), category);
    }
    println!("\nTry: recipe-hub list, or recipe-hub category breakfast");
}

fn render_list(recipes: &[recipe_hub::Recipe], favorites: &FavoritesStore) {
    if recipes.is_empty() {
        println!("No recipes found");
        println!("Try searching with different keywords");
        return;
    }
    for recipe in recipes {
        println!("{}\n", render::card(recipe, favorites.contains(recipe.id)));
    }
}

fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
