#![allow(clippy::print_stdout, clippy::print_stderr)]
use crate::cli::{Args, Command, ReasonerKind};
use anyhow::{Context, bail};
use clap::Parser;
use oxrecipe::io::{load, save};
use oxrecipe::{
    DietaryProfile, FallbackReasoner, Reasoner, ReasonerConfig, Recipe, RecipeStore,
    StructuralReasoner, recipe_types, seed_default_data,
};
use std::io::stderr;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(stderr)
        .init();

    let args = Args::parse();
    let file = args.file.as_path();
    let mut store = open_store(file, args.namespace.as_deref())?;
    match args.command {
        Command::Init => {
            if seed_default_data(&mut store)? {
                println!(
                    "Added {} ingredients and {} recipes",
                    store.ingredients().len(),
                    store.recipes().len()
                );
            } else {
                println!("The store already has ingredients, nothing added");
            }
            persist(&mut store, file)
        }
        Command::Ingredients => {
            for ingredient in store.ingredients() {
                println!("{ingredient}");
            }
            Ok(())
        }
        Command::AddIngredient { name, category } => {
            let ingredient = store
                .create_ingredient(&name, &category)
                .with_context(|| format!("Failed to add the ingredient {name}"))?;
            println!("Added {ingredient}");
            persist(&mut store, file)
        }
        Command::AddRecipe { name, ingredients } => {
            let ingredients = ingredients.iter().map(String::as_str).collect::<Vec<_>>();
            store
                .create_recipe(&name, &ingredients)
                .with_context(|| format!("Failed to add the recipe {name}"))?;
            println!("Added {name}");
            persist(&mut store, file)
        }
        Command::Delete { name } => {
            store.delete_entity(&name)?;
            println!("Deleted {name}");
            persist(&mut store, file)
        }
        Command::Reason {
            reasoner,
            timeout_ms,
        } => {
            let reasoner: Box<dyn Reasoner> = match reasoner {
                ReasonerKind::Structural => {
                    let mut config = ReasonerConfig::default();
                    if let Some(timeout_ms) = timeout_ms {
                        config = config.with_timeout(Duration::from_millis(timeout_ms));
                    }
                    Box::new(StructuralReasoner::with_config(config))
                }
                ReasonerKind::Fallback => {
                    if timeout_ms.is_some() {
                        bail!("--timeout-ms is only supported by the structural reasoner");
                    }
                    Box::new(FallbackReasoner)
                }
            };
            if store.run_reasoner(&reasoner) {
                println!("Classified the recipes with the {} reasoner", reasoner.name());
            } else {
                println!(
                    "The {} reasoner failed, categories are computed from the ingredients",
                    reasoner.name()
                );
            }
            print_recipes(store.recipes().iter());
            persist(&mut store, file)
        }
        Command::Recipes => {
            print_recipes(store.recipes().iter());
            Ok(())
        }
        Command::Filter { profile } => {
            if let Err(e) = profile.parse::<DietaryProfile>() {
                eprintln!("{e}, every recipe is admitted");
            }
            for recipe in store.compatible_recipes(&profile) {
                println!("{recipe}");
            }
            Ok(())
        }
    }
}

/// Loads the store file, or creates an empty store if it does not exist yet.
fn open_store(file: &Path, namespace: Option<&str>) -> anyhow::Result<RecipeStore> {
    if !file.exists() {
        info!("{} does not exist, starting from an empty store", file.display());
        return Ok(match namespace {
            Some(namespace) => RecipeStore::with_namespace(namespace)?,
            None => RecipeStore::new(),
        });
    }
    debug!("Loading {}", file.display());
    let store = load(file).with_context(|| format!("Failed to load {}", file.display()))?;
    if let Some(namespace) = namespace {
        if namespace != store.namespace() {
            bail!(
                "{} uses the namespace {}, not {namespace}",
                file.display(),
                store.namespace()
            );
        }
    }
    Ok(store)
}

fn persist(store: &mut RecipeStore, file: &Path) -> anyhow::Result<()> {
    debug!("Saving {}", file.display());
    save(store, file).with_context(|| format!("Failed to save {}", file.display()))
}

fn print_recipes<'a>(recipes: impl Iterator<Item = &'a Recipe>) {
    for recipe in recipes {
        let ingredients = recipe
            .ingredients()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let types = recipe_types(recipe);
        println!("{recipe}: {ingredients}");
        println!("    {types} ({})", types.source);
    }
}
