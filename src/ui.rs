// UI layer: provides the interactive menu using `dialoguer`.
// Each menu entry runs one catalog operation; failures are printed and
// the loop carries on.

use crate::api::OmdbClient;
use crate::catalog::{Catalog, Filter, QueryOutcome, Snapshot};
use crate::model::{render, Movie};
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const MENU_ITEMS: [&str; 8] = [
    "Display Movie Catalog",
    "Add New Movie",
    "Update Movie Details",
    "Delete Movie",
    "Search Movies",
    "Filter Movies",
    "Fetch Movie Data",
    "Exit",
];

/// Main interactive menu. Runs until the user chooses "Exit".
pub fn main_menu(catalog: &Catalog, api: &OmdbClient) -> Result<()> {
    println!("Welcome to the Movie Catalog CLI!");
    println!("==================================\n");

    loop {
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;
        match selection {
            0 => display_catalog(catalog),
            1 => handle_add(catalog)?,
            2 => handle_update(catalog)?,
            3 => handle_delete(catalog)?,
            4 => handle_search(catalog)?,
            5 => handle_filter(catalog)?,
            6 => handle_fetch(catalog, api)?,
            7 => {
                println!("Thank you for using the Movie Catalog CLI!");
                break;
            }
            _ => {}
        }
    }
    Ok(())
}

fn print_movies(heading: &str, movies: &[Movie]) {
    println!("{}\n", heading);
    for record in render(movies) {
        println!("{}", record);
    }
    println!();
}

fn print_outcome(outcome: QueryOutcome, heading: &str, not_found: &str) {
    match outcome {
        QueryOutcome::EmptyCatalog => println!("No movies available in the catalog.\n"),
        QueryOutcome::NoMatches => println!("{}\n", not_found),
        QueryOutcome::Found(movies) => print_movies(heading, &movies),
    }
}

fn report_success(message: &str) {
    println!("{}\n", message.green());
}

fn report_failure(message: impl std::fmt::Display) {
    println!("{}\n", message.to_string().red());
}

fn display_catalog(catalog: &Catalog) {
    print_movies("Movie Catalog:", &catalog.movies());
}

/// Prompt for one text field. Empty answers are accepted; when `default`
/// is given, pressing Enter keeps it.
fn prompt_field(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new();
    input.with_prompt(prompt).allow_empty(true);
    if let Some(value) = default {
        input.default(value.to_string());
    }
    Ok(input.interact_text()?)
}

fn prompt_movie(verb: &str, current: Option<&Movie>) -> Result<Movie> {
    let title = prompt_field(
        &format!("Enter the {}title of the movie", verb),
        current.map(|m| m.title.as_str()),
    )?;
    let director = prompt_field(
        &format!("Enter the {}director of the movie", verb),
        current.map(|m| m.director.as_str()),
    )?;
    let release_year = prompt_field(
        &format!("Enter the {}release year of the movie", verb),
        current.map(|m| m.release_year.as_str()),
    )?;
    let genre = prompt_field(
        &format!("Enter the {}genre of the movie", verb),
        current.map(|m| m.genre.as_str()),
    )?;
    Ok(Movie {
        title,
        director,
        release_year,
        genre,
    })
}

fn handle_add(catalog: &Catalog) -> Result<()> {
    let movie = prompt_movie("", None)?;
    match catalog.add(movie) {
        Ok(()) => report_success("New movie added successfully!"),
        Err(e) => report_failure(format!("Could not add movie: {}", e)),
    }
    Ok(())
}

/// Show the numbered snapshot and return the chosen index, or `None` when
/// the catalog is empty.
fn select_movie(snapshot: &Snapshot, prompt: &str) -> Result<Option<usize>> {
    if snapshot.is_empty() {
        println!("No movies available in the catalog.\n");
        return Ok(None);
    }
    let items: Vec<String> = snapshot
        .entries()
        .map(|(i, movie)| format!("{}. {}", i + 1, movie.title))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn handle_update(catalog: &Catalog) -> Result<()> {
    let snapshot = catalog.snapshot();
    let Some(index) = select_movie(&snapshot, "Select a movie to update")? else {
        return Ok(());
    };
    let movie = prompt_movie("new ", snapshot.get(index))?;
    match catalog.update(snapshot, index, movie) {
        Ok(_) => report_success("Movie details updated successfully!"),
        Err(e) => report_failure(format!("Could not update movie: {}", e)),
    }
    Ok(())
}

fn handle_delete(catalog: &Catalog) -> Result<()> {
    let snapshot = catalog.snapshot();
    let Some(index) = select_movie(&snapshot, "Select a movie to delete")? else {
        return Ok(());
    };
    match catalog.delete(snapshot, index) {
        Ok(_) => report_success("Movie deleted successfully!"),
        Err(e) => report_failure(format!("Could not delete movie: {}", e)),
    }
    Ok(())
}

fn handle_search(catalog: &Catalog) -> Result<()> {
    let snapshot = catalog.snapshot();
    if snapshot.is_empty() {
        println!("No movies available in the catalog.\n");
        return Ok(());
    }
    let query = prompt_field("Enter a title, director, or genre to search for", None)?;
    print_outcome(
        snapshot.search(&query),
        "Matching Movies:",
        "No matching movies found.",
    );
    Ok(())
}

fn handle_filter(catalog: &Catalog) -> Result<()> {
    let snapshot = catalog.snapshot();
    if snapshot.is_empty() {
        println!("No movies available in the catalog.\n");
        return Ok(());
    }
    let kind = Select::new()
        .with_prompt("Choose a filter type")
        .items(&["Genre", "Release Year"])
        .default(0)
        .interact()?;
    let (filter, not_found) = if kind == 0 {
        let genre = prompt_field("Enter a genre to filter movies", None)?;
        (Filter::Genre(genre), "No movies found for the specified genre.")
    } else {
        let year = prompt_field("Enter a release year to filter movies", None)?;
        (
            Filter::ReleaseYear(year),
            "No movies found for the specified release year.",
        )
    };
    print_outcome(snapshot.filter(&filter), "Filtered Movies:", not_found);
    Ok(())
}

fn handle_fetch(catalog: &Catalog, api: &OmdbClient) -> Result<()> {
    let query = prompt_field("Enter a search query to fetch movies", None)?;

    // indicatif spinner while the request is in flight.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Fetching movies...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let fetched = api.search(&query);
    spinner.finish_and_clear();

    match fetched {
        Ok(movies) => match catalog.import(movies) {
            Ok(_) => report_success("Movies fetched and added to the catalog successfully!"),
            Err(e) => report_failure(format!("Could not save fetched movies: {}", e)),
        },
        Err(e) => {
            log::warn!("import failed: {:#}", e);
            report_failure(format!("Error fetching movies: {:#}", e));
        }
    }
    Ok(())
}
