//! Presentation adapter: turns engine output into chat-ready text.

use crate::models::MovieRecord;
use crate::services::GenreShelf;

pub fn greeting() -> String {
    "Hello! I am a CineBob!\nI can help you to find a movie to watch.".to_string()
}

pub fn help() -> String {
    "How can I help you?\n\n\
     /genres - list every genre I know\n\
     /recommend <genre> - top movies for a genre\n\
     /popular - the highest rated movies\n\
     /random - let me pick for you"
        .to_string()
}

pub fn unavailable() -> String {
    "Sorry, the movie dataset is unavailable right now. Please try again later.".to_string()
}

pub fn unknown_command() -> String {
    "I don't know that one. Send /help to see what I can do.".to_string()
}

pub fn genre_list(genres: &[String]) -> String {
    if genres.is_empty() {
        return "I don't know any genres yet.".to_string();
    }
    format!("I know these genres: {}", genres.join(", "))
}

pub fn genre_options(genres: &[String]) -> String {
    if genres.is_empty() {
        return "I don't know any genres yet.".to_string();
    }
    format!(
        "Pick a genre and send /recommend <genre>:\n{}",
        genres.join(", ")
    )
}

/// One movie as a single chat line
pub fn movie_line(movie: &MovieRecord) -> String {
    match movie.rating {
        Some(rating) => format!("{} ({}), rated {}", movie.title, movie.year, rating),
        None => format!("{} ({})", movie.title, movie.year),
    }
}

pub fn genre_shelf(genre: &str, shelf: &GenreShelf<'_>) -> String {
    if shelf.is_empty() {
        return format!("I couldn't find any {genre} movies.");
    }

    let mut reply = String::new();
    if !shelf.rated.is_empty() {
        reply.push_str(&format!("Top rated {genre} movies:\n"));
        for (i, movie) in shelf.rated.iter().enumerate() {
            reply.push_str(&format!("{}. {}\n", i + 1, movie_line(movie)));
        }
    }
    if !shelf.unrated.is_empty() {
        if !reply.is_empty() {
            reply.push('\n');
        }
        reply.push_str("Not rated yet, but might be worth a look:\n");
        for movie in &shelf.unrated {
            reply.push_str(&format!("- {}\n", movie_line(movie)));
        }
    }
    reply.trim_end().to_string()
}

pub fn popular_list(movies: &[&MovieRecord]) -> String {
    let mut reply = String::from("The most popular movies I know:\n");
    for (i, movie) in movies.iter().enumerate() {
        reply.push_str(&format!("{}. {}\n", i + 1, movie_line(movie)));
    }
    reply.trim_end().to_string()
}

pub fn no_rated_movies() -> String {
    "I don't have any rated movies yet.".to_string()
}

pub fn empty_dataset() -> String {
    "My movie list is empty, so there is nothing to pick from.".to_string()
}

pub fn random_pick(movie: &MovieRecord) -> String {
    let mut reply = format!("How about this one?\n{}", movie_line(movie));
    if let Some(plot) = &movie.plot {
        reply.push('\n');
        reply.push_str(plot);
    }
    reply
}
