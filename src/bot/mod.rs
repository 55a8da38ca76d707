pub mod command;
pub mod render;

pub use command::Command;

use crate::error::RecommendError;
use crate::models::MovieTable;
use crate::services;
use crate::services::recommend::{DEFAULT_GENRE_LIMIT, DEFAULT_POPULAR_LIMIT};

/// Answers one chat command against the loaded dataset.
///
/// `table` is None when the dataset failed to load at startup; every
/// data-backed command then reports the unavailable condition. Recoverable
/// engine errors render as friendly replies, so this function never fails.
pub fn respond(table: Option<&MovieTable>, command: Command) -> String {
    match (command, table) {
        // Conversational commands work even without a dataset.
        (Command::Start, _) => render::greeting(),
        (Command::Help, _) => render::help(),
        (Command::Unknown(_), _) => render::unknown_command(),

        (_, None) => render::unavailable(),

        (Command::Genres, Some(table)) => render::genre_list(table.genres()),
        (Command::Recommend(None), Some(table)) => render::genre_options(table.genres()),
        (Command::Recommend(Some(genre)), Some(table)) => {
            let shelf = services::by_genre(table, &genre, DEFAULT_GENRE_LIMIT, DEFAULT_GENRE_LIMIT);
            render::genre_shelf(&genre, &shelf)
        }
        (Command::Popular, Some(table)) => match services::popular(table, DEFAULT_POPULAR_LIMIT) {
            Ok(movies) => render::popular_list(&movies),
            Err(RecommendError::NoRatedMovies) => render::no_rated_movies(),
            Err(RecommendError::EmptyTable) => render::empty_dataset(),
        },
        (Command::Random, Some(table)) => {
            let mut rng = rand::thread_rng();
            match services::random_pick(table, &mut rng) {
                Ok(movie) => render::random_pick(movie),
                Err(_) => render::empty_dataset(),
            }
        }
    }
}
