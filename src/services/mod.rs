pub mod recommend;

pub use recommend::{by_genre, popular, random_pick, GenreShelf};
