pub mod movie;
pub mod table;

pub use movie::MovieRecord;
pub use table::{derive_genres, MovieTable};
