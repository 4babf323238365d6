//! Разбор HTML: афиша → спектакли, страница спектакля → места.

pub mod seats;
pub mod selectors;
pub mod shows;

pub use seats::{extract_available_seats, organize_seats, parse_seat_descriptor, ROW_MARKER};
pub use shows::extract_shows;
