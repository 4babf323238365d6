//! Фильтры по настройкам пользователя. Все функции чистые.

pub mod seats;
pub mod shows;

pub use seats::{adjacent_pairs, apply_seat_preferences, filter_rows, filter_sections};
pub use shows::{apply_show_preferences, filter_by_day, filter_by_title};
