pub mod show;
pub mod seat;

pub use show::Show;
pub use seat::{RawSeat, Seat, SeatsBySection};
