use scraper::Html;
use tracing::warn;

use super::selectors::hall;
use crate::error::ParseError;
use crate::models::{RawSeat, Seat, SeatsBySection};

/// Слово "Ряд" во второй части описания: у секции нет номера ложи.
pub const ROW_MARKER: &str = "Ряд";

/// Минимум частей: секция, ряд, место, цена.
const MIN_DESCRIPTOR_PARTS: usize = 4;

/// Все свободные места на схеме зала, в порядке документа.
pub fn extract_available_seats(html: &str) -> Vec<RawSeat> {
    let document = Html::parse_document(html);

    document
        .select(&hall::AVAILABLE_SEAT)
        .filter_map(|element| match element.value().attr(hall::DESCRIPTOR_ATTR) {
            Some(descriptor) => Some(RawSeat { descriptor: descriptor.to_string() }),
            None => {
                warn!("Skipping available seat without `{}` attribute", hall::DESCRIPTOR_ATTR);
                None
            }
        })
        .collect()
}

/// Разбирает описание места: `"Партер, Ряд 3, Місце 12, 250"` → `("Партер", Seat)`.
///
/// Ряд, место и цена всегда берутся с конца, поэтому название секции
/// может состоять из любого числа частей.
pub fn parse_seat_descriptor(descriptor: &str) -> Result<(String, Seat), ParseError> {
    let parts: Vec<&str> = descriptor.split(',').map(str::trim).collect();
    if parts.len() < MIN_DESCRIPTOR_PARTS {
        return Err(ParseError::MalformedSeat {
            descriptor: descriptor.to_string(),
            reason: format!("expected at least {} parts, got {}", MIN_DESCRIPTOR_PARTS, parts.len()),
        });
    }

    let section = if parts[1].contains(ROW_MARKER) {
        parts[0].to_string()
    } else {
        // ложа с номером: "5 Ложа, 1, ..." → "5 Ложа 1"
        format!("{} {}", parts[0], parts[1])
    };

    let n = parts.len();
    let seat = Seat {
        row: parts[n - 3].to_string(),
        seat: parts[n - 2].to_string(),
        price: parts[n - 1].to_string(),
    };

    Ok((section, seat))
}

/// Группирует места по секциям. Битые описания пропускаются с предупреждением.
pub fn organize_seats(raw_seats: &[RawSeat]) -> SeatsBySection {
    let mut seats_by_section = SeatsBySection::new();

    for raw in raw_seats {
        match parse_seat_descriptor(&raw.descriptor) {
            Ok((section, seat)) => seats_by_section.entry(section).or_default().push(seat),
            Err(e) => warn!("Skipping seat: {}", e),
        }
    }

    seats_by_section
}
