use std::collections::BTreeSet;

use crate::config::{Preferences, SectionRows};
use crate::models::{Seat, SeatsBySection};
use crate::normalize::normalize;

/// Фильтр мест по секциям и рядам + поиск пар рядом стоящих мест.
///
/// Работает только если в настройках заданы секции. Секции, где не осталось
/// ни одного места, удаляются.
pub fn apply_seat_preferences(seats: SeatsBySection, preferences: &Preferences) -> SeatsBySection {
    let Some(desired) = preferences.desired_sections_and_rows.as_ref() else {
        return seats;
    };

    let seats = filter_sections(seats, desired);
    let seats = filter_rows(seats, desired);

    seats
        .into_iter()
        .map(|(section, seats)| (section, adjacent_pairs(&seats)))
        .filter(|(_, seats)| !seats.is_empty())
        .collect()
}

/// Оставляет только секции из настроек.
pub fn filter_sections(seats: SeatsBySection, desired: &SectionRows) -> SeatsBySection {
    seats
        .into_iter()
        .filter(|(section, _)| desired_rows(desired, section).is_some())
        .collect()
}

/// Внутри каждой секции оставляет места из разрешённых рядов.
pub fn filter_rows(seats: SeatsBySection, desired: &SectionRows) -> SeatsBySection {
    seats
        .into_iter()
        .map(|(section, seats)| {
            let seats = match desired_rows(desired, &section) {
                Some(rows) => seats
                    .into_iter()
                    .filter(|seat| rows.contains(&seat.row_digits()))
                    .collect(),
                None => Vec::new(),
            };
            (section, seats)
        })
        .collect()
}

/// Пары соседних мест: тот же ряд, номера отличаются на 1.
///
/// Сравниваются только соседние элементы списка. Каждое место попадает
/// в результат не больше одного раза, поэтому 4, 5, 6 дают `[4, 5, 6]`.
pub fn adjacent_pairs(seats: &[Seat]) -> Vec<Seat> {
    let mut paired = Vec::new();
    let mut last_taken: Option<usize> = None;

    for (i, pair) in seats.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        if !are_adjacent(previous, current) {
            continue;
        }

        if last_taken != Some(i) {
            paired.push(previous.clone());
        }
        paired.push(current.clone());
        last_taken = Some(i + 1);
    }

    paired
}

fn are_adjacent(a: &Seat, b: &Seat) -> bool {
    if a.row != b.row {
        return false;
    }
    match (a.number(), b.number()) {
        (Some(x), Some(y)) => x.abs_diff(y) == 1,
        _ => false,
    }
}

/// Ряды для секции; ключи настроек сравниваются после нормализации.
fn desired_rows<'a>(desired: &'a SectionRows, section: &str) -> Option<&'a BTreeSet<String>> {
    let section = normalize(section);
    desired
        .iter()
        .find(|(name, _)| normalize(name) == section)
        .map(|(_, rows)| rows)
}
