use indexmap::IndexMap;

/// Свободное место на схеме зала. Поля остаются строками ("Ряд 3", "Місце 12").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub row: String,
    pub seat: String,
    pub price: String,
}

impl Seat {
    /// Номер ряда: только цифры из подписи.
    pub fn row_digits(&self) -> String {
        digits(&self.row)
    }

    /// Номер места, если в подписи есть цифры.
    pub fn number(&self) -> Option<u32> {
        digits(&self.seat).parse().ok()
    }
}

/// Сырой элемент схемы зала: строка-описание из атрибута `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSeat {
    pub descriptor: String,
}

/// Места по секциям в порядке первого появления секции.
pub type SeatsBySection = IndexMap<String, Vec<Seat>>;

/// Оставляет в строке только цифры.
pub fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(row: &str, seat: &str) -> Seat {
        Seat { row: row.into(), seat: seat.into(), price: "100".into() }
    }

    #[test]
    fn extracts_digits_from_labels() {
        let s = seat("Ряд 12", "Місце 7");
        assert_eq!(s.row_digits(), "12");
        assert_eq!(s.number(), Some(7));
    }

    #[test]
    fn label_without_digits_has_no_number() {
        assert_eq!(seat("Ряд 1", "Місце").number(), None);
        assert_eq!(digits("Партер"), "");
    }
}
