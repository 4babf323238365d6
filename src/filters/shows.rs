use std::collections::BTreeSet;

use crate::models::Show;
use crate::normalize::{contains_normalized, normalize};
use crate::config::Preferences;

/// Оставляет спектакли из списка `desired`. `None` - без фильтрации.
pub fn filter_by_title(shows: Vec<Show>, desired: Option<&BTreeSet<String>>) -> Vec<Show> {
    let Some(desired) = desired else {
        return shows;
    };

    shows
        .into_iter()
        .filter(|show| contains_normalized(desired, &show.title))
        .collect()
}

/// Оставляет спектакли, у которых в дате есть хотя бы один из дней `desired`.
///
/// Дата на сайте выглядит как "Субота, 12 жовтня 19:00", поэтому она режется
/// по запятым и каждая часть сравнивается отдельно.
pub fn filter_by_day(shows: Vec<Show>, desired: Option<&BTreeSet<String>>) -> Vec<Show> {
    let Some(desired) = desired else {
        return shows;
    };
    let desired: BTreeSet<String> = desired.iter().map(|d| normalize(d)).collect();

    shows
        .into_iter()
        .filter(|show| {
            show.date
                .split(',')
                .any(|token| desired.contains(&normalize(token.trim())))
        })
        .collect()
}

/// Фильтр по названию, затем по дню недели.
pub fn apply_show_preferences(shows: Vec<Show>, preferences: &Preferences) -> Vec<Show> {
    let shows = filter_by_title(shows, preferences.desired_shows.as_ref());
    filter_by_day(shows, preferences.desired_days.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(title: &str, date: &str) -> Show {
        Show {
            url: format!("http://tickets.example.org/{}", title.len()),
            title: title.into(),
            date: date.into(),
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn listing() -> Vec<Show> {
        vec![
            show("Конотопська відьма", "Субота, 12 жовтня 19:00"),
            show("Гамлет", "Неділя, 13 жовтня 18:00"),
            show("Конотопська відьма", "П'ятниця, 18 жовтня 19:00"),
        ]
    }

    #[test]
    fn no_title_whitelist_is_pass_through() {
        assert_eq!(filter_by_title(listing(), None), listing());
    }

    #[test]
    fn no_day_whitelist_is_pass_through() {
        assert_eq!(filter_by_day(listing(), None), listing());
    }

    #[test]
    fn title_whitelist_keeps_matching_shows_in_order() {
        let desired = set(&["КОНОТОПСЬКА  ВІДЬМА"]);
        let shows = filter_by_title(listing(), Some(&desired));

        assert_eq!(shows.len(), 2);
        assert!(shows.iter().all(|s| contains_normalized(&desired, &s.title)));
        assert_eq!(shows[0].date, "Субота, 12 жовтня 19:00");
        assert_eq!(shows[1].date, "П'ятниця, 18 жовтня 19:00");
    }

    #[test]
    fn day_whitelist_matches_any_comma_token() {
        let desired = set(&["П’ятниця", "Неділя"]);
        let shows = filter_by_day(listing(), Some(&desired));

        let titles: Vec<&str> = shows.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Гамлет", "Конотопська відьма"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let desired = set(&["Наталка Полтавка"]);
        assert!(filter_by_title(listing(), Some(&desired)).is_empty());
    }

    #[test]
    fn preferences_apply_both_filters() {
        let preferences = Preferences {
            desired_shows: Some(set(&["Конотопська відьма"])),
            desired_days: Some(set(&["Субота"])),
            desired_sections_and_rows: None,
        };

        let shows = apply_show_preferences(listing(), &preferences);
        assert_eq!(shows, vec![show("Конотопська відьма", "Субота, 12 жовтня 19:00")]);
    }
}
