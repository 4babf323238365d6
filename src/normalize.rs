//! Сравнение названий без учёта алфавита и регистра.
//!
//! Названия спектаклей, дней недели и секций в настройках могут быть записаны
//! латиницей или кириллицей, а на сайте они всегда на украинском. Обе стороны
//! транслитерируются в латиницу и только потом сравниваются.

use deunicode::deunicode;

/// Транслитерация в латиницу + нижний регистр + схлопывание пробелов.
pub fn normalize(s: &str) -> String {
    deunicode(s)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Совпадают ли две строки после нормализации.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Есть ли `name` среди `candidates` с точностью до нормализации.
pub fn contains_normalized<'a, I>(candidates: I, name: &str) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let name = normalize(name);
    candidates.into_iter().any(|c| normalize(c) == name)
}
