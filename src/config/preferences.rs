use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Секция → разрешённые номера рядов.
pub type SectionRows = BTreeMap<String, BTreeSet<String>>;

/// Что ищем. `None` в любом поле - фильтр выключен.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub desired_shows: Option<BTreeSet<String>>,
    pub desired_days: Option<BTreeSet<String>>,
    /// Если задано, включается и поиск пар соседних мест.
    pub desired_sections_and_rows: Option<SectionRows>,
}

// Формат файла настроек. Секции - массив таблиц, чтобы названия
// с пробелами и кириллицей не превращались в ключи.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PreferencesFile {
    desired_shows: Option<Vec<String>>,
    desired_days: Option<Vec<String>>,
    sections: Option<Vec<SectionEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionEntry {
    name: String,
    rows: Vec<String>,
}

impl Preferences {
    /// Читает настройки из TOML файла. Отсутствующий файл - пустые настройки.
    /// Пустой список равносилен отсутствующему: фильтр выключен.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .build()?;
        let file: PreferencesFile = settings.try_deserialize()?;

        let sections: Option<SectionRows> = file.sections.map(|sections| {
            sections
                .into_iter()
                .map(|s| (s.name.trim().to_string(), into_set(s.rows)))
                .filter(|(name, _)| !name.is_empty())
                .collect()
        });

        Ok(Self {
            desired_shows: file.desired_shows.map(into_set).and_then(non_empty),
            desired_days: file.desired_days.map(into_set).and_then(non_empty),
            desired_sections_and_rows: sections.filter(|s| !s.is_empty()),
        })
    }

    /// Переопределение списков из переменных окружения (через запятую).
    /// Пустая переменная выключает фильтр.
    pub fn override_lists(&mut self, shows: Option<String>, days: Option<String>) {
        if let Some(shows) = shows {
            self.desired_shows = non_empty(into_set(split_list(&shows)));
        }
        if let Some(days) = days {
            self.desired_days = non_empty(into_set(split_list(&days)));
        }
    }
}

/// "a, b,,c" → ["a", "b", "c"]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn into_set(items: Vec<String>) -> BTreeSet<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty(set: BTreeSet<String>) -> Option<BTreeSet<String>> {
    (!set.is_empty()).then_some(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_means_no_filters() {
        let prefs = Preferences::load(Path::new("/nonexistent/preferences.toml")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn loads_sections_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
desired_shows = ["Конотопська відьма"]

[[sections]]
name = "Партер"
rows = ["1", "2"]

[[sections]]
name = "Балкон 1 ярусу"
rows = ["1"]
"#
        )
        .unwrap();

        let prefs = Preferences::load(file.path()).unwrap();
        assert_eq!(
            prefs.desired_shows,
            Some(BTreeSet::from(["Конотопська відьма".to_string()]))
        );
        assert_eq!(prefs.desired_days, None);

        let sections = prefs.desired_sections_and_rows.unwrap();
        assert_eq!(sections.len(), 2);
        assert!(sections["Партер"].contains("2"));
        assert!(sections["Балкон 1 ярусу"].contains("1"));
    }

    #[test]
    fn env_lists_override_file() {
        let mut prefs = Preferences {
            desired_shows: Some(into_set(vec!["Гамлет".into()])),
            ..Default::default()
        };
        prefs.override_lists(Some("Наталка Полтавка".into()), Some(" Субота , ,Неділя".into()));

        assert_eq!(prefs.desired_shows, Some(BTreeSet::from(["Наталка Полтавка".to_string()])));
        assert_eq!(
            prefs.desired_days,
            Some(BTreeSet::from(["Неділя".to_string(), "Субота".to_string()]))
        );
    }

    fn load_str(contents: &str) -> Result<Preferences, ConfigError> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        Preferences::load(file.path())
    }

    #[test]
    fn empty_lists_in_file_disable_filters() {
        let prefs = load_str(
            r#"
desired_shows = []
desired_days = [" "]
sections = []
"#,
        )
        .unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn empty_env_lists_disable_filters() {
        let mut prefs = Preferences {
            desired_shows: Some(into_set(vec!["Гамлет".into()])),
            desired_days: Some(into_set(vec!["Субота".into()])),
            ..Default::default()
        };
        prefs.override_lists(Some(String::new()), Some(" , ".into()));

        assert_eq!(prefs.desired_shows, None);
        assert_eq!(prefs.desired_days, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = load_str(
            r#"
[desired_sections_and_rows]
Parter = ["1"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Preferences(_)));
    }

    #[test]
    fn misspelled_section_field_is_rejected() {
        let err = load_str(
            r#"
[[sections]]
name = "Партер"
row = ["1"]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Preferences(_)));
    }

    #[test]
    fn split_list_drops_empty_entries() {
        assert_eq!(split_list(" 1, 2 ,,3 "), vec!["1", "2", "3"]);
    }
}
