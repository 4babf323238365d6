/// Спектакль из афиши.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub url: String,
    pub title: String,
    pub date: String,
}
