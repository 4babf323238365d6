//! CSS-селекторы разметки сайта театра.
//!
//! Если сайт поменяет вёрстку, править нужно только здесь.

use scraper::Selector;
use std::sync::LazyLock;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid selector")
}

/// Путь до тела таблицы афиши, по шагам.
pub mod listing {
    use super::*;

    pub static ORDERING: LazyLock<Selector> = LazyLock::new(|| selector("section.about_ordering"));
    pub static ORDER_WRAP: LazyLock<Selector> = LazyLock::new(|| selector("div.about_order_wrap"));
    pub static TABLE_WRAP: LazyLock<Selector> = LazyLock::new(|| selector("div.wrap_table"));
    pub static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
    pub static BODY: LazyLock<Selector> = LazyLock::new(|| selector("tbody"));

    pub static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
    /// Ячейка с названием, датой и ссылкой. В строках-разделителях её нет.
    pub static INFO_CELL: LazyLock<Selector> = LazyLock::new(|| selector("td.left.for-info"));
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
    pub static DATE: LazyLock<Selector> = LazyLock::new(|| selector("h4"));
}

/// Схема зала на странице спектакля.
pub mod hall {
    use super::*;

    /// Кликабельное непроданное место. Порядок и лишние классы не важны.
    pub static AVAILABLE_SEAT: LazyLock<Selector> =
        LazyLock::new(|| selector("rect.b.tooltip-button"));

    pub const DESCRIPTOR_ATTR: &str = "title";
}
