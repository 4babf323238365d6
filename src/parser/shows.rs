use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::selectors::listing;
use crate::error::ParseError;
use crate::models::Show;

/// Достаёт список спектаклей из HTML афиши в порядке таблицы.
///
/// Отсутствие таблицы афиши - `ParseError::Structure`. Битые строки
/// пропускаются с предупреждением, остальные спектакли возвращаются.
pub fn extract_shows(html: &str, base: &Url) -> Result<Vec<Show>, ParseError> {
    let document = Html::parse_document(html);
    let body = find_listing_body(&document)?;

    let mut shows = Vec::new();
    for row in body.select(&listing::ROW) {
        let Some(cell) = row.select(&listing::INFO_CELL).next() else {
            // строка-разделитель
            continue;
        };

        match parse_info_cell(cell, base) {
            Ok(show) => shows.push(show),
            Err(e) => warn!("Skipping show row: {}", e),
        }
    }

    debug!("Extracted {} shows from listing", shows.len());
    Ok(shows)
}

/// section.about_ordering → div.about_order_wrap → div.wrap_table → table → tbody
fn find_listing_body(document: &Html) -> Result<ElementRef<'_>, ParseError> {
    let root = document.root_element();
    let ordering = find_step(root, &listing::ORDERING, "section.about_ordering")?;
    let wrap = find_step(ordering, &listing::ORDER_WRAP, "div.about_order_wrap")?;
    let table_wrap = find_step(wrap, &listing::TABLE_WRAP, "div.wrap_table")?;
    let table = find_step(table_wrap, &listing::TABLE, "table")?;
    find_step(table, &listing::BODY, "tbody")
}

fn find_step<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    step: &'static str,
) -> Result<ElementRef<'a>, ParseError> {
    scope
        .select(selector)
        .next()
        .ok_or(ParseError::Structure { step })
}

fn parse_info_cell(cell: ElementRef<'_>, base: &Url) -> Result<Show, ParseError> {
    let link = cell
        .select(&listing::LINK)
        .next()
        .ok_or_else(|| malformed("no link in info cell"))?;
    let href = link
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| malformed("link has no href"))?;
    let url = base
        .join(href)
        .map_err(|e| malformed(format!("bad href `{}`: {}", href, e)))?;

    let title = element_text(link);

    let date = cell
        .select(&listing::DATE)
        .next()
        .map(element_text)
        .ok_or_else(|| malformed(format!("no date heading for `{}`", title)))?;

    Ok(Show { url: url.to_string(), title, date })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn malformed(reason: impl Into<String>) -> ParseError {
    ParseError::MalformedShow { reason: reason.into() }
}
