//! Цикл опроса афиши.
//!
//! Афиша → фильтр спектаклей → страница каждого спектакля → места →
//! фильтр мест → уведомление всем получателям. Спектакли обрабатываются
//! строго по одному, между ними и между циклами - случайные паузы.
//! Ни одна ошибка не выходит за пределы цикла: всё логируется.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::WatchError;
use crate::filters::{apply_seat_preferences, apply_show_preferences};
use crate::models::{SeatsBySection, Show};
use crate::notification::compose_notification;
use crate::parser::{extract_available_seats, extract_shows, organize_seats};
use crate::AppState;

/// Итоги одного цикла опроса.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Спектакли после фильтров по названию и дню.
    pub shows_selected: usize,
    pub shows_checked: usize,
    pub shows_with_seats: usize,
    pub messages_sent: usize,
    pub messages_failed: usize,
    pub listing_failed: bool,
}

pub struct WatcherService {
    state: Arc<AppState>,
}

impl WatcherService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Бесконечный цикл опроса.
    pub async fn run(&self) {
        info!(
            "👀 Watching {} for {} recipient(s)",
            self.state.config.afisha.url,
            self.state.config.telegram.recipients.len()
        );

        loop {
            let report = self.run_cycle().await;
            info!("Cycle finished: {:?}", report);

            let pause = self.state.config.schedule.cycle_delay.sample();
            info!("Next listing check in {}s", pause.as_secs());
            tokio::time::sleep(pause).await;
        }
    }

    /// Один проход по афише.
    pub async fn run_cycle(&self) -> CycleReport {
        let mut report = CycleReport::default();

        let shows = match self.selected_shows().await {
            Ok(shows) => shows,
            Err(e) => {
                error!("Listing check failed: {}", e);
                report.listing_failed = true;
                return report;
            }
        };
        report.shows_selected = shows.len();

        for (i, show) in shows.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.state.config.schedule.show_delay.sample()).await;
            }

            report.shows_checked += 1;
            let seats = match self.available_seats(show).await {
                Ok(seats) => seats,
                Err(e) => {
                    warn!("Skipping show `{}`: {}", show.title, e);
                    continue;
                }
            };

            if seats.is_empty() {
                continue;
            }

            report.shows_with_seats += 1;
            let (sent, failed) = self.notify(show, &seats).await;
            report.messages_sent += sent;
            report.messages_failed += failed;
        }

        report
    }

    /// Афиша, отфильтрованная по настройкам.
    async fn selected_shows(&self) -> Result<Vec<Show>, WatchError> {
        let listing_url = &self.state.config.afisha.url;
        let page = self.state.fetcher.fetch(listing_url.as_str()).await?;
        info!("[{}] {}", page.status, page.url);

        let page = page.ok()?;
        let shows = extract_shows(&page.body, listing_url)?;
        let found = shows.len();
        let shows = apply_show_preferences(shows, &self.state.config.preferences);

        info!("Listing: {} shows, {} selected", found, shows.len());
        Ok(shows)
    }

    /// Свободные места спектакля после фильтров. Пусто - уведомлять нечего.
    async fn available_seats(&self, show: &Show) -> Result<SeatsBySection, WatchError> {
        let page = self.state.fetcher.fetch(&show.url).await?.ok()?;

        let raw = extract_available_seats(&page.body);
        let seats = organize_seats(&raw);
        let seats = apply_seat_preferences(seats, &self.state.config.preferences);

        let total: usize = seats.values().map(Vec::len).sum();
        info!(
            "[{}] [SEATS: {}] {} | {} | {}",
            page.status, total, show.title, show.date, show.url
        );
        Ok(seats)
    }

    /// Рассылка по списку получателей, по очереди. Возвращает (успешно, с ошибкой).
    async fn notify(&self, show: &Show, seats: &SeatsBySection) -> (usize, usize) {
        let notification = compose_notification(show, seats);
        let (mut sent, mut failed) = (0, 0);

        for chat_id in &self.state.config.telegram.recipients {
            match self.state.telegram.send_notification(chat_id, &notification).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    error!("Failed to notify {} about `{}`: {}", chat_id, show.title, e);
                    failed += 1;
                }
            }
        }

        info!("📨 `{}`: notified {} recipient(s), {} failed", show.title, sent, failed);
        (sent, failed)
    }
}
