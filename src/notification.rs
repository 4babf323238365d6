//! Текст уведомления о свободных местах.
//!
//! Telegram принимает разметку отдельно от текста: список `entities`
//! со смещениями в UTF-16 code units, поэтому текст собирается через
//! `MessageBuilder`, который считает смещения по ходу.

use serde::Serialize;

use crate::models::{SeatsBySection, Show};

/// Подпись кнопки со ссылкой на спектакль.
pub const LINK_CAPTION: &str = "Посилання";

const LIST_MARKER: &str = "- ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Bold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

/// Готовое сообщение: текст, выделения и кнопка-ссылка.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub entities: Vec<MessageEntity>,
    pub button: LinkButton,
}

#[derive(Debug, Default)]
struct MessageBuilder {
    text: String,
    utf16_len: usize,
    entities: Vec<MessageEntity>,
}

impl MessageBuilder {
    fn plain(mut self, s: &str) -> Self {
        self.text.push_str(s);
        self.utf16_len += s.encode_utf16().count();
        self
    }

    fn bold(mut self, s: &str) -> Self {
        let length = s.encode_utf16().count();
        if length > 0 {
            self.entities.push(MessageEntity {
                kind: EntityKind::Bold,
                offset: self.utf16_len,
                length,
            });
        }
        self.plain(s)
    }
}

/// Строки списка секций: `"<секция> (<кол-во мест>)"`, в порядке секций.
pub fn section_lines(seats: &SeatsBySection) -> Vec<String> {
    seats
        .iter()
        .map(|(section, seats)| format!("{} ({})", section, seats.len()))
        .collect()
}

/// Собирает уведомление для спектакля. `seats` не должен быть пустым.
pub fn compose_notification(show: &Show, seats: &SeatsBySection) -> Notification {
    let list = section_lines(seats)
        .iter()
        .map(|line| format!("{}{}", LIST_MARKER, line))
        .collect::<Vec<_>>()
        .join("\n");

    let message = MessageBuilder::default()
        .plain("Вистава: ")
        .bold(&show.title)
        .plain("\nДата: ")
        .bold(&show.date)
        .plain("\n\nМісця:\n")
        .plain(&list);

    Notification {
        text: message.text,
        entities: message.entities,
        button: LinkButton {
            text: LINK_CAPTION.to_string(),
            url: show.url.clone(),
        },
    }
}
