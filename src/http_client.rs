use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

use crate::error::WatchError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/126.0.0.0 Safari/537.36";

/// Загруженная страница. Статус не проверяется: решает вызывающий код.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Не-200 превращается в `WatchError::Http`.
    pub fn ok(self) -> Result<Self, WatchError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(WatchError::Http { url: self.url, status: self.status })
        }
    }
}

/// Клиент для страниц сайта театра. Редиректы reqwest проходит сам.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// `GET url` → тело и статус. Ошибка только если запрос не выполнился.
    pub async fn fetch(&self, url: &str) -> Result<Page, WatchError> {
        let network = |source| WatchError::Network { url: url.to_string(), source };

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;

        debug!("Fetched {} ({} bytes, status {})", url, body.len(), status);
        Ok(Page { url: url.to_string(), status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_body_and_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/afisha/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        let page = fetcher.fetch(&format!("{}/afisha/", server.uri())).await.unwrap();

        assert!(page.is_ok());
        assert_eq!(page.body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn non_200_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        let page = fetcher.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.status, 503);
        assert!(matches!(page.ok(), Err(WatchError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", format!("{}/new", server.uri())),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new(Duration::from_secs(5)).unwrap();
        let page = fetcher.fetch(&format!("{}/old", server.uri())).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.body, "moved");
    }

    #[tokio::test]
    async fn connection_failure_is_network_error() {
        let fetcher = PageFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, WatchError::Network { .. }));
    }
}
