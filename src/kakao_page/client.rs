use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER};
use reqwest::Url;
use serde::Deserialize as _;
use serde_json::Value;

use super::extract::{extract, resolve, Extraction};
use super::{queries, ContentOverview, Error, Retry, RetryPolicy, SeriesId};
use crate::config::Config;
use crate::graphql::{self, QueryEnvelope};

/// Raw response envelope along with the retries it took to get it.
#[derive(Debug)]
pub struct Reply {
    pub envelope: Value,
    pub retries: Vec<Retry>,
}

#[derive(Debug)]
pub struct Listing {
    pub extraction: Extraction,
    pub retries: Vec<Retry>,
}

/// Short form of a failed attempt for the retry log, without response bodies.
fn cause(error: &Error) -> String {
    match error {
        Error::Status(status, ..) => status.to_string(),
        error => error.to_string(),
    }
}

#[derive(Clone, Debug)]
pub struct Client {
    url: Url,
    client: reqwest::Client,
    retry: RetryPolicy,
    screen_uid: u32,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let url = config
            .endpoint
            .parse::<Url>()
            .map_err(|err| Error::Custom(format!("invalid endpoint {}: {err}", config.endpoint)))?;
        let referer = HeaderValue::from_str(&config.referer)
            .map_err(|err| Error::Custom(format!("invalid referer {}: {err}", config.referer)))?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, referer);
        Ok(Self {
            url,
            client: reqwest::Client::builder()
                .default_headers(headers)
                .timeout(config.timeout())
                .build()?,
            retry: config.retry,
            screen_uid: config.screen_uid,
        })
    }

    async fn post_once(&self, body: &str) -> Result<Value, Error> {
        let response = self
            .client
            .post(self.url.clone())
            .body(body.to_owned())
            .send()
            .await?;
        let status = response.status();
        log::trace!("http response status: {}", status);
        let body = response.text().await?;
        log::trace!("http response body: {}", body);
        if !status.is_success() {
            return Err(Error::Status(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Posts `query`, retrying network failures, timeouts and 5xx responses
    /// with linear backoff. Other failures are returned after one attempt.
    pub async fn send(&self, query: &QueryEnvelope) -> Result<Reply, Error> {
        let body = serde_json::to_string(query)?;
        log::trace!("graphql query: {}", body);
        let mut retries = Vec::new();
        let mut attempt = 1;
        loop {
            match self.post_once(&body).await {
                Ok(envelope) => return Ok(Reply { envelope, retries }),
                Err(error) if !error.is_transient() => return Err(error),
                Err(error) if attempt >= self.retry.max_attempts() => {
                    return Err(Error::Exhausted {
                        attempts: attempt,
                        last: Box::new(error),
                        retries,
                    });
                }
                Err(error) => {
                    let retry = Retry {
                        attempt,
                        url: self.url.to_string(),
                        delay: self.retry.delay(attempt),
                        cause: cause(&error),
                    };
                    log::warn!(
                        "[KAKAO_PAGE] {} - retry: {} in {:?} ({})",
                        retry.url,
                        retry.attempt,
                        retry.delay,
                        retry.cause,
                    );
                    tokio::time::sleep(retry.delay).await;
                    retries.push(retry);
                    attempt += 1;
                }
            }
        }
    }

    /// Fetches the day-of-week landing layout and extracts its catalog.
    pub async fn webtoon_list(&self) -> Result<Listing, Error> {
        log::info!(
            "[KAKAO_PAGE] requesting webtoon list (screenUid: {})",
            self.screen_uid
        );
        let reply = self.send(&queries::main_layout(self.screen_uid)).await?;
        Ok(Listing {
            extraction: extract(&reply.envelope),
            retries: reply.retries,
        })
    }

    pub async fn content_overview(&self, series_id: SeriesId) -> Result<ContentOverview, Error> {
        log::info!("[KAKAO_PAGE] seriesId: {} - requesting details", series_id);
        let reply = self
            .send(&queries::content_home_overview(series_id))
            .await?;
        if let Some(errors) = graphql::errors(&reply.envelope) {
            return Err(Error::GraphQL(errors));
        }
        let content = resolve(&reply.envelope, &["data", "contentHomeOverview", "content"])
            .ok_or_else(|| {
                Error::Custom(format!("series {series_id} has no contentHomeOverview.content"))
            })?;
        Ok(ContentOverview::deserialize(content)?)
    }
}
