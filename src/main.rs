use serde::Serialize;
use std::io::Write;

use webtoon_ingest::config::Config;
use webtoon_ingest::kakao_page::{self, CatalogItem, ContentOverview, Diagnostic};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// One line of output for the persistence step.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(flatten)]
    item: &'a CatalogItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    overview: Option<ContentOverview>,
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::GraphQLErrors(errors) => {
            log::error!("[KAKAO_PAGE] {}: {:?}", diagnostic, errors);
        }
        Diagnostic::MissingLayout(Some(data)) => {
            log::error!("[KAKAO_PAGE] {}, data was: {}", diagnostic, data);
        }
        Diagnostic::MissingLayout(None) => {
            log::error!("[KAKAO_PAGE] {}, response had no data", diagnostic);
        }
        Diagnostic::NoCatalogSection => log::error!("[KAKAO_PAGE] {}", diagnostic),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = Config::from_env()?;
    log::debug!("config={:#?}", config);
    let client = kakao_page::Client::new(&config)?;

    let listing = client.webtoon_list().await?;
    if !listing.retries.is_empty() {
        log::warn!(
            "[KAKAO_PAGE] webtoon list needed {} retries",
            listing.retries.len()
        );
    }
    let extraction = listing.extraction;
    if let Some(diagnostic) = &extraction.diagnostic {
        log_diagnostic(diagnostic);
    }
    if extraction.skipped > 0 {
        log::warn!(
            "[KAKAO_PAGE] skipped {} unreadable item(s)",
            extraction.skipped
        );
    }
    log::info!("[KAKAO_PAGE] {} series listed", extraction.items.len());

    let stdout = std::io::stdout();
    for item in &extraction.items {
        let overview = if config.fetch_details {
            match client.content_overview(item.series_id).await {
                Ok(overview) => Some(overview),
                Err(error) => {
                    log::error!("[KAKAO_PAGE] seriesId: {} - {}", item.series_id, error);
                    None
                }
            }
        } else {
            None
        };
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, &Row { item, overview })?;
        writeln!(out)?;
    }

    Ok(())
}
