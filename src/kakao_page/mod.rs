use serde::{Deserialize, Serialize};

mod client;
mod error;
mod extract;
mod queries;
mod retry;
mod series_id;

pub use client::{Client, Listing, Reply};
pub use error::Error;
pub use extract::{extract, resolve, Diagnostic, Extraction, CATALOG_SECTION_TYPE, LAYOUT_PATHS};
pub use retry::{Retry, RetryPolicy};
pub use series_id::SeriesId;

/// One series as listed in the day-of-week landing section.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub series_id: SeriesId,
    #[serde(default)]
    pub status_badge: Option<StatusBadge>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusBadge {
    #[serde(rename = "BadgeUpStatic")]
    UpStatic,
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContentOverview {
    pub title: String,
    pub bm: BusinessModel,
    #[serde(default)]
    pub waitfree_period_by_minute: u32,
    /// Serialization days, e.g. `"월, 화, 일"`.
    pub pub_period: Option<String>,
    pub age_grade: AgeGrade,
    pub authors: String,
    pub on_issue: OnIssue,
    pub thumbnail: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BusinessModel {
    FreePreview,
    PayWaitfree,
    Pay,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgeGrade {
    All,
    Fifteen,
    Nineteen,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OnIssue {
    End,
    Ing,
}
