use crate::graphql::QueryEnvelope;

use super::SeriesId;

const MAIN: &str = r#"
query main($screenUid: Int!, $type: LayoutType) {
  layout(screenUid: $screenUid, type: $type) {
    ...Layout
  }
}

fragment Layout on Layout {
  id
  screenType
  sections {
    ...Section
  }
}

fragment Section on Section {
  id
  uid
  type
  ... on StaticLandingDayOfWeekSection {
    isEnd
    groups {
      ...Group
    }
  }
}

fragment Group on Group {
  id
  type
  items {
    ...Item
  }
}

fragment Item on Item {
  id
  type
  ... on PosterViewItem {
    seriesId
    title
    thumbnail
    statusBadge
  }
}
"#;

const CONTENT_HOME_OVERVIEW: &str = r#"
query contentHomeOverview($seriesId: Long!) {
  contentHomeOverview(seriesId: $seriesId) {
    id
    seriesId
    content {
      ...SeriesFragment
      __typename
    }
    __typename
  }
}

fragment SeriesFragment on Series {
  id
  seriesId
  title
  thumbnail
  bm
  waitfreePeriodByMinute
  pubPeriod
  ageGrade
  authors
  onIssue
}
"#;

/// Day-of-week landing layout. Screen 51 is the webtoon tab.
pub fn main_layout(screen_uid: u32) -> QueryEnvelope {
    QueryEnvelope::new("main", MAIN)
        .variable("screenUid", screen_uid)
        .variable("type", "LAYOUT")
}

pub fn content_home_overview(series_id: SeriesId) -> QueryEnvelope {
    QueryEnvelope::new("contentHomeOverview", CONTENT_HOME_OVERVIEW)
        .variable("seriesId", series_id.get())
}
