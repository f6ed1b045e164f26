//! Pulls the catalog list out of a `main` layout response.
//!
//! The upstream response shape has moved more than once, so every lookup goes
//! through [`resolve`] and nothing here can fail: a response that does not
//! look like a catalog yields no items and a [`Diagnostic`] saying why.

use serde::Deserialize as _;
use serde_json::Value;
use std::fmt::{self, Display};

use super::CatalogItem;
use crate::graphql::{self, GraphQLError};

/// Places the layout object has been observed at, probed in order.
pub const LAYOUT_PATHS: &[&[&str]] = &[&["data", "layout"], &["data", "data", "layout"]];

pub const CATALOG_SECTION_TYPE: &str = "StaticLandingDayOfWeekSection";

#[derive(Clone, PartialEq, Debug)]
pub enum Diagnostic {
    GraphQLErrors(Vec<GraphQLError>),
    /// Carries the top-level `data` value as received.
    MissingLayout(Option<Value>),
    NoCatalogSection,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::GraphQLErrors(..) => "upstream reported GraphQL errors".fmt(f),
            Self::MissingLayout(..) => "missing layout field".fmt(f),
            Self::NoCatalogSection => "no catalog section found".fmt(f),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Extraction {
    pub items: Vec<CatalogItem>,
    pub diagnostic: Option<Diagnostic>,
    /// Items present in the catalog section that could not be read.
    pub skipped: usize,
}

impl Extraction {
    fn aborted(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: Some(diagnostic),
            ..Self::default()
        }
    }
}

/// Follows `path` through nested objects, stopping at the first missing key
/// or non-object value.
pub fn resolve<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |value, key| value.as_object()?.get(*key))
}

fn as_slice<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    resolve(value, &[key])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn extract(envelope: &Value) -> Extraction {
    if let Some(errors) = graphql::errors(envelope) {
        return Extraction::aborted(Diagnostic::GraphQLErrors(errors));
    }

    let Some(layout) = LAYOUT_PATHS
        .iter()
        .filter_map(|path| resolve(envelope, path))
        .find(|layout| layout.is_object())
    else {
        let data = resolve(envelope, &["data"]).cloned();
        return Extraction::aborted(Diagnostic::MissingLayout(data));
    };

    let section = as_slice(layout, "sections")
        .iter()
        .find(|section| {
            resolve(section, &["type"]).and_then(Value::as_str) == Some(CATALOG_SECTION_TYPE)
        });
    let groups = section.map(|section| as_slice(section, "groups")).unwrap_or_default();
    if groups.is_empty() {
        return Extraction::aborted(Diagnostic::NoCatalogSection);
    }

    let mut extraction = Extraction::default();
    for item in groups.iter().flat_map(|group| as_slice(group, "items")) {
        match CatalogItem::deserialize(item) {
            Ok(item) => extraction.items.push(item),
            Err(..) => extraction.skipped += 1,
        }
    }
    extraction
}
