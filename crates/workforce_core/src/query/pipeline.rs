//! Filter, sort and paginate stages plus the `query` entry point.

use crate::query::field::Tabular;
use serde::Serialize;
use std::fmt::Debug;

/// Sort direction of the active key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub key: C,
    pub direction: SortDirection,
}

impl<C: Copy + Eq> SortSpec<C> {
    pub fn asc(key: C) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: C) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Applies the header-click toggle rule.
    ///
    /// Selecting the active key flips its direction; any other key starts
    /// ascending.
    pub fn toggle(current: Option<Self>, key: C) -> Self {
        match current {
            Some(active) if active.key == key => Self {
                key,
                direction: active.direction.reversed(),
            },
            _ => Self::asc(key),
        }
    }
}

/// Single-value category predicate AND-ed with the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only { column: C, value: String },
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: Copy> CategoryFilter<C> {
    fn accepts<R: Tabular<Column = C>>(&self, record: &R) -> bool {
        match self {
            Self::All => true,
            Self::Only { column, value } => record.value(*column).matches(value),
        }
    }
}

/// Parameters of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams<C> {
    pub search: String,
    /// Text columns matched against `search`.
    pub search_columns: Vec<C>,
    pub category: CategoryFilter<C>,
    pub sort: Option<SortSpec<C>>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl<C> QueryParams<C> {
    /// Page 1 of the unfiltered, unsorted collection.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            search_columns: Vec::new(),
            category: CategoryFilter::All,
            sort: None,
            page: 1,
            page_size,
        }
    }
}

/// One page of pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<R> {
    pub items: Vec<R>,
    /// Records matching search and category, before pagination.
    pub total_count: usize,
    pub total_pages: usize,
}

impl<R> Default for QueryPage<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}

/// Keeps records where any searched text column contains `search`,
/// ignoring case. An empty term keeps everything.
pub fn filter_records<R>(rows: &[R], search: &str, columns: &[R::Column]) -> Vec<R>
where
    R: Tabular + Clone,
{
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|record| matches_search(*record, &needle, columns))
        .cloned()
        .collect()
}

/// Sorts in place: stable ascending, then reversed for `Desc`.
pub fn sort_records<R: Tabular>(rows: &mut [R], spec: &SortSpec<R::Column>) {
    rows.sort_by(|a, b| a.value(spec.key).compare(&b.value(spec.key)));
    if spec.direction == SortDirection::Desc {
        rows.reverse();
    }
}

/// Returns `rows[(page-1)*page_size .. page*page_size]`, or an empty slice
/// when the page is `0` or past the end.
pub fn paginate<R>(rows: &[R], page: usize, page_size: usize) -> &[R] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Number of pages needed for `total_count` records.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Runs search + category filter, sort and pagination over `rows`.
pub fn query<R>(rows: &[R], params: &QueryParams<R::Column>) -> QueryPage<R>
where
    R: Tabular + Clone,
{
    let needle = params.search.to_lowercase();
    let mut matched: Vec<&R> = rows
        .iter()
        .filter(|record| {
            params.category.accepts(*record)
                && matches_search(*record, &needle, &params.search_columns)
        })
        .collect();

    if let Some(spec) = &params.sort {
        sort_records(&mut matched, spec);
    }

    let total_count = matched.len();
    QueryPage {
        items: paginate(&matched, params.page, params.page_size)
            .iter()
            .map(|record| (*record).clone())
            .collect(),
        total_count,
        total_pages: total_pages(total_count, params.page_size),
    }
}

fn matches_search<R: Tabular>(record: &R, needle: &str, columns: &[R::Column]) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns.iter().any(|column| {
        record
            .value(*column)
            .as_text()
            .map_or(false, |text| text.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::{paginate, total_pages, SortDirection, SortSpec};

    #[test]
    fn toggle_flips_active_key_and_resets_new_key() {
        let first = SortSpec::toggle(None, "name");
        assert_eq!(first.direction, SortDirection::Asc);

        let flipped = SortSpec::toggle(Some(first), "name");
        assert_eq!(flipped.direction, SortDirection::Desc);

        let other = SortSpec::toggle(Some(flipped), "salary");
        assert_eq!(other, SortSpec::asc("salary"));
    }

    #[test]
    fn paginate_returns_empty_for_zero_or_past_end() {
        let rows = [1, 2, 3, 4, 5];
        assert_eq!(paginate(&rows, 0, 2), &[] as &[i32]);
        assert_eq!(paginate(&rows, 3, 2), &[5]);
        assert_eq!(paginate(&rows, 4, 2), &[] as &[i32]);
        assert_eq!(paginate(&rows, usize::MAX, usize::MAX), &[] as &[i32]);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(11, 0), 0);
    }
}
