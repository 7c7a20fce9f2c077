//! Package-fit ranking.
//!
//! Both the product and each candidate box are sorted ascending before
//! comparison, so a box fits in any orientation. A box is kept only when it
//! is at least as large as the product in every sorted component.

use std::fmt;

use crate::dimensions::Dimensions;
use crate::error::DataError;
use crate::records::RecordTable;

/// Smallest per-axis slack for an `Optimal` verdict.
pub const OPTIMAL_MIN_SLACK: u32 = 5;
/// Largest per-axis slack for an `Optimal` verdict.
pub const OPTIMAL_MAX_SLACK: u32 = 15;

/// Part-type value identifying packaging rows.
pub const PACKAGE_TYPE: &str = "package";

const TYPE_COLUMNS: &[&str] = &["유형", "Type"];
const NAME_COLUMNS: &[&str] = &["파츠명", "Name"];
const SIZE_COLUMNS: &[&str] = &["규격", "Size", "가로", "장폭고"];

/// Rough quality of a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every axis has 5-15 units of room.
    Optimal,
    /// Fits, but is either tight or loose somewhere.
    Check,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Optimal => f.write_str("Optimal"),
            Verdict::Check => f.write_str("Check"),
        }
    }
}

/// A box that might hold the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Size as written in the source record.
    pub size: String,
    pub dimensions: Dimensions,
}

/// A candidate that fits, with its slack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitMatch {
    pub name: String,
    pub size: String,
    /// Room per product axis, in the product's written axis order.
    pub slack: [u32; 3],
    /// Sum of `slack`, widened so large catalog sizes cannot overflow;
    /// lower is tighter.
    pub total_slack: u64,
    pub verdict: Verdict,
}

/// Per-axis room left when `container` holds `target`.
///
/// Components are paired after sorting both sides; the result is reported
/// against the target's own axes. Returns `None` when the container is
/// smaller in any paired component.
pub fn fit_slack(target: Dimensions, container: Dimensions) -> Option<[u32; 3]> {
    let target = target.as_array();
    let mut order = [0usize, 1, 2];
    order.sort_by_key(|&i| target[i]);

    let container = container.sorted();
    let mut slack = [0u32; 3];
    for (rank, &axis) in order.iter().enumerate() {
        slack[axis] = container[rank].checked_sub(target[axis])?;
    }
    Some(slack)
}

/// Classify a fit from its slack.
pub fn verdict(slack: [u32; 3]) -> Verdict {
    let min = slack.iter().copied().min().unwrap_or(0);
    let max = slack.iter().copied().max().unwrap_or(0);
    if min >= OPTIMAL_MIN_SLACK && max <= OPTIMAL_MAX_SLACK {
        Verdict::Optimal
    } else {
        Verdict::Check
    }
}

/// Keep the candidates that fit, tightest first.
///
/// Ties keep their input order.
pub fn rank_candidates<I>(target: Dimensions, candidates: I) -> Vec<FitMatch>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut matches: Vec<FitMatch> = candidates
        .into_iter()
        .filter_map(|c| {
            let slack = fit_slack(target, c.dimensions)?;
            Some(FitMatch {
                name: c.name,
                size: c.size,
                slack,
                total_slack: slack.iter().map(|&s| u64::from(s)).sum(),
                verdict: verdict(slack),
            })
        })
        .collect();
    matches.sort_by_key(|m| m.total_slack);
    matches
}

/// Packaging rows of a parts catalog, with parseable sizes.
///
/// Requires a type column and a size column; the name column is optional.
pub fn package_candidates(parts: &RecordTable) -> Result<Vec<Candidate>, DataError> {
    let type_col = parts.require_column(TYPE_COLUMNS)?;
    let size_col = parts.require_column(SIZE_COLUMNS)?;
    let name_col = parts.find_column(NAME_COLUMNS);

    let mut skipped = 0usize;
    let mut candidates = Vec::new();
    for row in 0..parts.len() {
        if !parts
            .value(row, type_col)
            .to_lowercase()
            .contains(PACKAGE_TYPE)
        {
            continue;
        }

        let size = parts.value(row, size_col);
        let Some(dimensions) = Dimensions::parse(size) else {
            skipped += 1;
            continue;
        };

        candidates.push(Candidate {
            name: name_col
                .map(|col| parts.value(row, col).to_string())
                .unwrap_or_default(),
            size: size.to_string(),
            dimensions,
        });
    }

    if skipped > 0 {
        log::debug!("skipped {} package row(s) with unparseable size", skipped);
    }
    Ok(candidates)
}

/// Rank the catalog's packages against a product.
pub fn match_packages(parts: &RecordTable, product: Dimensions) -> Result<Vec<FitMatch>, DataError> {
    let candidates = package_candidates(parts)?;
    let matches = rank_candidates(product, candidates);
    log::info!(
        "found {} package(s) fitting {}",
        matches.len(),
        product
    );
    Ok(matches)
}
