// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cached reservation dataset and the monthly query operation.
//!
//! ## Invariants
//!
//! - The dataset is fetched and parsed at most once per service, no matter
//!   how many callers arrive before the first load completes
//! - A failed load is cached as well; every later call sees the same error
//! - Queries share one immutable record slice and take no locks

use space_revenue::compute_expected;
use space_revenue_domain::{MonthWindow, QueryResult, ReservationRecord};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::csv_import::parse_reservations;
use crate::dataset::DatasetSource;
use crate::error::{ApiError, translate_domain_error};

type LoadResult = Result<Arc<[ReservationRecord]>, ApiError>;

/// Answers monthly revenue queries against a lazily loaded dataset.
#[derive(Debug)]
pub struct ReservationService<S> {
    source: S,
    records: OnceCell<LoadResult>,
}

impl<S: DatasetSource> ReservationService<S> {
    /// Creates a service over `source`. Nothing is fetched until first use.
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: OnceCell::new(),
        }
    }

    /// The underlying dataset source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns whether a load has completed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.records.initialized()
    }

    /// Returns the parsed records, loading them on first call.
    ///
    /// # Errors
    ///
    /// Returns the (cached) load failure if the dataset could not be fetched
    /// or parsed.
    pub async fn records(&self) -> LoadResult {
        self.records.get_or_init(|| self.load()).await.clone()
    }

    /// Computes revenue and unreserved capacity for a month.
    ///
    /// # Arguments
    ///
    /// * `month` - Month number, 1-12
    /// * `year` - Calendar year
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month/year cannot be resolved (checked before any fetch)
    /// - The dataset could not be loaded
    pub async fn expected(&self, month: u8, year: i32) -> Result<QueryResult, ApiError> {
        let window: MonthWindow =
            MonthWindow::from_parts(month, year).map_err(translate_domain_error)?;
        let records: Arc<[ReservationRecord]> = self.records().await?;

        let result: QueryResult = compute_expected(&records, &window);
        debug!(
            month = %window,
            revenue = ?result.revenue,
            capacity = result.capacity,
            "Answered expected revenue query"
        );
        Ok(result)
    }

    async fn load(&self) -> LoadResult {
        let origin: String = self.source.describe();
        info!(source = %origin, "Loading reservation dataset");

        let text: String = self
            .source
            .fetch()
            .await
            .inspect_err(|e| {
                error!(source = %origin, error = %e, "Failed to fetch reservation dataset");
            })
            .map_err(ApiError::from)?;

        let records: Vec<ReservationRecord> = parse_reservations(&text);

        info!(source = %origin, records = records.len(), "Loaded reservation dataset");
        Ok(Arc::from(records))
    }
}
