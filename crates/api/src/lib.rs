// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod csv_import;
mod dataset;
mod error;
mod service;

#[cfg(test)]
mod tests;

pub use csv_import::parse_reservations;
pub use dataset::{
    AnyDatasetSource, DEFAULT_DATASET_URL, DatasetSource, FileDatasetSource, HttpDatasetSource,
    StaticDatasetSource,
};
pub use error::{ApiError, DatasetError, translate_domain_error};
pub use service::ReservationService;
