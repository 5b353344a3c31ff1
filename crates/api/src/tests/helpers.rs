// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{DatasetError, DatasetSource};

pub const SAMPLE_CSV: &str = "Capacity,Monthly Price,Start Day,End Day
10,3100,2024-01-01,
5,300,2024-01-10,2024-01-20
8,1000,2023-06-01,2023-06-15
4,900,2024-02-01,
";

/// A source that counts fetches and yields to the scheduler before answering.
#[derive(Debug)]
pub struct CountingSource {
    calls: AtomicUsize,
    outcome: Result<String, String>,
}

impl CountingSource {
    pub fn succeeding(text: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Err(message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DatasetSource for CountingSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.outcome.clone().map_err(DatasetError::Other)
    }

    fn describe(&self) -> String {
        String::from("counting test source")
    }
}
