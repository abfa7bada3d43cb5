//! Copyright banner placed at the top of the generated header

use chrono::Datelike;

/// Copyright holder of the generated header
pub const DEFAULT_HOLDER: &str = "Qualcomm Innovation Center, Inc.";
/// First year of the copyright range
pub const DEFAULT_FIRST_YEAR: i32 = 2021;
/// SPDX license identifier
pub const DEFAULT_LICENSE: &str = "BSD-3-Clause-Clear";

/// Three-line block comment with a copyright range and license identifier
///
/// The range ends at `year` when one is given. Without it the current local
/// calendar year is used, which makes the output change across a year
/// boundary; pin the year for reproducible builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub holder: String,
    pub first_year: i32,
    pub license: String,
    pub year: Option<i32>,
}

impl Banner {
    /// Banner with the default holder and license
    pub fn new() -> Self {
        Banner {
            holder: DEFAULT_HOLDER.to_string(),
            first_year: DEFAULT_FIRST_YEAR,
            license: DEFAULT_LICENSE.to_string(),
            year: None,
        }
    }

    /// Pin the end year of the copyright range
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// The end year that [`Banner::render`] will print
    pub fn end_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    pub fn render(&self) -> String {
        format!(
            "/*\n * Copyright (c) {}-{} {} All rights reserved.\n * SPDX-License-Identifier: {}\n */\n",
            self.first_year,
            self.end_year(),
            self.holder,
            self.license
        )
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
