//! # Sales Report Module
//!
//! Generates the daily sales report. The same report is served over HTTP
//! and emitted by the scheduler; only the delivery differs.

pub mod scheduler;

use chrono::{Local, NaiveDate};
use rand::Rng;

/// One generated sales report.
#[derive(Debug, Clone)]
pub struct SalesReport {
    pub date: NaiveDate,
    /// Uniform in 1..=100; there is no real sales feed behind this endpoint
    pub sales_count: u32,
}

impl SalesReport {
    /// Draw today's report.
    pub fn generate() -> Self {
        Self {
            date: Local::now().date_naive(),
            sales_count: rand::thread_rng().gen_range(1..=100),
        }
    }

    pub fn performance(&self) -> &'static str {
        performance_label(self.sales_count)
    }

    /// Plain-text rendering used by both delivery shapes.
    pub fn render(&self) -> String {
        format!(
            "Daily Sales Report\nDate: {}\nTotal Sales: {}\nPerformance: {}",
            self.date,
            self.sales_count,
            self.performance()
        )
    }
}

/// Step function from sales count to the day's performance label.
pub fn performance_label(sales: u32) -> &'static str {
    if sales > 75 {
        "Excellent day!"
    } else if sales > 50 {
        "Good day!"
    } else if sales > 25 {
        "Average day."
    } else {
        "Below average day."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_boundaries() {
        assert_eq!(performance_label(100), "Excellent day!");
        assert_eq!(performance_label(76), "Excellent day!");
        assert_eq!(performance_label(75), "Good day!");
        assert_eq!(performance_label(51), "Good day!");
        assert_eq!(performance_label(50), "Average day.");
        assert_eq!(performance_label(26), "Average day.");
        assert_eq!(performance_label(25), "Below average day.");
        assert_eq!(performance_label(1), "Below average day.");
    }

    #[test]
    fn sales_count_stays_in_range() {
        for _ in 0..200 {
            let report = SalesReport::generate();
            assert!((1..=100).contains(&report.sales_count));
        }
    }

    #[test]
    fn renders_all_report_lines() {
        let report = SalesReport {
            date: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            sales_count: 60,
        };
        assert_eq!(
            report.render(),
            "Daily Sales Report\nDate: 2026-08-25\nTotal Sales: 60\nPerformance: Good day!"
        );
    }
}
