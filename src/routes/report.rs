//! Sales report route.

use axum::routing::get;
use axum::Router;

use crate::report::SalesReport;
use crate::server::AppState;

/// **GET** `/api/daily-sales-report` → plain-text report.
///
/// Same payload the scheduler emits as a log record.
pub async fn daily_sales_report() -> String {
    SalesReport::generate().render()
}

pub fn create_report_routes() -> Router<AppState> {
    Router::new().route("/api/daily-sales-report", get(daily_sales_report))
}
