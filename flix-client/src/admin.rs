use crate::http::MovieflixClient;
use crate::models::{AdminBookingDetails, AdminBookingPage, AdminUserPage, ProfitSummary};
use chrono::NaiveDate;
use flix_core::ApiError;

impl MovieflixClient {
    /// Registered customers, with optional search and limit/offset paging
    /// (`GET /admin/users`).
    pub async fn admin_users(
        &self,
        search: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<AdminUserPage, ApiError> {
        let limit = limit.to_string();
        let offset = offset.to_string();
        let mut query: Vec<(&str, &str)> = vec![("limit", &limit), ("offset", &offset)];
        if let Some(search) = search {
            query.push(("search", search));
        }
        self.get_json("/admin/users", &query).await
    }

    /// Booking list for the admin console, page-wrapped
    /// (`GET /admin/bookings`).
    pub async fn admin_bookings(
        &self,
        search: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<AdminBookingPage, ApiError> {
        let page = page.to_string();
        let size = size.to_string();
        let mut query: Vec<(&str, &str)> = vec![("page", &page), ("size", &size)];
        if let Some(search) = search {
            query.push(("search", search));
        }
        self.get_json("/admin/bookings", &query).await
    }

    /// Full detail for one booking (`GET /admin/bookings/{reference}`).
    pub async fn admin_booking(&self, reference: &str) -> Result<AdminBookingDetails, ApiError> {
        self.get_json(&format!("/admin/bookings/{}", reference), &[])
            .await
    }

    /// Profit analytics over an inclusive date range
    /// (`GET /admin/profit?start=...&end=...`, ISO dates).
    pub async fn profit_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProfitSummary, ApiError> {
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();
        self.get_json("/admin/profit", &[("start", &start), ("end", &end)])
            .await
    }
}
