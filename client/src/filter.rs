//! Dashboard list filtering
//!
//! The admin dashboard filters the already-fetched reservation list
//! locally, independent of any server-side query parameters. Pure
//! presentation convenience over an in-memory list.

use shared::models::{Reservation, ReservationStatus};

/// Filter state of the admin dashboard.
///
/// All criteria are conjunctive; an unset criterion matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    /// Case-insensitive substring on customer name, or exact
    /// substring on phone number (one search box serves both)
    pub search: Option<String>,
    /// Exact status match
    pub status: Option<ReservationStatus>,
    /// Exact `YYYY-MM-DD` match
    pub date: Option<String>,
}

impl DashboardFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        if let Some(term) = &self.search {
            let name_hit = reservation
                .customer_name
                .to_lowercase()
                .contains(&term.to_lowercase());
            let phone_hit = reservation.phone_number.contains(term.as_str());
            if !name_hit && !phone_hit {
                return false;
            }
        }
        if let Some(status) = self.status
            && reservation.status != status
        {
            return false;
        }
        if let Some(date) = &self.date
            && &reservation.reservation_date != date
        {
            return false;
        }
        true
    }

    /// Apply to a fetched list, preserving the server's ordering.
    pub fn apply<'a>(&self, reservations: &'a [Reservation]) -> Vec<&'a Reservation> {
        reservations.iter().filter(|r| self.matches(r)).collect()
    }
}
