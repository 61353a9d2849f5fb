//! Pending testimonial moderation state.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

use crate::net::api::RentalApi;
use crate::net::error::ApiError;
use crate::net::types::Testimonial;
use crate::state::notices::Notice;

#[derive(Clone, Debug, Default)]
pub struct TestimonialsState {
    pub pending: Vec<Testimonial>,
    pub loading: bool,
    /// Testimonial currently being approved.
    pub approving: Option<String>,
}

impl TestimonialsState {
    pub fn finish_load(&mut self, result: Result<Vec<Testimonial>, ApiError>) -> Vec<Notice> {
        self.loading = false;
        match result {
            Ok(pending) => {
                self.pending = pending;
                Vec::new()
            }
            Err(err) => Notice::from_api_error("Could not load testimonials", &err),
        }
    }

    /// Returns `false` while another approval is in flight.
    pub fn begin_approve(&mut self, testimonial_id: &str) -> bool {
        if self.approving.is_some() {
            return false;
        }
        self.approving = Some(testimonial_id.to_owned());
        true
    }

    /// Drop the testimonial from the pending list once the server confirms.
    pub fn finish_approve(&mut self, testimonial_id: &str, result: Result<(), ApiError>) -> Vec<Notice> {
        self.approving = None;
        match result {
            Ok(()) => {
                self.pending.retain(|t| t.id != testimonial_id);
                vec![Notice::success("Testimonial approved", "It is now visible to visitors.")]
            }
            Err(err) => Notice::from_api_error("Could not approve testimonial", &err),
        }
    }
}

/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn load_pending(api: &dyn RentalApi) -> Result<Vec<Testimonial>, ApiError> {
    api.list_pending_testimonials().await
}

/// # Errors
///
/// Propagates the request failure unchanged.
pub async fn approve(api: &dyn RentalApi, testimonial_id: &str) -> Result<(), ApiError> {
    api.approve_testimonial(testimonial_id).await?;
    log::info!("approved testimonial {testimonial_id}");
    Ok(())
}
