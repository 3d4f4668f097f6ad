//! Publish/unpublish with a guard against re-entry while a request is pending.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use careerhub_client::CompanyApi;
use careerhub_core::AppError;
use careerhub_entity::company::{Company, PublicationState, UpdateCompany};

/// What a toggle attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server accepted the change and reports this state.
    Changed(PublicationState),
    /// Another toggle was still pending; nothing was sent.
    Ignored,
}

/// Flips a company between draft and published, one request at a time.
#[derive(Debug)]
pub struct PublishToggle<A: CompanyApi> {
    api: Arc<A>,
    pending: AtomicBool,
}

/// Clears the pending flag when the request finishes, whatever the outcome.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: CompanyApi> PublishToggle<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            pending: AtomicBool::new(false),
        }
    }

    /// Whether a toggle request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Request the opposite of `company`'s current state.
    ///
    /// The resulting state is whatever the server returns, not the requested
    /// one. Calls made while a request is pending return `Ignored`.
    pub async fn toggle(&self, company: &Company) -> Result<ToggleOutcome, AppError> {
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(company_id = %company.id, "Publish toggle already pending");
            return Ok(ToggleOutcome::Ignored);
        }
        let _guard = PendingGuard(&self.pending);

        let requested = company.published.toggled();
        let saved = self
            .api
            .update(&company.id, UpdateCompany::publication(requested))
            .await?;

        info!(company_id = %company.id, state = %saved.published, "Publication state changed");
        Ok(ToggleOutcome::Changed(saved.published))
    }

    /// Toggle and write the server's state back into `company`. A failed or
    /// ignored toggle leaves it unchanged.
    pub async fn toggle_in_place(&self, company: &mut Company) -> Result<ToggleOutcome, AppError> {
        let outcome = self.toggle(company).await?;
        if let ToggleOutcome::Changed(state) = outcome {
            company.published = state;
        }
        Ok(outcome)
    }
}
