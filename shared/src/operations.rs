//! Async operations of the appointment manager.
//!
//! Each operation performs one call through an [`AppointmentApi`] and turns
//! the outcome into the [`Action`] to dispatch. Failures are reported as a
//! single `error` event and yield `None`, which leaves view state untouched.

use crate::api::AppointmentApi;
use crate::models::AppointmentDraft;
use crate::state::{Action, Submission};

pub async fn list_appointments<A>(api: &A) -> Option<Action>
where
    A: AppointmentApi + ?Sized,
{
    match api.list_appointments().await {
        Ok(appointments) => {
            tracing::debug!(count = appointments.len(), "Fetched appointments");
            Some(Action::Loaded(appointments))
        }
        Err(error) => {
            tracing::error!(%error, "Error fetching appointments");
            None
        }
    }
}

pub async fn create_appointment<A>(api: &A, draft: AppointmentDraft) -> Option<Action>
where
    A: AppointmentApi + ?Sized,
{
    match api.create_appointment(&draft).await {
        Ok(created) => {
            tracing::debug!(?created, "Added appointment");
            Some(Action::Created(created))
        }
        Err(error) => {
            tracing::error!(%error, "Error adding appointment");
            None
        }
    }
}

pub async fn update_appointment<A>(api: &A, id: String, fields: AppointmentDraft) -> Option<Action>
where
    A: AppointmentApi + ?Sized,
{
    match api.update_appointment(&id, &fields).await {
        Ok(response) => {
            tracing::debug!(%id, %response, "Updated appointment");
            Some(Action::Updated { id, fields })
        }
        Err(error) => {
            tracing::error!(%id, %error, "Error updating appointment");
            None
        }
    }
}

pub async fn delete_appointment<A>(api: &A, id: String) -> Option<Action>
where
    A: AppointmentApi + ?Sized,
{
    match api.delete_appointment(&id).await {
        Ok(response) => {
            tracing::debug!(%id, %response, "Deleted appointment");
            Some(Action::Deleted(id))
        }
        Err(error) => {
            tracing::error!(%id, %error, "Error deleting appointment");
            None
        }
    }
}

/// Runs the create or update the form is currently bound to
pub async fn submit<A>(api: &A, submission: Submission) -> Option<Action>
where
    A: AppointmentApi + ?Sized,
{
    match submission {
        Submission::Create(draft) => create_appointment(api, draft).await,
        Submission::Update { id, fields } => update_appointment(api, id, fields).await,
    }
}
