//! Organize webinar use case
//!
//! Validates a scheduling request and persists a new webinar.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::app::webinar_policy::{respects_lead_time, MAX_SEATS, MIN_SEATS};
use crate::domain::entities::{UserId, Webinar, WebinarId};
use crate::domain::ports::{Clock, IdGenerator, WebinarRepository};
use crate::error::OrganizeWebinarError;

/// Request to schedule a new webinar
#[derive(Debug, Clone)]
pub struct OrganizeWebinarCommand {
    pub user_id: UserId,
    pub title: String,
    pub seats: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Outcome of a successful organize call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizeWebinarResult {
    pub id: WebinarId,
}

/// Use case for scheduling webinars
pub struct OrganizeWebinar<WR, C, G>
where
    WR: WebinarRepository,
    C: Clock,
    G: IdGenerator,
{
    webinars: Arc<WR>,
    clock: Arc<C>,
    ids: Arc<G>,
}

impl<WR, C, G> OrganizeWebinar<WR, C, G>
where
    WR: WebinarRepository,
    C: Clock,
    G: IdGenerator,
{
    pub fn new(webinars: Arc<WR>, clock: Arc<C>, ids: Arc<G>) -> Self {
        Self {
            webinars,
            clock,
            ids,
        }
    }

    /// Organize a new webinar
    ///
    /// Checks, in order:
    /// 1. The start date is at least the minimum lead time away
    /// 2. The seat count is not above the maximum
    /// 3. The seat count is not below the minimum
    ///
    /// Storage is only touched once every check has passed.
    pub async fn execute(
        &self,
        command: OrganizeWebinarCommand,
    ) -> Result<OrganizeWebinarResult, OrganizeWebinarError> {
        let now = self.clock.now();

        if !respects_lead_time(command.start_date, now) {
            return Err(OrganizeWebinarError::DatesTooSoon);
        }

        if command.seats > MAX_SEATS {
            return Err(OrganizeWebinarError::TooManySeats);
        }

        if command.seats < MIN_SEATS {
            return Err(OrganizeWebinarError::NotEnoughSeats);
        }

        let webinar = Webinar {
            id: self.ids.generate(),
            organizer_id: command.user_id,
            title: command.title,
            start_date: command.start_date,
            end_date: command.end_date,
            seats: command.seats,
        };

        self.webinars.create(&webinar).await?;

        tracing::info!(
            webinar_id = %webinar.id,
            organizer_id = %webinar.organizer_id,
            seats = webinar.seats,
            "Webinar organized"
        );

        Ok(OrganizeWebinarResult { id: webinar.id })
    }
}
