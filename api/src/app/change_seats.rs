//! Change seats use case
//!
//! Lets the organizer of a webinar raise its seat count.

use std::sync::Arc;

use crate::app::webinar_policy::MAX_SEATS;
use crate::domain::entities::{User, WebinarId};
use crate::domain::ports::WebinarRepository;
use crate::error::ChangeSeatsError;

/// Request to change the seat count of a webinar
#[derive(Debug, Clone)]
pub struct ChangeSeatsCommand {
    pub user: User,
    pub webinar_id: WebinarId,
    /// New total number of seats (not a delta)
    pub seats: i32,
}

/// Use case for adjusting webinar capacity
pub struct ChangeSeats<WR>
where
    WR: WebinarRepository,
{
    webinars: Arc<WR>,
}

impl<WR> ChangeSeats<WR>
where
    WR: WebinarRepository,
{
    pub fn new(webinars: Arc<WR>) -> Self {
        Self { webinars }
    }

    /// Change the seat count of a webinar
    ///
    /// Errors surface in a fixed order when several apply at once:
    /// not found, not the organizer, decrease, too many seats.
    /// Setting the current value again is accepted.
    pub async fn execute(&self, command: ChangeSeatsCommand) -> Result<(), ChangeSeatsError> {
        let mut webinar = self
            .webinars
            .find_by_id(&command.webinar_id)
            .await?
            .ok_or(ChangeSeatsError::NotFound)?;

        if !webinar.is_organized_by(&command.user) {
            return Err(ChangeSeatsError::NotOrganizer);
        }

        if command.seats < webinar.seats {
            return Err(ChangeSeatsError::SeatsCannotDecrease);
        }

        if command.seats > MAX_SEATS {
            return Err(ChangeSeatsError::TooManySeats);
        }

        let previous = webinar.seats;
        webinar.seats = command.seats;
        self.webinars.update(&webinar).await?;

        tracing::info!(
            webinar_id = %webinar.id,
            previous_seats = previous,
            seats = webinar.seats,
            "Webinar seats changed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryWebinarRepository;
    use crate::error::StorageError;
    use crate::test_utils::{alice, bob, test_webinar, FailingWebinarRepository};

    fn create_use_case() -> (
        ChangeSeats<InMemoryWebinarRepository>,
        Arc<InMemoryWebinarRepository>,
    ) {
        let repo = Arc::new(InMemoryWebinarRepository::new().with_webinar(test_webinar()));
        (ChangeSeats::new(repo.clone()), repo)
    }

    fn command(user: User, webinar_id: &str, seats: i32) -> ChangeSeatsCommand {
        ChangeSeatsCommand {
            user,
            webinar_id: WebinarId::from(webinar_id),
            seats,
        }
    }

    fn stored_seats(repo: &InMemoryWebinarRepository) -> i32 {
        repo.get(&test_webinar().id).unwrap().seats
    }

    #[tokio::test]
    async fn change_seats_success() {
        let (use_case, repo) = create_use_case();

        let result = use_case.execute(command(alice(), "webinar-id", 200)).await;

        assert!(result.is_ok());
        assert_eq!(stored_seats(&repo), 200);
    }

    #[tokio::test]
    async fn change_seats_only_touches_seats() {
        let (use_case, repo) = create_use_case();

        use_case
            .execute(command(alice(), "webinar-id", 300))
            .await
            .unwrap();

        let stored = repo.get(&test_webinar().id).unwrap();
        let expected = crate::domain::entities::Webinar {
            seats: 300,
            ..test_webinar()
        };
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn change_seats_fails_when_webinar_missing() {
        let (use_case, repo) = create_use_case();

        let result = use_case
            .execute(command(alice(), "non-existent-webinar-id", 200))
            .await;

        assert!(matches!(result, Err(ChangeSeatsError::NotFound)));
        assert_eq!(repo.len(), 1);
        assert_eq!(stored_seats(&repo), 100);
    }

    #[tokio::test]
    async fn change_seats_fails_for_non_organizer() {
        let (use_case, repo) = create_use_case();

        let result = use_case.execute(command(bob(), "webinar-id", 200)).await;

        assert!(matches!(result, Err(ChangeSeatsError::NotOrganizer)));
        assert_eq!(stored_seats(&repo), 100);
    }

    #[tokio::test]
    async fn change_seats_fails_when_decreasing() {
        let (use_case, repo) = create_use_case();

        let result = use_case.execute(command(alice(), "webinar-id", 50)).await;

        assert!(matches!(result, Err(ChangeSeatsError::SeatsCannotDecrease)));
        assert_eq!(stored_seats(&repo), 100);
    }

    #[tokio::test]
    async fn change_seats_fails_above_maximum() {
        let (use_case, repo) = create_use_case();

        let result = use_case.execute(command(alice(), "webinar-id", 1001)).await;

        assert!(matches!(result, Err(ChangeSeatsError::TooManySeats)));
        assert_eq!(stored_seats(&repo), 100);
    }

    #[tokio::test]
    async fn change_seats_accepts_maximum() {
        let (use_case, repo) = create_use_case();

        use_case
            .execute(command(alice(), "webinar-id", 1000))
            .await
            .unwrap();

        assert_eq!(stored_seats(&repo), 1000);
    }

    #[tokio::test]
    async fn same_seat_count_is_a_no_op() {
        let (use_case, repo) = create_use_case();

        assert!(use_case
            .execute(command(alice(), "webinar-id", 100))
            .await
            .is_ok());
        assert!(use_case
            .execute(command(alice(), "webinar-id", 100))
            .await
            .is_ok());

        assert_eq!(stored_seats(&repo), 100);
    }

    #[tokio::test]
    async fn not_organizer_wins_over_decrease() {
        let (use_case, _repo) = create_use_case();

        let result = use_case.execute(command(bob(), "webinar-id", 10)).await;

        assert!(matches!(result, Err(ChangeSeatsError::NotOrganizer)));
    }

    #[tokio::test]
    async fn not_organizer_wins_over_too_many() {
        let (use_case, _repo) = create_use_case();

        let result = use_case.execute(command(bob(), "webinar-id", 5000)).await;

        assert!(matches!(result, Err(ChangeSeatsError::NotOrganizer)));
    }

    #[tokio::test]
    async fn decrease_wins_over_too_many() {
        let repo = Arc::new(InMemoryWebinarRepository::new().with_webinar(
            crate::domain::entities::Webinar {
                seats: i32::MAX,
                ..test_webinar()
            },
        ));
        let use_case = ChangeSeats::new(repo);

        let result = use_case.execute(command(alice(), "webinar-id", 2000)).await;

        assert!(matches!(result, Err(ChangeSeatsError::SeatsCannotDecrease)));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let use_case = ChangeSeats::new(Arc::new(FailingWebinarRepository));

        let result = use_case.execute(command(alice(), "webinar-id", 200)).await;

        assert!(matches!(
            result,
            Err(ChangeSeatsError::Storage(StorageError::Database(_)))
        ));
    }
}
