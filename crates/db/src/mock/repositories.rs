use async_trait::async_trait;
use mockall::mock;
use planning_core::models::{
    disponibility::{Disponibility, DisponibilityDraft},
    reservation::{Reservation, ReservationDraft},
    user::User,
};
use uuid::Uuid;

use crate::repositories::{DisponibilityRepository, ReservationRepository, UserRepository};

// Mock repositories for testing
mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_all(&self) -> eyre::Result<Vec<User>>;

        async fn find_by_id(&self, id: &str) -> eyre::Result<Option<User>>;

        async fn insert(&self, user: &User) -> eyre::Result<User>;

        async fn update(&self, user: &User) -> eyre::Result<u64>;

        async fn delete_by_id(&self, id: &str) -> eyre::Result<u64>;
    }
}

mock! {
    pub ReservationRepo {}

    #[async_trait]
    impl ReservationRepository for ReservationRepo {
        async fn find_all(&self) -> eyre::Result<Vec<Reservation>>;

        async fn find_by_id(&self, id: Uuid) -> eyre::Result<Option<Reservation>>;

        async fn insert(&self, draft: &ReservationDraft) -> eyre::Result<Reservation>;

        async fn update(&self, id: Uuid, draft: &ReservationDraft) -> eyre::Result<u64>;

        async fn delete_by_id(&self, id: Uuid) -> eyre::Result<u64>;
    }
}

mock! {
    pub DisponibilityRepo {}

    #[async_trait]
    impl DisponibilityRepository for DisponibilityRepo {
        async fn find_all(&self) -> eyre::Result<Vec<Disponibility>>;

        async fn find_by_id(&self, id: Uuid) -> eyre::Result<Option<Disponibility>>;

        async fn insert(&self, draft: &DisponibilityDraft) -> eyre::Result<Disponibility>;

        async fn update(&self, id: Uuid, draft: &DisponibilityDraft) -> eyre::Result<u64>;

        async fn delete_by_id(&self, id: Uuid) -> eyre::Result<u64>;
    }
}
