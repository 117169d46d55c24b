use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::masjids::services::MasjidStore;
use crate::features::users::dtos::{AssignMasjidPayload, UserResponseDto};
use crate::features::users::repositories::UserRepository;
use crate::shared::types::RecordId;

pub type UserStore = Arc<dyn UserRepository>;

/// Admin-side account management
pub struct UserService {
    users: UserStore,
    masjids: MasjidStore,
}

impl UserService {
    pub fn new(users: UserStore, masjids: MasjidStore) -> Self {
        Self { users, masjids }
    }

    /// Attach a masjid to a user; attaching the same masjid twice is a no-op
    pub async fn assign_masjid(
        &self,
        user_id: &str,
        payload: AssignMasjidPayload,
    ) -> Result<UserResponseDto> {
        let masjid_id = payload.validate(user_id)?;
        let not_found = || AppError::NotFound("user is not found".to_string());

        let user_id = RecordId::parse(user_id).ok_or_else(not_found)?.uuid();
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(not_found());
        }
        if self.masjids.find_by_id(masjid_id).await?.is_none() {
            return Err(AppError::NotFound("masjid is not found".to_string()));
        }

        let user = self
            .users
            .add_masjid(user_id, masjid_id)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Masjid {} assigned to user {}", masjid_id, user.id);

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::model::UserRole;
    use crate::features::masjids::models::{Masjid, MasjidInput};
    use crate::features::users::models::{NewUser, User};
    use crate::shared::memory::MemoryRepository;
    use crate::shared::repository::Repository;
    use serde_json::json;
    use uuid::Uuid;

    struct Fixture {
        service: UserService,
        users: Arc<MemoryRepository<User>>,
        masjids: Arc<MemoryRepository<Masjid>>,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(MemoryRepository::<User>::new());
        let masjids = Arc::new(MemoryRepository::<Masjid>::new());
        let service = UserService::new(users.clone(), masjids.clone());
        Fixture {
            service,
            users,
            masjids,
        }
    }

    async fn seed(f: &Fixture) -> (User, Masjid) {
        let user = UserRepository::insert(
            f.users.as_ref(),
            NewUser {
                name: "Ahmed".to_string(),
                email: "ahmed@example.com".to_string(),
                password_hash: "hash".to_string(),
                role: UserRole::User,
            },
        )
        .await
        .unwrap();
        let masjid = f
            .masjids
            .insert(MasjidInput {
                name: "Jamia".to_string(),
                description: None,
                city_id: Uuid::now_v7(),
            })
            .await
            .unwrap();
        (user, masjid)
    }

    fn body(masjid: &Masjid) -> AssignMasjidPayload {
        serde_json::from_value(json!({"masjidId": masjid.id.simple().to_string()})).unwrap()
    }

    #[tokio::test]
    async fn test_assign_masjid_once() {
        let f = fixture();
        let (user, masjid) = seed(&f).await;
        let user_id = user.id.simple().to_string();

        f.service.assign_masjid(&user_id, body(&masjid)).await.unwrap();
        let updated = f.service.assign_masjid(&user_id, body(&masjid)).await.unwrap();

        assert_eq!(updated.masjids, vec![RecordId::from(masjid.id)]);
    }

    #[tokio::test]
    async fn test_assign_unknown_masjid() {
        let f = fixture();
        let (user, _) = seed(&f).await;
        let payload = serde_json::from_value(
            json!({"masjidId": Uuid::now_v7().simple().to_string()}),
        )
        .unwrap();

        let err = f
            .service
            .assign_masjid(&user.id.simple().to_string(), payload)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "masjid is not found");
    }

    #[tokio::test]
    async fn test_assign_to_unknown_user() {
        let f = fixture();
        let (_, masjid) = seed(&f).await;

        let err = f
            .service
            .assign_masjid(&Uuid::now_v7().simple().to_string(), body(&masjid))
            .await
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 404);
        assert_eq!(err.message(), "user is not found");
    }
}
