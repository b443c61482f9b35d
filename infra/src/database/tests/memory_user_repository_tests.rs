use uuid::Uuid;

use cva_core::{AuthError, DomainError, User, UserRepository};

use crate::database::InMemoryUserRepository;

fn user(email: &str) -> User {
    User::new("Maria Santos".to_string(), email.to_string(), "hash".to_string())
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();
    let created = repo.create(user("maria@example.com")).await.unwrap();

    assert_eq!(
        repo.find_by_email("maria@example.com").await.unwrap(),
        Some(created.clone())
    );
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
    assert_eq!(repo.find_by_email("other@example.com").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_rejects_duplicate_email() {
    let repo = InMemoryUserRepository::new();
    repo.create(user("maria@example.com")).await.unwrap();

    assert!(matches!(
        repo.create(user("maria@example.com")).await,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_update_persists_changes() {
    let repo = InMemoryUserRepository::new();
    let mut created = repo.create(user("maria@example.com")).await.unwrap();

    created.verify();
    repo.update(created.clone()).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().unwrap().is_verified);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let repo = InMemoryUserRepository::new();
    let mut ghost = user("ghost@example.com");
    ghost.id = Uuid::new_v4();

    assert!(matches!(
        repo.update(ghost).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_cannot_take_another_email() {
    let repo = InMemoryUserRepository::new();
    repo.create(user("maria@example.com")).await.unwrap();
    let mut other = repo.create(user("other@example.com")).await.unwrap();

    other.change_email("maria@example.com".to_string());

    assert!(matches!(
        repo.update(other).await,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}
