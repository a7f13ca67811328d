//! In-memory integration tests for the team roster.

use rstest::rstest;
use teamboard::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{User, UserId},
    ports::UserDirectory,
};

fn member(id: &str, name: &str, email: &str) -> User {
    User::new(UserId::new(id).expect("valid user id"), name)
        .expect("valid member")
        .with_email(email)
        .expect("valid email")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_lists_members_with_their_identity() {
    let directory = InMemoryUserDirectory::new();
    directory
        .add(member("u1", "Asha", "asha@example.org"))
        .expect("add should succeed");
    directory
        .add(member("u2", "Femi", "femi@example.org"))
        .expect("add should succeed");

    let roster = directory.list_all().await.expect("listing should succeed");

    assert_eq!(roster.len(), 2);
    let first = roster.first().expect("roster should have members");
    assert_eq!(first.display_name(), "Asha");
    assert_eq!(first.email(), Some("asha@example.org"));

    let found = directory
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found.as_ref(), Some(first));
}
