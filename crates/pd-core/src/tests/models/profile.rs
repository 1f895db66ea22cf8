use crate::tests::profile;

use uuid::Uuid;

#[test]
fn test_profile_name_contains_ignores_case() {
    let github = profile(1, "GitHub Profile");

    assert!(github.name_contains("git"));
    assert!(github.name_contains("hub pro"));
    assert!(!github.name_contains("gitlab"));
}

#[test]
fn test_profile_is_owned_by() {
    let owner = Uuid::new_v4();
    let mut linkedin = profile(2, "LinkedIn");

    assert!(!linkedin.is_owned_by(owner));

    linkedin.owner_id = Some(owner);
    assert!(linkedin.is_owned_by(owner));
    assert!(!linkedin.is_owned_by(Uuid::new_v4()));
}
