use lacuna::prelude::*;

#[derive(Debug, Default, Clone)]
struct AddressDto {
    city: Option<String>,
    zip: Option<String>,
}

#[derive(Debug, Default, Clone)]
struct ProfileDto {
    display_name: Option<String>,
    address: Option<AddressDto>,
    age: Option<u32>,
}

#[derive(Debug, Default, Clone)]
struct UserDto {
    id: u64,
    profile: Option<ProfileDto>,
}

fn display_name(user: Option<&UserDto>) -> String {
    optional_path(user, |u| u.profile.as_ref()?.display_name.clone())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or(|| Optional::of(user).map(|u| format!("user #{}", u.id)))
        .or_else_get(|| "guest".to_string())
}

fn city(user: &UserDto) -> Optional<&str> {
    optional_path(Some(user), |u| u.profile.as_ref()?.address.as_ref()?.city.as_deref())
}

#[test]
fn missing_profile_is_absent() {
    let user = UserDto { id: 7, profile: None };
    assert!(city(&user).is_empty());
    assert_eq!(display_name(Some(&user)), "user #7");
}

#[test]
fn blank_name_falls_back() {
    let user = UserDto {
        id: 1,
        profile: Some(ProfileDto {
            display_name: Some("   ".into()),
            ..Default::default()
        }),
    };

    assert_eq!(display_name(Some(&user)), "user #1");
    assert_eq!(display_name(None), "guest");
}

#[test]
fn full_profile() {
    let user = UserDto {
        id: 2,
        profile: Some(ProfileDto {
            display_name: Some(" Ada ".into()),
            address: Some(AddressDto {
                city: Some("London".into()),
                zip: None,
            }),
            age: Some(0),
        }),
    };

    assert_eq!(display_name(Some(&user)), "Ada");
    assert_eq!(city(&user).or_else("unknown"), "London");

    let zip = optional_path(Some(&user), |u| u.profile.as_ref()?.address.as_ref()?.zip.clone());
    assert_eq!(zip.or_else_get(|| "-".into()), "-");

    // zero is a value, not an absence
    let age = optional_path(Some(&user), |u| u.profile.as_ref()?.age);
    assert_eq!(age.get(), Ok(0));
}

#[test]
fn required_field_reports_absence() -> anyhow::Result<()> {
    let user = UserDto::default();
    let err = optional_path(Some(&user), |u| u.profile.clone()).get().unwrap_err();
    assert_eq!(err, lacuna::optional::Error::NoValuePresent);

    let id = Optional::some(&user).map(|u| u.id).get()?;
    assert_eq!(id, 0);
    Ok(())
}

#[tokio::test]
async fn async_fallback_only_runs_when_absent() {
    let cached = Optional::some(String::from("cached"));
    let value = or_else_get_async(cached, || async { String::from("fetched") }).await;
    assert_eq!(value, "cached");

    let value = or_else_get_async(Optional::empty(), || async { String::from("fetched") }).await;
    assert_eq!(value, "fetched");
}
