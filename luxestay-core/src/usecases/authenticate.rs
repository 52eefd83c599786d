//! There is no real account backend:
//! authentication only decides about the display name.

use super::prelude::*;

pub const ADMIN_EMAIL: &str = "adminluxestay@info.com";
pub const ADMIN_PASSWORD: &str = "Admin1234@";
pub const ADMIN_NAME: &str = "VIP Admin";
pub const DEFAULT_GUEST_NAME: &str = "Nuevo Huésped";

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl Credentials<'_> {
    fn is_admin(&self) -> bool {
        self.email == ADMIN_EMAIL && self.password == ADMIN_PASSWORD
    }
}

pub fn login(credentials: &Credentials, now: Timestamp) -> Result<User> {
    let name = if credentials.is_admin() {
        ADMIN_NAME
    } else if let Some((local_part, _)) = credentials.email.split_once('@') {
        local_part
    } else {
        return Err(Error::Credentials);
    };
    Ok(new_user(credentials.email, name, now))
}

pub fn signup(credentials: &Credentials, name: Option<&str>, now: Timestamp) -> User {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_GUEST_NAME);
    new_user(credentials.email, name, now)
}

fn new_user(email: &str, name: &str, now: Timestamp) -> User {
    User {
        id: now.to_string().into(),
        email: email.to_owned(),
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Timestamp = Timestamp::from_millis(1_700_000_000_000);

    fn credentials<'a>(email: &'a str, password: &'a str) -> Credentials<'a> {
        Credentials { email, password }
    }

    #[test]
    fn login_as_admin() {
        let user = login(&credentials(ADMIN_EMAIL, ADMIN_PASSWORD), NOW).unwrap();
        assert_eq!(user.name, "VIP Admin");
        assert_eq!(user.email, ADMIN_EMAIL);
        assert_eq!(user.id.as_str(), "1700000000000");
    }

    #[test]
    fn login_as_admin_with_wrong_password_uses_local_part() {
        let user = login(&credentials(ADMIN_EMAIL, "secret"), NOW).unwrap();
        assert_eq!(user.name, "adminluxestay");
    }

    #[test]
    fn login_with_any_email() {
        let user = login(&credentials("alexander.knight@mail.cm", ""), NOW).unwrap();
        assert_eq!(user.name, "alexander.knight");
    }

    #[test]
    fn reject_login_without_at_sign() {
        assert!(matches!(
            login(&credentials("alexander.knight", "secret"), NOW),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn signup_with_name() {
        let user = signup(&credentials("a@b.c", "x"), Some(" Alexander Knight "), NOW);
        assert_eq!(user.name, "Alexander Knight");
    }

    #[test]
    fn signup_without_name() {
        let user = signup(&credentials("whatever", ""), None, NOW);
        assert_eq!(user.name, DEFAULT_GUEST_NAME);
        let user = signup(&credentials("whatever", ""), Some("  "), NOW);
        assert_eq!(user.name, DEFAULT_GUEST_NAME);
    }
}
