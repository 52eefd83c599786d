use super::prelude::*;

/// The session as it has been left behind
/// by the last run of the application.
#[derive(Debug, Default)]
pub struct RestoredSession {
    pub user: Option<User>,
    pub favorites: Vec<Hotel>,
}

/// Loads the persisted session.
///
/// Unreadable records are treated as if they were absent.
pub fn restore_session<R>(repo: &R) -> RestoredSession
where
    R: UserRepo + FavoritesRepo,
{
    let user = repo.load_user().unwrap_or_else(|err| {
        log::warn!("Unable to restore user: {err}");
        None
    });
    let favorites = repo.load_favorites().unwrap_or_else(|err| {
        log::warn!("Unable to restore favorites: {err}");
        vec![]
    });
    RestoredSession { user, favorites }
}

pub fn start_session<R: UserRepo>(repo: &R, user: &User) -> Result<()> {
    log::info!("Starting session of {}", user.email);
    repo.save_user(user)?;
    Ok(())
}

pub fn end_session<R: UserRepo>(repo: &R) -> Result<()> {
    log::info!("Ending session");
    repo.clear_user()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use luxestay_entities::builders::Builder;

    #[test]
    fn restore_empty_session() {
        let db = MockDb::default();
        let session = restore_session(&db);
        assert!(session.user.is_none());
        assert!(session.favorites.is_empty());
    }

    #[test]
    fn restore_previous_session() {
        let db = MockDb::default();
        let user = User::build().finish();
        start_session(&db, &user).unwrap();
        db.save_favorites(&[Hotel::build().id("h").finish()]).unwrap();
        let session = restore_session(&db);
        assert_eq!(session.user, Some(user));
        assert_eq!(session.favorites.len(), 1);
    }

    #[test]
    fn ignore_corrupt_records() {
        let db = MockDb::default();
        *db.corrupt.borrow_mut() = true;
        let session = restore_session(&db);
        assert!(session.user.is_none());
        assert!(session.favorites.is_empty());
    }

    #[test]
    fn end_session_keeps_favorites() {
        let db = MockDb::default();
        start_session(&db, &User::build().finish()).unwrap();
        db.save_favorites(&[Hotel::build().finish()]).unwrap();
        end_session(&db).unwrap();
        let session = restore_session(&db);
        assert!(session.user.is_none());
        assert_eq!(session.favorites.len(), 1);
    }
}
