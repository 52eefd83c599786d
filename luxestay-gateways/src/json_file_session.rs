use jfs::Store;
use luxestay_boundary as json;
use luxestay_core::{
    entities::*,
    repositories::{self, FavoritesRepo, UserRepo},
};
use serde::{de::DeserializeOwned, Serialize};
use std::{io, path::Path};

pub const USER_KEY: &str = "luxe_user";
pub const FAVORITES_KEY: &str = "luxe_favorites";

/// Keeps the session as JSON files in a directory.
pub struct JsonFileSession {
    json_store: Store,
}

impl JsonFileSession {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> repositories::Result<Option<T>> {
        match self.json_store.get(key) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) if is_malformed(&err) => Err(repositories::Error::Malformed(err.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    fn save<T>(&self, key: &str, record: &T) -> repositories::Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        self.json_store.save_with_id(record, key)?;
        Ok(())
    }
}

fn is_malformed(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::InvalidData
        || err
            .get_ref()
            .is_some_and(|inner| inner.is::<serde_json::Error>())
}

impl UserRepo for JsonFileSession {
    fn load_user(&self) -> repositories::Result<Option<User>> {
        let user = self.load::<json::User>(USER_KEY)?;
        Ok(user.map(Into::into))
    }

    fn save_user(&self, user: &User) -> repositories::Result<()> {
        self.save(USER_KEY, &json::User::from(user.clone()))
    }

    fn clear_user(&self) -> repositories::Result<()> {
        match self.json_store.delete(USER_KEY) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

impl FavoritesRepo for JsonFileSession {
    fn load_favorites(&self) -> repositories::Result<Vec<Hotel>> {
        let favorites = self
            .load::<Vec<json::Hotel>>(FAVORITES_KEY)?
            .unwrap_or_default();
        Ok(favorites.into_iter().map(Into::into).collect())
    }

    fn save_favorites(&self, favorites: &[Hotel]) -> repositories::Result<()> {
        let favorites: Vec<_> = favorites
            .iter()
            .cloned()
            .map(json::Hotel::from)
            .collect();
        self.save(FAVORITES_KEY, &favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxestay_entities::builders::Builder;
    use std::fs;

    fn session() -> (tempfile::TempDir, JsonFileSession) {
        let dir = tempfile::tempdir().unwrap();
        let session = JsonFileSession::try_new(dir.path()).unwrap();
        (dir, session)
    }

    #[test]
    fn empty_session() {
        let (_dir, session) = session();
        assert!(session.load_user().unwrap().is_none());
        assert!(session.load_favorites().unwrap().is_empty());
        session.clear_user().unwrap();
    }

    #[test]
    fn user_round_trip() {
        let (_dir, session) = session();
        let user = User::build().name("Alexander Knight").finish();
        session.save_user(&user).unwrap();
        assert_eq!(session.load_user().unwrap(), Some(user));
        session.clear_user().unwrap();
        assert!(session.load_user().unwrap().is_none());
    }

    #[test]
    fn favorites_round_trip() {
        let (_dir, session) = session();
        let favorites = vec![
            Hotel::build()
                .id("hotel-0-1")
                .name("Hilton Yaoundé")
                .maps_url(Some("https://maps.google.com/?cid=7"))
                .finish(),
            Hotel::build()
                .id("hotel-1-1")
                .review_snippets(vec!["Impecable"])
                .finish(),
        ];
        session.save_favorites(&favorites).unwrap();
        assert_eq!(session.load_favorites().unwrap(), favorites);
        session.save_favorites(&favorites[1..]).unwrap();
        assert_eq!(session.load_favorites().unwrap(), favorites[1..].to_vec());
    }

    #[test]
    fn save_and_load_raw_records() {
        let (_dir, session) = session();
        let record = json::User {
            id: "1700000000000".into(),
            email: "vip@luxestay.com".into(),
            name: "VIP".into(),
        };
        session.save("raw_user", &record).unwrap();
        assert_eq!(session.load::<json::User>("raw_user").unwrap(), Some(record));
        assert!(session.load::<json::User>("missing").unwrap().is_none());
    }

    #[test]
    fn persisted_under_fixed_keys() {
        let (dir, session) = session();
        session.save_user(&User::build().finish()).unwrap();
        session.save_favorites(&[Hotel::build().finish()]).unwrap();
        let user = fs::read_to_string(dir.path().join("luxe_user.json")).unwrap();
        assert!(user.contains("\"email\""));
        let favorites = fs::read_to_string(dir.path().join("luxe_favorites.json")).unwrap();
        assert!(favorites.contains("\"pricePerNight\""));
    }

    #[test]
    fn malformed_records() {
        let (dir, session) = session();
        fs::write(dir.path().join("luxe_user.json"), "{ not json").unwrap();
        fs::write(dir.path().join("luxe_favorites.json"), "42").unwrap();
        assert!(matches!(
            session.load_user(),
            Err(repositories::Error::Malformed(_))
        ));
        assert!(matches!(
            session.load_favorites(),
            Err(repositories::Error::Malformed(_))
        ));
    }
}
