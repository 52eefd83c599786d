use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use luxestay_boundary as json;
use luxestay_core::{
    entities::*,
    repositories::{self, FavoritesRepo, UserRepo},
};

const USER_STORAGE_KEY: &str = "luxe_user";
const FAVORITES_STORAGE_KEY: &str = "luxe_favorites";

/// The session kept in the local storage of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

fn load<T: DeserializeOwned>(key: &str) -> repositories::Result<Option<T>> {
    match LocalStorage::get(key) {
        Ok(record) => Ok(Some(record)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(StorageError::SerdeError(err)) => Err(repositories::Error::Malformed(err.to_string())),
        Err(err) => Err(anyhow::anyhow!("{err}").into()),
    }
}

fn save<T: Serialize>(key: &str, record: &T) -> repositories::Result<()> {
    LocalStorage::set(key, record).map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}

impl UserRepo for LocalStorageSession {
    fn load_user(&self) -> repositories::Result<Option<User>> {
        Ok(load::<json::User>(USER_STORAGE_KEY)?.map(Into::into))
    }

    fn save_user(&self, user: &User) -> repositories::Result<()> {
        save(USER_STORAGE_KEY, &json::User::from(user.clone()))
    }

    fn clear_user(&self) -> repositories::Result<()> {
        LocalStorage::delete(USER_STORAGE_KEY);
        Ok(())
    }
}

impl FavoritesRepo for LocalStorageSession {
    fn load_favorites(&self) -> repositories::Result<Vec<Hotel>> {
        let favorites = load::<Vec<json::Hotel>>(FAVORITES_STORAGE_KEY)?.unwrap_or_default();
        Ok(favorites.into_iter().map(Into::into).collect())
    }

    fn save_favorites(&self, favorites: &[Hotel]) -> repositories::Result<()> {
        let favorites: Vec<_> = favorites.iter().cloned().map(json::Hotel::from).collect();
        save(FAVORITES_STORAGE_KEY, &favorites)
    }
}
