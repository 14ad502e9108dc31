use gloo::storage::errors::StorageError;
use gloo::storage::{SessionStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key a value is stored under in the browser's storage.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

/// Values that live in `sessionStorage`: they survive a reload of the tab, but not closing it.
pub(crate) trait SessionSaved: Sized {
    /// `Ok(None)` when nothing was saved yet.
    fn session_load() -> Result<Option<Self>, StorageError>;

    fn session_save(&self);
}

impl<T> SessionSaved for T
where
    T: StorageKey + Serialize + DeserializeOwned,
{
    fn session_load() -> Result<Option<Self>, StorageError> {
        match SessionStorage::get(T::KEY) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn session_save(&self) {
        if let Err(err) = SessionStorage::set(T::KEY, self) {
            log::error!("Could not save {} to session storage: {:?}", T::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
