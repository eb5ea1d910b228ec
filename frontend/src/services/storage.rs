use common::cache::{CacheError, CachePort};
use web_sys::Storage;

/// `window.localStorage`. Private browsing and disabled storage surface as
/// `CacheError::Unavailable`, quota errors as `CacheError::Write`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePort;

fn local_storage() -> Result<Storage, CacheError> {
    web_sys::window()
        .ok_or(CacheError::Unavailable)?
        .local_storage()
        .map_err(|_| CacheError::Unavailable)?
        .ok_or(CacheError::Unavailable)
}

impl CachePort for LocalStoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| CacheError::Read(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| CacheError::Write(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| CacheError::Write(format!("{e:?}")))
    }
}
