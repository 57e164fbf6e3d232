//! `window.localStorage` as a [`LocalStore`].

use nexus_core::{LocalStore, SessionError, SessionResult};
use wasm_bindgen::JsValue;

fn js_storage_error(err: JsValue) -> SessionError {
    SessionError::storage(format!("{:?}", err))
}

/// The browser's persisted storage.
#[derive(Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> SessionResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| SessionError::storage("no window"))?
            .local_storage()
            .map_err(js_storage_error)?
            .ok_or_else(|| SessionError::storage("localStorage unavailable"))
    }
}

impl LocalStore for BrowserStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_storage_error)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.storage()?.set_item(key, value).map_err(js_storage_error)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.storage()?.remove_item(key).map_err(js_storage_error)
    }

    fn clear(&self) -> SessionResult<()> {
        tracing::debug!("Clearing localStorage");
        self.storage()?.clear().map_err(js_storage_error)
    }

    fn len(&self) -> SessionResult<usize> {
        let len = self.storage()?.length().map_err(js_storage_error)?;
        Ok(len as usize)
    }
}
