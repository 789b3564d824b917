#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;
#[cfg(not(test))]
use tracing::warn;

const KEYRING_SERVICE: &str = "gymctl";

/// The three credentials a signed-in session carries. The identity token is
/// stored and cleared alongside the others but never attached to requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Access,
    Refresh,
    Identity,
}

impl TokenKind {
    pub(crate) const ALL: [TokenKind; 3] =
        [TokenKind::Access, TokenKind::Refresh, TokenKind::Identity];

    fn key(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
            TokenKind::Identity => "identity",
        }
    }
}

/// Durable session credentials, backed by the OS keychain. Absence of a token
/// is a valid state, not a failure. Owned by `main` and passed by reference to
/// whatever needs it.
pub(crate) struct TokenStore {
    service: String,
}

impl TokenStore {
    pub(crate) fn open() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    pub(crate) fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    pub(crate) fn set(&self, kind: TokenKind, value: Option<&str>) -> anyhow::Result<()> {
        match value {
            Some(value) => {
                keyring_set(&self.service, kind.key(), value)?;
                debug!(kind = kind.key(), "stored token");
            }
            None => keyring_delete(&self.service, kind.key())?,
        }
        Ok(())
    }

    pub(crate) fn get(&self, kind: TokenKind) -> anyhow::Result<Option<String>> {
        keyring_get(&self.service, kind.key())
    }

    /// Removes all three tokens. Callers on the same logical thread never
    /// observe a partially-cleared store: there is no await point between the
    /// deletes, and the test backend clears under a single lock.
    pub(crate) fn clear_all(&self) -> anyhow::Result<()> {
        clear_service(&self.service)?;
        debug!("cleared session tokens");
        Ok(())
    }
}

#[cfg(test)]
fn keyring_key(service: &str, token_key: &str) -> String {
    format!("{service}::{token_key}")
}

#[cfg(not(test))]
fn keyring_entry(service: &str, token_key: &str) -> anyhow::Result<keyring::Entry> {
    keyring::Entry::new(service, token_key)
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(service: &str, token_key: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(service, token_key)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {token_key} token: {err}"))
}

#[cfg(not(test))]
fn keyring_get(service: &str, token_key: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(service, token_key)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {token_key} token from keychain: {err}"
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(service: &str, token_key: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(service, token_key)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!(token = token_key, "failed to delete token: {err}");
            Ok(())
        }
    }
}

#[cfg(not(test))]
fn clear_service(service: &str) -> anyhow::Result<()> {
    for kind in TokenKind::ALL {
        keyring_delete(service, kind.key())?;
    }
    Ok(())
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}

#[cfg(test)]
fn keyring_set(service: &str, token_key: &str, value: &str) -> anyhow::Result<()> {
    let key = keyring_key(service, token_key);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(key, value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(service: &str, token_key: &str) -> anyhow::Result<Option<String>> {
    let key = keyring_key(service, token_key);
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&key).cloned())
}

#[cfg(test)]
fn keyring_delete(service: &str, token_key: &str) -> anyhow::Result<()> {
    let key = keyring_key(service, token_key);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&key);
    Ok(())
}

#[cfg(test)]
fn clear_service(service: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    for kind in TokenKind::ALL {
        store.remove(&keyring_key(service, kind.key()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip_per_kind() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        let store = TokenStore::with_service("gymctl-test");
        store.set(TokenKind::Access, Some("abc"))?;
        assert_eq!(store.get(TokenKind::Access)?.as_deref(), Some("abc"));
        store.set(TokenKind::Access, None)?;
        assert_eq!(store.get(TokenKind::Access)?, None);
        Ok(())
    }

    #[test]
    fn clear_all_removes_every_kind() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        let store = TokenStore::with_service("gymctl-test");
        store.set(TokenKind::Access, Some("a"))?;
        store.set(TokenKind::Refresh, Some("r"))?;
        store.set(TokenKind::Identity, Some("i"))?;
        store.clear_all()?;
        for kind in TokenKind::ALL {
            assert_eq!(store.get(kind)?, None);
        }
        Ok(())
    }
}
