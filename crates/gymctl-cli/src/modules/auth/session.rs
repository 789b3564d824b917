use crate::modules::auth::store::{TokenKind, TokenStore};

/// Client-side view of whether a usable session exists. Authenticated if and
/// only if the store holds an access token.
pub(crate) struct Session {
    authenticated: bool,
}

impl Session {
    pub(crate) fn load(store: &TokenStore) -> anyhow::Result<Self> {
        Ok(Self {
            authenticated: store.get(TokenKind::Access)?.is_some(),
        })
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::{clear_keyring_mock, lock_keyring_tests_sync};

    #[test]
    fn session_tracks_access_token_presence() -> anyhow::Result<()> {
        let _guard = lock_keyring_tests_sync();
        clear_keyring_mock();
        let store = TokenStore::with_service("gymctl-session-test");

        assert!(!Session::load(&store)?.is_authenticated());

        store.set(TokenKind::Access, Some("tok"))?;
        assert!(Session::load(&store)?.is_authenticated());

        store.clear_all()?;
        assert!(!Session::load(&store)?.is_authenticated());
        Ok(())
    }
}
