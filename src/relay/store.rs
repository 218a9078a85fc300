//! Which destination each user has chosen. Held in memory only, so choices
//! are forgotten on restart.

use super::model::{DestinationId, UserId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Maps users to their chosen destination. A user has at most one, and a new
/// choice replaces the old one.
#[derive(Default)]
pub struct DestinationStore {
    selections: RwLock<HashMap<UserId, DestinationId>>,
}

impl DestinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, returning whatever it replaced.
    pub async fn select(&self, user: UserId, dest: DestinationId) -> Option<DestinationId> {
        self.selections.write().await.insert(user, dest)
    }

    pub async fn selected(&self, user: UserId) -> Option<DestinationId> {
        self.selections.read().await.get(&user).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = DestinationStore::new();
        let user = UserId(1);

        assert_eq!(store.selected(user).await, None);

        assert_eq!(store.select(user, DestinationId("d1".into())).await, None);
        assert_eq!(
            store.select(user, DestinationId("d2".into())).await,
            Some(DestinationId("d1".into()))
        );
        assert_eq!(store.selected(user).await, Some(DestinationId("d2".into())));

        // Repeating a choice changes nothing.
        store.select(user, DestinationId("d2".into())).await;
        assert_eq!(store.selected(user).await, Some(DestinationId("d2".into())));
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let store = DestinationStore::new();

        store.select(UserId(1), DestinationId("a".into())).await;
        store.select(UserId(2), DestinationId("b".into())).await;

        assert_eq!(store.selected(UserId(1)).await, Some(DestinationId("a".into())));
        assert_eq!(store.selected(UserId(2)).await, Some(DestinationId("b".into())));
        assert_eq!(store.selected(UserId(3)).await, None);
    }
}
