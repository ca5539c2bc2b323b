//! Account aggregate.

use crate::account::{Order, Profile};
use crate::session;
use serde::{Deserialize, Serialize};
use shophub_store::StoreHandle;

const STORE_NAME: &str = "account";
const SCHEMA_VERSION: u32 = 1;

/// Persisted account state: who is signed in and their order history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct AccountState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
    #[serde(default)]
    orders: Vec<Order>,
}

/// The account aggregate for the active session.
///
/// Holds the signed-in profile (if any) and the order history, most
/// recent order first. Like the other aggregates, state is read once at
/// construction and written through on every mutation.
#[derive(Debug)]
pub struct Account {
    state: AccountState,
    store: StoreHandle,
}

impl Account {
    /// Open the account for a session, reading any persisted state.
    pub fn load(store: StoreHandle) -> Self {
        let state = session::load_state(&store, STORE_NAME, SCHEMA_VERSION);
        Self { state, store }
    }

    /// Record a sign-in.
    pub fn log_in(&mut self, profile: Profile) {
        self.state.profile = Some(profile);
        self.persist();
    }

    /// Sign out, dropping the profile and order history.
    pub fn log_out(&mut self) {
        self.state = AccountState::default();
        self.persist();
    }

    /// Check if a profile is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.profile.is_some()
    }

    /// The signed-in profile, if any.
    pub fn profile(&self) -> Option<&Profile> {
        self.state.profile.as_ref()
    }

    /// Apply an update to the signed-in profile; no-op when signed out.
    pub fn update_profile(&mut self, update: impl FnOnce(&mut Profile)) {
        if let Some(profile) = self.state.profile.as_mut() {
            update(profile);
            self.persist();
        }
    }

    /// Prepend an order to the history.
    pub fn add_order(&mut self, order: Order) {
        self.state.orders.insert(0, order);
        self.persist();
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    fn persist(&self) {
        session::save_state(&self.store, STORE_NAME, SCHEMA_VERSION, &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::OrderStatus;
    use crate::price::Price;
    use shophub_store::Store;

    fn account() -> Account {
        Account::load(Store::in_memory().into_handle())
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            placed_at: 1_700_000_000,
            status: OrderStatus::Pending,
            total: Price::from_decimal(99.99),
            items: 1,
            tracking_number: None,
        }
    }

    #[test]
    fn starts_signed_out() {
        let account = account();
        assert!(!account.is_authenticated());
        assert!(account.profile().is_none());
        assert!(account.orders().is_empty());
    }

    #[test]
    fn log_in_and_out() {
        let mut account = account();
        account.log_in(Profile::new("1", "Jane Doe", "jane@example.com"));
        assert!(account.is_authenticated());

        account.add_order(order("ORD-001"));
        account.log_out();

        assert!(!account.is_authenticated());
        assert!(account.orders().is_empty());
    }

    #[test]
    fn orders_are_most_recent_first() {
        let mut account = account();
        account.add_order(order("ORD-001"));
        account.add_order(order("ORD-002"));

        let ids: Vec<&str> = account.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-002", "ORD-001"]);
    }

    #[test]
    fn update_profile_requires_sign_in() {
        let mut account = account();
        account.update_profile(|profile| profile.name = "Nobody".to_string());
        assert!(account.profile().is_none());

        account.log_in(Profile::new("1", "Jane Doe", "jane@example.com"));
        account.update_profile(|profile| profile.phone = Some("+1 555 0100".to_string()));
        assert_eq!(
            account.profile().unwrap().phone.as_deref(),
            Some("+1 555 0100")
        );
    }

    #[test]
    fn state_survives_reload() {
        let store = Store::in_memory().into_handle();

        let mut account = Account::load(store.clone());
        account.log_in(Profile::new("1", "Jane Doe", "jane@example.com"));
        account.add_order(order("ORD-001"));

        let reloaded = Account::load(store);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.orders().len(), 1);
        assert_eq!(reloaded.profile().unwrap().email, "jane@example.com");
    }
}
