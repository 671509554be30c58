//! User entity.
//!
//! The user (`usuario`) is the account entity of the shopping-cart
//! application: the nick identifies it, the password is what it logs in
//! with, and the profile fields (full name, email, address, phone) are the
//! contact data needed to place an order. Each user also carries the ids of
//! its orders, loaded together with the row by the persistence layer.

use core::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{Nick, OrderId};

/// A registered user of the shopping cart.
///
/// Maps to the `usuario` table: `nick` is the primary key and every other
/// scalar column is `NOT NULL`. The serde field names below match the
/// storage column names, so a serialized `User` mirrors a database row.
///
/// Plain data: fields are public and mutation is direct assignment, with no
/// validation and no side effects. Instances are not synchronized; callers
/// that share one across threads must fetch a fresh copy per request or
/// lock externally.
///
/// # Equality and hashing
///
/// Two users are equal iff all six scalar fields are equal; [`User::orders`]
/// never participates in equality. Hashing uses the nick alone. Equal users
/// necessarily share a nick, so the `Eq`/`Hash` contract holds; two unequal
/// users with the same nick simply collide. This asymmetry is deliberate -
/// the nick is the logical identity and must keep hashing stably even when
/// profile fields are edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Nick identifying the user, the primary key of `usuario`.
    pub nick: Nick,
    /// Password the user logs in with.
    #[serde(rename = "contra")]
    pub password: String,
    /// Full name of the user.
    #[serde(rename = "nombre")]
    pub full_name: String,
    /// Email address of the user.
    pub email: String,
    /// Delivery address for the user's orders.
    #[serde(rename = "direccion")]
    pub address: String,
    /// Phone number of the user.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Ids of the user's orders, in insertion order. Eagerly loaded by the
    /// persistence layer whenever the user is loaded; empty for a user that
    /// has not ordered yet.
    #[serde(rename = "pedidos", default)]
    pub orders: Vec<OrderId>,
}

impl User {
    /// Create a fully-populated user with no orders yet.
    ///
    /// The strings are taken as given; non-empty enforcement is up to the
    /// caller and uniqueness of the nick is up to the database.
    #[must_use]
    pub fn new(
        nick: impl Into<Nick>,
        password: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            nick: nick.into(),
            password: password.into(),
            full_name: full_name.into(),
            email: email.into(),
            address: address.into(),
            phone: phone.into(),
            orders: Vec::new(),
        }
    }

    /// The login-relevant subset of this user.
    #[must_use]
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            nick: self.nick.clone(),
            password: self.password.clone(),
        }
    }
}

impl PartialEq for User {
    /// Structural equality over the six scalar fields; `orders` is excluded.
    fn eq(&self, other: &Self) -> bool {
        self.nick == other.nick
            && self.password == other.password
            && self.full_name == other.full_name
            && self.email == other.email
            && self.address == other.address
            && self.phone == other.phone
    }
}

impl Eq for User {}

impl Hash for User {
    /// Hash over the nick alone. See the type-level docs for why this is
    /// narrower than equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nick.hash(state);
    }
}

impl fmt::Display for User {
    /// One-line rendering using the storage column labels, for diagnostics
    /// only. Field order is fixed: nick, contra, nombre, email, telefono,
    /// direccion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Usuario [nick={}, contra={}, nombre={}, email={}, telefono={}, direccion={}]",
            self.nick, self.password, self.full_name, self.email, self.phone, self.address
        )
    }
}

/// The partial, login-only form of a user.
///
/// Built before the full record is loaded from storage, to compare what a
/// login attempt supplied against what the database holds. Carrying only
/// the two populated fields (instead of a `User` with unset required
/// fields) makes the partial construction path explicit in the type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Nick the login attempt is for.
    pub nick: Nick,
    /// Password supplied with the attempt.
    #[serde(rename = "contra")]
    pub password: String,
}

impl LoginCredentials {
    /// Create login credentials from a nick and password.
    #[must_use]
    pub fn new(nick: impl Into<Nick>, password: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            password: password.into(),
        }
    }

    /// Whether these credentials match the given user's nick and password.
    #[must_use]
    pub fn authenticates(&self, user: &User) -> bool {
        self.nick == user.nick && self.password == user.password
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn ana() -> User {
        User::new(
            "ana01",
            "pw123",
            "Ana Gomez",
            "ana@x.com",
            "Calle 1",
            "555-1234",
        )
    }

    fn hash_of(user: &User) -> u64 {
        let mut hasher = DefaultHasher::new();
        user.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_starts_with_no_orders() {
        assert!(ana().orders.is_empty());
    }

    #[test]
    fn test_eq_is_reflexive() {
        let user = ana();
        assert_eq!(user, user);
    }

    #[test]
    fn test_eq_requires_all_scalar_fields() {
        assert_eq!(ana(), ana());

        for mutate in [
            (|u: &mut User| u.nick = Nick::new("bob02")) as fn(&mut User),
            |u| u.password = "other".to_owned(),
            |u| u.full_name = "Bob Ruiz".to_owned(),
            |u| u.email = "bob@x.com".to_owned(),
            |u| u.address = "Calle 2".to_owned(),
            |u| u.phone = "555-0000".to_owned(),
        ] {
            let mut other = ana();
            mutate(&mut other);
            assert_ne!(ana(), other);
        }
    }

    #[test]
    fn test_eq_ignores_orders() {
        let mut with_orders = ana();
        with_orders.orders.push(OrderId::new(1));
        with_orders.orders.push(OrderId::new(2));

        assert_eq!(ana(), with_orders);
    }

    #[test]
    fn test_hash_depends_only_on_nick() {
        let mut other = ana();
        other.password = "changed".to_owned();
        other.full_name = "Someone Else".to_owned();
        other.orders.push(OrderId::new(9));

        assert_ne!(ana(), other);
        assert_eq!(hash_of(&ana()), hash_of(&other));
    }

    #[test]
    fn test_hash_differs_for_different_nicks() {
        let mut other = ana();
        other.nick = Nick::new("bob02");

        // Not guaranteed by the Hash contract, but a sanity check that the
        // nick actually feeds the hasher.
        assert_ne!(hash_of(&ana()), hash_of(&other));
    }

    #[test]
    fn test_usable_in_hash_set() {
        let mut set = HashSet::new();
        assert!(set.insert(ana()));
        assert!(!set.insert(ana()));
        assert!(set.contains(&ana()));
    }

    #[test]
    fn test_display_lists_columns_in_fixed_order() {
        let rendered = ana().to_string();
        assert_eq!(
            rendered,
            "Usuario [nick=ana01, contra=pw123, nombre=Ana Gomez, \
             email=ana@x.com, telefono=555-1234, direccion=Calle 1]"
        );

        // Label order is part of the contract: telefono before direccion.
        let labels = [
            "nick=ana01",
            "contra=pw123",
            "nombre=Ana Gomez",
            "email=ana@x.com",
            "telefono=555-1234",
            "direccion=Calle 1",
        ];
        let mut last = 0;
        for label in labels {
            let pos = rendered.find(label).unwrap();
            assert!(pos >= last, "{label} out of order in {rendered}");
            last = pos;
        }
    }

    #[test]
    fn test_field_mutation_round_trips() {
        let mut user = ana();
        user.email = "nueva@x.com".to_owned();
        assert_eq!(user.email, "nueva@x.com");

        user.orders = vec![OrderId::new(3)];
        assert_eq!(user.orders, vec![OrderId::new(3)]);
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_value(ana()).unwrap();
        assert_eq!(json["nick"], "ana01");
        assert_eq!(json["contra"], "pw123");
        assert_eq!(json["nombre"], "Ana Gomez");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["direccion"], "Calle 1");
        assert_eq!(json["telefono"], "555-1234");
        assert_eq!(json["pedidos"], serde_json::json!([]));
    }

    #[test]
    fn test_serde_orders_default_to_empty() {
        let user: User = serde_json::from_str(
            r#"{
                "nick": "ana01",
                "contra": "pw123",
                "nombre": "Ana Gomez",
                "email": "ana@x.com",
                "direccion": "Calle 1",
                "telefono": "555-1234"
            }"#,
        )
        .unwrap();

        assert_eq!(user, ana());
        assert!(user.orders.is_empty());
    }

    #[test]
    fn test_credentials_authenticate_matching_user() {
        let user = ana();
        let creds = LoginCredentials::new("ana01", "pw123");
        assert!(creds.authenticates(&user));
        assert_eq!(user.credentials(), creds);
    }

    #[test]
    fn test_credentials_reject_wrong_password() {
        let user = ana();
        assert!(!LoginCredentials::new("ana01", "wrong").authenticates(&user));
        assert!(!LoginCredentials::new("bob02", "pw123").authenticates(&user));
    }
}
