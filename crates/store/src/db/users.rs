//! User repository for database operations.
//!
//! This module maps [`User`] to and from the `usuario` table. Loading a
//! user always also loads the ids of its orders from the `usuario_pedidos`
//! association table, so a returned [`User`] is complete without further
//! queries.

use sqlx::{FromRow, PgPool};

use carrito_core::{LoginCredentials, Nick, OrderId, User};

use super::RepositoryError;

/// A row of the `usuario` table, before the order ids are attached.
#[derive(Debug, FromRow)]
struct UserRow {
    nick: String,
    contra: String,
    nombre: String,
    email: String,
    direccion: String,
    telefono: String,
}

impl UserRow {
    fn into_user(self, orders: Vec<OrderId>) -> User {
        User {
            nick: Nick::new(self.nick),
            password: self.contra,
            full_name: self.nombre,
            email: self.email,
            address: self.direccion,
            phone: self.telefono,
            orders,
        }
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by nick, with order ids eagerly loaded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, nick: &Nick) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT nick, contra, nombre, email, direccion, telefono
            FROM usuario
            WHERE nick = $1
            ",
        )
        .bind(nick)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let orders = self.order_ids(nick).await?;
                Ok(Some(r.into_user(orders)))
            }
            None => Ok(None),
        }
    }

    /// Get all users ordered by nick, each with order ids eagerly loaded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT nick, contra, nombre, email, direccion, telefono
            FROM usuario
            ORDER BY nick ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let nick = Nick::new(row.nick.clone());
            let orders = self.order_ids(&nick).await?;
            users.push(row.into_user(orders));
        }

        Ok(users)
    }

    /// Get only the login-relevant columns for a nick.
    ///
    /// This is the partial load used to check a login attempt before the
    /// full record (profile and orders) is fetched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_login(
        &self,
        nick: &Nick,
    ) -> Result<Option<LoginCredentials>, RepositoryError> {
        let row: Option<(Nick, String)> = sqlx::query_as(
            r"
            SELECT nick, contra
            FROM usuario
            WHERE nick = $1
            ",
        )
        .bind(nick)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(nick, password)| LoginCredentials { nick, password }))
    }

    /// Insert a new user.
    ///
    /// Only the scalar columns are written; a freshly constructed user has
    /// no orders yet and orders are attached via [`Self::add_order`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the nick already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO usuario (nick, contra, nombre, email, direccion, telefono)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&user.nick)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.address)
        .bind(&user.phone)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("nick already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Update the non-key columns of an existing user.
    ///
    /// The order association is not touched; use [`Self::add_order`] and
    /// [`Self::remove_order`] for that.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the nick doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE usuario
            SET contra = $2, nombre = $3, email = $4, direccion = $5, telefono = $6
            WHERE nick = $1
            ",
        )
        .bind(&user.nick)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.address)
        .bind(&user.phone)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a user by nick. Association rows are removed by cascade.
    ///
    /// # Returns
    ///
    /// Returns `true` if the user was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, nick: &Nick) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM usuario
            WHERE nick = $1
            ",
        )
        .bind(nick)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Attach an order to a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user or order doesn't exist.
    /// Returns `RepositoryError::Conflict` if the order is already attached.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add_order(&self, nick: &Nick, order: OrderId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO usuario_pedidos (usuario_nick, pedidos_id)
            VALUES ($1, $2)
            ",
        )
        .bind(nick)
        .bind(order)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return RepositoryError::Conflict("order already attached".to_owned());
                }
                if db_err.is_foreign_key_violation() {
                    return RepositoryError::NotFound;
                }
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Detach an order from a user.
    ///
    /// # Returns
    ///
    /// Returns `true` if the association was removed, `false` if it didn't
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove_order(&self, nick: &Nick, order: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM usuario_pedidos
            WHERE usuario_nick = $1 AND pedidos_id = $2
            ",
        )
        .bind(nick)
        .bind(order)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Load a user's order ids in insertion order.
    async fn order_ids(&self, nick: &Nick) -> Result<Vec<OrderId>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, OrderId>(
            r"
            SELECT pedidos_id
            FROM usuario_pedidos
            WHERE usuario_nick = $1
            ORDER BY id ASC
            ",
        )
        .bind(nick)
        .fetch_all(self.pool)
        .await?;

        Ok(ids)
    }
}
