//! User management commands.

use carrito_core::{Nick, User};
use carrito_store::{ConfigError, RepositoryError, StoreConfig, UserRepository, create_pool};

/// Errors that can occur while managing users.
#[derive(Debug, thiserror::Error)]
pub enum UserCommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("no user with nick '{0}'")]
    NoSuchUser(Nick),
}

/// Create a fully-populated user.
///
/// # Errors
///
/// Returns `UserCommandError::Repository` with a conflict if the nick is
/// already taken.
pub async fn create(
    nick: &str,
    password: &str,
    name: &str,
    email: &str,
    address: &str,
    phone: &str,
) -> Result<(), UserCommandError> {
    let config = StoreConfig::from_env()?;
    let pool = create_pool(&config).await?;

    let user = User::new(nick, password, name, email, address, phone);
    UserRepository::new(&pool).create(&user).await?;

    tracing::info!("Created user {}", user.nick);
    Ok(())
}

/// Print a user and its order ids.
///
/// # Errors
///
/// Returns `UserCommandError::NoSuchUser` if the nick doesn't exist.
pub async fn show(nick: &str) -> Result<(), UserCommandError> {
    let config = StoreConfig::from_env()?;
    let pool = create_pool(&config).await?;

    let nick = Nick::new(nick);
    let user = UserRepository::new(&pool)
        .get(&nick)
        .await?
        .ok_or(UserCommandError::NoSuchUser(nick))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{user}");
        if user.orders.is_empty() {
            println!("  (no orders)");
        } else {
            for order in &user.orders {
                println!("  pedido {order}");
            }
        }
    }

    Ok(())
}
