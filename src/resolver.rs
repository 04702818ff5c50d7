//! Locale resolvers
//!
//! A resolver maps an opaque, caller-defined context (a guild, a user, a
//! request) to the locale identifier used for a translation. Resolvers come in
//! two calling conventions, encoded in [`LocaleResolver`]:
//!
//! - [`LocaleResolver::Sync`] returns the locale directly
//! - [`LocaleResolver::Async`] produces it from a future, awaited by
//!   [`Translator::translate`](crate::Translator::translate)
//!
//! # Example
//!
//! ```ignore
//! use cb_i18n::LocaleResolver;
//!
//! struct Guild { locale: String }
//!
//! let sync = LocaleResolver::sync(|guild: &Guild| guild.locale.clone());
//!
//! let from_db = LocaleResolver::from_async_fn(|guild: &Guild| {
//!     let locale = guild.locale.clone();
//!     async move { locale }
//! });
//! ```

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// Asynchronous source of locale identifiers
///
/// Implement this for resolvers that need I/O, such as reading a per-guild
/// setting from a database.
#[async_trait]
pub trait AsyncLocaleResolver<C: ?Sized>: Send + Sync {
    /// Resolve the locale identifier (e.g. `"en-US"`) for `context`
    async fn resolve(&self, context: &C) -> String;
}

/// Adapter turning a closure returning a future into an [`AsyncLocaleResolver`]
struct AsyncFn<F, Fut> {
    func: F,
    _future: PhantomData<fn() -> Fut>,
}

#[async_trait]
impl<C, F, Fut> AsyncLocaleResolver<C> for AsyncFn<F, Fut>
where
    C: Sync + ?Sized,
    F: Fn(&C) -> Fut + Send + Sync,
    Fut: Future<Output = String> + Send + 'static,
{
    async fn resolve(&self, context: &C) -> String {
        (self.func)(context).await
    }
}

/// Locale resolver with its calling convention
pub enum LocaleResolver<C: ?Sized> {
    /// Called directly
    Sync(Arc<dyn Fn(&C) -> String + Send + Sync>),
    /// Awaited until the locale is available, without timeout
    Async(Arc<dyn AsyncLocaleResolver<C>>),
}

impl<C: ?Sized> LocaleResolver<C> {
    /// Create a synchronous resolver from a closure
    pub fn sync<F>(func: F) -> Self
    where
        F: Fn(&C) -> String + Send + Sync + 'static,
    {
        LocaleResolver::Sync(Arc::new(func))
    }

    /// Create an asynchronous resolver from an [`AsyncLocaleResolver`] implementation
    pub fn from_async<R>(resolver: R) -> Self
    where
        R: AsyncLocaleResolver<C> + 'static,
    {
        LocaleResolver::Async(Arc::new(resolver))
    }

    /// Create an asynchronous resolver from a closure returning a future
    ///
    /// The future must own its data, so copy what it needs out of the context
    /// before the `async move` block.
    pub fn from_async_fn<F, Fut>(func: F) -> Self
    where
        C: Sync,
        F: Fn(&C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        LocaleResolver::Async(Arc::new(AsyncFn {
            func,
            _future: PhantomData,
        }))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, LocaleResolver::Async(_))
    }

    /// Resolve the locale for `context`, awaiting asynchronous resolvers
    pub async fn resolve(&self, context: &C) -> String {
        match self {
            LocaleResolver::Sync(func) => func(context),
            LocaleResolver::Async(resolver) => resolver.resolve(context).await,
        }
    }
}

impl<C: ?Sized> Clone for LocaleResolver<C> {
    fn clone(&self) -> Self {
        match self {
            LocaleResolver::Sync(func) => LocaleResolver::Sync(Arc::clone(func)),
            LocaleResolver::Async(resolver) => LocaleResolver::Async(Arc::clone(resolver)),
        }
    }
}

impl<C: ?Sized> fmt::Debug for LocaleResolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleResolver::Sync(_) => f.write_str("LocaleResolver::Sync(..)"),
            LocaleResolver::Async(_) => f.write_str("LocaleResolver::Async(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    struct Guild {
        id: u64,
    }

    /// Resolver backed by a map of guild settings, with a simulated lookup delay
    struct GuildSettings {
        locales: HashMap<u64, String>,
    }

    #[async_trait]
    impl AsyncLocaleResolver<Guild> for GuildSettings {
        async fn resolve(&self, guild: &Guild) -> String {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.locales
                .get(&guild.id)
                .cloned()
                .unwrap_or_else(|| "en-US".to_string())
        }
    }

    #[tokio::test]
    async fn test_sync_resolver() {
        let resolver = LocaleResolver::sync(|guild: &Guild| {
            (if guild.id == 1 { "ru-RU" } else { "en-US" }).to_string()
        });
        assert!(!resolver.is_async());
        assert_eq!(resolver.resolve(&Guild { id: 1 }).await, "ru-RU");
        assert_eq!(resolver.resolve(&Guild { id: 2 }).await, "en-US");
    }

    #[tokio::test]
    async fn test_async_trait_resolver() {
        let mut locales = HashMap::new();
        locales.insert(7, "de-DE".to_string());
        let resolver = LocaleResolver::from_async(GuildSettings { locales });

        assert!(resolver.is_async());
        assert_eq!(resolver.resolve(&Guild { id: 7 }).await, "de-DE");
        assert_eq!(resolver.resolve(&Guild { id: 8 }).await, "en-US");
    }

    #[tokio::test]
    async fn test_async_fn_resolver() {
        let resolver = LocaleResolver::from_async_fn(|guild: &Guild| {
            let id = guild.id;
            async move {
                tokio::task::yield_now().await;
                (if id % 2 == 0 { "fr-FR" } else { "es-ES" }).to_string()
            }
        });

        assert_eq!(resolver.resolve(&Guild { id: 2 }).await, "fr-FR");
        assert_eq!(resolver.clone().resolve(&Guild { id: 3 }).await, "es-ES");
        assert_eq!(format!("{:?}", resolver), "LocaleResolver::Async(..)");
    }
}
