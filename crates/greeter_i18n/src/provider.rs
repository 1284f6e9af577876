//! The host locale capability.
//!
//! Widgets never touch process-wide locale state directly; they receive an
//! `Arc<dyn LocaleProvider>` at construction. The app wires in [`HostLocale`],
//! tests wire in [`MemoryLocaleProvider`].

use std::sync::{Arc, OnceLock, RwLock};

use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Read/write access to the locale the host process is currently using.
pub trait LocaleProvider: Send + Sync {
    /// The currently active locale.
    fn get(&self) -> LanguageIdentifier;

    /// Apply `locale` to the host. Takes effect for every later `get`.
    fn set(&self, locale: LanguageIdentifier);
}

pub type SharedLocaleProvider = Arc<dyn LocaleProvider>;

/// Global host locale singleton.
static HOST_LOCALE: OnceLock<HostLocale> = OnceLock::new();

/// Process-wide locale configuration.
///
/// Lives until the process exits; a restart resets it to whatever the host
/// reports at startup.
pub struct HostLocale {
    locale: RwLock<LanguageIdentifier>,
}

impl HostLocale {
    /// Initialize the global host locale.
    ///
    /// Safe to call multiple times; the first call wins.
    pub fn init(locale: LanguageIdentifier) -> &'static HostLocale {
        HOST_LOCALE.get_or_init(|| {
            debug!(%locale, "HostLocale::init");
            HostLocale {
                locale: RwLock::new(locale),
            }
        })
    }

    pub fn global() -> &'static HostLocale {
        HOST_LOCALE
            .get()
            .expect("HostLocale not initialized. Call HostLocale::init() at app startup.")
    }

    pub fn try_global() -> Option<&'static HostLocale> {
        HOST_LOCALE.get()
    }

    /// A shareable handle to the global host locale.
    pub fn shared(&'static self) -> SharedLocaleProvider {
        Arc::new(HostLocaleHandle(self))
    }
}

impl LocaleProvider for HostLocale {
    fn get(&self) -> LanguageIdentifier {
        self.locale.read().unwrap().clone()
    }

    fn set(&self, locale: LanguageIdentifier) {
        let mut cur = self.locale.write().unwrap();
        debug!("HostLocale::set: {} -> {}", *cur, locale);
        *cur = locale;
    }
}

struct HostLocaleHandle(&'static HostLocale);

impl LocaleProvider for HostLocaleHandle {
    fn get(&self) -> LanguageIdentifier {
        self.0.get()
    }

    fn set(&self, locale: LanguageIdentifier) {
        self.0.set(locale)
    }
}

/// In-memory provider that records every `set` call.
#[derive(Default)]
pub struct MemoryLocaleProvider {
    locale: RwLock<LanguageIdentifier>,
    applied: RwLock<Vec<LanguageIdentifier>>,
}

impl MemoryLocaleProvider {
    pub fn new(locale: LanguageIdentifier) -> Self {
        Self {
            locale: RwLock::new(locale),
            applied: RwLock::new(Vec::new()),
        }
    }

    /// Every locale passed to `set`, oldest first.
    pub fn applied(&self) -> Vec<LanguageIdentifier> {
        self.applied.read().unwrap().clone()
    }
}

impl LocaleProvider for MemoryLocaleProvider {
    fn get(&self) -> LanguageIdentifier {
        self.locale.read().unwrap().clone()
    }

    fn set(&self, locale: LanguageIdentifier) {
        self.applied.write().unwrap().push(locale.clone());
        *self.locale.write().unwrap() = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn memory_provider_records_sets() {
        let provider = MemoryLocaleProvider::new(parse_locale("ko").unwrap());
        assert_eq!(provider.get().to_string(), "ko");
        assert!(provider.applied().is_empty());

        provider.set(parse_locale("zh-CN").unwrap());
        assert_eq!(provider.get().to_string(), "zh-CN");
        assert_eq!(provider.applied(), vec![parse_locale("zh-CN").unwrap()]);
    }

    #[test]
    fn host_locale_is_process_wide() {
        let host = HostLocale::init(parse_locale("en-US").unwrap());
        let a = host.shared();
        let b = HostLocale::global().shared();

        a.set(parse_locale("ko-KR").unwrap());
        assert_eq!(b.get().to_string(), "ko-KR");
        assert_eq!(HostLocale::global().get().to_string(), "ko-KR");
    }
}
