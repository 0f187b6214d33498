//! Compiled pattern cache.
//!
//! Compiling is cheap, but formatters are often requested repeatedly for the
//! same handful of locale patterns. [`PatternCache`] keeps one shared
//! [`PatternSpec`] per distinct `(pattern, separators)` pair. Entries are
//! never evicted or replaced, so a handed-out spec never changes.
//!
//! ## Examples
//!
//! ```rust
//! use ldml_number::{PatternCache, Separators};
//!
//! let cache = PatternCache::new();
//! let formatter = cache.formatter("#,##0.00", Separators::default()).unwrap();
//! assert_eq!(formatter.format(1234.5), "1,234.50");
//!
//! let parser = cache.parser("#,##0.00", Separators::default()).unwrap();
//! assert_eq!(parser.parse("1,234.50"), Some(1234.5));
//! assert_eq!(cache.len(), 1);
//! ```

use crate::{compile_pattern, NumberFormatter, NumberParser, PatternSpec, Result, Separators};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

type CacheKey = (String, Separators);

/// Append-only map from `(pattern, separators)` to compiled specs.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<IndexMap<CacheKey, Arc<PatternSpec>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached spec, compiling and inserting it on first use.
    ///
    /// # Errors
    ///
    /// Returns the compile error for malformed patterns; failures are not cached.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        separators: Separators,
    ) -> Result<Arc<PatternSpec>> {
        let key = (pattern.to_string(), separators);
        if let Some(spec) = self.entries.read().get(&key) {
            return Ok(Arc::clone(spec));
        }

        let compiled = Arc::new(compile_pattern(pattern)?);
        let mut entries = self.entries.write();
        let spec = Arc::clone(entries.entry(key).or_insert(compiled));
        tracing::trace!(pattern, cached = entries.len(), "pattern cache miss");
        Ok(spec)
    }

    pub fn formatter(&self, pattern: &str, separators: Separators) -> Result<NumberFormatter> {
        let spec = self.get_or_compile(pattern, separators)?;
        Ok(NumberFormatter::from_shared(spec, separators))
    }

    pub fn parser(&self, pattern: &str, separators: Separators) -> Result<NumberParser> {
        let spec = self.get_or_compile(pattern, separators)?;
        Ok(NumberParser::from_shared(spec, separators))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cached patterns in insertion order.
    pub fn patterns(&self) -> Vec<String> {
        self.entries
            .read()
            .keys()
            .map(|(pattern, _)| pattern.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shares_compiled_spec() {
        let cache = PatternCache::new();
        let first = cache.get_or_compile("#,##0", Separators::default()).unwrap();
        let second = cache.get_or_compile("#,##0", Separators::default()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_separators_are_part_of_the_key() {
        let cache = PatternCache::new();
        let russian = Separators::new().with_thousands(' ').with_decimal(',');
        cache.get_or_compile("#,##0.00", Separators::default()).unwrap();
        cache.get_or_compile("#,##0.00", russian).unwrap();
        cache.get_or_compile("#0%", russian).unwrap();
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.patterns(), vec!["#,##0.00", "#,##0.00", "#0%"]);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = PatternCache::new();
        assert!(cache.get_or_compile("'open", Separators::default()).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(PatternCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let formatter = cache
                        .formatter("#,##0.##", Separators::default())
                        .unwrap();
                    formatter.format(f64::from(i) * 1000.5)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected =
                NumberFormatter::new(compile_pattern("#,##0.##").unwrap(), Separators::default())
                    .format(i as f64 * 1000.5);
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(cache.len(), 1);
    }
}
