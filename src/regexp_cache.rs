// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{num::NonZeroUsize, sync::Arc};

use log::debug;
use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use thiserror::Error;

use crate::regex_util::anchor_full_match;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Number of compiled patterns kept alive by [`RegexCache::new`].
pub const DEFAULT_REGEX_CACHE_CAPACITY: usize = 100;

/// Bounded least-recently-used cache of compiled patterns keyed by their
/// source text.
///
/// Lookups promote the entry to most-recently-used. Eviction is silent, a
/// miss simply compiles the pattern again.
pub struct RegexCache {
    cache: Mutex<LruCache<String, Arc<Regex>>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REGEX_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` patterns. A zero capacity
    /// is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Returns the compiled form of `pattern`, compiling and storing it on a
    /// miss.
    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.lock().get(pattern) {
            return Ok(regex.clone());
        }
        debug!("Regex cache miss for pattern '{}'", pattern);
        // compile outside of the lock, other threads may still hit the cache
        let regex = Arc::new(Regex::new(pattern)?);
        self.cache.lock().put(pattern.to_owned(), regex.clone());
        Ok(regex)
    }

    /// Same as [`RegexCache::get_regex`] but the returned regex only matches
    /// the whole input.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        self.get_regex(&anchor_full_match(pattern))
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.cache.lock().cap().get()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.cache.lock().contains(pattern)
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}
