use crate::ast::{CompiledExpression, Compiler};
use crate::error::Result;
use log::debug;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Least-recently-used cache from formula text to its compiled form.
///
/// Only successful compiles are stored; a failing formula is recompiled (and fails
/// again) on every request.
pub struct CompileCache {
    entries: LruCache<String, Arc<CompiledExpression>>,
}

impl CompileCache {
    /// Creates a cache holding at most `max_cache_size` formulas (at least one).
    pub fn new(max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn get_or_compile(&mut self, source: &str) -> Result<Arc<CompiledExpression>> {
        if let Some(compiled) = self.entries.get(source) {
            debug!("Compile cache hit: {}", source);
            return Ok(Arc::clone(compiled));
        }

        debug!("Compile cache miss: {}", source);
        let compiled = Arc::new(Compiler::compile_expression(source)?);
        self.entries.put(source.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
