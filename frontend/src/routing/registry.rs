//! Ordered path table mapping URL patterns to on-demand page loaders.
//!
//! Entries are tried top to bottom and the first match wins. Matching is by
//! whole path segments, so `/a` never matches `/a/b`. The table always ends in
//! exactly one catch-all entry; the builder refuses to produce anything else,
//! which keeps a misordered catch-all from silently shadowing later routes.

use std::collections::HashSet;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error while loading {what}: {reason}")]
    Network { what: String, reason: String },
    #[error("loading {what} failed with status {status}")]
    Status { what: String, status: u16 },
    #[error("could not decode {what}: {reason}")]
    Decode { what: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route pattern {0:?} must start with '/'")]
    InvalidPattern(String),
    #[error("route pattern {0:?} is declared twice")]
    DuplicatePattern(String),
    #[error("route {0:?} is declared after the catch-all and can never match")]
    CatchAllNotLast(String),
    #[error("the route table has no catch-all entry")]
    MissingCatchAll,
}

pub type LoadFuture<M> = LocalBoxFuture<'static, Result<M, LoadError>>;
pub type Loader<M> = Rc<dyn Fn() -> LoadFuture<M>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Exact(Vec<String>),
    CatchAll,
}

/// Splits a request path into its non-empty segments, ignoring any query
/// string or fragment.
pub fn segments(path: &str) -> Vec<&str> {
    let end = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

impl Pattern {
    pub fn parse(pattern: &str) -> Result<Self, RegistryError> {
        if pattern == "*" {
            return Ok(Pattern::CatchAll);
        }
        if !pattern.starts_with('/') || pattern.contains(|c| c == '?' || c == '#') {
            return Err(RegistryError::InvalidPattern(pattern.to_string()));
        }
        Ok(Pattern::Exact(
            segments(pattern).into_iter().map(str::to_string).collect(),
        ))
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::CatchAll => true,
            Pattern::Exact(expected) => {
                let actual = segments(path);
                actual.len() == expected.len()
                    && actual.iter().zip(expected).all(|(a, e)| *a == e.as_str())
            }
        }
    }

    fn display(&self) -> String {
        match self {
            Pattern::CatchAll => "*".to_string(),
            Pattern::Exact(segments) => format!("/{}", segments.join("/")),
        }
    }
}

pub struct RouteEntry<M> {
    pub name: &'static str,
    pub pattern: Pattern,
    loader: Loader<M>,
}

impl<M> RouteEntry<M> {
    pub fn load(&self) -> LoadFuture<M> {
        (self.loader)()
    }
}

pub struct Resolved<'a, M> {
    pub index: usize,
    pub entry: &'a RouteEntry<M>,
}

impl<'a, M> Resolved<'a, M> {
    pub fn is_catch_all(&self) -> bool {
        self.entry.pattern == Pattern::CatchAll
    }
}

pub struct RouteRegistry<M> {
    entries: Vec<RouteEntry<M>>,
}

impl<M> RouteRegistry<M> {
    pub fn builder() -> RegistryBuilder<M> {
        RegistryBuilder {
            entries: Vec::new(),
            error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn resolve(&self, path: &str) -> Resolved<'_, M> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.pattern.matches(path))
            // build() guarantees the last entry is the catch-all
            .unwrap_or(self.entries.len() - 1);
        Resolved {
            index,
            entry: &self.entries[index],
        }
    }
}

pub struct RegistryBuilder<M> {
    entries: Vec<RouteEntry<M>>,
    error: Option<RegistryError>,
}

impl<M> RegistryBuilder<M> {
    pub fn route<F>(self, name: &'static str, pattern: &str, loader: F) -> Self
    where
        F: Fn() -> LoadFuture<M> + 'static,
    {
        match Pattern::parse(pattern) {
            Ok(pattern) => self.push(name, pattern, Rc::new(loader)),
            Err(err) => self.fail(err),
        }
    }

    pub fn catch_all<F>(self, name: &'static str, loader: F) -> Self
    where
        F: Fn() -> LoadFuture<M> + 'static,
    {
        self.push(name, Pattern::CatchAll, Rc::new(loader))
    }

    fn push(mut self, name: &'static str, pattern: Pattern, loader: Loader<M>) -> Self {
        self.entries.push(RouteEntry {
            name,
            pattern,
            loader,
        });
        self
    }

    fn fail(mut self, err: RegistryError) -> Self {
        self.error.get_or_insert(err);
        self
    }

    pub fn build(self) -> Result<RouteRegistry<M>, RegistryError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let mut seen = HashSet::new();
        let mut catch_all_at = None;
        for (i, entry) in self.entries.iter().enumerate() {
            if catch_all_at.is_some() {
                return Err(RegistryError::CatchAllNotLast(entry.pattern.display()));
            }
            match &entry.pattern {
                Pattern::CatchAll => catch_all_at = Some(i),
                Pattern::Exact(_) => {
                    if !seen.insert(entry.pattern.clone()) {
                        return Err(RegistryError::DuplicatePattern(entry.pattern.display()));
                    }
                }
            }
        }
        if catch_all_at.is_none() {
            return Err(RegistryError::MissingCatchAll);
        }

        Ok(RouteRegistry {
            entries: self.entries,
        })
    }
}
