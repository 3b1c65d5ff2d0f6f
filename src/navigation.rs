//! Route parsing and page resolution.
//!
//! The navigation surface is the route pattern `/gallery/:page`. Anything
//! that does not match redirects to `/gallery/1`. The [`PageResolver`]
//! applies parse-as-integer with fallback to 1 and suppresses re-emission of
//! an unchanged value. It deliberately performs no bounds validation against
//! the total page count; that belongs to the pagination control.

/// A resolved application route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The gallery at a given page
    Gallery { page: u32 },
}

impl Route {
    /// Parse a route path.
    ///
    /// `/gallery/:page` resolves to that page; a missing or non-numeric
    /// segment, or any unmatched path, redirects to `/gallery/1`.
    pub fn parse(path: &str) -> Route {
        let mut segments = path.trim_matches('/').split('/');

        if segments.next() == Some("gallery") {
            if let Some(raw) = segments.next() {
                return Route::Gallery {
                    page: parse_page(raw),
                };
            }
        }

        Route::Gallery { page: 1 }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Gallery { page } => format!("/gallery/{}", page),
        }
    }
}

/// Parse a raw page parameter, falling back to 1.
fn parse_page(raw: &str) -> u32 {
    match raw.parse::<u32>() {
        Ok(page) if page > 0 => page,
        _ => 1,
    }
}

/// Derives the current page from raw navigation values, emitting only on
/// change (distinct-until-changed).
#[derive(Debug, Default)]
pub struct PageResolver {
    last: Option<u32>,
}

impl PageResolver {
    /// Create a resolver that has emitted nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a raw page parameter.
    ///
    /// Returns `Some(page)` when the resolved value differs from the
    /// previously emitted one, `None` when it is a repeat. Parse failures
    /// resolve to page 1. Out-of-range values are forwarded unclamped.
    pub fn resolve(&mut self, raw: &str) -> Option<u32> {
        self.emit(parse_page(raw))
    }

    /// Resolve an already-parsed page number with the same
    /// distinct-until-changed semantics.
    pub fn emit(&mut self, page: u32) -> Option<u32> {
        if self.last == Some(page) {
            return None;
        }
        self.last = Some(page);
        Some(page)
    }

    /// The most recently emitted page, if any.
    pub fn current(&self) -> Option<u32> {
        self.last
    }
}
