use crate::EdgeError;

/// Eagerly-loaded neighbours of an entity.
///
/// Edges start out [`Edge::NotLoaded`]; a query layer that loads them
/// stores the result with [`Edge::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum Edge<T> {
    NotLoaded,
    Loaded(T),
}

impl<T> Edge<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn set(&mut self, value: T) {
        *self = Self::Loaded(value);
    }

    /// Borrow the loaded value, or fail with [`EdgeError::NotLoaded`] naming
    /// the edge.
    pub fn get(&self, edge: &'static str) -> Result<&T, EdgeError> {
        match self {
            Self::Loaded(value) => Ok(value),
            Self::NotLoaded => Err(EdgeError::NotLoaded { edge }),
        }
    }
}

impl<T> Default for Edge<T> {
    fn default() -> Self {
        Self::NotLoaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_loaded_by_default() {
        let edge: Edge<Vec<i32>> = Edge::default();
        assert!(!edge.is_loaded());
        assert_eq!(edge.get("pets"), Err(EdgeError::NotLoaded { edge: "pets" }));
    }

    #[test]
    fn test_set() {
        let mut edge = Edge::default();
        edge.set(vec![1, 2]);
        assert!(edge.is_loaded());
        assert_eq!(edge.get("pets").unwrap(), &vec![1, 2]);
    }
}
