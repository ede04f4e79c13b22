//! The edge value predicate.

use std::rc::Rc;

/// Edge value predicate type.
///
/// Decides whether a candidate edge value may enter a graph. A graph
/// stores the predicate it was constructed with for its whole lifetime,
/// and every graph derived from it (reverse, subgraphs, union results,
/// clones) shares the same predicate.
pub struct ValuePredicate<V> {
    f: Rc<dyn Fn(&V) -> bool>,
}

impl<V> ValuePredicate<V> {
    pub fn new(f: Box<dyn Fn(&V) -> bool>) -> Self {
        Self { f: f.into() }
    }

    pub fn f(&self) -> &dyn Fn(&V) -> bool {
        self.f.as_ref()
    }
}

impl<V> Clone for ValuePredicate<V> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<V> std::fmt::Debug for ValuePredicate<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValuePredicate({:p})", self.f)
    }
}

impl<V> PartialEq for ValuePredicate<V> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<V> Eq for ValuePredicate<V> {}
