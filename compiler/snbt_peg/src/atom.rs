//! Identity-keyed rule and binding names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ATOM_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identity of an [`Atom`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct AtomId(u32);

impl AtomId {
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// A typed name labelling a grammar production or a scope binding.
///
/// Atoms compare by identity: two atoms created with the same name are
/// different atoms. The type parameter records what is bound under the
/// atom, so [`Scope::get`](crate::Scope::get) needs no annotation.
pub struct Atom<T> {
    id: AtomId,
    name: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> Atom<T> {
    pub fn new(name: &'static str) -> Self {
        Atom {
            id: AtomId(NEXT_ATOM_ID.fetch_add(1, Ordering::Relaxed)),
            name,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn id(&self) -> AtomId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Atom<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Atom<T> {}

impl<T> PartialEq for Atom<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Atom<T> {}

impl<T> Hash for Atom<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}#{}>", self.name, self.id.0)
    }
}

impl<T> fmt::Display for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name)
    }
}
