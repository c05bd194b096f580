use core::mem;
use core::ptr::NonNull;

/// A non-owning link to a node.
///
/// Ownership of every node lives in exactly one forward `Box` link (or the
/// list head); a `RawLink` is only a shortcut back into that chain. It is
/// never dropped through, and it must only be resolved while the owning
/// chain is alive and the aliasing rules for the produced reference hold.
pub(super) struct RawLink<N> {
    ptr: Option<NonNull<N>>,
}

impl<N> RawLink<N> {
    /// A link that points at nothing.
    pub(super) const fn none() -> Self {
        RawLink { ptr: None }
    }

    /// A link to `node`.
    pub(super) fn some(node: &mut N) -> Self {
        RawLink {
            ptr: Some(NonNull::from(node)),
        }
    }

    pub(super) fn is_none(&self) -> bool {
        self.ptr.is_none()
    }

    /// The pointer behind the link, if any.
    pub(super) fn get(&self) -> Option<NonNull<N>> {
        self.ptr
    }

    /// Clears the link, returning its previous state.
    pub(super) fn take(&mut self) -> Self {
        mem::replace(self, RawLink::none())
    }

    /// Resolves the link to an exclusive reference.
    ///
    /// # Safety
    ///
    /// The pointee must still be owned by the chain being mutated, and no
    /// other reference to it may be live for as long as the result is used.
    pub(super) unsafe fn as_mut<'a>(&mut self) -> Option<&'a mut N> {
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }
}
