//! Numbers for clue-only letters
//!
//! Letters that appear in clue answers but never in the phrase still need a
//! number so their glyphs can be rendered. They draw from the same counter as
//! the canonical numbering, continuing above it.

use super::mapping::{CanonicalMapping, ExtraMapping, fold_letter};

/// Shared counter plus the extra mapping it has filled so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberAllocator {
    base: u32,
    next: u32,
    extra: ExtraMapping,
}

impl Default for NumberAllocator {
    fn default() -> Self {
        Self {
            base: 1,
            next: 1,
            extra: ExtraMapping::new(),
        }
    }
}

impl NumberAllocator {
    /// Allocator continuing the numbering of `canonical`
    #[must_use]
    pub fn after(canonical: &CanonicalMapping) -> Self {
        let base = canonical.next_number();
        Self {
            base,
            next: base,
            extra: ExtraMapping::new(),
        }
    }

    /// Number for a letter absent from the canonical mapping
    ///
    /// Repeated calls for the same letter return the number handed out the first
    /// time; the counter only moves for letters it has not seen.
    ///
    /// # Examples
    /// ```
    /// use figgerits::core::{NumberAllocator, assign};
    ///
    /// let canonical = assign("CAT");
    /// let mut allocator = NumberAllocator::after(&canonical);
    /// assert_eq!(allocator.allocate('x'), 4);
    /// assert_eq!(allocator.allocate('y'), 5);
    /// assert_eq!(allocator.allocate('X'), 4);
    /// ```
    pub fn allocate(&mut self, letter: char) -> u32 {
        if let Some(existing) = self.extra.get(letter) {
            return existing;
        }

        let number = self.next;
        self.next += 1;
        log::debug!("allocated extra number {number} for '{}'", fold_letter(letter));
        self.extra.insert(letter, number)
    }

    /// Drop every extra entry and rewind the counter to its post-assignment value
    pub fn reset(&mut self) {
        self.extra.clear();
        self.next = self.base;
    }

    #[inline]
    #[must_use]
    pub const fn extra(&self) -> &ExtraMapping {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assign;

    #[test]
    fn allocates_above_canonical() {
        let canonical = assign("CAT");
        let mut allocator = NumberAllocator::after(&canonical);

        assert_eq!(allocator.allocate('x'), 4);
        assert_eq!(allocator.allocate('y'), 5);
        assert_eq!(allocator.extra().len(), 2);
        assert_eq!(allocator.extra().get('x'), Some(4));
        assert_eq!(allocator.extra().get('y'), Some(5));
    }

    #[test]
    fn allocation_is_idempotent() {
        let mut allocator = NumberAllocator::after(&assign("CAT"));

        let first = allocator.allocate('x');
        let again = allocator.allocate('x');
        let upper = allocator.allocate('X');

        assert_eq!(first, 4);
        assert_eq!(again, 4);
        assert_eq!(upper, 4);
        assert_eq!(allocator.allocate('z'), 5);
    }

    #[test]
    fn extra_values_disjoint_from_canonical() {
        let canonical = assign("HELLO WORLD");
        let mut allocator = NumberAllocator::after(&canonical);
        for letter in ['z', 'q', 'j'] {
            allocator.allocate(letter);
        }

        for (_, number) in allocator.extra().iter() {
            assert!(!canonical.contains_number(number));
        }
    }

    #[test]
    fn reset_rewinds_to_base() {
        let mut allocator = NumberAllocator::after(&assign("CAT"));
        allocator.allocate('x');
        allocator.allocate('y');

        allocator.reset();

        assert!(allocator.extra().is_empty());
        assert_eq!(allocator.allocate('q'), 4);
    }

    #[test]
    fn empty_canonical_starts_at_one() {
        let mut allocator = NumberAllocator::default();
        assert_eq!(allocator.allocate('a'), 1);
    }
}
