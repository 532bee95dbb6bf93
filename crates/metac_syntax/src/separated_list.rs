//! Separated lists: elements interleaved with separator tokens.

use crate::token::Token;

/// An ordered list of elements separated by tokens (commas, usually).
///
/// The source order is `element, separator, element, ...`; consumers only see
/// the elements, by index or by iteration. There is always either one fewer
/// separator than elements, or (after a trailing separator) the same number.
#[derive(Debug)]
pub struct SeparatedList<'a, T> {
    elements: &'a [T],
    separators: &'a [Token<'a>],
}

impl<T> Clone for SeparatedList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SeparatedList<'_, T> {}

impl<'a, T> SeparatedList<'a, T> {
    pub fn new(elements: &'a [T], separators: &'a [Token<'a>]) -> Self {
        debug_assert!(separators.len() <= elements.len());
        Self { elements, separators }
    }

    pub fn empty() -> Self {
        Self {
            elements: &[],
            separators: &[],
        }
    }

    /// Number of elements, separators excluded.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &'a [T] {
        self.elements
    }

    pub fn separators(&self) -> &'a [Token<'a>] {
        self.separators
    }

    /// The separator following element `index`, if any.
    pub fn separator(&self, index: usize) -> Option<&'a Token<'a>> {
        self.separators.get(index)
    }
}

impl<'a, T> IntoIterator for &SeparatedList<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind;
    use metac_core::TextSpan;

    #[test]
    fn test_separated_list_exposes_elements_only() {
        let elements = [1, 2, 3];
        let separators = [
            Token::new(SyntaxKind::CommaToken, TextSpan::new(1, 1), ","),
            Token::new(SyntaxKind::CommaToken, TextSpan::new(3, 1), ","),
        ];
        let list = SeparatedList::new(&elements, &separators);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Some(&2));
        assert_eq!(list.get(3), None);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.separator(0).map(|t| t.span.start), Some(1));
        assert!(list.separator(2).is_none());
    }

    #[test]
    fn test_empty_separated_list() {
        let list: SeparatedList<'_, u8> = SeparatedList::empty();
        assert!(list.is_empty());
        assert_eq!(list.separators().len(), 0);
    }
}
