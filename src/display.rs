//! Console rendering of a sequence.

use crate::core::{DisplayElement, Label};
use std::io::{self, Write};

/// Writes `label`, a blank line, then `elements` in their current order.
///
/// Every element is followed by the element type's separator, and the
/// line is closed with its terminator. Nothing is reordered or consumed.
///
/// # Examples
///
/// ```
/// use seqsort::core::Label;
/// use seqsort::display::display_elements;
///
/// let mut out = Vec::new();
/// display_elements(&mut out, &[3, 1, 2], Label::new("main", "array before sort")).unwrap();
///
/// assert_eq!(out, b"main(): array before sort\n\n3 1 2 \n");
/// ```
pub fn display_elements<W, T>(out: &mut W, elements: &[T], label: Label) -> io::Result<()>
where
    W: Write + ?Sized,
    T: DisplayElement,
{
    write!(out, "{label}\n\n")?;
    for element in elements {
        write!(out, "{element}{}", T::SEPARATOR)?;
    }
    out.write_all(T::TERMINATOR.as_bytes())
}
