//! Display adapters for numeric sequences.

use std::fmt::{Display, Formatter};

/// Renders a slice as `[a, b, c]`. A precision given in the format spec (e.g., `{:.3}`) is
/// applied to every item.
pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}
impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                None => write!(f, "{item}")?,
                Some(precision) => write!(f, "{item:.precision$}")?,
            }
        }
        write!(f, "]")
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}
