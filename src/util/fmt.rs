use std::fmt::{self, Debug, Display, Formatter};

/// Prints the wrapped string as-is when debug formatted, rather than quoting it.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Displays every item of a (cloneable) iterator, separated by `sep`. The iterator is cloned on
/// each format, so the same value can be displayed more than once.
pub struct Joined<'s, I> {
    items: I,
    sep: &'s str,
}

impl<'s, I> Joined<'s, I> {
    pub const fn new(items: I, sep: &'s str) -> Joined<'s, I> {
        Joined { items, sep }
    }
}

impl<I> Display for Joined<'_, I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.items.clone().enumerate() {
            if index > 0 {
                f.write_str(self.sep)?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
