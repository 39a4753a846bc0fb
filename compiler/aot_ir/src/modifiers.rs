//! Declaration modifiers.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifiers attached to a type, field, or method declaration.
    ///
    /// Bit order matches the conventional source order, so `Display`
    /// prints them the way they are usually written.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const ABSTRACT = 1 << 3;
        const STATIC = 1 << 4;
        const FINAL = 1 << 5;
    }
}

impl Modifiers {
    /// Keyword for each flag, in source order.
    const KEYWORDS: [(Modifiers, &'static str); 6] = [
        (Modifiers::PUBLIC, "public"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::ABSTRACT, "abstract"),
        (Modifiers::STATIC, "static"),
        (Modifiers::FINAL, "final"),
    ];
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, keyword) in Self::KEYWORDS {
            if self.contains(flag) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(keyword)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_in_source_order() {
        let mods = Modifiers::STATIC | Modifiers::PUBLIC | Modifiers::FINAL;
        assert_eq!(mods.to_string(), "public static final");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Modifiers::empty().to_string(), "");
    }
}
