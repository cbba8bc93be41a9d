//! Ball colors.

use std::fmt::{self, Display};

/// A ball color, identified by its index into the fixed palette.
///
/// Difficulty tiers draw their colors from the front of the palette, so a
/// board with `n` colors uses exactly [`Color::ALL`]`[..n]`. The numeric index
/// carries no meaning beyond "position in the palette".
///
/// Colors display as a single upper-case letter (`A` for the first palette
/// entry, `B` for the second, ...), which is also the form accepted by
/// [`Color::from_letter`] and by [`Board::parse`](crate::Board::parse).
///
/// # Examples
///
/// ```
/// use laballatory_core::Color;
///
/// let color = Color::from_index(1);
/// assert_eq!(color.index(), 1);
/// assert_eq!(color.name(), "red");
/// assert_eq!(color.to_string(), "B");
/// assert_eq!(Color::from_letter('B'), Some(color));
/// ```
// The default is the first palette entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// Number of distinct colors in the palette.
    pub const PALETTE_LEN: usize = 12;

    /// Every palette color, in palette order.
    pub const ALL: [Self; Self::PALETTE_LEN] = {
        let mut all = [Self(0); Self::PALETTE_LEN];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::PALETTE_LEN {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    const NAMES: [&'static str; Self::PALETTE_LEN] = [
        "blue",
        "red",
        "yellow",
        "lime",
        "purple",
        "orange",
        "pink",
        "brown",
        "lightblue",
        "gray",
        "cyan",
        "darkgreen",
    ];

    /// Creates a color from its palette index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than [`Color::PALETTE_LEN`].
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!((index as usize) < Self::PALETTE_LEN, "color index out of palette");
        Self(index)
    }

    /// Creates a color from its palette index, or `None` if it is out of range.
    #[must_use]
    pub const fn try_from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::PALETTE_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Parses the letter form (`A`..`L`, case-insensitive).
    #[must_use]
    pub fn from_letter(ch: char) -> Option<Self> {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let offset = u8::try_from(ch.to_ascii_uppercase()).ok()? - b'A';
        Self::try_from_index(offset)
    }

    /// Returns the palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the letter form of this color.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Returns the palette name, suitable for a front end's color lookup.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_cover_palette() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
            assert_eq!(
                Color::from_letter(color.letter().to_ascii_lowercase()),
                Some(color)
            );
        }
        assert_eq!(Color::ALL[0].to_string(), "A");
        assert_eq!(Color::ALL[11].to_string(), "L");
        assert_eq!(Color::from_letter('M'), None);
        assert_eq!(Color::from_letter('.'), None);
        assert_eq!(Color::from_letter('é'), None);
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names = Color::ALL.map(Color::name).to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Color::PALETTE_LEN);
    }

    #[test]
    fn test_try_from_index_bounds() {
        assert_eq!(Color::try_from_index(11), Some(Color::from_index(11)));
        assert_eq!(Color::try_from_index(12), None);
    }

    #[test]
    #[should_panic(expected = "color index out of palette")]
    fn test_from_index_out_of_range_panics() {
        let _ = Color::from_index(12);
    }
}
