use serde::Deserialize;
use serde::Serialize;

/// Player-affiliation tag of a node: `A`, `B`, `C`, ...
///
/// Wraps the label index so it can address per-label tables directly.
/// Serializes as its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Label(u8);

impl Label {
    /// Largest number of distinct labels (`A` through `Z`).
    pub const LIMIT: usize = 26;
    pub fn new(index: usize) -> Self {
        assert!(index < Self::LIMIT, "label index {} out of range", index);
        Self(index as u8)
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn letter(&self) -> char {
        char::from(b'A' + self.0)
    }
    /// Labels for `n` seats in index order.
    pub fn all(n: usize) -> impl Iterator<Item = Self> {
        (0..n.min(Self::LIMIT)).map(|i| Self(i as u8))
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.letter()
    }
}

impl TryFrom<char> for Label {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A'..='Z' => Ok(Self(c as u8 - b'A')),
            c => Err(format!("invalid label {}", c)),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_index() {
        let labels = Label::all(3).map(|l| l.letter()).collect::<String>();
        assert_eq!(labels, "ABC");
        assert_eq!(Label::new(2).index(), 2);
    }

    #[test]
    fn parses_uppercase_only() {
        assert_eq!(Label::try_from('B'), Ok(Label::new(1)));
        assert!(Label::try_from('b').is_err());
        assert!(Label::try_from('?').is_err());
    }
}
