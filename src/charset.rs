//! Character classes, alphabets and composition analysis.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easily confused with each other.
pub const AMBIGUOUS: &str = "0O1lI";

/// One of the four alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Pool concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Alphabet size credited by the strength estimator.
    ///
    /// Symbols are weighted as 20 regardless of the actual punctuation set.
    pub fn charset_weight(self) -> u32 {
        match self {
            CharacterClass::Lowercase | CharacterClass::Uppercase => 26,
            CharacterClass::Numbers => 10,
            CharacterClass::Symbols => 20,
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Numbers => c.is_ascii_digit(),
            CharacterClass::Symbols => SYMBOLS.contains(c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "special characters",
        }
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// Builds the sampling pool from `classes` in the given order, optionally
/// dropping ambiguous glyphs.
pub fn build_pool<I>(classes: I, exclude_ambiguous: bool) -> Vec<char>
where
    I: IntoIterator<Item = CharacterClass>,
{
    classes
        .into_iter()
        .flat_map(|class| class.alphabet().chars())
        .filter(|&c| !(exclude_ambiguous && is_ambiguous(c)))
        .collect()
}

/// Which classes appear in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Composition {
    pub fn of(password: &str) -> Self {
        let has = |class: CharacterClass| password.chars().any(|c| class.contains(c));
        Self {
            lowercase: has(CharacterClass::Lowercase),
            uppercase: has(CharacterClass::Uppercase),
            numbers: has(CharacterClass::Numbers),
            symbols: has(CharacterClass::Symbols),
        }
    }

    pub fn has(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn present(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&c| self.has(c))
    }

    pub fn missing(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(move |&c| !self.has(c))
    }

    pub fn class_count(&self) -> usize {
        self.present().count()
    }

    /// Estimated alphabet size the password was drawn from.
    pub fn charset_size(&self) -> u32 {
        self.present().map(CharacterClass::charset_weight).sum()
    }
}
