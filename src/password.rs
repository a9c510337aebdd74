use rand::Rng;

use crate::error::{GenerationError, GenerationResult};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*(){}[]=<>/,.";

/// One of the four character classes a password can draw from.
///
/// The declaration order is significant: it is both the order in which
/// toggles are evaluated and the round-robin order of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Every class, in interleaving order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    /// The ASCII characters this class draws from.
    pub fn charset(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Number => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Checkbox label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Number => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#...)",
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.charset().contains(&(c as u8))
    }

    /// Draws one character uniformly from this class.
    pub fn random_char<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        match self {
            // Digits are drawn as a value and rendered in decimal.
            CharacterClass::Number => {
                let digit: u8 = rng.random_range(0..10);
                (b'0' + digit) as char
            }
            _ => {
                let chars = self.charset();
                chars[rng.random_range(0..chars.len())] as char
            }
        }
    }
}

/// Returns the class a character belongs to, if any.
pub fn classify(c: char) -> Option<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .find(|class| class.contains(c))
}

/// The user's choices for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub length: usize,
}

impl GenerationRequest {
    pub fn new(lowercase: bool, uppercase: bool, numbers: bool, symbols: bool, length: usize) -> Self {
        Self {
            lowercase,
            uppercase,
            numbers,
            symbols,
            length,
        }
    }

    fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Number => self.numbers,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// The enabled classes, in interleaving order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    /// Generates a password using the thread-local generator.
    pub fn generate(&self) -> GenerationResult<String> {
        generate_password_with(self, &mut rand::rng())
    }
}

/// Composes a password from the selected classes.
///
/// Output is built in rounds: each round appends one random character from
/// every selected class, in `CharacterClass::ALL` order, advancing by `k`
/// (the number of selected classes) until at least `length` characters
/// exist. The result is then cut to exactly `length`.
///
/// When `length` is not a multiple of `k`, the last round is only partly
/// kept, so classes earlier in the order end up slightly over-represented.
/// This is intentional and must stay as is.
pub fn generate_password_with<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> GenerationResult<String> {
    let selected = request.selected_classes();
    if selected.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }

    let stride = selected.len();
    let mut generated = String::with_capacity(request.length + stride);
    let mut count = 0;
    while count < request.length {
        for class in &selected {
            generated.push(class.random_char(rng));
        }
        count += stride;
    }

    // Every charset is ASCII, so byte truncation is char truncation.
    generated.truncate(request.length);
    Ok(generated)
}

/// Flag-based entry point.
///
/// Returns the password and `true`, or `("", false)` when no class is
/// selected.
pub fn generate_password(
    use_lowercase: bool,
    use_uppercase: bool,
    use_numbers: bool,
    use_symbols: bool,
    length: usize,
) -> (String, bool) {
    let request = GenerationRequest::new(use_lowercase, use_uppercase, use_numbers, use_symbols, length);
    match request.generate() {
        Ok(password) => (password, true),
        Err(GenerationError::NoClassSelected) => (String::new(), false),
    }
}
