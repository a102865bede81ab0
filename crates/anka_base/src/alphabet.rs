//! Letter-to-digit tables (Pythagorean for Latin, the traditional
//! Russian assignment for Cyrillic).
//!
//! Lookups expect lowercase input. A letter absent from a table yields
//! `None`; scoring treats it as 0.

/// Which of the three letter tables to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterTable {
    /// Every letter carries its digit.
    Full,
    /// Vowels carry their digit, consonants score 0.
    Vowel,
    /// Consonants carry their digit, vowels score 0.
    Consonant,
}

/// All tables.
pub const ALL_TABLES: [LetterTable; 3] =
    [LetterTable::Full, LetterTable::Vowel, LetterTable::Consonant];

impl LetterTable {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Vowel => "vowel",
            Self::Consonant => "consonant",
        }
    }

    /// Digit for a lowercase letter, if the table maps it.
    pub const fn value(self, c: char) -> Option<u32> {
        match self {
            Self::Full => full_value(c),
            Self::Vowel => vowel_value(c),
            Self::Consonant => consonant_value(c),
        }
    }
}

const fn full_value(c: char) -> Option<u32> {
    let v = match c {
        ' ' => 0,
        'a' | 'à' | 'á' | 'ã' | 'â' | 'ä' | 'j' | 's' => 1,
        'ß' | 'b' | 'k' | 't' | 'ö' => 2,
        'c' | 'ç' | 'l' | 'u' | 'ú' | 'ü' | 'ù' | 'û' => 3,
        'd' | 'm' | 'v' => 4,
        'e' | 'é' | 'ê' | 'è' | 'ë' | 'n' | 'ñ' | 'w' => 5,
        'f' | 'o' | 'ó' | 'ô' | 'õ' | 'œ' | 'x' => 6,
        'g' | 'p' | 'y' | 'ÿ' => 7,
        'h' | 'q' | 'z' => 8,
        'i' | 'î' | 'ï' | 'í' | 'r' => 9,

        'а' | 'и' | 'с' | 'ъ' => 1,
        'б' | 'й' | 'т' | 'ы' => 2,
        'в' | 'к' | 'у' | 'ь' => 3,
        'г' | 'л' | 'ф' | 'э' => 4,
        'д' | 'м' | 'х' | 'ю' => 5,
        'е' | 'н' | 'ц' | 'я' => 6,
        'ё' | 'о' | 'ч' => 7,
        'ж' | 'п' | 'ш' => 8,
        'з' | 'р' | 'щ' => 9,
        _ => return None,
    };
    Some(v)
}

const fn vowel_value(c: char) -> Option<u32> {
    let v = match c {
        'a' | 'à' | 'á' | 'ã' | 'â' | 'ä' => 1,
        'ö' => 2,
        'u' | 'ú' | 'ü' | 'ù' | 'û' => 3,
        'e' | 'é' | 'ê' | 'è' | 'ë' => 5,
        'o' | 'ó' | 'ô' | 'õ' | 'œ' => 6,
        'y' | 'ÿ' => 7,
        // 'ì' exists only in this table.
        'i' | 'î' | 'ï' | 'í' | 'ì' => 9,
        ' ' | 'j' | 'ß' | 's' | 'b' | 'k' | 't' | 'c' | 'ç' | 'l' | 'd' | 'm' | 'v' | 'n'
        | 'ñ' | 'w' | 'f' | 'x' | 'g' | 'p' | 'h' | 'q' | 'z' | 'r' => 0,

        'а' | 'и' => 1,
        'ы' => 2,
        'у' => 3,
        'э' => 4,
        'ю' => 5,
        'е' | 'я' => 6,
        'ё' | 'о' => 7,
        'с' | 'ъ' | 'б' | 'й' | 'т' | 'в' | 'к' | 'ь' | 'г' | 'л' | 'ф' | 'д' | 'м' | 'х'
        | 'н' | 'ц' | 'ч' | 'ж' | 'п' | 'ш' | 'з' | 'р' | 'щ' => 0,
        _ => return None,
    };
    Some(v)
}

const fn consonant_value(c: char) -> Option<u32> {
    let v = match c {
        'j' | 's' => 1,
        'b' | 'k' | 't' | 'ß' => 2,
        'c' | 'ç' | 'l' => 3,
        'd' | 'm' | 'v' => 4,
        'n' | 'ñ' | 'w' => 5,
        'f' | 'x' => 6,
        'g' | 'p' => 7,
        'h' | 'q' | 'z' => 8,
        'r' => 9,
        ' ' | 'a' | 'à' | 'á' | 'ã' | 'â' | 'ä' | 'ö' | 'u' | 'ú' | 'ü' | 'ù' | 'û' | 'e'
        | 'é' | 'ê' | 'è' | 'ë' | 'o' | 'ó' | 'ô' | 'õ' | 'œ' | 'y' | 'ÿ' | 'i' | 'î' | 'ï'
        | 'í' => 0,

        'с' | 'ъ' => 1,
        'б' | 'й' | 'т' => 2,
        'в' | 'к' | 'ь' => 3,
        'г' | 'л' | 'ф' => 4,
        'д' | 'м' | 'х' => 5,
        'н' | 'ц' => 6,
        'ч' => 7,
        'ж' | 'п' | 'ш' => 8,
        'з' | 'р' | 'щ' => 9,
        'а' | 'и' | 'ы' | 'у' | 'э' | 'ю' | 'е' | 'я' | 'ё' | 'о' => 0,
        _ => return None,
    };
    Some(v)
}
