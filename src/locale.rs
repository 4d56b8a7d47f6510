use std::fmt;

/// The locales the routing layer can supply. English is the default-locale
/// side of every catalog item; Italian fields are overrides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    It,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "it" => Some(Self::It),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display labels for the known catalog categories, keyed by category value.
/// Unknown categories pass through unchanged.
#[must_use]
pub fn category_label(category: &str, locale: Locale) -> &str {
    const LABELS: &[(&str, &str, &str)] = &[
        ("banking", "Banking", "Banca"),
        ("bureaucracy", "Bureaucracy", "Burocrazia"),
        ("citizenship", "Citizenship", "Cittadinanza"),
        ("community", "Community", "Comunità"),
        ("food", "Food", "Cucina"),
        ("health", "Health", "Salute"),
        ("housing", "Housing", "Casa"),
        ("work", "Work", "Lavoro"),
    ];
    LABELS
        .iter()
        .find(|(value, _, _)| *value == category)
        .map_or(category, |(_, en, it)| match locale {
            Locale::En => en,
            Locale::It => it,
        })
}

/// Collation key for alphabetical sorting: lower-cased, with the Latin
/// diacritics common in Italian folded to their base letter so "Università"
/// orders next to "Universita" rather than after "z".
#[must_use]
pub fn collation_key(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        c => c,
    }
}

#[cfg(test)]
mod test {
    use super::{category_label, collation_key, Locale};

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Some(Locale::It), Locale::parse(" IT "));
        assert_eq!(Some(Locale::En), Locale::parse("en"));
        assert_eq!(None, Locale::parse("fr"));
        assert_eq!(None, Locale::parse(""));
    }

    #[test]
    fn known_categories_are_translated() {
        assert_eq!("Housing", category_label("housing", Locale::En));
        assert_eq!("Casa", category_label("housing", Locale::It));
    }

    #[test]
    fn unknown_categories_pass_through() {
        assert_eq!("pasta", category_label("pasta", Locale::It));
    }

    #[test]
    fn collation_folds_accents() {
        assert_eq!("universita", collation_key("Università"));
        assert!(collation_key("Città") < collation_key("Cucina"));
    }
}
