/// Language code to text, in insertion order.
///
/// Inserting an existing code replaces its text without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: Vec<(String, String)>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        let code = code.into();
        let text = text.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = text;
        } else {
            self.entries.push((code, text));
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    /// Adds the entries of `other` whose codes are not present yet.
    pub fn extend_missing(&mut self, other: Self) {
        for (code, text) in other.entries {
            if !self.contains(&code) {
                self.entries.push((code, text));
            }
        }
    }

    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Translations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut translations = Self::new();
        for (code, text) in iter {
            translations.insert(code, text);
        }
        translations
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut t = Translations::new();
        t.insert("en", "Hello");
        t.insert("de", "Hallo");
        t.insert("fr", "Bonjour");

        let codes: Vec<&str> = t.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, ["en", "de", "fr"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut t = Translations::new();
        t.insert("en", "Hello");
        t.insert("de", "Hallo");
        t.insert("en", "Hi");

        assert_eq!(t.len(), 2);
        assert_eq!(t.get("en"), Some("Hi"));
        assert_eq!(t.iter().next(), Some(("en", "Hi")));
    }

    #[test]
    fn test_get_missing() {
        let t: Translations = [("en", "Hello")].into_iter().collect();
        assert!(t.get("de").is_none());
        assert!(!t.contains("de"));
        assert!(t.contains("en"));
    }

    #[test]
    fn test_extend_missing_keeps_existing_entries() {
        let mut deepl: Translations = [("en", "Hello"), ("de", "Hallo")].into_iter().collect();
        let google: Translations = [("en", "Hello"), ("de", "Hallo!"), ("ar", "مرحبا")]
            .into_iter()
            .collect();

        deepl.extend_missing(google);

        let entries: Vec<(&str, &str)> = deepl.iter().collect();
        assert_eq!(entries, [("en", "Hello"), ("de", "Hallo"), ("ar", "مرحبا")]);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hello world"), "Hello world");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_leaves_rest_unchanged() {
        assert_eq!(capitalize_first("hELLO"), "HELLO");
        assert_eq!(capitalize_first("open GPS"), "Open GPS");
    }

    #[test]
    fn test_capitalize_is_idempotent() {
        for text in ["Hello", "hello", "Привет", "你好", "ßtraße", "1st place"] {
            let once = capitalize_first(text);
            assert_eq!(capitalize_first(&once), once);
        }
    }
}
