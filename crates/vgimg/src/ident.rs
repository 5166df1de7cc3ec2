//! # C identifiers from file names
use std::{fmt, path::Path};

/// A name that is safe to use in C macro and variable names
///
/// Every character that is not an ASCII letter or digit is replaced with
/// an underscore, one for one. Names starting with a digit get an `img_`
/// prefix and an empty name becomes `image`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Sanitize `name`
    pub fn new(name: &str) -> Self {
        let mut ident: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if ident.is_empty() {
            ident.push_str("image");
        } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert_str(0, "img_");
        }
        Self(ident)
    }

    /// Derive the identifier from the stem of a file name
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        Self::new(&stem)
    }

    /// The sanitized name, case preserved
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix for all macros, e.g. `LOGO_IMG`
    pub fn macro_prefix(&self) -> String {
        format!("{}_IMG", self.0.to_ascii_uppercase())
    }

    /// The name of the pixel array, e.g. `logo_img_map`
    pub fn array_name(&self) -> String {
        format!("{}_img_map", self.0.to_ascii_lowercase())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Identifier;

    fn is_c_ident(s: &str) -> bool {
        let mut chars = s.chars();
        matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
            && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    }

    #[test]
    fn test_alphanumeric_unchanged() {
        assert_eq!(Identifier::new("logo").as_str(), "logo");
        assert_eq!(Identifier::new("Icon42").as_str(), "Icon42");
        assert_eq!(Identifier::new("Icon42").macro_prefix(), "ICON42_IMG");
        assert_eq!(Identifier::new("Icon42").array_name(), "icon42_img_map");
    }

    #[test]
    fn test_punctuation_replaced_one_to_one() {
        assert_eq!(Identifier::new("my-logo v2").as_str(), "my_logo_v2");
        assert_eq!(Identifier::new("a--b").as_str(), "a__b");
        assert_eq!(Identifier::new("a.b+c").as_str(), "a_b_c");
        assert_eq!(Identifier::new("grün").as_str(), "gr_n");
        assert_eq!(Identifier::new("my-logo").to_string(), "my_logo");
    }

    #[test]
    fn test_leading_digit_and_empty() {
        assert_eq!(Identifier::new("8x8").as_str(), "img_8x8");
        assert_eq!(Identifier::new("8x8").macro_prefix(), "IMG_8X8_IMG");
        assert_eq!(Identifier::new("").as_str(), "image");
    }

    #[test]
    fn test_from_path_uses_stem() {
        let id = Identifier::from_path(Path::new("out/dir/splash-screen.h"));
        assert_eq!(id.macro_prefix(), "SPLASH_SCREEN_IMG");
        assert_eq!(id.array_name(), "splash_screen_img_map");
        assert_eq!(Identifier::from_path(Path::new("a.b.h")).as_str(), "a_b");
        assert_eq!(Identifier::from_path(Path::new("/")).as_str(), "image");
    }

    #[test]
    fn test_always_valid() {
        for name in ["", "-", "0", "with space", "ünïcödé", "__x", "9lives.png", "ok"] {
            let id = Identifier::new(name);
            assert!(is_c_ident(&id.macro_prefix()), "{:?}", name);
            assert!(is_c_ident(&id.array_name()), "{:?}", name);
        }
    }
}
