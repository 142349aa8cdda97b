use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationForm {
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfd_decomposes() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFD);
        // "Café" with composed 'é' (U+00E9)
        let output = filter.filter("Caf\u{00e9}");
        assert_eq!(output, "Cafe\u{0301}");
    }

    #[test]
    fn test_nfc_composes() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFC);
        let output = filter.filter("Am\u{0065}\u{0301}lie");
        assert_eq!(output, "Am\u{00e9}lie");
    }

    #[test]
    fn test_nfkc_normalization() {
        let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFKC);
        // Fullwidth "Ａ" to halfwidth "A"
        assert_eq!(filter.filter("\u{ff21}"), "A");
    }
}
