//! Locale-aware digit grouping for the integer display.
//!
//! Only the pieces of a locale the widget needs are modelled: the grouping
//! separator, the decimal mark shown between the two fields, and the grouping
//! pattern. Lookup accepts BCP-47 tags such as `en-US`, `de_DE` or `fr`.

use tracing::warn;

/// Tag used when a requested locale cannot be resolved.
pub const DEFAULT_LOCALE: &str = "en-US";

const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';

/// Separators and grouping pattern for a single locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Canonical tag of the table entry these settings came from.
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_mark: char,
    /// Size of the right-most digit group.
    pub primary_group: usize,
    /// Size of every group left of the primary one (2 for Indian grouping).
    pub secondary_group: usize,
    /// Grouping only kicks in when the integer has at least
    /// `primary_group + min_grouping_digits` digits.
    pub min_grouping_digits: usize,
}

impl LocaleSettings {
    const fn western(
        tag: &'static str,
        group_separator: char,
        decimal_mark: char,
    ) -> Self {
        Self {
            tag,
            group_separator,
            decimal_mark,
            primary_group: 3,
            secondary_group: 3,
            min_grouping_digits: 1,
        }
    }

    const fn min_grouping(
        mut self,
        digits: usize,
    ) -> Self {
        self.min_grouping_digits = digits;
        self
    }

    const fn secondary(
        mut self,
        size: usize,
    ) -> Self {
        self.secondary_group = size;
        self
    }

    /// Resolves a locale tag, falling back to its language and then to
    /// [`DEFAULT_LOCALE`].
    pub fn resolve(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();

        if let Some(settings) = find(&normalized) {
            return settings;
        }

        let language = normalized.split('-').next().unwrap_or_default();
        if let Some(settings) = find(language) {
            return settings;
        }

        warn!(locale = %tag, fallback = DEFAULT_LOCALE, "unknown locale, using fallback");
        EN_US
    }

    /// Inserts group separators into a string of digits.
    ///
    /// The input must already be stripped of signs and leading zeros; it is
    /// grouped as-is, counting characters rather than bytes. Group sizes of
    /// zero are treated as one.
    pub fn group_digits(
        &self,
        digits: &str,
    ) -> String {
        let chars: Vec<char> = digits.chars().collect();
        let primary = self.primary_group.max(1);
        let secondary = self.secondary_group.max(1);
        if chars.len() < primary + self.min_grouping_digits {
            return digits.to_string();
        }

        let mut groups: Vec<String> = Vec::new();
        let mut end = chars.len();
        let mut size = primary;
        while end > size {
            groups.push(chars[end - size..end].iter().collect());
            end -= size;
            size = secondary;
        }
        groups.push(chars[..end].iter().collect());

        let separator = self.group_separator.to_string();
        groups.reverse();
        groups.join(&separator)
    }
}

const EN_US: LocaleSettings = LocaleSettings::western("en-US", ',', '.');

static LOCALES: &[LocaleSettings] = &[
    EN_US,
    LocaleSettings::western("en", ',', '.'),
    LocaleSettings::western("en-GB", ',', '.'),
    LocaleSettings::western("en-CA", ',', '.'),
    LocaleSettings::western("en-AU", ',', '.'),
    LocaleSettings::western("en-IN", ',', '.').secondary(2),
    LocaleSettings::western("hi", ',', '.').secondary(2),
    LocaleSettings::western("hi-IN", ',', '.').secondary(2),
    LocaleSettings::western("de", '.', ','),
    LocaleSettings::western("de-DE", '.', ','),
    LocaleSettings::western("de-AT", NBSP, ','),
    LocaleSettings::western("de-CH", '\u{2019}', '.'),
    LocaleSettings::western("fr", NARROW_NBSP, ','),
    LocaleSettings::western("fr-FR", NARROW_NBSP, ','),
    LocaleSettings::western("fr-CA", NBSP, ','),
    LocaleSettings::western("es", '.', ',').min_grouping(2),
    LocaleSettings::western("es-ES", '.', ',').min_grouping(2),
    LocaleSettings::western("es-MX", ',', '.'),
    LocaleSettings::western("it", '.', ','),
    LocaleSettings::western("it-IT", '.', ','),
    LocaleSettings::western("pt", '.', ','),
    LocaleSettings::western("pt-BR", '.', ','),
    LocaleSettings::western("pt-PT", NBSP, ',').min_grouping(2),
    LocaleSettings::western("nl", '.', ','),
    LocaleSettings::western("nl-NL", '.', ','),
    LocaleSettings::western("ru", NBSP, ','),
    LocaleSettings::western("ru-RU", NBSP, ','),
    LocaleSettings::western("pl", NBSP, ',').min_grouping(2),
    LocaleSettings::western("pl-PL", NBSP, ',').min_grouping(2),
    LocaleSettings::western("sv", NBSP, ','),
    LocaleSettings::western("sv-SE", NBSP, ','),
    LocaleSettings::western("nb-NO", NBSP, ','),
    LocaleSettings::western("ja", ',', '.'),
    LocaleSettings::western("ja-JP", ',', '.'),
    LocaleSettings::western("zh", ',', '.'),
    LocaleSettings::western("zh-CN", ',', '.'),
    LocaleSettings::western("ko-KR", ',', '.'),
];

fn find(normalized: &str) -> Option<LocaleSettings> {
    LOCALES
        .iter()
        .find(|settings| settings.tag.eq_ignore_ascii_case(normalized))
        .copied()
}
