//! Book-name registry.
//!
//! Maps a canonical book abbreviation (as written in the source language)
//! to the book name each language's verse table stores. The registry is
//! built once from the built-in table plus any `[books.<lang>]` overrides in
//! the config, and is read-only afterwards.
//!
//! Lookups that find no mapping fall back to the canonical form. The
//! fallback is reported in [`Resolved::fallback`] rather than treated as an
//! error, so an unmapped book still produces a (likely empty) query.

use std::collections::HashMap;

use crate::config::Config;
use crate::language::Language;

/// Built-in book table, in canonical order.
///
/// Columns: canonical abbreviation, Korean full name, English stored name,
/// English full name, Mongolian stored name.
const BOOKS: &[(&str, &str, &str, &str, &str)] = &[
    ("창", "창세기", "Gen", "Genesis", "Эхл"),
    ("출", "출애굽기", "Exod", "Exodus", "Гэт"),
    ("레", "레위기", "Lev", "Leviticus", "Лев"),
    ("민", "민수기", "Num", "Numbers", "Тоо"),
    ("신", "신명기", "Deut", "Deuteronomy", "Дэд"),
    ("수", "여호수아", "Josh", "Joshua", "Иош"),
    ("삿", "사사기", "Judg", "Judges", "Шүү"),
    ("룻", "룻기", "Ruth", "Ruth", "Рут"),
    ("삼상", "사무엘상", "1Sam", "1 Samuel", "1Сам"),
    ("삼하", "사무엘하", "2Sam", "2 Samuel", "2Сам"),
    ("왕상", "열왕기상", "1Kgs", "1 Kings", "1Хаа"),
    ("왕하", "열왕기하", "2Kgs", "2 Kings", "2Хаа"),
    ("대상", "역대상", "1Chr", "1 Chronicles", "1Шас"),
    ("대하", "역대하", "2Chr", "2 Chronicles", "2Шас"),
    ("스", "에스라", "Ezra", "Ezra", "Езр"),
    ("느", "느헤미야", "Neh", "Nehemiah", "Нех"),
    ("에", "에스더", "Esth", "Esther", "Ест"),
    ("욥", "욥기", "Job", "Job", "Иов"),
    ("시", "시편", "Ps", "Psalms", "Дуу"),
    ("잠", "잠언", "Prov", "Proverbs", "Сур"),
    ("전", "전도서", "Eccl", "Ecclesiastes", "Ном"),
    ("아", "아가", "Song", "Song of Songs", "Доо"),
    ("사", "이사야", "Isa", "Isaiah", "Иса"),
    ("렘", "예레미야", "Jer", "Jeremiah", "Иер"),
    ("애", "예레미야애가", "Lam", "Lamentations", "Гаш"),
    ("겔", "에스겔", "Ezek", "Ezekiel", "Езе"),
    ("단", "다니엘", "Dan", "Daniel", "Дан"),
    ("호", "호세아", "Hos", "Hosea", "Хос"),
    ("욜", "요엘", "Joel", "Joel", "Иое"),
    ("암", "아모스", "Amos", "Amos", "Амо"),
    ("옵", "오바댜", "Obad", "Obadiah", "Оба"),
    ("욘", "요나", "Jonah", "Jonah", "Ион"),
    ("미", "미가", "Mic", "Micah", "Мик"),
    ("나", "나훔", "Nah", "Nahum", "Нах"),
    ("합", "하박국", "Hab", "Habakkuk", "Хаб"),
    ("습", "스바냐", "Zeph", "Zephaniah", "Зеф"),
    ("학", "학개", "Hag", "Haggai", "Хаг"),
    ("슥", "스가랴", "Zech", "Zechariah", "Зех"),
    ("말", "말라기", "Mal", "Malachi", "Мал"),
    ("마", "마태복음", "Matt", "Matthew", "Мат"),
    ("막", "마가복음", "Mark", "Mark", "Марк"),
    ("눅", "누가복음", "Luke", "Luke", "Лук"),
    ("요", "요한복음", "John", "John", "Иох"),
    ("행", "사도행전", "Acts", "Acts", "Үйл"),
    ("롬", "로마서", "Rom", "Romans", "Ром"),
    ("고전", "고린도전서", "1Cor", "1 Corinthians", "1Кор"),
    ("고후", "고린도후서", "2Cor", "2 Corinthians", "2Кор"),
    ("갈", "갈라디아서", "Gal", "Galatians", "Гал"),
    ("엡", "에베소서", "Eph", "Ephesians", "Еф"),
    ("빌", "빌립보서", "Phil", "Philippians", "Фил"),
    ("골", "골로새서", "Col", "Colossians", "Кол"),
    ("살전", "데살로니가전서", "1Thess", "1 Thessalonians", "1Тес"),
    ("살후", "데살로니가후서", "2Thess", "2 Thessalonians", "2Тес"),
    ("딤전", "디모데전서", "1Tim", "1 Timothy", "1Тим"),
    ("딤후", "디모데후서", "2Tim", "2 Timothy", "2Тим"),
    ("딛", "디도서", "Titus", "Titus", "Тит"),
    ("몬", "빌레몬서", "Phlm", "Philemon", "Филм"),
    ("히", "히브리서", "Heb", "Hebrews", "Евр"),
    ("약", "야고보서", "Jas", "James", "Иак"),
    ("벧전", "베드로전서", "1Pet", "1 Peter", "1Пет"),
    ("벧후", "베드로후서", "2Pet", "2 Peter", "2Пет"),
    ("요일", "요한일서", "1John", "1 John", "1Иох"),
    ("요이", "요한이서", "2John", "2 John", "2Иох"),
    ("요삼", "요한삼서", "3John", "3 John", "3Иох"),
    ("유", "유다서", "Jude", "Jude", "Иуд"),
    ("계", "요한계시록", "Rev", "Revelation", "Илч"),
];

/// Mongolian full names. Coverage is partial; other books display their
/// stored name.
const MN_FULL_NAMES: &[(&str, &str)] = &[("시", "Дуулал"), ("잠", "Сургаалт үгс")];

/// Result of resolving a canonical book for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Name to query the language table with.
    pub name: String,
    /// `true` when no mapping existed and the canonical form was kept.
    pub fallback: bool,
}

/// Immutable canonical-abbreviation → stored-name table.
#[derive(Debug, Clone)]
pub struct BookRegistry {
    stored: HashMap<Language, HashMap<String, String>>,
    full_names: HashMap<Language, HashMap<String, String>>,
    aliases: HashMap<String, String>,
}

impl BookRegistry {
    /// Registry with only the built-in table.
    pub fn builtin() -> Self {
        let mut stored: HashMap<Language, HashMap<String, String>> = HashMap::new();
        let mut full_names: HashMap<Language, HashMap<String, String>> = HashMap::new();
        let mut aliases = HashMap::new();

        for &(abbr, ko_full, en, en_full, mn) in BOOKS {
            stored
                .entry(Language::En)
                .or_default()
                .insert(abbr.to_string(), en.to_string());
            stored
                .entry(Language::Mn)
                .or_default()
                .insert(abbr.to_string(), mn.to_string());
            full_names
                .entry(Language::Ko)
                .or_default()
                .insert(abbr.to_string(), ko_full.to_string());
            full_names
                .entry(Language::En)
                .or_default()
                .insert(abbr.to_string(), en_full.to_string());
            aliases.insert(ko_full.to_string(), abbr.to_string());
        }
        for &(abbr, name) in MN_FULL_NAMES {
            full_names
                .entry(Language::Mn)
                .or_default()
                .insert(abbr.to_string(), name.to_string());
        }

        Self {
            stored,
            full_names,
            aliases,
        }
    }

    /// Built-in table with the config's `[books.<lang>]` overrides applied.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::builtin();
        for (lang, overrides) in &config.books {
            if lang.is_source() {
                log::warn!("ignoring [books.{}]: source language names are canonical", lang.code());
                continue;
            }
            let table = registry.stored.entry(*lang).or_default();
            for (canonical, name) in overrides {
                table.insert(canonical.clone(), name.clone());
            }
        }
        registry
    }

    /// Normalize an exact full book name to its canonical abbreviation.
    /// Anything else is returned unchanged.
    pub fn canonical<'a>(&'a self, book: &'a str) -> &'a str {
        self.aliases.get(book).map(String::as_str).unwrap_or(book)
    }

    /// Stored book name for `book` in `lang`.
    ///
    /// Identity for canonical abbreviations in the source language. For other
    /// languages a missing mapping falls back to the canonical form with
    /// `fallback` set.
    pub fn resolve(&self, book: &str, lang: Language) -> Resolved {
        let canonical = self.canonical(book);
        if lang.is_source() {
            return Resolved {
                name: canonical.to_string(),
                fallback: false,
            };
        }

        match self.stored.get(&lang).and_then(|t| t.get(canonical)) {
            Some(name) => Resolved {
                name: name.clone(),
                fallback: false,
            },
            None => {
                log::debug!("no {} mapping for book '{}'", lang, canonical);
                Resolved {
                    name: canonical.to_string(),
                    fallback: true,
                }
            }
        }
    }

    /// Human-readable book name for headers, falling back to the stored name.
    pub fn display_name(&self, book: &str, lang: Language) -> String {
        let canonical = self.canonical(book);
        self.full_names
            .get(&lang)
            .and_then(|t| t.get(canonical))
            .cloned()
            .unwrap_or_else(|| self.resolve(canonical, lang).name)
    }

    /// Canonical abbreviations in canonical order.
    pub fn canonical_books(&self) -> impl Iterator<Item = &'static str> {
        BOOKS.iter().map(|&(abbr, ..)| abbr)
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_language_is_identity() {
        let registry = BookRegistry::builtin();
        for book in registry.canonical_books() {
            let resolved = registry.resolve(book, Language::SOURCE);
            assert_eq!(resolved.name, book);
            assert!(!resolved.fallback);
        }
    }

    #[test]
    fn test_resolve_mapped_books() {
        let registry = BookRegistry::builtin();
        assert_eq!(registry.resolve("시", Language::En).name, "Ps");
        assert_eq!(registry.resolve("잠", Language::Mn).name, "Сур");
        assert_eq!(registry.resolve("삼상", Language::Mn).name, "1Сам");
    }

    #[test]
    fn test_missing_mapping_falls_back() {
        let registry = BookRegistry::builtin();
        let resolved = registry.resolve("토빗", Language::En);
        assert_eq!(resolved.name, "토빗");
        assert!(resolved.fallback);
    }

    #[test]
    fn test_full_name_alias() {
        let registry = BookRegistry::builtin();
        assert_eq!(registry.canonical("잠언"), "잠");
        assert_eq!(registry.resolve("잠언", Language::Ko).name, "잠");
        assert_eq!(registry.resolve("잠언", Language::En).name, "Prov");
        assert_eq!(registry.canonical("잠언서"), "잠언서");
    }

    #[test]
    fn test_display_names() {
        let registry = BookRegistry::builtin();
        assert_eq!(registry.display_name("시", Language::Ko), "시편");
        assert_eq!(registry.display_name("시", Language::En), "Psalms");
        assert_eq!(registry.display_name("시", Language::Mn), "Дуулал");
        // No Mongolian full name for Genesis: stored name is shown.
        assert_eq!(registry.display_name("창", Language::Mn), "Эхл");
    }

    #[test]
    fn test_builtin_covers_all_books() {
        let registry = BookRegistry::builtin();
        assert_eq!(registry.canonical_books().count(), 66);
        for book in registry.canonical_books() {
            assert!(!registry.resolve(book, Language::En).fallback);
            assert!(!registry.resolve(book, Language::Mn).fallback);
        }
    }
}
