//! Per-language summary message templates.

use chrono::NaiveDate;

use crate::language::Language;
use crate::models::PlanEntry;
use crate::registry::BookRegistry;
use crate::translate::translate_display;

/// Fixed strings of the daily summary message for one language.
#[derive(Debug, Clone, Copy)]
pub struct MessagePack {
    pub title: &'static str,
    pub qt_label: &'static str,
    pub reading_label: &'static str,
    pub new_testament: &'static str,
    pub psalms: &'static str,
    pub proverbs: &'static str,
    pub psalms_unit: &'static str,
    pub proverbs_unit: &'static str,
    pub none: &'static str,
    pub slogan: &'static str,
}

const KO: MessagePack = MessagePack {
    title: "🌟 오늘의 묵상 알림",
    qt_label: "📖 [오늘의 QT 본문]",
    reading_label: "📚 [성경 읽기 진도]",
    new_testament: "신약",
    psalms: "시편",
    proverbs: "잠언",
    psalms_unit: "편",
    proverbs_unit: "장",
    none: "주일(개인독서)",
    slogan: "그리스도의 형상을 닮고 그의 형상을 닮게 하라",
};

const EN: MessagePack = MessagePack {
    title: "🌟 Daily Meditation",
    qt_label: "📖 [Today's QT Passage]",
    reading_label: "📚 [Bible Reading Plan]",
    new_testament: "NT",
    psalms: "Psalms",
    proverbs: "Proverbs",
    psalms_unit: "",
    proverbs_unit: "",
    none: "Sunday (Personal)",
    slogan: "Be Like Christ, Make Like Christ.",
};

const MN: MessagePack = MessagePack {
    title: "🌟 Өдрийн бясалгал",
    qt_label: "📖 [Өнөөдрийн QT]",
    reading_label: "📚 [Библи унших төлөвлөгөө]",
    new_testament: "Шинэ Гэрээ",
    psalms: "Дуулал",
    proverbs: "Сургаалт үгс",
    psalms_unit: "-р бүлэг",
    proverbs_unit: "-р бүлэг",
    none: "Ням гараг",
    slogan: "Христийн дүр төрхийг дуурайж, Түүний дүр төрхтэй адил болтугай",
};

impl MessagePack {
    pub fn for_language(lang: Language) -> &'static MessagePack {
        match lang {
            Language::Ko => &KO,
            Language::En => &EN,
            Language::Mn => &MN,
        }
    }
}

/// Build the summary message announcing a day's readings.
///
/// Citations are translated for display only; empty entries show the
/// language's "none" label.
pub fn summary(
    registry: &BookRegistry,
    lang: Language,
    date: NaiveDate,
    entry: &PlanEntry,
) -> String {
    let pack = MessagePack::for_language(lang);
    let display = |raw: &str| -> String {
        if raw.trim().is_empty() {
            pack.none.to_string()
        } else {
            translate_display(registry, raw, lang).text
        }
    };
    let chapter = |raw: &str, unit: &str| -> String {
        if raw.trim().is_empty() {
            pack.none.to_string()
        } else {
            format!("{}{}", display(raw), unit)
        }
    };

    format!(
        "{title} ({date})\n\n\
         {qt_label}\n👉 {qt}\n\n\
         {reading_label}\n\
         ▫️ {nt_label}: {nt}\n\
         ▫️ {ps_label}: {ps}\n\
         ▫️ {pr_label}: {pr}\n\n\
         ━━━━━━━━━━━━━━━\n\
         \"{slogan}\"",
        title = pack.title,
        date = date.format("%Y/%m/%d"),
        qt_label = pack.qt_label,
        qt = display(&entry.quiet_time),
        reading_label = pack.reading_label,
        nt_label = pack.new_testament,
        nt = display(&entry.new_testament),
        ps_label = pack.psalms,
        ps = chapter(&entry.psalms, pack.psalms_unit),
        pr_label = pack.proverbs,
        pr = chapter(&entry.proverbs, pack.proverbs_unit),
        slogan = pack.slogan,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> PlanEntry {
        PlanEntry {
            new_testament: "마1-4".to_string(),
            psalms: "1".to_string(),
            proverbs: "1".to_string(),
            quiet_time: "삼상 8:1-22".to_string(),
        }
    }

    #[test]
    fn test_korean_summary() {
        let registry = BookRegistry::builtin();
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let text = summary(&registry, Language::Ko, date, &entry());
        assert!(text.starts_with("🌟 오늘의 묵상 알림 (2026/01/15)"));
        assert!(text.contains("👉 삼상 8:1-22"));
        assert!(text.contains("▫️ 신약: 마1-4"));
        assert!(text.contains("▫️ 시편: 1편"));
        assert!(text.contains("▫️ 잠언: 1장"));
    }

    #[test]
    fn test_translated_summary() {
        let registry = BookRegistry::builtin();
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let text = summary(&registry, Language::Mn, date, &entry());
        assert!(text.contains("👉 1Сам 8:1-22"));
        assert!(text.contains("▫️ Шинэ Гэрээ: Мат 1-4"));
        assert!(text.contains("▫️ Дуулал: 1-р бүлэг"));
    }

    #[test]
    fn test_empty_new_testament_shows_none() {
        let registry = BookRegistry::builtin();
        let date = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        let mut entry = entry();
        entry.new_testament.clear();
        let text = summary(&registry, Language::En, date, &entry);
        assert!(text.contains("▫️ NT: Sunday (Personal)"));
    }
}
