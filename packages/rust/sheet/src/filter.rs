//! Noise filter for spreadsheet comments.
//!
//! The comment export mixes genuine prompts with questions, thanks, and
//! support chatter. The filter is a curated heuristic: phrase lists tuned
//! against the actual export, with a prompt-start pattern check that can
//! rescue a comment from any phrase rule.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::RegexSet;

use promptcat_shared::CommentRow;

/// Comment openings that mark chit-chat, questions, and support threads.
const NON_PROMPT_START_PHRASES: &[&str] = &[
    "[медиа/стикер]",
    "Получается если надо менять",
    "Я не могу зайти в чат gpt",
    "У меня проблема",
    "Моя подписка",
    "Вопрос: купила",
    "Да, тут надо пробовать",
    "У меня такая же проблема",
    "Нужен новый номер",
    "Я не входила через номер",
    "Ой погнала лошадей",
    "почему-то выдает фото?",
    "Лагает(",
    "Куда именно пытаетесь",
    "Такого не встречала",
    "В сам чат",
    "Я все понимаю",
    "Мне чат gpt на этот промт",
    "Пример: ",
    "То есть я беру",
    "Здравствуйте, описывайте",
    "Да, если вы возьмете",
    "Использую для Зубов",
    "Это в среднем",
    "Каждый Промт для ногтей",
    "Решила сделать пробный заход",
    "Хотелось бы больше",
    "Боже, спасибо",
    "Я б прислала",
    "Раньше делала",
    "Мне понравилось",
    "Пока особо",
    "Да, практически",
    "Если вы делаете фото с форматом макро",
    "Это не настоящий человек",
    "Удаляйте и делайте заново",
    "А сейчас вообще вот такое",
    "У меня он также",
    "Подскажите пожалуйста пишу",
    "Присоединяюсь",
    "Огромнейшее",
    "Благодарю",
    "Спасибо вам большое за данный",
    "Спасибо за курс",
    "и я хочу поделиться",
    "Если есть возможность, добавить",
    "Если есть возможность добавить",
    "Добрый день, благодарю",
    "Добрый вечер!",
    "Добрый день!",
    "Добрый день,",
    "Добрый вечер,",
    "Очень нравится",
    "Соглашусь со всеми",
    "Спасибо большое",
    "Просто, скажу спасибо",
    "Справедливости ради",
    "1. При регистрации",
    "2. Если вы не оформили",
    "3. Вы видите такую ситуацию",
    "4. Если у вас происходит",
    "Нет, обновите страницу",
    "Здравствуйте\n1. Причина",
    "Здравствуйте\nЭто лагает",
    "Здравствуйте так и пишите",
    "Здравствуйте, можно и на русском",
    "Здравствуйте, вы должны",
    "Здравствуйте!\nПо вашим",
    "высылаю список готовых фраз",
    // Tips list, not a prompt itself.
    "Лёгкая натуральная ретушь",
    "У меня чат gpt на этот",
    "Ой, поняла(",
    "Это в среднем\nЕсли",
    "Добрый день,по Runway",
    // Tutorial posts.
    "**1. Выберите фото предмета",
    "Как добавлять надпись на фон:",
    "Добрый день, подскажите",
    "Спасибо за такой шедов",
    "Спасибо большое за такую",
    "Это лагает",
    "Я когда по номеру пытаюсь",
];

/// Post-title phrases whose discussions contain no prompts at all.
const SKIP_POST_TITLE_PHRASES: &[&str] = &[
    "ШРИФТОВ В CAP CUT",
    "КАК ПОДКЛЮЧИТЬ ПОДПИСКУ",
    "NanoBanana",
    "РЕТУШЬ КОЖИ: убираем",
    "РАЗМЫТЫЙ КОЛЛАЖ",
    "Дорогие мои, сегодня выложу обработку",
];

/// Post titles whose comments are mostly questions; comments survive only
/// when they independently look like prompts.
const QUESTION_POST_TITLE_PHRASES: &[&str] = &[
    "ВОПРОСЫ ПО ЧАТУ",
    "КАК ДОБАВИТЬ НАДПИСЬ",
    "КАК ОЖИВИТЬ ФОТО",
];

/// Anchored openings that genuine prompts start with.
static PROMPT_START_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^1\.\s",
        r"^Edit\s",
        r"^Отредакт",
        r"^Perform\s",
        r"^Create\s",
        r"^Создайте",
        r"^Сделайте",
        r"^Выполните",
        r"^Редактируйте",
        r"^Редактируй",
        r"^Get\s",
        r"^\*\*ПРОМТ",
        r"^Изображение\s",
        r"^A high-quality",
        r"^high-fashion",
        r"^Editorial",
        r"^[А-ЯЁ][а-яё]+ профессиональную",
    ])
    .expect("prompt start patterns")
});

/// True when the (trimmed) text starts like a genuine prompt.
pub fn looks_like_prompt(text: &str) -> bool {
    PROMPT_START_PATTERNS.is_match(text.trim())
}

/// Decides which comment rows are genuine prompts.
///
/// Built once per extraction run: the skip-all post set depends on post
/// titles seen across the whole export.
#[derive(Debug)]
pub struct NoiseFilter {
    min_comment_len: usize,
    skip_post_ids: HashSet<i64>,
}

impl NoiseFilter {
    /// Build the filter over the full row set.
    pub fn new(rows: &[CommentRow], min_comment_len: usize) -> Self {
        let mut skip_post_ids = HashSet::new();

        for row in rows {
            if SKIP_POST_TITLE_PHRASES
                .iter()
                .any(|p| row.post_title.contains(p))
            {
                skip_post_ids.insert(row.post_id);
            }
        }

        Self {
            min_comment_len,
            skip_post_ids,
        }
    }

    /// True when the row is noise (question, thanks, tutorial, too short).
    pub fn is_non_prompt(&self, row: &CommentRow) -> bool {
        let text = row.comment_text.trim();

        if text.is_empty() || text == "None" {
            return true;
        }
        if text.chars().count() < self.min_comment_len {
            return true;
        }
        if self.skip_post_ids.contains(&row.post_id) {
            return true;
        }

        for phrase in NON_PROMPT_START_PHRASES {
            if text.starts_with(phrase) && !looks_like_prompt(text) {
                return true;
            }
        }

        let title = &row.post_title;
        for phrase in QUESTION_POST_TITLE_PHRASES {
            if title.contains(phrase) && !looks_like_prompt(text) {
                return true;
            }
        }

        // Feedback posts: only actual prompts survive.
        if title.contains("под этим постом") || title.contains("напишите в комментариях") {
            return !looks_like_prompt(text);
        }

        // Structural post about prompt anatomy.
        if title.contains("СТРУКТУРА ПРОМТА") && !looks_like_prompt(text) {
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_text() -> String {
        format!(
            "Отредактируй фото: выполни натуральную ретушь кожи. {}",
            "Сохрани текстуру, поры и мелкие детали. ".repeat(3)
        )
    }

    fn row(post_id: i64, title: &str, text: &str) -> CommentRow {
        CommentRow {
            post_id,
            post_title: title.into(),
            comment_text: text.into(),
            ..CommentRow::default()
        }
    }

    #[test]
    fn looks_like_prompt_matches_known_openings() {
        assert!(looks_like_prompt("Отредактируй фото, сохрани текстуру"));
        assert!(looks_like_prompt("Create a professional studio photo"));
        assert!(looks_like_prompt("1. Загрузите фото"));
        assert!(looks_like_prompt("**ПРОМТ ДЛЯ РЕТУШИ**"));
        assert!(looks_like_prompt("Выполните профессиональную ретушь"));
        assert!(!looks_like_prompt("Спасибо большое за промт!"));
        assert!(!looks_like_prompt("как пользоваться этим?"));
    }

    #[test]
    fn short_and_empty_comments_are_noise() {
        let filter = NoiseFilter::new(&[], 100);
        assert!(filter.is_non_prompt(&row(1, "ПРОМТ", "")));
        assert!(filter.is_non_prompt(&row(1, "ПРОМТ", "None")));
        assert!(filter.is_non_prompt(&row(1, "ПРОМТ", "Отредактируй фото")));
    }

    #[test]
    fn chitchat_openings_are_noise() {
        let filter = NoiseFilter::new(&[], 100);
        let text = format!("Спасибо большое, {}", "очень полезный канал! ".repeat(10));
        assert!(filter.is_non_prompt(&row(1, "ПРОМТ — блестки", &text)));
    }

    #[test]
    fn numbered_step_prompts_are_kept() {
        let filter = NoiseFilter::new(&[], 100);
        let text = format!("1. Выберите фото. {}", prompt_text());
        assert!(!filter.is_non_prompt(&row(1, "ПРОМТ — ретушь", &text)));
    }

    #[test]
    fn skip_all_posts_drop_every_comment() {
        let rows = vec![
            row(7, "УСТАНОВКА ШРИФТОВ В CAP CUT", &prompt_text()),
            row(8, "ПРОМТ — поталь", &prompt_text()),
        ];
        let filter = NoiseFilter::new(&rows, 100);
        assert!(filter.is_non_prompt(&rows[0]));
        assert!(!filter.is_non_prompt(&rows[1]));
    }

    #[test]
    fn chitchat_opening_rescued_by_prompt_shape() {
        let filter = NoiseFilter::new(&[], 100);
        // "1. При регистрации" is on the chit-chat list, but a numbered
        // step opening counts as a prompt and wins.
        let rescued = format!("1. При регистрации укажите стиль съемки. {}", prompt_text());
        assert!(!filter.is_non_prompt(&row(4, "ПРОМТ — ретушь", &rescued)));

        // A listed opening with no prompt shape stays noise.
        let support = format!("У меня проблема {}", "с подпиской, помогите пожалуйста. ".repeat(5));
        assert!(filter.is_non_prompt(&row(4, "ПРОМТ — ретушь", &support)));
    }

    #[test]
    fn question_post_keeps_only_prompt_shaped_comments() {
        let filter = NoiseFilter::new(&[], 100);
        let question = format!("Подскажите, {}", "куда вставлять этот текст? ".repeat(8));
        assert!(filter.is_non_prompt(&row(2, "ВОПРОСЫ ПО ЧАТУ GPT", &question)));
        assert!(!filter.is_non_prompt(&row(2, "ВОПРОСЫ ПО ЧАТУ GPT", &prompt_text())));
    }

    #[test]
    fn feedback_post_keeps_only_prompt_shaped_comments() {
        let filter = NoiseFilter::new(&[], 100);
        let feedback = format!("Девочки, {}", "делюсь своим результатом, посмотрите. ".repeat(5));
        assert!(filter.is_non_prompt(&row(3, "Девочки, под этим постом делимся", &feedback)));
        assert!(!filter.is_non_prompt(&row(3, "Девочки, под этим постом делимся", &prompt_text())));
    }
}
