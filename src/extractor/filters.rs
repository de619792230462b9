//! Noise rules for text candidates.
//!
//! Each rule is a named predicate; the first rule that matches rejects the
//! candidate. Rules are evaluated in table order, so adding a rule means
//! adding one row here.

use crate::options::Options;
use crate::patterns::{CLOCK_TIME, METADATA_SEPARATORS, MONTH_DAY};

/// Inputs a rule may consult besides the candidate text.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Resolved title; may be empty.
    pub title: &'a str,
    pub options: &'a Options,
}

/// A named noise predicate. `matches` returning true rejects the text.
#[derive(Clone, Copy)]
pub struct NoiseRule {
    pub name: &'static str,
    pub matches: fn(&str, &RuleContext<'_>) -> bool,
}

/// Outcome of running a candidate through the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Rejected by the named rule.
    Reject(&'static str),
}

impl Verdict {
    #[must_use]
    pub fn is_keep(self) -> bool {
        self == Self::Keep
    }
}

/// Rules for text containers, in evaluation order.
pub static TEXT_RULES: &[NoiseRule] = &[
    NoiseRule { name: "too_short", matches: too_short },
    NoiseRule { name: "title_echo", matches: title_echo },
    NoiseRule { name: "clock_time", matches: clock_time },
    NoiseRule { name: "month_day", matches: month_day },
    NoiseRule { name: "metadata_separator", matches: metadata_separator },
];

/// Rules for explicit headings: no length floor, no metadata heuristics.
pub static HEADING_RULES: &[NoiseRule] = &[
    NoiseRule { name: "empty", matches: empty },
    NoiseRule { name: "title_echo", matches: title_echo },
];

/// Run `text` through `rules` in order.
#[must_use]
pub fn evaluate(rules: &[NoiseRule], text: &str, ctx: &RuleContext<'_>) -> Verdict {
    rules
        .iter()
        .find(|rule| (rule.matches)(text, ctx))
        .map_or(Verdict::Keep, |rule| Verdict::Reject(rule.name))
}

fn empty(text: &str, _ctx: &RuleContext<'_>) -> bool {
    text.trim().is_empty()
}

fn too_short(text: &str, ctx: &RuleContext<'_>) -> bool {
    text.trim().chars().count() <= ctx.options.min_text_len
}

fn title_echo(text: &str, ctx: &RuleContext<'_>) -> bool {
    !ctx.title.is_empty() && text.trim() == ctx.title
}

fn clock_time(text: &str, _ctx: &RuleContext<'_>) -> bool {
    CLOCK_TIME.is_match(text.trim())
}

fn month_day(text: &str, _ctx: &RuleContext<'_>) -> bool {
    MONTH_DAY.is_match(text.trim())
}

fn metadata_separator(text: &str, ctx: &RuleContext<'_>) -> bool {
    text.chars().count() < ctx.options.separator_max_len && text.contains(METADATA_SEPARATORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str, title: &str) -> Verdict {
        let options = Options::default();
        let ctx = RuleContext { title, options: &options };
        evaluate(TEXT_RULES, text, &ctx)
    }

    #[test]
    fn test_keeps_prose() {
        assert_eq!(check("Hello world, a long sentence.", ""), Verdict::Keep);
    }

    #[test]
    fn test_rejects_short_text() {
        assert_eq!(check("Ten chars!", ""), Verdict::Reject("too_short"));
        assert_eq!(check("   padded   ", ""), Verdict::Reject("too_short"));
        assert_eq!(check("Eleven char", ""), Verdict::Keep);
    }

    #[test]
    fn test_rejects_title_echo() {
        assert_eq!(
            check("The Headline Of The Day", "The Headline Of The Day"),
            Verdict::Reject("title_echo")
        );
        assert_eq!(check("The Headline Of The Day", ""), Verdict::Keep);
    }

    #[test]
    fn test_rejects_timestamps_and_dates() {
        // Length floor runs first; long-form stamps reach the pattern rules
        assert_eq!(check("3:45 PM", ""), Verdict::Reject("too_short"));
        assert_eq!(check("11:45      PM", ""), Verdict::Reject("clock_time"));
        assert_eq!(check("September 14, 2024", ""), Verdict::Reject("month_day"));
    }

    #[test]
    fn test_rejects_short_separator_lines() {
        assert_eq!(check("5h \u{00B7} 1.2K views", ""), Verdict::Reject("metadata_separator"));
        let long = format!("{} \u{00B7} continues", "word ".repeat(12));
        assert_eq!(check(&long, ""), Verdict::Keep);
    }

    #[test]
    fn test_heading_rules_skip_length_floor() {
        let options = Options::default();
        let ctx = RuleContext { title: "Title", options: &options };
        assert_eq!(evaluate(HEADING_RULES, "Intro", &ctx), Verdict::Keep);
        assert_eq!(evaluate(HEADING_RULES, "  ", &ctx), Verdict::Reject("empty"));
        assert_eq!(evaluate(HEADING_RULES, "Title", &ctx), Verdict::Reject("title_echo"));
    }
}
