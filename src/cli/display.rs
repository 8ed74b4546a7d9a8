// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the sihsearch CLI.
//!
//! Result cards, the facet table, corpus stats and the bookmark list, drawn
//! with box characters in OneDark colors (One Light when the terminal says it
//! is light). Respects `NO_COLOR` and drops all escapes when stdout is not a
//! TTY, so piping into `less` or a file gives plain text.
//!
//! # Theme detection order
//!
//! 1. `SIHSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use sihsearch::{BookmarkRecord, FacetCatalog, ProblemStatement, TermHits};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SIHSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where a bg of 7 or above (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// A named color with a dark and a light rendition.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    dark: (u8, u8, u8),
    light: (u8, u8, u8),
}

impl Color {
    fn code(self) -> String {
        match theme() {
            Theme::Dark => rgb(self.dark),
            Theme::Light => rgb(self.light),
        }
    }
}

pub const RED: Color = Color { dark: (224, 108, 117), light: (228, 86, 73) };
pub const GREEN: Color = Color { dark: (152, 195, 121), light: (80, 161, 79) };
pub const YELLOW: Color = Color { dark: (229, 192, 123), light: (193, 132, 1) };
pub const BLUE: Color = Color { dark: (97, 175, 239), light: (64, 120, 242) };
pub const MAGENTA: Color = Color { dark: (198, 120, 221), light: (166, 38, 164) };
pub const CYAN: Color = Color { dark: (86, 182, 194), light: (1, 132, 188) };
pub const GRAY: Color = Color { dark: (92, 99, 112), light: (160, 161, 167) };
pub const BRIGHT_GREEN: Color = Color { dark: (166, 226, 46), light: (68, 140, 39) };

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color with optional modifiers; plain text without a TTY.
pub fn themed(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply modifiers only (bold, dim).
pub fn styled(modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", modifiers.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color: Color) -> (String, &'static str) {
    if use_colors() {
        (color.code(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible length in chars, excluding ANSI codes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Greedy word wrap of plain text to `width` chars per line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
        if !current.is_empty() && current.chars().count() + needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (color, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{color}│{reset} {}{}{color}│{reset}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (color, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{color}┌{reset}{}{color}{}┐{reset}",
        label_part,
        "─".repeat(remaining)
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (color, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{color}├{reset}{}{color}{}┤{reset}",
        label_part,
        "─".repeat(remaining)
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (color, reset) = border(GRAY);
    println!("{color}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

fn wrapped_rows(text: &str) {
    for line in wrap(text, BOX_WIDTH - 2) {
        row(&line);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded difficulty badge (`Med` shows as `Medium`).
pub fn difficulty_badge(label: &str) -> String {
    let color = match label {
        "Easy" => GREEN,
        "Medium" | "Med" => YELLOW,
        "Hard" => RED,
        _ => GRAY,
    };
    themed(color, &[BOLD], &format!("[{}]", label))
}

/// Color-coded score value
pub fn score_value(score: u32) -> String {
    let color = if score >= 40 {
        BRIGHT_GREEN
    } else if score >= 20 {
        GREEN
    } else if score >= 10 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &format!("{:>4}", score))
}

fn submissions_label(record: &ProblemStatement) -> String {
    match record.submission_count {
        Some(count) => format!("{} submissions", count),
        None => "no submission data".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// One search result as a compact card.
pub fn result_card(record: &ProblemStatement, score: Option<u32>, breakdown: Option<&[TermHits]>) {
    section_top(&record.id);
    let header = match score {
        Some(score) => format!(
            "{} {}  {}",
            score_value(score),
            difficulty_badge(record.difficulty_label()),
            styled(&[BOLD], &truncate(&record.title, BOX_WIDTH - 20))
        ),
        None => format!(
            "{}  {}",
            difficulty_badge(record.difficulty_label()),
            styled(&[BOLD], &truncate(&record.title, BOX_WIDTH - 14))
        ),
    };
    row(&header);
    if !record.organization.is_empty() {
        row(&themed(BLUE, &[], &truncate(&record.organization, BOX_WIDTH - 2)));
    }
    if !record.summary.is_empty() {
        row(&themed(GRAY, &[], &truncate(&record.summary, BOX_WIDTH - 2)));
    }
    if !record.technology.is_empty() {
        let tags = truncate(&record.technology.join(" · "), BOX_WIDTH - 2);
        row(&themed(MAGENTA, &[], &tags));
    }
    row(&themed(GRAY, &[DIM], &submissions_label(record)));

    if let Some(breakdown) = breakdown {
        section_mid("WHY");
        for term in breakdown {
            let fields = if term.hits.any() {
                term.hits.labels().join(", ")
            } else {
                "no match".to_string()
            };
            row(&format!(
                "{} {}  {}",
                score_value(term.score),
                pad_right(&themed(CYAN, &[], &term.term), 16),
                themed(GRAY, &[], &fields)
            ));
        }
    }
    section_bot();
}

/// Summary line printed after the result cards.
pub fn result_footer(shown: usize, total: usize) {
    let text = if shown < total {
        format!("{} of {} results", shown, total)
    } else if total == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", total)
    };
    println!("{}", themed(GRAY, &[], &text));
}

/// One record in full.
pub fn record_detail(record: &ProblemStatement) {
    section_top(&record.id);
    row(&format!(
        "{}  {}",
        difficulty_badge(record.difficulty_label()),
        styled(&[BOLD], &truncate(&record.title, BOX_WIDTH - 14))
    ));
    let facts = [
        ("Organization", record.organization.clone()),
        ("Department", record.department.clone()),
        ("Category", record.category.clone()),
        ("Theme", record.theme.clone()),
        ("Solution", record.solution_type.to_string()),
        ("Submissions", submissions_label(record)),
    ];
    for (label, value) in facts.iter().filter(|(_, value)| !value.is_empty()) {
        row(&format!(
            "{} {}",
            pad_right(&themed(GRAY, &[], label), 13),
            truncate(value, BOX_WIDTH - 16)
        ));
    }

    if !record.summary.is_empty() {
        section_mid("SUMMARY");
        wrapped_rows(&record.summary);
    }
    if !record.description.is_empty() {
        section_mid("DESCRIPTION");
        wrapped_rows(&record.description);
    }

    let lists = [
        ("TECHNOLOGY", &record.technology),
        ("STAKEHOLDERS", &record.stakeholders),
        ("IMPACT AREA", &record.impact_area),
        ("DATA/RESOURCE TYPE", &record.data_resource_type),
    ];
    for (label, values) in lists.iter().filter(|(_, values)| !values.is_empty()) {
        section_mid(label);
        wrapped_rows(&values.join(" · "));
    }
    section_bot();
}

/// Every facet category with its values.
pub fn catalog_table(catalog: &FacetCatalog) {
    let mut first = true;
    for (label, values) in catalog.iter() {
        let heading = format!("{} ({})", label.to_uppercase(), values.len());
        if first {
            section_top(&heading);
            first = false;
        } else {
            section_mid(&heading);
        }
        for value in values {
            row(&truncate(value, BOX_WIDTH - 2));
        }
    }
    if !first {
        section_bot();
    }
}

/// Corpus stats. `difficulties` is (label, count) in display order.
pub fn stats_table(records: usize, bounds: Option<(u32, u32)>, difficulties: &[(String, usize)]) {
    section_top("CORPUS");
    row(&format!("{} {}", pad_right("Records", 13), records));
    if let Some((min, max)) = bounds {
        row(&format!("{} {} to {}", pad_right("Submissions", 13), min, max));
    }
    if !difficulties.is_empty() {
        section_mid("DIFFICULTY");
        for (label, count) in difficulties {
            row(&format!("{} {:>5}", pad_right(&difficulty_badge(label), 13), count));
        }
    }
    section_bot();
}

/// The saved bookmark list.
pub fn bookmark_table(bookmarks: &[BookmarkRecord]) {
    if bookmarks.is_empty() {
        println!("{}", themed(GRAY, &[], "No bookmarks yet"));
        return;
    }
    section_top(&format!("BOOKMARKS ({})", bookmarks.len()));
    for bookmark in bookmarks {
        let saved = bookmark
            .bookmarked_time()
            .map(|time| time.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        row(&format!(
            "{} {} {}",
            pad_right(&themed(CYAN, &[], &bookmark.id), 10),
            pad_right(&themed(GRAY, &[], &saved), 11),
            truncate(&bookmark.title, BOX_WIDTH - 25)
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
