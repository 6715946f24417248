use std::sync::LazyLock;

use regex::Regex;

use crate::domain::path::ParsedPath;

static ITEM_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[id=((?:[^,\]\\]|\\.)*)(?:,label=((?:[^\]\\]|\\.)*))?\]")
        .expect("item tag pattern is valid")
});

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-]+").expect("separator pattern is valid"));

/// Splits a change path into its root field, item identity and property, and
/// renders human titles for them.
///
/// `banners[id=4,label=Hero].image_url` becomes root `banners`, item
/// `Hero`/`4`, property `image_url`, titled `Banners: Hero — Image Url`.
pub fn parse_path(path: &str) -> ParsedPath {
    let (root_segment, remainder) = split_root(path);
    let root = root_segment
        .split('[')
        .next()
        .unwrap_or_default()
        .to_string();

    let (item_id, item_label) = match ITEM_TAG.captures_iter(root_segment).last() {
        Some(captures) => (
            captures.get(1).map(|id| unescape_tag_text(id.as_str())),
            captures.get(2).map(|label| unescape_tag_text(label.as_str())),
        ),
        None => (None, None),
    };

    let root_human = humanize(&root);
    let prop = remainder.filter(|prop| !prop.is_empty()).map(str::to_string);
    let prop_human = prop.as_deref().map(humanize);
    let item = item_label.as_deref().or(item_id.as_deref());

    let human_title = match (item, prop_human.as_deref()) {
        (Some(item), Some(prop)) => format!("{root_human}: {item} — {prop}"),
        (Some(item), None) => format!("{root_human}: {item}"),
        (None, Some(prop)) => format!("{root_human} — {prop}"),
        (None, None) => root_human.clone(),
    };
    let human_field = prop_human.clone().unwrap_or_else(|| root_human.clone());

    ParsedPath {
        root,
        root_human,
        item_label,
        item_id,
        prop,
        prop_human,
        human_title,
        human_field,
    }
}

/// Splits on the first `.` that is not inside a bracketed tag.
fn split_root(path: &str) -> (&str, Option<&str>) {
    let mut bracket_depth = 0usize;
    let mut chars = path.char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '.' if bracket_depth == 0 => return (&path[..index], Some(&path[index + 1..])),
            _ => {}
        }
    }
    (path, None)
}

fn unescape_tag_text(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => unescaped.extend(chars.next()),
            _ => unescaped.push(ch),
        }
    }
    unescaped
}

/// `menu_items` / `menu-items` / `menu  items` all become `Menu Items`.
pub fn humanize(text: &str) -> String {
    SEPARATOR_RUN
        .replace_all(text, " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
