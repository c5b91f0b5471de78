//! Lint: bracket-key labels (`[X]`) in `render.rs` must be clickable.
//!
//! Every `[1]`-style key hint shown on screen is also a tap target on mobile.
//! A label pushed with a plain `cl.push(...)` is drawn but never registered,
//! so tapping it does nothing. Labels must go through `push_clickable()` or
//! one of the render helpers built on it (`push_choice()`, `push_close()`).

use std::fs;
use std::path::Path;

const CLICKABLE_HELPERS: &[&str] = &["push_clickable(", "push_choice(", "push_close("];

/// True for patterns like `[a]`, `[5]`, `[-]`.
fn contains_bracket_key(s: &str) -> bool {
    s.as_bytes().windows(3).any(|w| {
        w[0] == b'['
            && w[2] == b']'
            && (w[1].is_ascii_alphanumeric() || b"-=!~{}|\\".contains(&w[1]))
    })
}

/// Lines with a plain `.push(` whose text carries a bracket key.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || !contains_bracket_key(line) {
                return None;
            }
            let clickable = CLICKABLE_HELPERS.iter().any(|h| line.contains(h));
            (line.contains(".push(") && !clickable).then(|| (idx + 1, trimmed.to_string()))
        })
        .collect()
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations);
        } else if path.file_name().is_some_and(|n| n == "render.rs") {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display = path.display().to_string();
            for (line_num, line) in find_bracket_key_in_push(&source) {
                violations.push((display.clone(), line_num, line));
            }
        }
    }
}

#[test]
fn render_files_register_every_key_label() {
    let games_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/games");
    let mut violations = Vec::new();
    visit_render_files(&games_dir, &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from(
            "bracket-key text [X] pushed without a click target.\n\
             Use push_clickable(), push_choice() or push_close() instead.\n\n",
        );
        for (file, line_num, line) in &violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn flags_plain_push_with_key_label() {
    let source = r#"cl.push(Line::from(" [i] 物品欄"));"#;
    assert_eq!(find_bracket_key_in_push(source).len(), 1);
}

#[test]
fn allows_clickable_helpers() {
    let sources = [
        r#"cl.push_clickable(Line::from(" [i] 物品欄"), OPEN_INVENTORY);"#,
        r#"push_choice(&mut cl, '1', "書桌", hotspot_id(0));"#,
        r#"push_close(&mut cl, "返回", CLOSE_OVERLAY);"#,
    ];
    for source in sources {
        assert!(find_bracket_key_in_push(source).is_empty(), "{source}");
    }
}

#[test]
fn plain_push_without_key_is_fine() {
    let source = r#"cl.push(Line::from("  鑰匙卡 [已裝備]"));"#;
    assert!(find_bracket_key_in_push(source).is_empty());
}

#[test]
fn ignores_comments() {
    let source = r#"// cl.push(Line::from(" [i] 物品欄"));"#;
    assert!(find_bracket_key_in_push(source).is_empty());
}

#[test]
fn bracket_key_detection() {
    assert!(contains_bracket_key("[a]"));
    assert!(contains_bracket_key("[5]"));
    assert!(contains_bracket_key("[-]"));
    assert!(!contains_bracket_key("[]"));
    assert!(!contains_bracket_key("[ab]"));
    assert!(!contains_bracket_key("abc"));
}
