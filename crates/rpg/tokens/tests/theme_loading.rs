//! Loading themes from disk and applying them to tokens.

use std::io::Write;
use std::path::Path;

use rpg_core::Counter;
use rpg_tokens::{CounterTheme, CounterToken, DigitPlace, ThemeLoader};
use rpg_vectors::Vector3;
use tempfile::NamedTempFile;

fn write_theme(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const BRASS: &str = r#"
background = "/usr/alice/share/tokens/counters/brass/background.png"
digits = [
    "/usr/alice/share/tokens/counters/brass/0.png",
    "/usr/alice/share/tokens/counters/brass/1.png",
    "/usr/alice/share/tokens/counters/brass/2.png",
    "/usr/alice/share/tokens/counters/brass/3.png",
    "/usr/alice/share/tokens/counters/brass/4.png",
    "/usr/alice/share/tokens/counters/brass/5.png",
    "/usr/alice/share/tokens/counters/brass/6.png",
    "/usr/alice/share/tokens/counters/brass/7.png",
    "/usr/alice/share/tokens/counters/brass/8.png",
    "/usr/alice/share/tokens/counters/brass/9.png",
]
"#;

#[test]
fn loads_a_standard_theme() {
    let file = write_theme(BRASS);
    let theme = ThemeLoader::load(file.path()).unwrap();
    assert_eq!(
        theme,
        CounterTheme::standard(Path::new("/usr"), "alice", "brass")
    );
}

#[test]
fn themed_token_draws_its_value() {
    let file = write_theme(BRASS);
    let theme = ThemeLoader::load(file.path()).unwrap();

    let mut token = CounterToken::new().with_theme(theme).unwrap();
    token.counter.add(42);

    let images = token.digit_images().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(
        images[&DigitPlace::Ones],
        "/usr/alice/share/tokens/counters/brass/2.png"
    );
    assert_eq!(
        images[&DigitPlace::Tens],
        "/usr/alice/share/tokens/counters/brass/4.png"
    );
}

#[test]
fn short_digit_list_is_rejected() {
    let file = write_theme(
        r#"
background = "bg.png"
digits = ["0.png", "1.png"]
"#,
    );
    let err = ThemeLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("expected 10"), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_theme("background = \"bg.png\"\ndigits = []\nfont = \"serif\"\n");
    let err = ThemeLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse theme TOML"), "{err}");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ThemeLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "{err}");
}

#[test]
fn token_json_embeds_canonical_counter() {
    let mut token = CounterToken::new();
    token.counter = Counter::with_value(7);
    token.set_position(Vector3::new(1.0, 2.0, 3.0));

    let json = serde_json::to_value(&token).unwrap();
    assert_eq!(
        json["counter"],
        serde_json::json!({"min": 0, "max": null, "val": 7, "inc": 1, "orig": 7})
    );
    assert_eq!(json["position"], serde_json::json!({"x": 1.0, "y": 2.0, "z": 3.0}));

    let back: CounterToken = serde_json::from_value(json).unwrap();
    assert_eq!(back, token);
}
