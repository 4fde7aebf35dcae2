use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

pub const OTHER_COLOR: &str = "#8B8B8B";

static LANGUAGE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Go", "#00ADD8"),
        ("Python", "#3572A5"),
        ("JavaScript", "#F7DF1E"),
        ("TypeScript", "#3178C6"),
        ("Rust", "#DEA584"),
        ("Java", "#B07219"),
        ("C", "#555555"),
        ("C++", "#F34B7D"),
        ("C#", "#239120"),
        ("Ruby", "#CC342D"),
        ("PHP", "#4F5D95"),
        ("Swift", "#FA7343"),
        ("Kotlin", "#A97BFF"),
        ("Shell", "#89E051"),
        ("HTML", "#E34C26"),
        ("CSS", "#563D7C"),
        ("Lua", "#000080"),
        ("Dart", "#00B4AB"),
        ("Zig", "#EC915C"),
        ("Haskell", "#5E5086"),
        ("Elixir", "#6E4A7E"),
        ("Scala", "#DC322F"),
    ])
});

static EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("go", "Go"),
        ("py", "Python"),
        ("js", "JavaScript"),
        ("jsx", "JavaScript"),
        ("mjs", "JavaScript"),
        ("ts", "TypeScript"),
        ("tsx", "TypeScript"),
        ("rs", "Rust"),
        ("java", "Java"),
        ("c", "C"),
        ("h", "C"),
        ("cpp", "C++"),
        ("cc", "C++"),
        ("hpp", "C++"),
        ("cs", "C#"),
        ("rb", "Ruby"),
        ("php", "PHP"),
        ("swift", "Swift"),
        ("kt", "Kotlin"),
        ("sh", "Shell"),
        ("bash", "Shell"),
        ("zsh", "Shell"),
        ("html", "HTML"),
        ("css", "CSS"),
        ("scss", "CSS"),
        ("lua", "Lua"),
        ("dart", "Dart"),
        ("zig", "Zig"),
        ("hs", "Haskell"),
        ("ex", "Elixir"),
        ("exs", "Elixir"),
        ("scala", "Scala"),
    ])
});

/// Language of a source file, judged by its extension. `None` for non-code files.
pub fn language_for(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    EXTENSIONS.get(ext.as_str()).copied()
}

pub fn color_for(language: &str) -> &'static str {
    LANGUAGE_COLORS.get(language).copied().unwrap_or(OTHER_COLOR)
}
