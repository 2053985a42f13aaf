fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/default_options.toml",
        include_str!("src/default_options.toml"),
    );
    validate_tables(
        include_str!("src/mora/hiragana.csv"),
        include_str!("src/mora/romanization.csv"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_tables(hiragana: &str, romanization: &str) {
    let hira: Vec<&str> = hiragana.lines().filter(|l| !l.trim().is_empty()).collect();
    let roman: Vec<&str> = romanization
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    if hira.len() != roman.len() {
        panic!(
            "mora tables disagree on row count: {} vs {}",
            hira.len(),
            roman.len()
        );
    }
    for (line, (h, r)) in hira.iter().zip(&roman).enumerate() {
        let (hc, rc) = (h.split(',').count(), r.split(',').count());
        if hc != 6 || rc != 6 {
            panic!("mora tables: line {} has {hc}/{rc} fields, expected 6", line + 1);
        }
    }
}
