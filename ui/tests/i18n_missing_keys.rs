use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides exactly the keys present
/// in the fallback (en) `makerspace-ui.ftl`, and that every id derived from
/// the page content resolves in the fallback.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/makerspace-ui.ftl`
/// 2. Copy all keys from `en/makerspace-ui.ftl`
/// 3. Add it to `SUPPORTED_LOCALES` and to the list below.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    const EN: &str = include_str!("../i18n/en/makerspace-ui.ftl");
    const AR: &str = include_str!("../i18n/ar/makerspace-ui.ftl");

    let fallback_keys = extract_keys(EN);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");

    let locales: &[(&str, &str)] = &[
        ("ar", AR),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        let extra: BTreeSet<&String> = keys.difference(&fallback_keys).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to en:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn content_ids_resolve_in_fallback() {
    const EN: &str = include_str!("../i18n/en/makerspace-ui.ftl");
    let fallback_keys = extract_keys(EN);

    let mut missing: Vec<String> = ui::core::content::SITE
        .message_keys()
        .into_iter()
        .filter(|k| !fallback_keys.contains(k))
        .collect();
    missing.sort();

    assert!(
        missing.is_empty(),
        "content/site.json refers to {} undefined message id(s):\n  {}",
        missing.len(),
        missing.join("\n  ")
    );
}

#[test]
fn every_supported_locale_has_a_bundle() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    for locale in ui::core::locale::SUPPORTED_LOCALES.iter() {
        let file = root.join(locale.code).join("makerspace-ui.ftl");
        assert!(file.exists(), "no bundle for supported locale {}", locale.code);
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
