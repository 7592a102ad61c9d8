//! LaTeX markup cleanup for bibliography field values.
//!
//! BibTeX fields exported by ADS and friends carry accent macros
//! (`\"o`, `\'e`) and journal-name macros (`\apj`, `\mnras`). Rendered
//! HTML wants plain Unicode and spelled-out journal names.

/// Accent macro to Unicode replacements, applied before brace stripping.
const ACCENTS: &[(&str, &str)] = &[
    (r#"\"a"#, "ä"),
    (r#"\"o"#, "ö"),
    (r#"\"u"#, "ü"),
    (r#"\"A"#, "Ä"),
    (r#"\"O"#, "Ö"),
    (r#"\"U"#, "Ü"),
    (r"\'a", "á"),
    (r"\'e", "é"),
    (r"\'i", "í"),
    (r"\'o", "ó"),
    (r"\'u", "ú"),
    (r"\`a", "à"),
    (r"\`e", "è"),
    (r"\`i", "ì"),
    (r"\`o", "ò"),
    (r"\`u", "ù"),
    (r"\~n", "ñ"),
    (r"\ss", "ß"),
    (r"\^a", "â"),
    (r"\^e", "ê"),
    (r"\^i", "î"),
    (r"\^o", "ô"),
    (r"\^u", "û"),
];

/// Journal macro expansions.
const JOURNAL_MACROS: &[(&str, &str)] = &[
    (r"\pasj", "Publications of the Astronomical Society of Japan"),
    (r"\nat", "Nature"),
    (r"\icarus", "Icarus"),
    (r"\aj", "Astronomical Journal"),
    (r"\apj", "Astrophysical Journal"),
    (r"\apjl", "ApJL"),
    (r"\apjs", "ApJS"),
    (r"\pasp", "PASP"),
    (r"\mnras", "MNRAS"),
    (r"\aap", "Astronomy & Astrophysics"),
    (r"\grl", "GRL"),
    (r"\psj", "PSJ"),
    (r"\araa", "ARAA"),
    (r"\gca", "GCA"),
];

/// Replace known accent macros with Unicode and strip grouping braces.
pub fn latex_to_unicode(text: &str) -> String {
    let mut out = text.to_string();
    for (macro_seq, unicode) in ACCENTS {
        out = out.replace(macro_seq, unicode);
    }
    out.replace(['{', '}'], "")
}

/// Expand a journal macro, or pass an already-plain name through trimmed.
pub fn normalize_journal(journal: &str) -> String {
    let journal = journal.trim();
    JOURNAL_MACROS
        .iter()
        .find(|(macro_seq, _)| *macro_seq == journal)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| journal.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_replacement() {
        assert_eq!(latex_to_unicode(r#"M\"uller"#), "Müller");
        assert_eq!(latex_to_unicode(r"Jos\'e"), "José");
        assert_eq!(latex_to_unicode(r"Gau\ss"), "Gauß");
    }

    #[test]
    fn test_brace_stripping() {
        assert_eq!(latex_to_unicode("{Hayabusa2} Mission"), "Hayabusa2 Mission");
        assert_eq!(latex_to_unicode("{{Nested}}"), "Nested");
    }

    #[test]
    fn test_accents_applied_before_braces() {
        assert_eq!(latex_to_unicode(r#"{\"O}zel"#), "Özel");
    }

    #[test]
    fn test_journal_macro_expansion() {
        assert_eq!(normalize_journal(r"\apj"), "Astrophysical Journal");
        assert_eq!(normalize_journal(r" \mnras "), "MNRAS");
    }

    #[test]
    fn test_unknown_journal_passes_through() {
        assert_eq!(normalize_journal("  Planetary Science Journal "), "Planetary Science Journal");
        assert_eq!(normalize_journal(r"\unknown"), r"\unknown");
    }
}
