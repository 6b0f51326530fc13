//! Global search matching.

use super::field::NormalizedField;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trims, lower-cases and strips diacritics, so `" Vénus "` becomes `"venus"`.
///
/// Letters whose mark is part of the glyph (`ł`, `ø`, `ß`, ...) don't decompose,
/// so they are folded separately.
pub fn normalize_search_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

/// Latin letters with a built-in stroke, ligature or special form.
fn fold_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'ł' | 'ŀ' => "l",
        'ø' => "o",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        'ƀ' => "b",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        'ĳ' => "ij",
        _ => return None,
    };
    Some(folded)
}

/// Whether any globally searchable field of `item` contains `normalized_search`.
///
/// `normalized_search` must already be the output of [`normalize_search_input`].
pub fn matches_search<T>(item: &T, fields: &[NormalizedField<T>], normalized_search: &str) -> bool {
    fields
        .iter()
        .filter(|field| field.enable_global_search)
        .any(|field| {
            normalize_search_input(&field.value(item).to_string()).contains(normalized_search)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataview::field::{normalize_fields, Field};
    use serde_json::{json, Value};

    #[test]
    fn strips_accents_case_and_padding() {
        assert_eq!(normalize_search_input("  Vénus "), "venus");
        assert_eq!(normalize_search_input("ÅNGSTRÖM"), "angstrom");
        assert_eq!(normalize_search_input(""), "");
    }

    #[test]
    fn folds_letters_without_decomposition() {
        assert_eq!(normalize_search_input("Łódź"), "lodz");
        assert_eq!(normalize_search_input("Øresund"), "oresund");
        assert_eq!(normalize_search_input("Straße"), "strasse");
        assert_eq!(normalize_search_input("Æsir Đakovo"), "aesir dakovo");
    }

    #[test]
    fn search_finds_stroked_letters() {
        let fields: Vec<Field<Value>> = vec![Field::new("city").searchable(true)];
        let fields = normalize_fields(&fields);
        let (lodz, oresund) = (json!({ "city": "Łódź" }), json!({ "city": "Øresund" }));
        assert!(matches_search(&lodz, &fields, &normalize_search_input("lodz")));
        assert!(matches_search(&oresund, &fields, &normalize_search_input("oresund")));
        assert!(!matches_search(&oresund, &fields, &normalize_search_input("lodz")));
    }

    #[test]
    fn only_searchable_fields_are_consulted() {
        let fields: Vec<Field<Value>> = vec![
            Field::new("title").searchable(true),
            Field::new("description"),
        ];
        let fields = normalize_fields(&fields);
        let item = json!({ "title": "Vénus", "description": "second planet" });

        assert!(matches_search(&item, &fields, "venus"));
        assert!(!matches_search(&item, &fields, "planet"));
    }

    #[test]
    fn non_text_values_are_coerced() {
        let fields: Vec<Field<Value>> = vec![Field::new("satellites").searchable(true)];
        let fields = normalize_fields(&fields);
        assert!(matches_search(&json!({ "satellites": 14 }), &fields, "14"));
        assert!(!matches_search(&json!({}), &fields, "14"));
    }
}
