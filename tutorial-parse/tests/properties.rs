//! Property-based tests using proptest.

use proptest::prelude::*;

fn document(front_matter: &str, steps: &[(Vec<(String, String)>, String)]) -> String {
    let mut out = format!("---\n{front_matter}---\n");
    for (params, body) in steps {
        out.push_str("///\n");
        for (key, value) in params {
            out.push_str(&format!("{key}: {value}\n"));
        }
        out.push_str("///\n");
        out.push_str(body);
        out.push('\n');
    }
    out
}

proptest! {
    /// Arbitrary input either parses or fails with an error, never panics.
    #[test]
    fn any_input_no_panic(input in "\\PC{0,500}") {
        let _ = tutorial_parse::parse(&input);
    }

    /// The Nth step is numbered N.
    #[test]
    fn steps_numbered_sequentially(
        steps in prop::collection::vec(
            (
                prop::collection::vec(("[a-z]{1,8}", "[A-Za-z0-9 ]{0,12}"), 0..3),
                "[A-Za-z .]{0,40}",
            ),
            0..12,
        )
    ) {
        let input = document("", &steps);
        let doc = tutorial_parse::parse(&input).unwrap();
        prop_assert_eq!(doc.steps.len(), steps.len());
        for (idx, step) in doc.steps.iter().enumerate() {
            prop_assert_eq!(step.number, idx + 1);
        }
    }

    /// Keys come out lowercase and neither keys nor values carry surrounding whitespace.
    #[test]
    fn block_keys_normalised(
        entries in prop::collection::vec(("[A-Za-z_]{1,10}", "[ A-Za-z0-9:/.]{0,20}", " {0,3}"), 0..8)
    ) {
        let text: String = entries
            .iter()
            .map(|(key, value, pad)| format!("{pad}{key}{pad}:{pad}{value}{pad}\n"))
            .collect();
        let values = tutorial_parse::parse_block(&text).unwrap();
        for (key, value) in &values {
            prop_assert_eq!(key, &key.to_lowercase());
            prop_assert_eq!(key.trim(), key.as_str());
            prop_assert_eq!(value.trim(), value.as_str());
        }
        for (key, _, _) in &entries {
            prop_assert!(values.contains_key(&key.to_lowercase()));
        }
    }
}
