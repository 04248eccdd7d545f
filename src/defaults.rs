//! Built-in pronoun records.
//!
//! Tables are plain constants; every [`Registry`](crate::Registry) builds its
//! own records from them so no two registries share mutable state.

use crate::{PronounRecord, RecordForms};

/// Subject, object, possessive, possessive adjective, reflexive.
type Row = (&'static [&'static str], &'static str, &'static str, &'static str, &'static [&'static str]);

/// Always registered: masculine, feminine and epicene defaults.
const CORE: &[Row] = &[
    (&["he"], "him", "his", "his", &["himself"]),
    (&["she"], "her", "hers", "her", &["herself"]),
    (
        &["they"],
        "them",
        "theirs",
        "their",
        &["themself", "themselves", "theirself", "theirselves"],
    ),
];

/// Registered when `extended_defaults` is set.
const EXTENDED: &[Row] = &[
    (&["it"], "it", "its", "its", &["itself"]),
    (&["you"], "you", "yours", "your", &["yourself", "yourselves"]),
    (&["I"], "me", "mine", "my", &["myself"]),
    (&["we"], "us", "ours", "our", &["ourselves", "ourself"]),
];

fn build(row: &Row) -> PronounRecord {
    let (subject, object, possessive, possessive_adjective, reflexive) = *row;
    PronounRecord::new(RecordForms::new(
        subject,
        object,
        possessive,
        possessive_adjective,
        reflexive,
    ))
    .unwrap_or_else(|_| unreachable!("built-in pronoun tables have no empty forms"))
}

/// Fresh copies of the built-in records, in registration order.
pub(crate) fn default_records(extended: bool) -> Vec<PronounRecord> {
    let extra: &[Row] = if extended { EXTENDED } else { &[] };
    CORE.iter().chain(extra).map(build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PronounForm;

    #[test]
    fn test_core_defaults() {
        let identities: Vec<_> = default_records(false)
            .iter()
            .map(|r| r.identity().to_string())
            .collect();
        assert_eq!(identities, ["he", "she", "they"]);
    }

    #[test]
    fn test_extended_defaults() {
        let records = default_records(true);
        assert_eq!(records.len(), 7);
        let we = records.iter().find(|r| r.identity() == "we").unwrap();
        assert_eq!(we.primary(PronounForm::PossessiveAdjective), "our");
    }
}
