//! Ordered form-parameter assembly for outbound requests.
//!
//! Parameters keep their insertion order and are form-encoded as-is. Absent
//! optional values are omitted entirely, never sent as null or empty, and
//! list values expand to one pair per element under a repeated key.

use std::fmt::Display;

/// Parameter mapping for one remote method call.
///
/// Values are already wire-shaped: strings, integers, or lists of strings
/// (timestamps pre-converted via [`crate::to_wire_timestamp`]).
#[derive(Debug, Clone, Default)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required field.
    pub fn push(mut self, field: &'static str, value: impl Display) -> Self {
        self.pairs.push((field, value.to_string()));
        self
    }

    /// Append an optional field, omitting the pair entirely when absent.
    pub fn push_opt(self, field: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.push(field, value),
            None => self,
        }
    }

    /// Append a list field as repeated pairs. An empty list is omitted.
    pub fn push_list(mut self, field: &'static str, values: &[&str]) -> Self {
        for value in values {
            self.pairs.push((field, (*value).to_string()));
        }
        self
    }

    /// The assembled pairs, in insertion order.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let params = Params::new()
            .push("airport", "KSFO")
            .push("howMany", 15)
            .push("offset", 0);
        let fields: Vec<_> = params.pairs().iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, ["airport", "howMany", "offset"]);
    }

    #[test]
    fn omits_absent_optionals() {
        let params = Params::new()
            .push("ident", "N12345")
            .push_opt("origin", None::<&str>)
            .push_opt("destination", Some("KLAX"));
        assert_eq!(
            params.pairs(),
            [
                ("ident", "N12345".to_string()),
                ("destination", "KLAX".to_string()),
            ]
        );
    }

    #[test]
    fn expands_lists_to_repeated_keys() {
        let params = Params::new().push_list("channels", &["16 e_filed", "16 e_arrival"]);
        assert_eq!(
            params.pairs(),
            [
                ("channels", "16 e_filed".to_string()),
                ("channels", "16 e_arrival".to_string()),
            ]
        );
    }

    #[test]
    fn empty_list_is_omitted() {
        assert!(Params::new().is_empty());
        let params = Params::new().push("alert_id", 7).push_list("channels", &[]);
        assert_eq!(params.pairs().len(), 1);
    }

    #[test]
    fn stringifies_integers() {
        let params = Params::new().push("reportType", 2).push("offset", 0u32);
        assert_eq!(
            params.pairs(),
            [("reportType", "2".to_string()), ("offset", "0".to_string())]
        );
    }
}
