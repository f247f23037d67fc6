use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use serde::Serialize;

/// What one query token produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Found { query: String, term: String },
    NotFound { query: String },
    Matches { query: String, terms: Vec<String> },
    /// The query could not be run: a bad character or an unsupported
    /// wildcard shape.
    Rejected { query: String, reason: String },
}

impl Answer {
    pub fn query(&self) -> &str {
        match self {
            Answer::Found { query, .. }
            | Answer::NotFound { query }
            | Answer::Matches { query, .. }
            | Answer::Rejected { query, .. } => query,
        }
    }

    /// Terms this answer reports, if any.
    pub fn terms(&self) -> Vec<&str> {
        match self {
            Answer::Found { term, .. } => vec![term.as_str()],
            Answer::Matches { terms, .. } => terms.iter().map(String::as_str).collect(),
            _ => vec![],
        }
    }

    /// Writes the answer as text lines, or as a single JSON line.
    pub fn write_to<W: Write>(&self, out: &mut W, json: bool) -> io::Result<()> {
        if json {
            serde_json::to_writer(&mut *out, self)?;
            return writeln!(out);
        }
        match self {
            Answer::Matches { terms, .. } if terms.is_empty() => Ok(()),
            _ => writeln!(out, "{}", self),
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Found { term, .. } => write!(f, "[{}] found!", term),
            Answer::NotFound { query } => write!(f, "[{}] not found!", query),
            Answer::Matches { terms, .. } => write!(f, "{}", terms.join("\n")),
            Answer::Rejected { reason, .. } => write!(f, "{}", reason),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::wordlist::answer::Answer;

    fn render(answer: &Answer, json: bool) -> String {
        let mut out = vec![];
        answer.write_to(&mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_mirrors_query_loop() {
        let found = Answer::Found { query: "abbas".to_string(), term: "Abbas".to_string() };
        assert_eq!(render(&found, false), "[Abbas] found!\n");

        let missing = Answer::NotFound { query: "zzz".to_string() };
        assert_eq!(render(&missing, false), "[zzz] not found!\n");

        let matches = Answer::Matches {
            query: "abb*".to_string(),
            terms: vec!["abbas".to_string(), "abbess".to_string()],
        };
        assert_eq!(render(&matches, false), "abbas\nabbess\n");
    }

    #[test]
    fn empty_match_prints_nothing() {
        let none = Answer::Matches { query: "x*".to_string(), terms: vec![] };
        assert_eq!(render(&none, false), "");
    }

    #[test]
    fn json_output_is_tagged() {
        let found = Answer::Found { query: "cab".to_string(), term: "Cab".to_string() };
        assert_eq!(render(&found, true),
                   "{\"kind\":\"found\",\"query\":\"cab\",\"term\":\"Cab\"}\n");

        let none = Answer::Matches { query: "x*".to_string(), terms: vec![] };
        let value: serde_json::Value = serde_json::from_str(&render(&none, true)).unwrap();
        assert_eq!(value["kind"], "matches");
        assert_eq!(value["terms"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn accessors() {
        let matches = Answer::Matches { query: "*ab*".to_string(), terms: vec!["cab".to_string()] };
        assert_eq!(matches.query(), "*ab*");
        assert_eq!(matches.terms(), vec!["cab"]);
        assert!(Answer::NotFound { query: "q".to_string() }.terms().is_empty());
    }
}
