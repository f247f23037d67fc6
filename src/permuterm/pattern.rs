use std::fmt::{Display, Formatter};

use nom::branch::alt;
use nom::character::complete::{alpha0, char};
use nom::combinator::{all_consuming, map};
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

use crate::alphabet::{normalize_pattern, EOW, WILDCARD};
use crate::error::QueryError;
use crate::permuterm::rotations::rotate;

/// The wildcard shapes the permuterm index can answer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum WildcardPattern {
    /// `ab*`
    Prefix(String),
    /// `*ab`
    Suffix(String),
    /// `a*b`
    Infix(String, String),
    /// `*ab*`
    Substring(String),
}

pub fn pattern(input: &str) -> IResult<&str, WildcardPattern> {
    alt((substring, single))(input)
}

fn substring(input: &str) -> IResult<&str, WildcardPattern> {
    map(
        all_consuming(delimited(char(WILDCARD), alpha0, char(WILDCARD))),
        |inner: &str| WildcardPattern::Substring(inner.to_string()),
    )(input)
}

fn single(input: &str) -> IResult<&str, WildcardPattern> {
    use WildcardPattern::*;
    map(
        all_consuming(separated_pair(alpha0, char(WILDCARD), alpha0)),
        |(head, tail): (&str, &str)| {
            if head.is_empty() {
                Suffix(tail.to_string())
            } else if tail.is_empty() {
                Prefix(head.to_string())
            } else {
                Infix(head.to_string(), tail.to_string())
            }
        },
    )(input)
}

impl WildcardPattern {
    /// Case-folds and classifies a raw query token.
    pub fn parse(raw: &str) -> Result<WildcardPattern, QueryError> {
        let folded = normalize_pattern(raw)?;
        pattern(&folded)
            .map(|(_, p)| p)
            .map_err(|_| QueryError::UnsupportedWildcardPattern(raw.to_string()))
    }

    /// The permuterm prefix that answers this pattern.
    ///
    /// A single wildcard is moved to the end by rotating `pattern$` and then
    /// dropped, so `X*Y` becomes `Y$X`. `*X*` needs no rotation: some
    /// rotation of every matching term starts with `X`.
    pub fn permuterm_key(&self) -> String {
        match self {
            WildcardPattern::Substring(inner) => inner.clone(),
            single => {
                let marked = format!("{}{}", single, EOW);
                let star = marked.find(WILDCARD).unwrap_or(marked.len() - 1);
                let mut key = rotate(&marked, star + 1);
                key.pop();
                key
            }
        }
    }
}

impl Display for WildcardPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use WildcardPattern::*;
        match self {
            Prefix(head) => write!(f, "{}*", head),
            Suffix(tail) => write!(f, "*{}", tail),
            Infix(head, tail) => write!(f, "{}*{}", head, tail),
            Substring(inner) => write!(f, "*{}*", inner),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::error::QueryError;
    use crate::permuterm::pattern::WildcardPattern;
    use crate::permuterm::pattern::WildcardPattern::*;

    fn parse(s: &str) -> WildcardPattern {
        WildcardPattern::parse(s).unwrap()
    }

    #[test]
    fn classifies_supported_shapes() {
        assert_eq!(parse("abb*"), Prefix("abb".to_string()));
        assert_eq!(parse("*bas"), Suffix("bas".to_string()));
        assert_eq!(parse("a*s"), Infix("a".to_string(), "s".to_string()));
        assert_eq!(parse("*ab*"), Substring("ab".to_string()));
    }

    #[test]
    fn folds_case() {
        assert_eq!(parse("AbB*"), Prefix("abb".to_string()));
    }

    #[test]
    fn bare_wildcards() {
        assert_eq!(parse("*"), Suffix("".to_string()));
        assert_eq!(parse("**"), Substring("".to_string()));
    }

    #[test]
    fn rejects_other_shapes() {
        for p in ["ab**s", "*a*b", "a*b*", "a*b*c", "***", "*a**"] {
            assert_eq!(WildcardPattern::parse(p),
                       Err(QueryError::UnsupportedWildcardPattern(p.to_string())),
                       "{}", p);
        }
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(WildcardPattern::parse("ab1*"), Err(QueryError::InvalidCharacter(_))));
        assert!(matches!(WildcardPattern::parse("$ab*"), Err(QueryError::InvalidCharacter(_))));
    }

    #[test]
    fn rotates_wildcard_to_the_end() {
        assert_eq!(parse("abb*").permuterm_key(), "$abb");
        assert_eq!(parse("*bas").permuterm_key(), "bas$");
        assert_eq!(parse("a*s").permuterm_key(), "s$a");
        assert_eq!(parse("ab*cd").permuterm_key(), "cd$ab");
        assert_eq!(parse("*").permuterm_key(), "$");
    }

    #[test]
    fn substring_key_is_not_rotated() {
        assert_eq!(parse("*ab*").permuterm_key(), "ab");
        assert_eq!(parse("**").permuterm_key(), "");
    }

    #[test]
    fn displays_as_written() {
        for p in ["abb*", "*bas", "a*s", "*ab*"] {
            assert_eq!(parse(p).to_string(), p);
        }
    }
}
