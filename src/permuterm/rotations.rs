use crate::alphabet::EOW;

/// `s[mid..] + s[..mid]`. `mid` must be a char boundary.
pub fn rotate(s: &str, mid: usize) -> String {
    let mut rotated = String::with_capacity(s.len());
    rotated.push_str(&s[mid..]);
    rotated.push_str(&s[..mid]);
    rotated
}

/// Every rotation of `term` followed by the end-of-word marker.
///
/// "abc" -> "abc$", "bc$a", "c$ab", "$abc"
pub fn rotations(term: &str) -> Vec<String> {
    let marked = format!("{}{}", term, EOW);
    marked.char_indices()
        .map(|(i, _)| rotate(&marked, i))
        .collect()
}


#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::alphabet::EOW;
    use crate::permuterm::rotations::{rotate, rotations};

    #[test]
    fn rotates_with_marker() {
        assert_eq!(rotations("abc"), vec!["abc$", "bc$a", "c$ab", "$abc"]);
    }

    #[test]
    fn empty_term_has_one_rotation() {
        assert_eq!(rotations(""), vec!["$"]);
    }

    #[test]
    fn one_more_rotation_than_letters() {
        for term in ["a", "abbas", "abbasid", "mississippi"] {
            let all = rotations(term);
            assert_eq!(all.len(), term.len() + 1);
            assert!(all.iter().all(|r| r.matches(EOW).count() == 1));
            let distinct: BTreeSet<_> = all.iter().collect();
            assert_eq!(distinct.len(), all.len());
        }
    }

    #[test]
    fn rotating_the_set_reproduces_it() {
        let all: BTreeSet<String> = rotations("abbess").into_iter().collect();
        let shifted: BTreeSet<String> = all.iter().map(|r| rotate(r, 1)).collect();
        assert_eq!(all, shifted);
    }
}
