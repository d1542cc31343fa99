//! Input predicates. None of them fail: callers decide what to do with a
//! `false` answer.

/// A title has at least one character, does not start or end with a
/// space and never contains two consecutive whitespace characters.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty()
        && !title.starts_with(' ')
        && !title.ends_with(' ')
        && !title
            .chars()
            .zip(title.chars().skip(1))
            .any(|(a, b)| a.is_whitespace() && b.is_whitespace())
}

/// An uppercase Latin letter followed by lowercase Latin letters only.
pub fn is_valid_person_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_lowercase())
}

/// Exactly two valid person names separated by a single space.
pub fn is_valid_full_name(name: &str) -> bool {
    let names = name.split(' ').collect::<Vec<_>>();
    names.len() == 2 && names.iter().all(|n| is_valid_person_name(n))
}

pub fn is_positive_integer(n: i64) -> bool {
    n >= 1
}

pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && score >= 0.0
}

/// Homework ids go from 1 to the number of presentations.
pub fn is_valid_homework(homework: usize, presentations: usize) -> bool {
    (1..=presentations).contains(&homework)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        for title in ["JavaScript OOP", "A", "Modules and Patterns", "Part 2: Closures"] {
            assert!(is_valid_title(title), "{title:?} should be valid");
        }
        for title in ["", " Leading", "Trailing ", "Two  spaces", "Tab\t\tdouble", " "] {
            assert!(!is_valid_title(title), "{title:?} should be invalid");
        }
    }

    #[test]
    fn test_person_names() {
        for name in ["Alice", "A", "Zed"] {
            assert!(is_valid_person_name(name), "{name:?} should be valid");
        }
        for name in ["", "alice", "ALice", "Al1ce", "Élodie", "Anne-Marie", "Bob "] {
            assert!(!is_valid_person_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_full_names() {
        assert!(is_valid_full_name("Alice Smith"));
        assert!(is_valid_full_name("A B"));
        assert!(!is_valid_full_name("alice smith"));
        assert!(!is_valid_full_name("Alice"));
        assert!(!is_valid_full_name("Alice Mary Smith"));
        assert!(!is_valid_full_name("Alice smith"));
        assert!(!is_valid_full_name(""));
        for name in [" Alice Smith", "Alice  Smith", "Alice Smith ", "Alice\tSmith"] {
            assert!(!is_valid_full_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_numbers() {
        assert!(is_positive_integer(1));
        assert!(!is_positive_integer(0));
        assert!(!is_positive_integer(-7));
        assert!(is_valid_score(0.0));
        assert!(is_valid_score(99.5));
        assert!(!is_valid_score(-0.5));
        assert!(!is_valid_score(f64::NAN));
        assert!(!is_valid_score(f64::INFINITY));
    }

    #[test]
    fn test_homework_range() {
        assert!(is_valid_homework(1, 4));
        assert!(is_valid_homework(4, 4));
        assert!(!is_valid_homework(0, 4));
        assert!(!is_valid_homework(5, 4));
    }
}
