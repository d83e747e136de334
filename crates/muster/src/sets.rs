//! Order-preserving set operations over sequences of field names.

/// Returns true if `items` contains `needle`.
pub fn contains<T, U>(items: &[T], needle: &U) -> bool
where
    T: AsRef<U>,
    U: PartialEq + ?Sized,
{
    items.iter().any(|item| item.as_ref() == needle)
}

/// Elements of `a` followed by elements of `b`, each kept at its first
/// occurrence.
pub fn union<'a, T, U>(a: &'a [T], b: &'a [T]) -> Vec<&'a U>
where
    T: AsRef<U>,
    U: PartialEq + ?Sized,
{
    let mut out: Vec<&U> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        let item = item.as_ref();
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Elements of `a` not present in `b`, in `a`'s order.
pub fn difference<'a, T, B, U>(a: &'a [T], b: &[B]) -> Vec<&'a U>
where
    T: AsRef<U>,
    B: AsRef<U>,
    U: PartialEq + ?Sized,
{
    a.iter()
        .map(AsRef::<U>::as_ref)
        .filter(|item| !contains(b, *item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let items = vec!["a".to_owned(), "b".to_owned()];
        assert!(contains::<_, str>(&items, "b"));
        assert!(!contains::<_, str>(&items, "c"));
    }

    #[test]
    fn test_union_dedupes_in_order() {
        let a = ["x", "y"];
        let b = ["y", "z", "x"];
        assert_eq!(union::<_, str>(&a, &b), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_difference_keeps_order() {
        let a = ["first", "birthyear", "last", "extra"];
        let b = vec!["first".to_owned(), "last".to_owned()];
        assert_eq!(difference::<_, _, str>(&a, &b), vec!["birthyear", "extra"]);
    }

    #[test]
    fn test_difference_with_empty() {
        let a: [&str; 0] = [];
        let b = ["a"];
        assert!(difference::<_, _, str>(&a, &b).is_empty());
        assert_eq!(difference::<_, _, str>(&b, &a), vec!["a"]);
    }
}
