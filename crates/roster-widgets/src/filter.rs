//! Case-insensitive substring filtering.
//!
//! Both sides are lowercased with [`str::to_lowercase`]; no other
//! normalization (accents, inner whitespace) is applied.  A query that is
//! empty after trimming matches everything.  Trimming only decides
//! emptiness: `" al"` still has to match with its leading space.

use crate::person::Searchable;

/// Whether `name` contains `query`, ignoring case.
///
/// `query` must already be lowercased.
fn contains_folded(name: &str, folded_query: &str) -> bool {
    name.to_lowercase().contains(folded_query)
}

/// Indices of the candidates whose name contains `query`, in list order.
pub fn matching_indices<T: Searchable>(candidates: &[T], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..candidates.len()).collect();
    }
    let folded = query.to_lowercase();
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| contains_folded(candidate.name(), &folded))
        .map(|(index, _)| index)
        .collect()
}

/// The candidates whose name contains `query`, in list order.
///
/// Returns every candidate when `query` is blank.
///
/// ```
/// use roster_widgets::filter::filter;
/// use roster_widgets::person::Person;
///
/// let people = vec![Person::new("Alice", "a"), Person::new("Bob", "b")];
/// let found = filter(&people, "AL");
/// assert_eq!(found, vec![&people[0]]);
/// assert_eq!(filter(&people, "  ").len(), 2);
/// ```
pub fn filter<'a, T: Searchable>(candidates: &'a [T], query: &str) -> Vec<&'a T> {
    matching_indices(candidates, query)
        .into_iter()
        .map(|index| &candidates[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Person;
    use proptest::prelude::*;

    fn people() -> Vec<Person> {
        vec![
            Person::new("Alice", "a"),
            Person::new("Bob", "b"),
            Person::new("Malika", "m"),
            Person::new("Jan Albert", "j"),
        ]
    }

    #[test]
    fn substring_anywhere_in_name() {
        let people = people();
        let names: Vec<&str> = filter(&people, "al").iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice", "Malika", "Jan Albert"]);
    }

    #[test]
    fn query_case_is_folded() {
        let people = people();
        assert_eq!(filter(&people, "BOB"), vec![&people[1]]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        assert!(filter(&people(), "zzz").is_empty());
    }

    #[test]
    fn blank_query_returns_everything() {
        let people = people();
        assert_eq!(matching_indices(&people, ""), vec![0, 1, 2, 3]);
        assert_eq!(matching_indices(&people, " \t "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn padded_query_is_not_trimmed_for_matching() {
        let people = people();
        assert_eq!(filter(&people, " al"), vec![&people[3]]);
    }

    #[test]
    fn works_on_owned_strings() {
        let names: Vec<String> = vec!["Ada".into(), "Adrian".into(), "Bea".into()];
        assert_eq!(matching_indices(&names, "adr"), vec![1]);
        assert_eq!(filter(&names, "a").len(), 3);
    }

    #[test]
    fn works_on_plain_strings() {
        let names = ["Apple", "banana", "Cherry"];
        assert_eq!(filter(&names, "AN"), vec![&"banana"]);
    }

    fn arb_people() -> impl Strategy<Value = Vec<Person>> {
        proptest::collection::vec("[a-zA-Z ]{0,12}", 0..24).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| Person::new(name, format!("p{i}")))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn blank_queries_keep_list_intact(people in arb_people(), spaces in " {0,4}") {
            let kept: Vec<Person> = filter(&people, &spaces).into_iter().cloned().collect();
            prop_assert_eq!(kept, people);
        }

        #[test]
        fn kept_and_dropped_partition_by_containment(people in arb_people(), query in "[a-zA-Z]{1,3}") {
            let kept = matching_indices(&people, &query);
            let folded = query.to_lowercase();
            for (i, person) in people.iter().enumerate() {
                let contains = person.name.to_lowercase().contains(&folded);
                prop_assert_eq!(kept.contains(&i), contains);
            }
        }

        #[test]
        fn order_is_preserved(people in arb_people(), query in "[a-zA-Z]{1,2}") {
            let kept = matching_indices(&people, &query);
            prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn filtering_twice_changes_nothing(people in arb_people(), query in "[a-zA-Z ]{0,3}") {
            let once: Vec<Person> = filter(&people, &query).into_iter().cloned().collect();
            let twice: Vec<Person> = filter(&once, &query).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }
    }
}
