use std::cmp::Ordering;
use std::rc::Rc;

/// One level of an ordering: a three-way comparison.
pub type OrderRule<'a, T> = Rc<dyn Fn(&T, &T) -> Ordering + 'a>;

/// Compare by each rule in turn; a rule only gets a say when every rule
/// before it returned `Equal`.
pub(crate) fn compare_by_rules<T>(rules: &[OrderRule<'_, T>], a: &T, b: &T) -> Ordering {
    rules
        .iter()
        .map(|rule| rule(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_first_rule_decides() {
        let by_first: OrderRule<(i32, i32)> =
            Rc::new(|a: &(i32, i32), b: &(i32, i32)| a.0.cmp(&b.0));
        let by_second_descending: OrderRule<(i32, i32)> =
            Rc::new(|a: &(i32, i32), b: &(i32, i32)| b.1.cmp(&a.1));
        let rules = vec![by_first, by_second_descending];
        assert_eq!(compare_by_rules(&rules, &(1, 5), &(2, 0)), Ordering::Less);
        assert_eq!(compare_by_rules(&rules, &(1, 5), &(1, 0)), Ordering::Less);
        assert_eq!(compare_by_rules(&rules, &(1, 0), &(1, 0)), Ordering::Equal);
    }

    #[test]
    fn test_later_rules_not_consulted() {
        let calls = Cell::new(0);
        let natural: OrderRule<i32> = Rc::new(|a: &i32, b: &i32| a.cmp(b));
        let counted: OrderRule<i32> = Rc::new(|_: &i32, _: &i32| {
            calls.set(calls.get() + 1);
            Ordering::Equal
        });
        let rules = vec![natural, counted];
        compare_by_rules(&rules, &1, &2);
        assert_eq!(calls.get(), 0);
        compare_by_rules(&rules, &2, &2);
        assert_eq!(calls.get(), 1);
    }
}
