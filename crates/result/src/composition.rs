//! Plain function composition

/// Forward composition (f >> g)
pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_compose_runs_left_to_right() {
        let add_one = |x: i32| x + 1;
        let multiply_two = |x: i32| x * 2;

        let composed = forward_compose(add_one, multiply_two);
        assert_eq!(composed(5), 12); // (5 + 1) * 2
    }

    #[test]
    fn test_forward_compose_changes_type() {
        let composed = forward_compose(str::len, |n: usize| n as f64 / 2.0);

        assert_eq!(composed("fnord"), 2.5);
    }
}
