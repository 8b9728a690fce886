//! Property-based tests for evaluation and simplification.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        ctxt::{Ctxt, CtxtBuilder, DivMode},
        eval::evaluate,
        expr::Expr,
        primitive::{constant, int},
        simplify::{simplify, simplify_with},
    };

    // Small constants, so that zeros and ones show up often
    fn leaf() -> impl Strategy<Value = Expr> {
        prop_oneof![
            Just(Expr::variable()),
            (-3i32..=3).prop_map(constant),
        ]
    }

    // Trees of up to 6 levels
    fn expr() -> impl Strategy<Value = Expr> {
        leaf().prop_recursive(6, 64, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sum(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::product(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::difference(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::quotient(l, r)),
            ]
        })
    }

    // Trees without the variable
    fn constant_expr() -> impl Strategy<Value = Expr> {
        (-3i32..=3).prop_map(constant).prop_recursive(5, 32, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sum(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::product(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::difference(l, r)),
                (inner.clone(), inner).prop_map(|(l, r)| Expr::quotient(l, r)),
            ]
        })
    }

    fn div_mode() -> impl Strategy<Value = DivMode> {
        prop_oneof![Just(DivMode::Floor), Just(DivMode::Trunc), Just(DivMode::Euclid)]
    }

    proptest! {
        #[test]
        fn simplify_preserves_value(e in expr(), x in -5i32..=5) {
            let x = int(x);
            if let Ok(value) = evaluate(&e, &x) {
                // a zero divisor found while folding would also have been hit by evaluation
                let simplified = simplify(&e).unwrap();
                prop_assert_eq!(evaluate(&simplified, &x).unwrap(), value);
            }
        }

        #[test]
        fn simplify_preserves_value_in_every_mode(
            e in expr(),
            x in -5i32..=5,
            mode in div_mode(),
            divide_by_one in any::<bool>(),
        ) {
            let ctxt = CtxtBuilder::new()
                .div_mode(mode)
                .divide_by_one(divide_by_one)
                .build();
            let x = int(x);
            if let Ok(value) = e.eval_with(&x, &ctxt) {
                let simplified = simplify_with(&e, &ctxt).unwrap();
                prop_assert_eq!(simplified.eval_with(&x, &ctxt).unwrap(), value);
            }
        }

        #[test]
        fn simplify_is_idempotent(e in expr()) {
            if let Ok(once) = simplify(&e) {
                let twice = simplify(&once).unwrap();
                prop_assert_eq!(twice.to_string(), once.to_string());
            }
        }

        #[test]
        fn simplify_never_grows(e in expr()) {
            if let Ok(simplified) = simplify(&e) {
                prop_assert!(simplified.node_count() <= e.node_count());
            }
        }

        #[test]
        fn add_zero_identity(e in expr()) {
            let expected = simplify(&e).ok();
            prop_assert_eq!(simplify(&Expr::sum(e.clone(), constant(0))).ok(), expected.clone());
            prop_assert_eq!(simplify(&Expr::sum(constant(0), e)).ok(), expected);
        }

        #[test]
        fn multiply_one_identity(e in expr()) {
            let expected = simplify(&e).ok();
            prop_assert_eq!(simplify(&Expr::product(e.clone(), constant(1))).ok(), expected.clone());
            prop_assert_eq!(simplify(&Expr::product(constant(1), e)).ok(), expected);
        }

        #[test]
        fn multiply_zero_annihilates(e in expr()) {
            // only when `e` itself simplifies, since operands are simplified first
            if simplify(&e).is_ok() {
                prop_assert_eq!(simplify(&Expr::product(e.clone(), constant(0))).unwrap(), constant(0));
                prop_assert_eq!(simplify(&Expr::product(constant(0), e)).unwrap(), constant(0));
            }
        }

        #[test]
        fn constant_trees_fold_completely(e in constant_expr()) {
            match simplify(&e) {
                Ok(simplified) => prop_assert!(simplified.is_integer()),
                Err(_) => prop_assert!(evaluate(&e, &int(0)).is_err()),
            }
        }

        #[test]
        fn division_by_zero_spans_fall_inside_rendering(e in expr(), x in -5i32..=5) {
            let rendered = e.to_string();
            if let Err(err) = e.eval_with(&int(x), &Ctxt::default()) {
                prop_assert_eq!(err.spans.len(), 3);
                for span in &err.spans {
                    prop_assert!(span.end <= rendered.len());
                }
                prop_assert_eq!(&rendered[err.spans[1].clone()], "/");
            }
        }
    }
}
