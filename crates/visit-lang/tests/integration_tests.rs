use rstest::{fixture, rstest};
use visit_lang::{
    BUILTIN_REGISTRY, DispatchError, Evaluator, Expr, HandlerKey, NodeKind, Number, Operation,
    Printer, Registry, RegistryBuilder, VisitCounter, visit,
};

#[fixture]
fn registry() -> Registry {
    Registry::builtin().unwrap()
}

#[rstest]
#[case::nested(
    Expr::sum(1, Expr::product(2, Expr::sum(3, 4))),
    "(1 + (2 × (3 + 4)))",
    15.0
)]
#[case::zero_product(Expr::product(0, 5), "(0 × 5)", 0.0)]
#[case::leaf(Expr::number(42), "42", 42.0)]
fn test_scenarios(
    registry: Registry,
    #[case] expr: Expr,
    #[case] text: &str,
    #[case] value: f64,
) {
    let mut printer = Printer::new();
    registry.dispatch(&mut printer, &expr).unwrap();
    assert_eq!(printer.as_str(), text);

    let mut evaluator = Evaluator::new();
    registry.dispatch(&mut evaluator, &expr).unwrap();
    assert_eq!(evaluator.result(), Some(Number::new(value)));
    assert_eq!(format!("{} = {}", printer, evaluator), format!("{text} = {value}"));
}

#[test]
fn test_builtin_registry_matches_fresh_registry() {
    let fresh = Registry::builtin().unwrap();
    assert_eq!(BUILTIN_REGISTRY.keys(), fresh.keys());
}

/// Collects literal values, registered for numbers and sums only.
#[derive(Default)]
struct Literals {
    values: Vec<Number>,
}

impl Operation for Literals {}

fn literal_number(op: &mut Literals, expr: &Expr, _: &Registry) -> Result<(), DispatchError> {
    if let Expr::Number(n) = expr {
        op.values.push(*n);
    }
    Ok(())
}

fn literal_sum(op: &mut Literals, expr: &Expr, registry: &Registry) -> Result<(), DispatchError> {
    if let Expr::Sum { left, right } = expr {
        registry.dispatch(op, left)?;
        registry.dispatch(op, right)?;
    }
    Ok(())
}

fn literals_registry() -> Registry {
    let mut builder = RegistryBuilder::with_builtins().unwrap();
    builder
        .register(NodeKind::Number, literal_number)
        .unwrap()
        .register(NodeKind::Sum, literal_sum)
        .unwrap();
    builder.build()
}

#[test]
fn test_custom_operation_alongside_builtins() {
    let registry = literals_registry();
    let expr = Expr::sum(Expr::sum(1, 2), 3);

    let mut literals = Literals::default();
    registry.dispatch(&mut literals, &expr).unwrap();
    assert_eq!(
        literals.values,
        vec![Number::new(1.0), Number::new(2.0), Number::new(3.0)]
    );

    let mut printer = Printer::new();
    registry.dispatch(&mut printer, &expr).unwrap();
    assert_eq!(printer.as_str(), "((1 + 2) + 3)");
}

#[test]
fn test_missing_handler_stops_traversal() {
    let registry = literals_registry();
    let expr = Expr::sum(1, Expr::sum(Expr::product(2, 3), 4));

    assert_eq!(registry.missing::<Literals>(), vec![NodeKind::Product]);

    let mut literals = Literals::default();
    let err = registry.dispatch(&mut literals, &expr).unwrap_err();
    assert_eq!(
        err,
        DispatchError::NoHandlerFound {
            operation: "Literals",
            node: NodeKind::Product,
        }
    );
    // Nothing to the right of the failing node was visited.
    assert_eq!(literals.values, vec![Number::new(1.0)]);
}

#[test]
fn test_handler_key_lookup() {
    let registry = literals_registry();
    assert!(registry.contains(&HandlerKey::of::<Literals>(NodeKind::Sum)));
    assert!(!registry.contains(&HandlerKey::of::<Literals>(NodeKind::Product)));
    assert!(registry.contains(&HandlerKey::of::<VisitCounter>(NodeKind::Product)));
    assert_eq!(registry.len(), 11);
}

#[test]
fn test_builtin_visit_rejects_custom_operation() {
    let mut literals = Literals::default();
    assert_eq!(
        visit(&mut literals, &Expr::number(1)),
        Err(DispatchError::NoHandlerFound {
            operation: "Literals",
            node: NodeKind::Number,
        })
    );
}
