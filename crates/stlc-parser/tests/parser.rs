use stlc_parser::{parse, parse_term, parse_type};
use stlc_tree::{Clause, Field, Node, Term, Type};

fn term(source: &str) -> Term {
    parse_term(source).unwrap_or_else(|e| panic!("failed to parse term {source:?}: {}", e.message()))
}

fn ty(source: &str) -> Type {
    parse_type(source).unwrap_or_else(|e| panic!("failed to parse type {source:?}: {}", e.message()))
}

#[test]
fn parses_a_variable() {
    assert_eq!(term("x"), Term::var("x"));
}

#[test]
fn parses_an_abstraction() {
    assert_eq!(
        term("λx:Bool. x"),
        Term::abs("x", Type::Boolean, Term::var("x"))
    );
}

#[test]
fn parses_a_two_term_application() {
    assert_eq!(term("x y"), Term::app(Term::var("x"), Term::var("y")));
}

#[test]
fn parses_a_redex() {
    assert_eq!(
        term("(λx:Bool. x) y"),
        Term::app(
            Term::abs("x", Type::Boolean, Term::var("x")),
            Term::var("y")
        )
    );
}

#[test]
fn abstraction_bodies_extend_over_applications() {
    assert_eq!(
        term("λx:Bool. x y"),
        Term::abs(
            "x",
            Type::Boolean,
            Term::app(Term::var("x"), Term::var("y"))
        )
    );
}

#[test]
fn application_is_left_associative() {
    let left_fold = Term::app(Term::app(Term::var("x"), Term::var("y")), Term::var("z"));
    assert_eq!(term("x y z"), left_fold);
    assert_eq!(term("(x y) z"), left_fold);
    assert_eq!(
        term("x (y z)"),
        Term::app(Term::var("x"), Term::app(Term::var("y"), Term::var("z")))
    );
}

#[test]
fn parses_an_application_taking_an_abstraction() {
    assert_eq!(
        term("x (λy:Bool. y)"),
        Term::app(
            Term::var("x"),
            Term::abs("y", Type::Boolean, Term::var("y"))
        )
    );
}

#[test]
fn parses_the_boolean_literals() {
    assert_eq!(term("true"), Term::True);
    assert_eq!(term("false"), Term::False);
}

#[test]
fn parses_if_expressions() {
    assert_eq!(
        term("if x then y else z"),
        Term::ite(Term::var("x"), Term::var("y"), Term::var("z"))
    );
    assert_eq!(
        term("if x then (if a then b else c) else z"),
        Term::ite(
            Term::var("x"),
            Term::ite(Term::var("a"), Term::var("b"), Term::var("c")),
            Term::var("z")
        )
    );
}

#[test]
fn nested_if_takes_the_nearest_else() {
    assert_eq!(
        term("if x then if a then b else c else z"),
        Term::ite(
            Term::var("x"),
            Term::ite(Term::var("a"), Term::var("b"), Term::var("c")),
            Term::var("z")
        )
    );
}

#[test]
fn parses_the_naturals_and_their_operators() {
    assert_eq!(term("0"), Term::Zero);
    assert_eq!(term("succ 0"), Term::succ(Term::Zero));
    assert_eq!(term("pred (succ 0)"), Term::pred(Term::succ(Term::Zero)));
    assert_eq!(term("iszero x"), Term::is_zero(Term::var("x")));
}

#[test]
fn prefix_operators_act_as_application_heads() {
    // TAPL-style: `succ x y` is `(succ x) y`, not `succ (x y)`.
    assert_eq!(
        term("succ x y"),
        Term::app(Term::succ(Term::var("x")), Term::var("y"))
    );
}

#[test]
fn parses_unit_and_sequencing() {
    assert_eq!(term("unit"), Term::Unit);
    assert_eq!(
        term("unit; x; y"),
        Term::seq(Term::Unit, Term::seq(Term::var("x"), Term::var("y")))
    );
}

#[test]
fn parses_an_ascription() {
    assert_eq!(
        term("x as Bool"),
        Term::ascribe(Term::var("x"), Type::Boolean)
    );
}

#[test]
fn parses_a_let_binding() {
    assert_eq!(
        term("let x = true in x"),
        Term::let_in("x", Term::True, Term::var("x"))
    );
}

#[test]
fn parses_record_projections() {
    assert_eq!(
        term("x.foo"),
        Term::project(Term::var("x"), Field::Label("foo".to_string()))
    );
    assert_eq!(
        term("x.foo.bar"),
        Term::project(
            Term::project(Term::var("x"), Field::Label("foo".to_string())),
            Field::Label("bar".to_string())
        )
    );
}

#[test]
fn projection_chains_mix_indices_and_labels() {
    assert_eq!(
        term("x.1.2"),
        Term::project(
            Term::project(Term::var("x"), Field::Index(1)),
            Field::Index(2)
        )
    );
    assert_eq!(
        term("x.items.10"),
        Term::project(
            Term::project(Term::var("x"), Field::Label("items".to_string())),
            Field::Index(10)
        )
    );
}

#[test]
fn parses_pairs_tuples_and_records() {
    assert_eq!(
        term("(x, y)"),
        Term::pair(Term::var("x"), Term::var("y"))
    );
    assert_eq!(
        term("{x, y, z}"),
        Term::Tuple(vec![Term::var("x"), Term::var("y"), Term::var("z")])
    );
    assert_eq!(
        term("{foo=x, bar=false}"),
        Term::record([("foo", Term::var("x")), ("bar", Term::False)])
    );
}

#[test]
fn record_duplicate_labels_last_write_wins() {
    assert_eq!(
        term("{foo=x, foo=y}"),
        Term::record([("foo", Term::var("y"))])
    );
}

#[test]
fn parses_bare_injections() {
    assert_eq!(term("inl x"), Term::inl(Term::var("x"), None));
    assert_eq!(term("inr x"), Term::inr(Term::var("x"), None));
}

#[test]
fn ascription_resolves_a_bare_injection_in_place() {
    let expected = Term::inl(Term::True, Some(Type::sum(Type::Boolean, Type::Natural)));
    assert_eq!(term("inl true as Bool + Nat"), expected);

    // An already-resolved injection ascribes like any other term.
    assert_eq!(
        term("(inl true as Bool + Nat) as Top"),
        Term::ascribe(expected, Type::Top)
    );
}

#[test]
fn parses_a_sum_case() {
    assert_eq!(
        term("case s of inl x => x | inr y => y"),
        Term::sum_case(
            Term::var("s"),
            Clause::new("x", Term::var("x")),
            Clause::new("y", Term::var("y"))
        )
    );
}

#[test]
fn parses_a_variant_case() {
    assert_eq!(
        term("case s of <some=x> => x | <none=u> => z"),
        Term::var_case(
            Term::var("s"),
            [
                ("some", Clause::new("x", Term::var("x"))),
                ("none", Clause::new("u", Term::var("z"))),
            ]
        )
    );
}

#[test]
fn a_case_sequenced_into_a_clause_body_needs_parens() {
    // The parenthesized inner case ends before `|`, which belongs to the
    // outer case; without the parentheses the input does not parse.
    assert_eq!(
        term("case s of <a=x> => x; (case t of <b=z> => w) | <c=y> => y"),
        Term::var_case(
            Term::var("s"),
            [
                (
                    "a",
                    Clause::new(
                        "x",
                        Term::seq(
                            Term::var("x"),
                            Term::var_case(
                                Term::var("t"),
                                [("b", Clause::new("z", Term::var("w")))]
                            )
                        )
                    )
                ),
                ("c", Clause::new("y", Term::var("y"))),
            ]
        )
    );
    assert!(parse_term("case s of <a=x> => x; case t of <b=z> => w | <c=y> => y").is_err());
}

#[test]
fn parses_the_list_operators() {
    assert_eq!(term("nil[Bool]"), Term::Nil(Type::Boolean));
    assert_eq!(
        term("cons[Bool] true nil[Bool]"),
        Term::cons(Type::Boolean, Term::True, Term::Nil(Type::Boolean))
    );
    assert_eq!(
        term("isnil[Bool] l"),
        Term::is_nil(Type::Boolean, Term::var("l"))
    );
    assert_eq!(term("head[Bool] l"), Term::head(Type::Boolean, Term::var("l")));
    assert_eq!(term("tail[Bool] l"), Term::tail(Type::Boolean, Term::var("l")));
}

#[test]
fn parses_the_base_types() {
    assert_eq!(ty("Bool"), Type::Boolean);
    assert_eq!(ty("Nat"), Type::Natural);
    assert_eq!(ty("Unit"), Type::Unit);
    assert_eq!(ty("Top"), Type::Top);
    assert_eq!(ty("Thing"), Type::base("Thing"));
}

#[test]
fn function_types_are_right_associative() {
    let right_fold = Type::func(Type::Boolean, Type::func(Type::Boolean, Type::Boolean));
    assert_eq!(ty("Bool → Bool → Bool"), right_fold);
    assert_eq!(ty("Bool → (Bool → Bool)"), right_fold);
    assert_eq!(
        ty("(Bool → Bool) → Bool"),
        Type::func(Type::func(Type::Boolean, Type::Boolean), Type::Boolean)
    );
}

#[test]
fn product_binds_tighter_than_sum_than_arrow() {
    assert_eq!(
        ty("Bool × Nat + Unit → Top"),
        Type::func(
            Type::sum(Type::product(Type::Boolean, Type::Natural), Type::Unit),
            Type::Top
        )
    );
}

#[test]
fn parses_the_composite_types() {
    assert_eq!(
        ty("{foo: Bool → Bool, bar: Bool}"),
        Type::record([
            ("foo", Type::func(Type::Boolean, Type::Boolean)),
            ("bar", Type::Boolean),
        ])
    );
    assert_eq!(
        ty("{Bool, Nat}"),
        Type::Tuple(vec![Type::Boolean, Type::Natural])
    );
    assert_eq!(
        ty("<some: Bool, none: Unit>"),
        Type::variant([("some", Type::Boolean), ("none", Type::Unit)])
    );
    assert_eq!(ty("List Bool"), Type::list(Type::Boolean));
    assert_eq!(ty("Ref Nat"), Type::reference(Type::Natural));
}

#[test]
fn parse_distinguishes_terms_from_types() {
    assert_eq!(parse("x").unwrap(), Node::Term(Term::var("x")));
    assert_eq!(parse("Bool").unwrap(), Node::Type(Type::Boolean));
    assert_eq!(
        parse("{foo: Bool}").unwrap(),
        Node::Type(Type::record([("foo", Type::Boolean)]))
    );
    assert!(parse("λx:. x").is_err());
    assert!(parse("").is_err());
}
