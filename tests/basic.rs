use prop_chain::{
    procedures::{entailment::is_solved, forward_chain::forward_chain, sld::sld_resolve},
    reports::Verdict,
    structures::formula::{Formula, Symbol},
};

mod scenarios {
    use super::*;

    #[test]
    fn implication_from_a_fact() {
        let a = Formula::symbol("a");
        let b = Formula::symbol("b");
        let knowledge_base = vec![a.clone(), Formula::implies(a.clone(), b.clone())];
        let goals = vec![Symbol::from("b")];

        let derived = forward_chain(&knowledge_base);
        assert_eq!(derived, [a, b.clone()].into_iter().collect());
        assert_eq!(is_solved(&derived, &b), Ok(true));

        assert_eq!(sld_resolve(&knowledge_base, &goals), Verdict::Yes);
    }

    #[test]
    fn underivable_goal() {
        let knowledge_base = vec![Formula::symbol("a")];
        let goals = vec![Symbol::from("z")];

        assert_eq!(sld_resolve(&knowledge_base, &goals), Verdict::No);
    }

    #[test]
    fn negative_literal_resolved_away() {
        let knowledge_base = vec![
            Formula::or(vec![Formula::symbol("x"), Formula::not(Formula::symbol("y"))]),
            Formula::symbol("y"),
        ];
        let goals = vec![Symbol::from("x")];

        assert_eq!(sld_resolve(&knowledge_base, &goals), Verdict::Yes);
    }

    #[test]
    fn rewritten_implication_is_a_disjunction() {
        let premise = Formula::and(Formula::symbol("p"), Formula::symbol("q"));
        let conclusion = Formula::symbol("r");

        let rewritten = Formula::implies(premise.clone(), conclusion.clone()).to_cnf();
        let direct = Formula::or(vec![Formula::not(premise), conclusion]);

        assert_eq!(rewritten, direct);
    }
}

mod engines {
    use super::*;

    #[test]
    fn engines_agree_on_horn_chains() {
        let knowledge_base = vec![
            Formula::implies(Formula::symbol("2"), Formula::symbol("3")),
            Formula::implies(Formula::symbol("1"), Formula::symbol("2")),
            Formula::implies(Formula::symbol("3"), Formula::symbol("4")),
            Formula::symbol("1"),
        ];

        let derived = forward_chain(&knowledge_base);

        for name in ["1", "2", "3", "4", "5"] {
            let goals = vec![Symbol::from(name)];
            let forward = Verdict::from(derived.contains(&Formula::symbol(name)));
            assert_eq!(forward, sld_resolve(&knowledge_base, &goals), "goal {name}");
        }
    }

    #[test]
    fn engines_differ_on_disjunctions() {
        let knowledge_base = vec![
            Formula::symbol("y"),
            Formula::or(vec![Formula::symbol("x"), Formula::not(Formula::symbol("y"))]),
        ];

        assert!(!forward_chain(&knowledge_base).contains(&Formula::symbol("x")));
        assert_eq!(
            sld_resolve(&knowledge_base, &[Symbol::from("x")]),
            Verdict::Yes
        );
    }

    #[test]
    fn conjunction_query_over_derived_facts() {
        let knowledge_base = vec![
            Formula::symbol("a"),
            Formula::implies(Formula::symbol("a"), Formula::symbol("b")),
        ];
        let derived = forward_chain(&knowledge_base);

        let query = Formula::and(Formula::symbol("a"), Formula::symbol("b"));
        assert_eq!(is_solved(&derived, &query), Ok(true));

        // Negation is read as presence of the inner formula.
        assert_eq!(is_solved(&derived, &Formula::not(Formula::symbol("b"))), Ok(true));
    }

    #[test]
    fn shared_knowledge_base() {
        let knowledge_base = vec![
            Formula::symbol("a"),
            Formula::implies(Formula::symbol("a"), Formula::symbol("b")),
            Formula::or(vec![Formula::symbol("c"), Formula::not(Formula::symbol("b"))]),
        ];

        let verdicts = std::thread::scope(|scope| {
            let handles = ["a", "b", "c", "d"]
                .map(|name| {
                    let knowledge_base = &knowledge_base;
                    scope.spawn(move || sld_resolve(knowledge_base, &[Symbol::from(name)]))
                });
            handles.map(|handle| handle.join().unwrap_or(Verdict::No))
        });

        assert_eq!(verdicts, [Verdict::Yes, Verdict::Yes, Verdict::Yes, Verdict::No]);
    }
}
