//! End-to-end queries over built scenes.

use quire_tests::prelude::*;

mod search {
    use super::*;

    #[test]
    fn test_solutions_never_violate_exclusion() {
        // GIVEN overlapping coplanar siblings
        let scene = sibling_scene(0).unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let checker = Checker::new(scene.store()).unwrap();
        let goal = Goal::all(vec![
            Pred::Paper(Arg::var("a")).into(),
            Pred::Paper(Arg::var("b")).into(),
            Pred::Intersect(Arg::var("a"), Arg::var("b")).into(),
        ]);

        // WHEN solving
        let solutions = solver.solve(&goal, 50).unwrap();

        // THEN every emitted pair satisfies pauli
        assert!(!solutions.is_empty());
        for solution in &solutions {
            let a = solution.entity("a").unwrap();
            let b = solution.entity("b").unwrap();
            assert!(checker.pauli(a, b).unwrap(), "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_repeated_queries_are_deterministic() {
        let scene = sibling_scene(1).unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let goal = Goal::all(vec![
            Pred::Paper(Arg::var("a")).into(),
            Pred::Paper(Arg::var("b")).into(),
            Pred::DifferentPlane(Arg::var("a"), Arg::var("b")).into(),
        ]);

        let first = solver.solve(&goal, 10).unwrap();
        let second = solver.solve(&goal, 10).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_disjunction_finds_both_layouts() {
        // GIVEN p2 either over or under p1 is acceptable
        let scene = sibling_scene(1).unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let p1 = scene.object("p1").unwrap();
        let p2 = scene.object("p2").unwrap();
        let goal = Goal::any(vec![
            Pred::Over(Arg::Obj(p2), Arg::Obj(p1)).into(),
            Pred::Under(Arg::Obj(p2), Arg::Obj(p1)).into(),
        ]);

        // THEN the satisfied branch yields a solution
        let solutions = solver.solve(&goal, 2).unwrap();
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn test_numeric_constraints_mix_with_relations() {
        // GIVEN the seam scene
        let scene = seam_scene().unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let goal = Goal::all(vec![
            Pred::Seam(Arg::var("a"), Arg::var("b")).into(),
            Pred::Position(
                Arg::var("a"),
                NumArg::Const(0),
                NumArg::var("ay"),
                NumArg::Const(0),
            )
            .into(),
            Pred::Lt(NumArg::var("ay"), NumArg::Const(20)).into(),
        ]);

        // WHEN solving: both seam orders exist, only a at y=0 passes ay < 20
        let solutions = solver.solve(&goal, 10).unwrap();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].entity("a"), scene.object("a"));
        assert_eq!(solutions[0].entity("b"), scene.object("b"));
        assert_eq!(solutions[0].number("ay"), Some(0));
    }

    #[test]
    fn test_layout_constants_feed_constraint_bounds() {
        // GIVEN the touch-target constant consumed as a lower bound
        let scene = phone_scene().unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let constants = LayoutConstants::default();
        let goal = Goal::all(vec![
            Pred::Size(Arg::var("p"), NumArg::var("w"), NumArg::var("h")).into(),
            Pred::Ge(NumArg::var("w"), NumArg::Const(constants.touch_target)).into(),
            Pred::Ge(NumArg::var("h"), NumArg::Const(constants.touch_target)).into(),
        ]);

        // THEN both 50x50 papers qualify as touch targets
        let solutions = solver.solve(&goal, 10).unwrap();
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn test_viewport_query_over_devices() {
        let scene = phone_scene().unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let goal = Goal::all(vec![
            Pred::OnScreen(Arg::var("p"), Arg::var("d")).into(),
        ]);

        let solutions = solver.solve(&goal, 10).unwrap();

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].entity("p"), scene.object("card"));
        assert_eq!(solutions[0].entity("d"), scene.object("phone"));
    }
}

mod direct_checks {
    use super::*;

    #[test]
    fn test_holds_answers_bound_predicates() {
        let scene = sibling_scene(0).unwrap();
        let solver = Solver::new(scene.store()).unwrap();
        let p1 = scene.object("p1").unwrap();
        let p2 = scene.object("p2").unwrap();

        assert!(solver.holds(&Pred::Intersect(Arg::Obj(p1), Arg::Obj(p2))).unwrap());
        assert!(!solver.holds(&Pred::Pauli(Arg::Obj(p1), Arg::Obj(p2))).unwrap());
    }

    #[test]
    fn test_budget_guards_termination() {
        let scene = sibling_scene(0).unwrap();
        let solver = Solver::with_options(
            scene.store(),
            SolveOptions {
                node_budget: 2,
                ..SolveOptions::default()
            },
        )
        .unwrap();
        let goal = Goal::all(vec![
            Pred::Paper(Arg::var("a")).into(),
            Pred::Paper(Arg::var("b")).into(),
            Pred::Paper(Arg::var("c")).into(),
        ]);

        assert!(matches!(
            solver.solve(&goal, 100).unwrap_err(),
            QueryError::BudgetExhausted { .. }
        ));
    }
}
