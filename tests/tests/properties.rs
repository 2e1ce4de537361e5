//! Model-level properties that must hold for every scene.

use quire_tests::prelude::*;

mod exclusion {
    use super::*;

    #[test]
    fn test_pauli_is_reflexive() {
        // GIVEN any scene
        let scene = sibling_scene(0).unwrap();
        let checker = Checker::new(scene.store()).unwrap();

        // THEN every object coexists with itself
        for name in ["desk", "p1", "p2"] {
            let obj = scene.object(name).unwrap();
            assert!(checker.pauli(obj, obj).unwrap());
        }
    }

    #[test]
    fn test_different_containers_always_coexist() {
        // GIVEN two papers with identical footprints in different containers
        let mut builder = SceneBuilder::new();
        builder.paper("left").at(0, 0, 0).size(100, 100).done().unwrap();
        builder.paper("right").at(0, 0, 0).size(100, 100).done().unwrap();
        builder
            .paper("a")
            .at(5, 5, 0)
            .size(10, 10)
            .in_container("left")
            .done()
            .unwrap();
        builder
            .paper("b")
            .at(5, 5, 0)
            .size(10, 10)
            .in_container("right")
            .done()
            .unwrap();
        let scene = builder.build().unwrap();
        let checker = Checker::new(scene.store()).unwrap();

        // THEN pauli holds regardless of coordinates
        assert!(checker
            .pauli(scene.object("a").unwrap(), scene.object("b").unwrap())
            .unwrap());
    }
}

mod geometry {
    use super::*;

    #[test]
    fn test_intersect_is_symmetric() {
        let scene = sibling_scene(0).unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let p1 = scene.object("p1").unwrap();
        let p2 = scene.object("p2").unwrap();

        assert_eq!(eval.intersect(p1, p2).unwrap(), eval.intersect(p2, p1).unwrap());
    }

    #[test]
    fn test_inside_implies_intersect() {
        let scene = sibling_scene(0).unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let desk = scene.object("desk").unwrap();
        let p1 = scene.object("p1").unwrap();

        assert!(eval.inside(p1, desk).unwrap());
        assert!(eval.intersect(p1, desk).unwrap());
    }

    #[test]
    fn test_seam_adjacency_does_not_intersect() {
        // Edge-touching rectangles use half-open intervals
        let scene = seam_scene().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let a = scene.object("a").unwrap();
        let b = scene.object("b").unwrap();

        assert!(eval.seam(a, b).unwrap());
        assert!(!eval.intersect(a, b).unwrap());
    }
}

mod hierarchy {
    use super::*;

    #[test]
    fn test_root_absolute_position_round_trips() {
        let scene = sibling_scene(0).unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let desk = scene.object("desk").unwrap();

        assert_eq!(eval.position(desk).unwrap(), eval.absolute_position(desk).unwrap());
    }

    #[test]
    fn test_raise_then_rest_restores_elevation() {
        let rested = toggle_scene(false).unwrap();
        let raised = toggle_scene(true).unwrap();

        let before = Evaluator::new(rested.store())
            .unwrap()
            .elevation(rested.object("sheet").unwrap())
            .unwrap();
        let lifted = Evaluator::new(raised.store())
            .unwrap()
            .elevation(raised.object("sheet").unwrap())
            .unwrap();

        assert_eq!(before, 0);
        assert_eq!(lifted, before + 6);
    }
}
