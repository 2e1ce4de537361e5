//! End-to-end scenarios over built scenes.

use quire_tests::prelude::*;

mod overlap {
    use super::*;

    #[test]
    fn test_coplanar_overlap_violates_exclusion() {
        // GIVEN p1 at (0,0,0) and p2 at (5,5,0), both 10x10 in one container
        let scene = sibling_scene(0).unwrap();
        let checker = Checker::new(scene.store()).unwrap();
        let eval = checker.evaluator();
        let p1 = scene.object("p1").unwrap();
        let p2 = scene.object("p2").unwrap();

        // THEN they overlap on one plane and may not coexist
        assert!(eval.intersect(p1, p2).unwrap());
        assert!(eval.same_plane(p1, p2).unwrap());
        assert!(!checker.pauli(p1, p2).unwrap());
        assert_eq!(
            checker.check_scene().unwrap(),
            vec![Conflict { first: p1, second: p2 }]
        );
    }

    #[test]
    fn test_plane_separation_restores_consistency() {
        // GIVEN the same footprints with p2 lifted to z=1
        let scene = sibling_scene(1).unwrap();
        let checker = Checker::new(scene.store()).unwrap();
        let p1 = scene.object("p1").unwrap();
        let p2 = scene.object("p2").unwrap();

        assert!(checker.evaluator().different_plane(p1, p2).unwrap());
        assert!(checker.pauli(p1, p2).unwrap());
        assert!(checker.is_consistent().unwrap());
    }
}

mod seams {
    use super::*;

    #[test]
    fn test_full_shared_edge_is_a_seam() {
        // GIVEN a at (0,0,0) 10x20 and b at (0,20,0) 10x15
        let scene = seam_scene().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let a = scene.object("a").unwrap();
        let b = scene.object("b").unwrap();

        // THEN a's bottom edge (y=20) meets b's top edge
        assert!(eval.seam(a, b).unwrap());
        assert!(eval.seam(b, a).unwrap());
    }

    #[test]
    fn test_partial_edge_is_not_a_seam() {
        // GIVEN widths that differ
        let mut builder = SceneBuilder::new();
        builder.paper("a").at(0, 0, 0).size(10, 20).done().unwrap();
        builder.paper("b").at(0, 20, 0).size(12, 15).done().unwrap();
        let scene = builder.build().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();

        assert!(!eval
            .seam(scene.object("a").unwrap(), scene.object("b").unwrap())
            .unwrap());
    }
}

mod viewport {
    use super::*;

    #[test]
    fn test_on_screen_and_visible_against_mobile_viewport() {
        // GIVEN an 800x600 mobile viewport
        let scene = phone_scene().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let phone = scene.object("phone").unwrap();
        let card = scene.object("card").unwrap();
        let edge = scene.object("edge").unwrap();

        // THEN the fully contained card is on screen
        assert!(eval.on_screen(card, phone).unwrap());
        assert!(eval.visible(card, phone).unwrap());

        // AND the paper at x=790 pokes out: visible, not on screen
        assert!(eval.visible(edge, phone).unwrap());
        assert!(!eval.on_screen(edge, phone).unwrap());
    }

    #[test]
    fn test_pixel_conversion_uses_device_depth() {
        let scene = phone_scene().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();
        let phone = scene.object("phone").unwrap();

        assert_eq!(eval.pixel_depth(phone).unwrap(), 2);
        assert_eq!(eval.to_pixels(phone, 48).unwrap(), 96);
    }
}

mod elevation {
    use super::*;

    #[test]
    fn test_raising_adds_the_fixed_offset() {
        // GIVEN an at-rest sheet with rest-elevation 0
        let rested = toggle_scene(false).unwrap();
        let eval = Evaluator::new(rested.store()).unwrap();
        let sheet = rested.object("sheet").unwrap();
        assert_eq!(eval.elevation(sheet).unwrap(), 0);

        // WHEN raised
        let raised = toggle_scene(true).unwrap();
        let eval = Evaluator::new(raised.store()).unwrap();
        let sheet = raised.object("sheet").unwrap();

        // THEN elevation becomes 6, and returning to rest restores 0
        assert_eq!(eval.elevation(sheet).unwrap(), 6);
    }

    #[test]
    fn test_custom_raise_offset_flows_from_constants() {
        // GIVEN a scene loaded with a non-default raise offset
        let mut builder = SceneBuilder::new().with_constants(LayoutConstants {
            raise_offset: 12,
            ..LayoutConstants::default()
        });
        builder.paper("sheet").at(0, 0, 0).size(10, 10).raised().done().unwrap();
        let scene = builder.build().unwrap();
        let eval = Evaluator::new(scene.store()).unwrap();

        assert_eq!(eval.elevation(scene.object("sheet").unwrap()).unwrap(), 12);
    }
}
