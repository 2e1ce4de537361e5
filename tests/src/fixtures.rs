//! Canned scenes used across the integration tests.

use quire_scene::{Scene, SceneBuilder, SceneResult};

/// Desk (100x100 root) holding `p1` at (0,0,0) 10x10 and `p2` at (5,5,z2)
/// 10x10. With `z2 = 0` the two children overlap on the same plane.
pub fn sibling_scene(z2: i64) -> SceneResult<Scene> {
    let mut builder = SceneBuilder::new();
    builder.paper("desk").at(0, 0, 0).size(100, 100).done()?;
    builder
        .paper("p1")
        .at(0, 0, 0)
        .size(10, 10)
        .in_container("desk")
        .done()?;
    builder
        .paper("p2")
        .at(5, 5, z2)
        .size(10, 10)
        .in_container("desk")
        .done()?;
    builder.build()
}

/// Two coplanar papers sharing a full horizontal edge: `a` at (0,0,0)
/// 10x20, `b` at (0,20,0) 10x15, both in one container.
pub fn seam_scene() -> SceneResult<Scene> {
    let mut builder = SceneBuilder::new();
    builder.paper("desk").at(0, 0, 0).size(100, 100).done()?;
    builder
        .paper("a")
        .at(0, 0, 0)
        .size(10, 20)
        .in_container("desk")
        .done()?;
    builder
        .paper("b")
        .at(0, 20, 0)
        .size(10, 15)
        .in_container("desk")
        .done()?;
    builder.build()
}

/// A mobile device with an 800x600 viewport (z-extent 10) plus two root
/// papers: `card` fully on screen at (10,10,0) 50x50 and `edge` straddling
/// the right border at (790,10,0) 50x50.
pub fn phone_scene() -> SceneResult<Scene> {
    let mut builder = SceneBuilder::new();
    builder
        .device("phone")
        .pixel_depth(2)
        .screen(800, 600, 10)
        .done()?;
    builder.paper("card").at(10, 10, 0).size(50, 50).done()?;
    builder.paper("edge").at(790, 10, 0).size(50, 50).done()?;
    builder.build()
}

/// A single root paper with rest offset 0, either raised or at rest.
pub fn toggle_scene(raised: bool) -> SceneResult<Scene> {
    let mut builder = SceneBuilder::new();
    let paper = builder
        .paper("sheet")
        .at(0, 0, 0)
        .size(10, 10)
        .rest_elevation(0);
    if raised {
        paper.raised().done()?;
    } else {
        paper.done()?;
    }
    builder.build()
}
