//! Demonstration query over a small phone layout.
//!
//! Builds a scene, validates it, and asks the engine which papers are
//! visible on the phone while coexisting with every other panel.

use quire_core::DeviceClass;
use quire_query::{Arg, Goal, Pred, Solver};
use quire_relation::Checker;
use quire_scene::SceneBuilder;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = SceneBuilder::new();
    builder
        .device("phone")
        .class(DeviceClass::Mobile)
        .pixel_depth(2)
        .screen(360, 640, 10)
        .done()?;
    builder.paper("backdrop").at(0, 0, 0).size(360, 640).done()?;
    builder
        .paper("toolbar")
        .at(0, 0, 1)
        .size(360, 56)
        .in_container("backdrop")
        .done()?;
    builder
        .paper("sheet")
        .at(16, 80, 1)
        .size(328, 200)
        .in_container("backdrop")
        .raised()
        .done()?;
    builder.colour_def("amber", "#FFC400");
    builder.shape_def("dot", "filled circle");
    builder
        .ink("badge")
        .at(300, 8, 2)
        .size(24, 24)
        .in_container("backdrop")
        .shape("dot")
        .colour("amber")
        .done()?;

    let scene = builder.build()?;
    let store = scene.store();

    let checker = Checker::new(store)?;
    match checker.check_scene()?.as_slice() {
        [] => println!("scene is consistent"),
        conflicts => {
            for conflict in conflicts {
                println!("conflict: {}", conflict);
            }
        }
    }

    let phone = scene
        .object("phone")
        .ok_or("phone missing from the scene")?;
    let solver = Solver::new(store)?;
    let goal = Goal::all(vec![
        Pred::Paper(Arg::var("p")).into(),
        Pred::Visible(Arg::var("p"), Arg::Obj(phone)).into(),
    ]);

    let solutions = solver.solve(&goal, 10)?;
    println!("{} visible papers:", solutions.len());
    for solution in &solutions {
        println!("  {}", solution);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
