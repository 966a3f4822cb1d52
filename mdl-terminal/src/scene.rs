/// Built-in demo scene, laid out for a 500x500 screen
use mdl_core::{Color, Constants, Operation, Reflection, SymbolTable};

fn named(name: &str) -> Option<String> {
    Some(name.to_string())
}

/// Symbols and operations for the demo. The last operation saves to `save_as`.
pub fn demo_scene(save_as: &str) -> (SymbolTable, Vec<Operation>) {
    let mut symbols = SymbolTable::new();
    symbols.add_constants(
        "shiny_red",
        Constants::new(
            Reflection { red: 0.3, green: 0.1, blue: 0.1 },
            Reflection { red: 0.8, green: 0.2, blue: 0.2 },
            Reflection::uniform(0.6),
            Color::new(255, 60, 60),
        ),
    );
    symbols.add_constants(
        "dull_teal",
        Constants::new(
            Reflection { red: 0.1, green: 0.3, blue: 0.3 },
            Reflection { red: 0.1, green: 0.6, blue: 0.6 },
            Reflection::uniform(0.1),
            Color::new(60, 200, 200),
        ),
    );

    let operations = vec![
        Operation::Frames { count: 1.0 },
        Operation::Basename { name: "demo".to_string() },
        Operation::Push,
        Operation::Move { offset: [250.0, 250.0, 0.0], knob: None },
        Operation::Rotate { axis: 0.0, degrees: 25.0, knob: None },
        Operation::Rotate { axis: 1.0, degrees: 20.0, knob: None },
        Operation::Push,
        Operation::Move { offset: [0.0, 120.0, 0.0], knob: None },
        Operation::Box {
            corner: [-90.0, 40.0, 40.0],
            size: [180.0, 80.0, 80.0],
            constants: named("shiny_red"),
            coords: None,
        },
        Operation::Pop,
        Operation::Push,
        Operation::Move { offset: [-100.0, -60.0, 0.0], knob: None },
        Operation::Sphere {
            center: [0.0, 0.0, 0.0],
            radius: 70.0,
            constants: named("dull_teal"),
            coords: None,
        },
        Operation::Pop,
        Operation::Push,
        Operation::Move { offset: [110.0, -70.0, 0.0], knob: None },
        Operation::Rotate { axis: 0.0, degrees: 60.0, knob: None },
        Operation::Torus {
            center: [0.0, 0.0, 0.0],
            r0: 20.0,
            r1: 60.0,
            constants: None,
            coords: None,
        },
        Operation::Pop,
        Operation::Line {
            p0: [-200.0, -180.0, 0.0],
            p1: [200.0, -180.0, 0.0],
            constants: None,
            cs0: None,
            cs1: None,
        },
        Operation::Pop,
        Operation::Display,
        Operation::Save { filename: save_as.to_string() },
    ];

    (symbols, operations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_balanced() {
        let (symbols, ops) = demo_scene("demo.png");
        let pushes = ops.iter().filter(|op| **op == Operation::Push).count();
        let pops = ops.iter().filter(|op| **op == Operation::Pop).count();
        assert_eq!(pushes, pops);
        assert_eq!(
            ops.last(),
            Some(&Operation::Save { filename: "demo.png".to_string() })
        );

        for op in &ops {
            let name = match op {
                Operation::Box { constants, .. }
                | Operation::Sphere { constants, .. }
                | Operation::Torus { constants, .. } => constants.as_deref(),
                _ => None,
            };
            if let Some(name) = name {
                assert!(symbols.constants(name).is_some(), "missing {name}");
            }
        }
    }
}
