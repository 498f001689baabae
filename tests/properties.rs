use car_builder::{BuildError, BuildState, CarBuilder, Director, Part, SkylarkBuilder};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Initialize,
    Fit(Part),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Initialize),
        Just(Step::Fit(Part::Model)),
        Just(Step::Fit(Part::Tires)),
        Just(Step::Fit(Part::Engine)),
    ]
}

fn expected_value(part: Part) -> &'static str {
    match part {
        Part::Model => SkylarkBuilder::MODEL,
        Part::Tires => SkylarkBuilder::TIRES,
        Part::Engine => SkylarkBuilder::ENGINE,
    }
}

fn apply(builder: &mut SkylarkBuilder, part: Part) -> Result<(), BuildError> {
    match part {
        Part::Model => builder.set_model(),
        Part::Tires => builder.set_tires(),
        Part::Engine => builder.set_engine(),
    }
}

proptest! {
    #[test]
    fn builder_matches_state_model(steps in prop::collection::vec(step(), 0..24)) {
        let mut builder = SkylarkBuilder::new();
        // None = never initialized; otherwise which parts are fitted.
        let mut fitted: Option<[bool; 3]> = None;

        for step in steps {
            match step {
                Step::Initialize => {
                    builder.initialize();
                    fitted = Some([false; 3]);
                }
                Step::Fit(part) => {
                    let result = apply(&mut builder, part);
                    match fitted.as_mut() {
                        None => {
                            prop_assert_eq!(result, Err(BuildError::Uninitialized { part }));
                        }
                        Some(flags) => {
                            prop_assert!(result.is_ok());
                            let index = Part::ALL.iter().position(|p| *p == part).unwrap();
                            flags[index] = true;
                        }
                    }
                }
            }

            let expected_state = match fitted {
                None => BuildState::Uninitialized,
                Some(flags) if flags.iter().all(|f| *f) => BuildState::Complete,
                Some(_) => BuildState::Assembling,
            };
            prop_assert_eq!(builder.state(), expected_state);

            match (fitted, builder.car()) {
                (None, car) => prop_assert!(car.is_none()),
                (Some(flags), Some(car)) => {
                    for (part, set) in Part::ALL.into_iter().zip(flags) {
                        let expected = if set { Some(expected_value(part)) } else { None };
                        prop_assert_eq!(car.part(part), expected);
                    }
                }
                (Some(_), None) => prop_assert!(false, "initialized builder lost its car"),
            }
        }
    }

    #[test]
    fn construction_always_completes(runs in 1usize..8) {
        let mut builder = SkylarkBuilder::new();
        let mut director = Director::new(&mut builder);
        for _ in 0..runs {
            director.construct_product().unwrap();
            let car = director.get_product().unwrap();
            prop_assert_eq!(car.to_string(), "Skylark | Regular tires | Turbo Engine");
        }
    }
}
