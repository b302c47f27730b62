//! End-to-end behavior of closed and open collections over the shared
//! geometric fixtures.

use std::rc::Rc;

use kindset::prelude::*;
use kindset::{
    CollectionConfig, ConfigurationError, KindsetError, QueryOutcome, TypeMismatchError,
};
use kindset_test::{Cone, Cube, Shape, Solid, Sphere, Torus};

fn sphere_true_cube_false() -> DispatchTable<Shape, bool> {
    DispatchTable::builder()
        .on(|_: &Sphere| true)
        .on(|_: &Cube| false)
        .build()
        .unwrap()
}

#[test]
fn test_ordered_results_and_or_fold() {
    let mut collection = ClosedCollection::<Shape>::new();
    collection.add(Sphere::new(1.0)).add(Cube::new(1.0));

    let results = collection.query_with(&sphere_true_cube_false());

    assert_eq!(results.as_slice(), &[true, false]);
    assert_eq!(
        results.aggregate(Aggregation::Any),
        QueryOutcome::Folded(true)
    );
}

#[test]
fn test_incomplete_handler_set_fails_without_querying() {
    let mut collection = ClosedCollection::<Solid>::new();
    collection
        .add(Sphere::new(1.0))
        .add(Cube::new(1.0))
        .add(Cone::new(1.0, 1.0));

    let queried = Rc::new(std::cell::Cell::new(0));
    let (a, b) = (Rc::clone(&queried), Rc::clone(&queried));
    let result = DispatchTable::<Solid, bool>::builder()
        .on(move |s: &Sphere| {
            a.set(a.get() + 1);
            s.query()
        })
        .on(move |c: &Cube| {
            b.set(b.get() + 1);
            c.query()
        })
        .build();

    match result {
        Err(ConfigurationError::NonExhaustive { set, missing }) => {
            assert_eq!(set, "Solid");
            assert_eq!(missing, vec!["Cone"]);
        }
        other => panic!("expected a non-exhaustive error, got {:?}", other),
    }
    assert_eq!(queried.get(), 0);
}

#[test]
fn test_foreign_kind_rejected_and_prior_elements_kept() {
    let mut collection = ClosedCollection::<Shape>::new();
    collection.add(Cube::new(2.0)).add(Sphere::new(1.0));

    let err = collection.try_add(Cone::new(1.0, 2.0)).unwrap_err();

    assert_eq!(err, TypeMismatchError::new("Shape", std::any::type_name::<Cone>()));
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.for_each_query(), [false, true]);
}

#[test]
fn test_traversal_is_deterministic() {
    let collection: ClosedCollection<Solid> = vec![
        Solid::from(Cone::new(1.0, 1.0)),
        Solid::from(Cube::new(1.0)),
        Solid::from(Sphere::new(1.0)),
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = collection.iter().map(Named::kind_name).collect();
    assert_eq!(names, ["Cone", "Cube", "Sphere"]);

    for _ in 0..3 {
        assert_eq!(collection.for_each_query(), [true, false, true]);
    }
}

#[test]
fn test_exact_handler_under_every_registration_order() {
    let value = Solid::from(Cube::new(1.0));
    let orders: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let mut handlers: Vec<Option<KindHandler<Solid, &'static str>>> = vec![
            Some(KindHandler::new(|_: &Sphere| "sphere")),
            Some(KindHandler::new(|_: &Cube| "cube")),
            Some(KindHandler::new(|_: &Cone| "cone")),
        ];
        let ordered = order.iter().filter_map(|&i| handlers[i].take());
        let table = DispatchTable::from_handlers(ordered).unwrap();

        assert_eq!(table.visit(&value), "cube");
    }
}

#[test]
fn test_derived_static_visitor() {
    struct Volume;

    impl Visit<Sphere> for Volume {
        type Output = f64;
        fn visit(&mut self, s: &Sphere) -> f64 {
            s.volume()
        }
    }

    impl Visit<Cube> for Volume {
        type Output = f64;
        fn visit(&mut self, c: &Cube) -> f64 {
            c.volume()
        }
    }

    let total: f64 = [Shape::from(Cube::new(2.0)), Shape::from(Cube::new(1.0))]
        .iter()
        .map(|shape| shape.accept(&mut Volume))
        .sum();

    assert_eq!(total, 9.0);
}

#[test]
fn test_open_collection_takes_new_kinds() {
    let shared: Rc<dyn Query> = Rc::new(Torus::new(2.0, 0.5));
    let mut collection = kindset::open_collection::<Rc<dyn Query>>(&CollectionConfig::default());
    collection
        .add(Rc::new(Cube::new(1.0)))
        .add(Rc::clone(&shared))
        .add(Rc::new(Sphere::new(1.0)));

    assert_eq!(collection.for_each_query(), [false, true, true]);
    assert_eq!(Rc::strong_count(&shared), 2);

    drop(collection);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_configured_aggregation() {
    let config = CollectionConfig::from_toml_str(
        r#"
            aggregation = "all"
            initial_capacity = 4
        "#,
    )
    .unwrap();

    let mut collection = kindset::closed_collection::<Solid>(&config).unwrap();
    collection.add(Sphere::new(1.0)).add(Cone::new(1.0, 1.0));

    assert_eq!(
        kindset::query_configured(&collection, &config),
        QueryOutcome::Folded(true)
    );
}

fn shapes_with(config: &CollectionConfig, extra: Cone) -> kindset::Result<usize> {
    let mut shapes = kindset::closed_collection::<Shape>(config)?;
    shapes.add(Sphere::new(1.0));
    shapes.try_add(extra)?;
    Ok(shapes.len())
}

#[test]
fn test_errors_convert_into_kindset_error() {
    let config = CollectionConfig::default();
    let err = shapes_with(&config, Cone::new(1.0, 1.0)).unwrap_err();

    assert_eq!(
        err,
        KindsetError::TypeMismatch(TypeMismatchError::new(
            "Shape",
            std::any::type_name::<Cone>()
        ))
    );
    assert!(err.to_string().contains("not a kind of closed set `Shape`"));
}
