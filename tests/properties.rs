use proptest::prelude::*;

use u_cvrp::constraint::CapacityDimension;
use u_cvrp::distance::Metric;
use u_cvrp::engine::SearchParameters;
use u_cvrp::models::{Coordinate, ProblemModel};
use u_cvrp::report::report;
use u_cvrp::solver::solve;

fn planar() -> impl Strategy<Value = Coordinate> {
    (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Coordinate::new(x, y))
}

fn geographic() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| Coordinate::lat_lon(lat, lon))
}

fn problem() -> impl Strategy<Value = (Vec<Coordinate>, Vec<f64>, Vec<f64>)> {
    (1usize..25).prop_flat_map(|n| {
        (
            prop::collection::vec(planar(), n + 1),
            prop::collection::vec(0.0..10.0f64, n),
            prop::collection::vec(10.0..40.0f64, 1..6),
        )
            .prop_map(|(locations, mut demands, capacities)| {
                demands.insert(0, 0.0);
                (locations, demands, capacities)
            })
    })
}

fn build((locations, demands, capacities): (Vec<Coordinate>, Vec<f64>, Vec<f64>)) -> ProblemModel {
    let v = capacities.len();
    ProblemModel::build(locations, demands, v, 0, capacities).expect("valid model")
}

proptest! {
    #[test]
    fn prop_block_symmetric_and_zero_on_diagonal(a in planar(), b in planar()) {
        let m = Metric::Block;
        prop_assert_eq!(m.distance(a, b).unwrap(), m.distance(b, a).unwrap());
        prop_assert_eq!(m.distance(a, a).unwrap(), 0.0);
    }

    #[test]
    fn prop_great_circle_symmetric_and_finite(a in geographic(), b in geographic()) {
        let m = Metric::GreatCircle;
        let ab = m.distance(a, b).unwrap();
        let ba = m.distance(b, a).unwrap();
        prop_assert!(ab.is_finite() && ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert_eq!(m.distance(a, a).unwrap(), 0.0);
    }

    #[test]
    fn prop_every_customer_served_once_within_capacity(input in problem()) {
        let model = build(input);
        let dm = model.distance_matrix(Metric::Block).unwrap();
        let capacity = CapacityDimension::new(&model);

        match solve(&model, &dm, &capacity, &SearchParameters::default()) {
            Ok(assignment) => {
                let mut seen = vec![0usize; model.num_locations()];
                for v in 0..model.num_vehicles() {
                    let route = assignment.route(v);
                    let customers = &route[1..route.len() - 1];
                    prop_assert!(capacity.is_feasible(v, customers));
                    for &c in customers {
                        seen[c] += 1;
                    }
                }
                for c in model.customers() {
                    prop_assert_eq!(seen[c], 1);
                }
                prop_assert_eq!(seen[model.depot()], 0);

                let r = report(&model, &dm, &assignment).unwrap();
                for route in r.routes() {
                    let cap = model.vehicles()[route.vehicle_id()].capacity();
                    for visit in route.visits() {
                        prop_assert!(visit.load <= cap);
                    }
                }
            }
            Err(err) => {
                prop_assert!(err.is_infeasible());
            }
        }
    }

    #[test]
    fn prop_construction_is_deterministic(input in problem()) {
        let model = build(input);
        let dm = model.distance_matrix(Metric::Block).unwrap();
        let capacity = CapacityDimension::new(&model);
        let params = SearchParameters::default();
        prop_assert_eq!(
            solve(&model, &dm, &capacity, &params),
            solve(&model, &dm, &capacity, &params)
        );
    }

    #[test]
    fn prop_total_is_sum_of_routes(input in problem()) {
        let model = build(input);
        let dm = model.distance_matrix(Metric::Block).unwrap();
        let capacity = CapacityDimension::new(&model);
        if let Ok(assignment) = solve(&model, &dm, &capacity, &SearchParameters::default()) {
            let r = report(&model, &dm, &assignment).unwrap();
            let sum: f64 = r.routes().iter().map(|route| route.total_distance()).sum();
            prop_assert!((r.total_distance() - sum).abs() < 1e-9);
        }
    }
}
