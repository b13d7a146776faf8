//! Dashboard composition.

use std::thread;

use pulse_tests::prelude::*;

mod panels {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panels_match_individual_queries() {
        // GIVEN
        let records = WorldGenerator::new(WorldConfig::default()).generate_seeded();
        let spec = FilterSpec::covering(&records)
            .unwrap()
            .with_locations(["Rochester", "Phoenix"]);
        let engine = QueryEngine::new();

        // WHEN
        let board = engine.dashboard(&records, &spec).unwrap();

        // THEN
        let selected = apply_filter(&records, &spec).unwrap();
        assert_eq!(board.filtered, selected);
        assert_eq!(board.kpis, compute_kpis(&selected));
        assert_eq!(
            board.cost_by_department,
            aggregate_by(
                &selected,
                GroupBy::One(Dimension::Department),
                Metric::TreatmentCostUsd,
                Reducer::Mean
            )
            .unwrap()
        );
        assert_eq!(
            board.satisfaction_trend,
            aggregate_by(
                &selected,
                GroupBy::One(Dimension::Date),
                Metric::SatisfactionScore,
                Reducer::Mean
            )
            .unwrap()
        );
        assert_eq!(board.top_departments.len(), 5);
        assert_eq!(board.appointments_heatmap.columns.len(), 2);
    }

    #[test]
    fn test_location_shares_sum_to_one() {
        let records = campus_week();
        let spec = FilterSpec::covering(&records).unwrap();

        let board = QueryEngine::new().dashboard(&records, &spec).unwrap();

        let total: f64 = board
            .appointments_by_location
            .iter()
            .filter_map(|row| row.share)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_appointments_have_no_share() {
        let records = vec![
            record(date(2024, 1, 1), "A", "ER", 10.0, 100.0, 4.0, 0),
            record(date(2024, 1, 1), "B", "ER", 10.0, 100.0, 4.0, 0),
        ];
        let spec = FilterSpec::covering(&records).unwrap();

        let board = QueryEngine::new().dashboard(&records, &spec).unwrap();

        assert_eq!(board.appointments_by_location.len(), 2);
        assert!(board.appointments_by_location.iter().all(|row| row.share.is_none()));
    }

    #[test]
    fn test_heatmap_policy_from_config() {
        let records = campus_week();
        let spec = FilterSpec::covering(&records).unwrap();
        let config = DashboardConfig::from_json(r#"{"heatmap_reducer": "mean", "top_n": 2}"#).unwrap();
        let engine = QueryEngine::with_config(config).unwrap();

        let board = engine.dashboard(&records, &spec).unwrap();

        assert_eq!(board.appointments_heatmap.reducer, Reducer::Mean);
        assert_eq!(
            board
                .appointments_heatmap
                .cell(&DimValue::from("Cardiology"), &DimValue::from("Rochester")),
            Some(11.5)
        );
        assert_eq!(board.top_departments.len(), 2);
    }
}

mod concurrency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engine_shared_across_threads() {
        let records = WorldGenerator::new(WorldConfig::default()).generate_seeded();
        let engine = QueryEngine::new();
        let base = FilterSpec::covering(&records).unwrap();
        let locations: Vec<String> = base.locations.iter().cloned().collect();

        let sequential: Vec<_> = locations
            .iter()
            .map(|l| {
                let spec = base.clone().with_locations([l.as_str()]);
                engine.dashboard(&records, &spec).unwrap().kpis
            })
            .collect();

        let parallel: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = locations
                .iter()
                .map(|l| {
                    let spec = base.clone().with_locations([l.as_str()]);
                    let engine = &engine;
                    let records = &records;
                    s.spawn(move || engine.dashboard(records, &spec).unwrap().kpis)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(parallel, sequential);
    }
}
