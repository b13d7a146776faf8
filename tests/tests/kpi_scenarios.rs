//! KPI scenarios.

use pulse_query::KpiSummary;
use pulse_tests::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

mod two_clinics_scenario {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_location_a_kpis() {
        // GIVEN
        let records = two_clinics();
        let spec = FilterSpec::covering(&records).unwrap().with_locations(["A"]);

        // WHEN
        let selected = apply_filter(&records, &spec).unwrap();
        let kpis = compute_kpis(&selected);

        // THEN
        assert_eq!(selected.len(), 1);
        assert_eq!(
            kpis,
            KpiSummary {
                record_count: 1,
                avg_wait_time: Some(10.0),
                avg_treatment_cost: Some(100.0),
                avg_satisfaction: Some(4.0),
                total_appointments_available: Some(5),
            }
        );
    }

    #[test]
    fn test_both_clinics_kpis() {
        let records = two_clinics();

        let kpis = compute_kpis(&records);

        assert_eq!(kpis.avg_wait_time, Some(15.0));
        assert_eq!(kpis.avg_treatment_cost, Some(150.0));
        assert_eq!(kpis.avg_satisfaction, Some(3.5));
        assert_eq!(kpis.total_appointments_available, Some(8));
    }
}

mod empty_selection {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_not_zero() {
        let records = campus_week();
        let spec = FilterSpec::covering(&records)
            .unwrap()
            .with_locations(["Rochester"])
            .with_departments(["Pediatrics"]);

        let kpis = compute_kpis(&apply_filter(&records, &spec).unwrap());

        assert_eq!(kpis, KpiSummary::default());
        assert!(kpis.is_empty());
    }
}

mod consistency {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kpis_agree_with_aggregations() {
        let records = WorldGenerator::new(WorldConfig::default()).generate_seeded();
        let spec = FilterSpec::covering(&records)
            .unwrap()
            .with_locations(["Rochester", "La Crosse"]);
        let selected = apply_filter(&records, &spec).unwrap();

        let kpis = compute_kpis(&selected);
        let appointments = aggregate_by(
            &selected,
            GroupBy::One(Dimension::Location),
            Metric::AppointmentsAvailable,
            Reducer::Sum,
        )
        .unwrap();
        let wait_sums = aggregate_by(
            &selected,
            GroupBy::One(Dimension::Department),
            Metric::WaitTimeMinutes,
            Reducer::Sum,
        )
        .unwrap();

        assert_eq!(
            kpis.total_appointments_available.map(|n| n as f64),
            Some(appointments.total())
        );
        let mean_from_groups = wait_sums.total() / selected.len() as f64;
        assert!(close(kpis.avg_wait_time.unwrap(), mean_from_groups));
    }

    #[test]
    fn test_satisfaction_mean_within_scale() {
        let records = WorldGenerator::new(WorldConfig::default().with_seed(9)).generate_seeded();

        let kpis = compute_kpis(&records);

        let avg = kpis.avg_satisfaction.unwrap();
        assert!((0.0..=5.0).contains(&avg));
        assert_eq!(kpis.record_count, records.len());
    }
}
