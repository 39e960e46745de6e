//! Performance benchmark for the assessment pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delaycast::{AssessmentConfig, Assessor, ItineraryRequest, RouteObservations, WeatherObservation};

fn bench_assess(c: &mut Criterion) {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());

    let request = ItineraryRequest {
        origin: "ATL".to_string(),
        destination: "LAX".to_string(),
        month: 6,
        day_of_month: 15,
        day_of_week: 5,
        dep_hour: 17,
        arr_hour: 20,
        airline: "DL".to_string(),
    };

    let weather = RouteObservations {
        origin: WeatherObservation {
            temperature_c: Some(-20.0),
            humidity_pct: Some(92.0),
            precip_mm: Some(10.0),
            snow_depth_mm: Some(5.0),
            wind_speed_kmh: Some(50.0),
            ..WeatherObservation::default()
        },
        destination: WeatherObservation::default(),
    };

    c.bench_function("assess_no_weather", |b| {
        b.iter(|| {
            let _ = assessor.assess(black_box(&request), black_box(None));
        });
    });

    c.bench_function("assess_with_weather", |b| {
        b.iter(|| {
            let _ = assessor.assess(black_box(&request), black_box(Some(&weather)));
        });
    });
}

criterion_group!(benches, bench_assess);
criterion_main!(benches);
