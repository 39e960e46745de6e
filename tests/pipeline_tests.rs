//! Integration tests for the delay assessment pipeline

use delaycast::{
    route_info, AssessError, AssessmentConfig, Assessor, ItineraryRequest, RegressionPolicy,
    RiskLevel, RouteObservations, WeatherObservation,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn atl_lax_friday_evening() -> ItineraryRequest {
    ItineraryRequest {
        origin: "ATL".to_string(),
        destination: "LAX".to_string(),
        month: 6,
        day_of_month: 15,
        day_of_week: 5,
        dep_hour: 17,
        arr_hour: 20,
        airline: "DL".to_string(),
    }
}

#[test]
fn test_end_to_end_without_weather() {
    init_logs();
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let result = assessor
        .assess(&atl_lax_friday_evening(), None)
        .expect("assessment should succeed");

    assert!((0.0..=1.0).contains(&result.probability));
    assert!(result.expected_delay_minutes >= 0.0);
    assert_eq!(
        result.risk_level,
        RiskLevel::from_probability(result.probability),
        "risk level must match the probability bucket"
    );
    assert_eq!(result.risk_text, result.risk_level.text());

    // Attributions arrive ranked by descending magnitude with the top
    // entry at exactly full width
    assert!(!result.attributions.is_empty());
    for pair in result.attributions.windows(2) {
        assert!(pair[0].weight.abs() >= pair[1].weight.abs());
    }
    assert_eq!(result.attributions[0].bar_width_pct, 100.0);

    // Route info is plausible for ATL-LAX
    assert!(result.route.distance_miles > 1900.0 && result.route.distance_miles < 2000.0);
    assert!(result.route.estimated_duration_minutes > 200.0);

    assert_eq!(result.metadata.schema, "weather-v1");
    assert!(!result.metadata.weather_used);
    assert!(result.metadata.regression_applied);
}

#[test]
fn test_end_to_end_extreme_winter_weather() {
    init_logs();
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let request = ItineraryRequest {
        origin: "MSP".to_string(),
        destination: "MIA".to_string(),
        month: 1,
        day_of_month: 20,
        day_of_week: 2,
        dep_hour: 7,
        arr_hour: 11,
        airline: "AA".to_string(),
    };

    let clear = assessor.assess(&request, None).unwrap();

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
    let stormy = assessor.assess(&request, Some(&weather)).unwrap();

    assert!(
        stormy.probability > clear.probability,
        "winter storm at the origin must raise the probability ({} vs {})",
        stormy.probability,
        clear.probability
    );
    assert!(stormy.metadata.weather_used);
}

#[test]
fn test_assessment_is_deterministic() {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let request = atl_lax_friday_evening();

    let first = assessor.assess(&request, None).unwrap();
    let second = assessor.assess(&request, None).unwrap();

    assert_eq!(first.probability, second.probability);
    assert_eq!(first.expected_delay_minutes, second.expected_delay_minutes);
    assert_eq!(first.attributions, second.attributions);
}

#[test]
fn test_unknown_airport_is_rejected() {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let mut request = atl_lax_friday_evening();
    request.destination = "ZZZ".to_string();

    let err = assessor.assess(&request, None).unwrap_err();
    assert!(matches!(err, AssessError::UnknownCategory(_)));
}

#[test]
fn test_unknown_airline_is_rejected() {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let mut request = atl_lax_friday_evening();
    request.airline = "XX".to_string();

    let err = assessor.assess(&request, None).unwrap_err();
    assert!(matches!(err, AssessError::UnknownCategory(_)));
}

#[test]
fn test_malformed_request_is_rejected() {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let mut request = atl_lax_friday_evening();
    request.dep_hour = 24;

    let err = assessor.assess(&request, None).unwrap_err();
    assert!(matches!(err, AssessError::MalformedRequest(_)));
}

#[test]
fn test_gated_regression_policy() {
    let config = AssessmentConfig {
        regression_policy: RegressionPolicy::AboveProbability(0.99),
        ..AssessmentConfig::default()
    };
    let assessor = Assessor::with_heuristics(config);
    let result = assessor.assess(&atl_lax_friday_evening(), None).unwrap();

    // The heuristic probability is capped well below the gate
    assert!(!result.metadata.regression_applied);
    assert_eq!(result.expected_delay_minutes, 0.0);
    assert_eq!(result.delay_risk_level, RiskLevel::Low);
}

#[test]
fn test_attribution_cap_from_config() {
    let config = AssessmentConfig {
        max_attributions: Some(3),
        ..AssessmentConfig::default()
    };
    let assessor = Assessor::with_heuristics(config);
    let result = assessor.assess(&atl_lax_friday_evening(), None).unwrap();

    assert_eq!(result.attributions.len(), 3);
    assert_eq!(result.attributions[0].bar_width_pct, 100.0);
}

#[test]
fn test_base_schema_without_weather_block() {
    let config = AssessmentConfig {
        include_weather: false,
        ..AssessmentConfig::default()
    };
    let assessor = Assessor::with_heuristics(config);
    let result = assessor.assess(&atl_lax_friday_evening(), None).unwrap();

    assert_eq!(result.metadata.schema, "base-v1");
    assert!((0.0..=1.0).contains(&result.probability));
}

#[test]
fn test_result_wire_shape() {
    let assessor = Assessor::with_heuristics(AssessmentConfig::default());
    let result = assessor.assess(&atl_lax_friday_evening(), None).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["probability"].is_number());
    assert!(json["probabilityPercent"].is_number());
    assert!(json["expectedDelayMinutes"].is_number());
    assert!(json["riskLevel"].is_string());
    assert!(json["riskText"].is_string());
    assert!(json["attributions"].is_array());

    let first = &json["attributions"][0];
    assert!(first["feature"].is_string());
    assert!(first["displayName"].is_string());
    assert!(first["value"].is_string());
    assert!(first["weight"].is_number());
    assert!(first["barWidthPct"].is_number());
}

#[test]
fn test_assessor_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Assessor>();
}

#[test]
fn test_route_info_without_prediction() {
    let info = route_info("ATL", "LAX").expect("known airports");
    assert!(info.distance_miles > 1900.0 && info.distance_miles < 2000.0);
    assert_eq!(
        info.estimated_duration_minutes,
        (info.distance_miles / 500.0 * 60.0 + 30.0).round()
    );

    assert!(matches!(
        route_info("ATL", "ZZZ"),
        Err(AssessError::UnknownCategory(_))
    ));
}
