#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::commands::SessionCommand;
    use crate::config::*;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::SessionEvent;
    use crate::state::SessionView;
    use crate::types::{heading_vector, MapBounds, Position, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_range_is_euclidean() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        assert_eq!(a.range_to(&b), 5.0);
        assert_eq!(b.range_to(&a), 5.0);
        assert_eq!(a.range_to(&a), 0.0);
    }

    #[test]
    fn test_bearing_matches_heading_vector() {
        let origin = Position::new(2.0, 3.0);
        let other = Position::new(2.0, 7.0);
        let bearing = origin.bearing_to(&other);
        assert_abs_diff_eq!(bearing, FRAC_PI_2, epsilon = 1e-12);

        let dir = heading_vector(bearing);
        assert_abs_diff_eq!(dir.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.y, 1.0, epsilon = 1e-12);

        let west = origin.bearing_to(&Position::new(-5.0, 3.0));
        assert_abs_diff_eq!(west.abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_is_unit_length() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, -4.0);
        let dir = a.direction_to(&b).unwrap();
        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.y, -0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_direction_to_self_is_none() {
        let a = Position::new(9.0, 7.0);
        assert!(a.direction_to(&a).is_none());
    }

    #[test]
    fn test_advanced_moves_along_direction() {
        let start = Position::new(1.0, 1.0);
        let moved = start.advanced(heading_vector(0.0), 2.5);
        assert_abs_diff_eq!(moved.x, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(moved.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_map_center_and_clamp() {
        let map = MapBounds::default();
        assert_eq!(map.center(), Position::new(9.0, 7.0));

        let clamped = map.clamp(Position::new(-1.0, 20.0), CLAMP_MARGIN_KM);
        assert_eq!(clamped, Position::new(0.5, 13.5));

        let inside = Position::new(4.0, 4.0);
        assert_eq!(map.clamp(inside, CLAMP_MARGIN_KM), inside);
    }

    #[test]
    fn test_map_overrun() {
        let map = MapBounds::default();
        assert!(!map.is_beyond(&Position::new(-1.0, 7.0), ESCAPE_OVERRUN_KM));
        assert!(!map.is_beyond(&Position::new(-5.0, 7.0), ESCAPE_OVERRUN_KM));
        assert!(map.is_beyond(&Position::new(-5.01, 7.0), ESCAPE_OVERRUN_KM));
        assert!(map.is_beyond(&Position::new(9.0, 19.5), ESCAPE_OVERRUN_KM));
        assert!(map.is_beyond(&Position::new(23.1, 7.0), ESCAPE_OVERRUN_KM));
    }

    #[test]
    fn test_screen_projection_flips_for_y_up() {
        let map = MapBounds::default();
        let pos = Position::new(2.0, 3.0);
        assert_eq!(
            map.to_screen(&pos, PIXELS_PER_KM, YAxis::Down),
            (100.0, 150.0)
        );
        assert_eq!(map.to_screen(&pos, PIXELS_PER_KM, YAxis::Up), (100.0, 550.0));
    }

    #[test]
    fn test_sim_time_hours() {
        let mut time = SimTime::default();
        for _ in 0..1800 {
            time.advance(SIM_DT_SECS);
        }
        assert_eq!(time.tick, 1800);
        assert_abs_diff_eq!(time.elapsed_hours(), 0.5, epsilon = 1e-12);
    }

    // ---- Roles ----

    #[test]
    fn test_role_assignment() {
        assert_eq!(RoleAssignment::Pursuit.threat(), ActorKind::Target);
        assert_eq!(RoleAssignment::Pursuit.responder(), ActorKind::Interceptor);
        assert_eq!(RoleAssignment::Evasion.threat(), ActorKind::Interceptor);
        assert_eq!(RoleAssignment::Evasion.responder(), ActorKind::Target);
        assert_eq!(
            RoleAssignment::Pursuit.engaged_phase(),
            SessionPhase::Tracking
        );
        assert_eq!(
            RoleAssignment::Evasion.engaged_phase(),
            SessionPhase::Evading
        );
    }

    #[test]
    fn test_phase_helpers() {
        assert!(SessionPhase::Finished(Outcome::Escaped).is_finished());
        assert!(!SessionPhase::Exploding.is_finished());
        assert_eq!(
            SessionPhase::Finished(Outcome::Intercepted).outcome(),
            Some(Outcome::Intercepted)
        );
        assert_eq!(SessionPhase::Tracking.outcome(), None);
        assert!(SessionPhase::Evading.is_engaged());
        assert!(!SessionPhase::Approaching.is_engaged());
    }

    // ---- Validation ----

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default()
            .validate(&ConfigBounds::default())
            .is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = ConfigBounds::default();
        let config = SessionConfig::new(SPEED_MAX_KMH, SPEED_MIN_KMH, ZONE_RADIUS_MAX_KM);
        assert!(config.validate(&bounds).is_ok());
    }

    #[test]
    fn test_validation_reports_field_and_range() {
        let bounds = ConfigBounds::default();
        let err = SessionConfig::new(200.0, 100.0, 25.0)
            .validate(&bounds)
            .unwrap_err();
        assert_eq!(err.field, ConfigField::ZoneRadius);
        assert_eq!(err.value, 25.0);
        assert_eq!(err.allowed, FieldBounds::new(0.1, 20.0));
        assert_eq!(
            err.to_string(),
            "zone radius (km) = 25 is outside the allowed range [0.1, 20]"
        );
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let err = SessionConfig::new(-1.0, 0.0, 0.0)
            .validate(&ConfigBounds::default())
            .unwrap_err();
        assert_eq!(err.field, ConfigField::InterceptorSpeed);
    }

    #[test]
    fn test_non_positive_rejected_even_with_loose_bounds() {
        let bounds = ConfigBounds {
            zone_radius_km: FieldBounds::new(-10.0, 10.0),
            ..Default::default()
        };
        let err = SessionConfig::new(200.0, 100.0, 0.0)
            .validate(&bounds)
            .unwrap_err();
        assert_eq!(err.field, ConfigField::ZoneRadius);
    }

    #[test]
    fn test_nan_rejected() {
        let err = SessionConfig::new(200.0, f64::NAN, 3.0)
            .validate(&ConfigBounds::default())
            .unwrap_err();
        assert_eq!(err.field, ConfigField::TargetSpeed);
    }

    #[test]
    fn test_narrow_variant_bounds() {
        let bounds = ConfigBounds {
            interceptor_speed_kmh: FieldBounds::new(0.1, 500.0),
            target_speed_kmh: FieldBounds::new(0.1, 200.0),
            ..Default::default()
        };
        assert!(SessionConfig::new(500.0, 200.0, 3.0)
            .validate(&bounds)
            .is_ok());
        let err = SessionConfig::new(500.0, 250.0, 3.0)
            .validate(&bounds)
            .unwrap_err();
        assert_eq!(err.field, ConfigField::TargetSpeed);
    }

    proptest! {
        #[test]
        fn prop_validate_iff_within_bounds(
            interceptor in -10.0f64..1100.0,
            target in -10.0f64..1100.0,
            zone in -1.0f64..25.0,
        ) {
            let bounds = ConfigBounds::default();
            let config = SessionConfig::new(interceptor, target, zone);
            let expected = (SPEED_MIN_KMH..=SPEED_MAX_KMH).contains(&interceptor)
                && (SPEED_MIN_KMH..=SPEED_MAX_KMH).contains(&target)
                && (ZONE_RADIUS_MIN_KM..=ZONE_RADIUS_MAX_KM).contains(&zone);
            prop_assert_eq!(config.validate(&bounds).is_ok(), expected);
        }
    }

    // ---- Serialization ----

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"zone_radius_km": 5.0}"#).unwrap();
        assert_eq!(config.zone_radius_km, 5.0);
        assert_eq!(config.interceptor_speed_kmh, DEFAULT_INTERCEPTOR_SPEED_KMH);
        assert_eq!(config.target_speed_kmh, DEFAULT_TARGET_SPEED_KMH);
    }

    #[test]
    fn test_rules_json() {
        let rules: EngagementRules =
            serde_json::from_str(r#"{"role": "Evasion", "boundary": "Escape"}"#).unwrap();
        assert_eq!(rules.role, RoleAssignment::Evasion);
        assert_eq!(rules.boundary, BoundaryPolicy::Escape);
        assert_eq!(rules.detection, DetectionPolicy::Latched);
        assert_eq!(rules.map, MapBounds::default());
    }

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&SessionCommand::Configure {
            config: SessionConfig::default(),
        })
        .unwrap();
        assert!(json.starts_with(r#"{"type":"Configure""#));
        let back: SessionCommand = serde_json::from_str(r#"{"type":"TogglePause"}"#).unwrap();
        assert!(matches!(back, SessionCommand::TogglePause));
    }

    #[test]
    fn test_finished_phase_round_trip() {
        let event = SessionEvent::PhaseChanged {
            from: SessionPhase::Exploding,
            to: SessionPhase::Finished(Outcome::Intercepted),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_view() {
        let view = SessionView::default();
        assert_eq!(view.phase, SessionPhase::Idle);
        assert!(view.outcome.is_none());
        assert!(!view.actor(ActorKind::Target).active);
    }
}
