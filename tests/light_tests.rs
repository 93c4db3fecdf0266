//! Traffic light state machine tests
//!
//! These pin down the per-light cycle behavior, including the deliberate
//! off-by-one where a duration of N seconds is displayed for N+1 ticks.

use signal_sim::signals::{LightColor, SignalTiming, TrafficLight};

#[test]
fn test_light_starts_red_and_idle() {
    let light = TrafficLight::new(SignalTiming::new(5, 2));
    assert_eq!(light.color(), LightColor::Red);
    assert_eq!(light.remaining_secs(), 0);
    assert!(light.is_idle_red());
}

#[test]
fn test_light_cycles_red_green_yellow_red() {
    let mut light = TrafficLight::new(SignalTiming::new(3, 2));

    // First tick takes the idle red light straight to green
    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Green);
    assert_eq!(light.remaining_secs(), 3);

    // Green counts 3, 2, 1, 0 and changes on the tick after reaching 0
    for _ in 0..4 {
        light.advance_one_tick();
    }
    assert_eq!(light.color(), LightColor::Yellow);
    assert_eq!(light.remaining_secs(), 2);

    for _ in 0..3 {
        light.advance_one_tick();
    }
    assert_eq!(light.color(), LightColor::Red);
    assert_eq!(light.remaining_secs(), 0);
}

#[test]
fn test_cycle_order_never_skips() {
    let mut light = TrafficLight::new(SignalTiming::new(2, 1));
    let expected = [LightColor::Green, LightColor::Yellow, LightColor::Red];

    let mut transitions = Vec::new();
    let mut last = light.color();
    for _ in 0..100 {
        light.advance_one_tick();
        if light.color() != last {
            transitions.push(light.color());
            last = light.color();
        }
    }

    for (i, color) in transitions.iter().enumerate() {
        assert_eq!(*color, expected[i % expected.len()]);
    }
}

#[test]
fn test_duration_shows_for_n_plus_one_ticks() {
    let mut light = TrafficLight::new(SignalTiming::new(5, 2));
    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Green);

    // The transition fires only once the timer goes negative, so green
    // holds for duration + 1 ticks: 5, 4, 3, 2, 1, 0.
    let mut green_ticks = 1;
    while light.color() == LightColor::Green {
        light.advance_one_tick();
        if light.color() == LightColor::Green {
            green_ticks += 1;
        }
    }
    assert_eq!(green_ticks, 6);
    assert_eq!(light.color(), LightColor::Yellow);

    let mut yellow_ticks = 1;
    while light.color() == LightColor::Yellow {
        light.advance_one_tick();
        if light.color() == LightColor::Yellow {
            yellow_ticks += 1;
        }
    }
    assert_eq!(yellow_ticks, 3);
}

#[test]
fn test_zero_durations_still_cycle() {
    let mut light = TrafficLight::new(SignalTiming::new(0, 0));

    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Green);
    assert_eq!(light.remaining_secs(), 0);

    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Yellow);

    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Red);
    assert_eq!(light.remaining_secs(), 0);
}

#[test]
fn test_force_red_clears_timer() {
    let mut light = TrafficLight::new(SignalTiming::new(5, 2));
    light.advance_one_tick();
    assert_eq!(light.color(), LightColor::Green);
    assert_eq!(light.remaining_secs(), 5);

    light.force_red();
    assert_eq!(light.color(), LightColor::Red);
    assert_eq!(light.remaining_secs(), 0);
    assert!(light.is_idle_red());
}

#[test]
fn test_timer_never_negative_between_ticks() {
    let mut light = TrafficLight::new(SignalTiming::new(3, 1));
    for _ in 0..50 {
        light.advance_one_tick();
        assert!(light.remaining_secs() >= 0);
    }
}
