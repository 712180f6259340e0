//! Integration tests for LightChart

mod common;
use common::*;

use nautical_lights::charts::{ANNAPOLIS_HARBOR, EASTERN_BAY};
use nautical_lights::{
    ChartError, ChartState, LedId, LightChart, LightColor, PatternError, parse_pattern,
};

type Chart<'t, const N: usize> = LightChart<'t, TestInstant, MockLed, MockTimeSource, N>;

#[test]
fn can_create_empty_chart() {
    let timer = MockTimeSource::new();
    let chart = Chart::<4>::new(&timer);
    assert_eq!(chart.len(), 0);
    assert!(chart.is_empty());
    assert_eq!(chart.state(), ChartState::Stopped);
}

#[test]
fn can_add_lights() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<4>::new(&timer);

    chart.add_light(LedId(0), "Fl R 4s", MockLed::new()).unwrap();
    chart.add_light(LedId(2), "Q G", MockLed::new()).unwrap();

    assert_eq!(chart.len(), 2);
    assert!(!chart.is_empty());
    assert!(chart.contains(LedId(0)));
    assert!(!chart.contains(LedId(1)));
    assert!(chart.contains(LedId(2)));
    assert!(!chart.contains(LedId(9)));
}

#[test]
fn adding_a_light_turns_its_led_off() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<4>::new(&timer);

    let led = MockLed::new();
    let probe = led.probe();
    chart.add_light(LedId(0), "F R", led).unwrap();

    assert_eq!(probe.color_history(), vec![COLOR_OFF]);
    assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
}

#[test]
fn rejects_duplicate_led_id() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<4>::new(&timer);

    chart.add_light(LedId(0), "F R", MockLed::new()).unwrap();
    let result = chart.add_light(LedId(0), "F G", MockLed::new());

    assert_eq!(result, Err(ChartError::DuplicateLedId(LedId(0))));
}

#[test]
fn rejects_led_id_out_of_bounds() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<4>::new(&timer);

    let result = chart.add_light(LedId(10), "F R", MockLed::new());

    assert_eq!(
        result,
        Err(ChartError::LedIdOutOfBounds {
            id: LedId(10),
            capacity: 4
        })
    );
}

#[test]
fn accessors_reject_unknown_ids() {
    let timer = MockTimeSource::new();
    let chart = Chart::<4>::new(&timer);

    assert_eq!(chart.pattern(LedId(1)), Err(ChartError::InvalidLedId(LedId(1))));
    assert_eq!(chart.current_color(LedId(7)), Err(ChartError::InvalidLedId(LedId(7))));
    assert_eq!(chart.phase_offset_ms(LedId(3)), Err(ChartError::InvalidLedId(LedId(3))));
}

#[test]
fn default_phase_offset_follows_color() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<5>::new(&timer);

    chart.add_light(LedId(0), "Fl R 4s", MockLed::new()).unwrap();
    chart.add_light(LedId(1), "Fl Y 4s", MockLed::new()).unwrap();
    chart.add_light(LedId(2), "Fl W 6s", MockLed::new()).unwrap();
    chart.add_light(LedId(3), "Fl G 4s", MockLed::new()).unwrap();
    chart.add_light(LedId(4), "nonsense", MockLed::new()).unwrap();

    assert_eq!(chart.phase_offset_ms(LedId(0)), Ok(0));
    assert_eq!(chart.phase_offset_ms(LedId(1)), Ok(500));
    assert_eq!(chart.phase_offset_ms(LedId(2)), Ok(1000));
    assert_eq!(chart.phase_offset_ms(LedId(3)), Ok(1500));
    assert_eq!(chart.phase_offset_ms(LedId(4)), Ok(0));
}

#[test]
fn service_requires_running_chart() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<2>::new(&timer);
    chart.add_light(LedId(0), "F R", MockLed::new()).unwrap();

    assert_eq!(
        chart.service(),
        Err(ChartError::InvalidState {
            expected: ChartState::Running,
            actual: ChartState::Stopped
        })
    );
    assert!(chart.stop().is_err());
}

#[test]
fn start_renders_immediately() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<2>::new(&timer);

    let fixed = MockLed::new();
    let fixed_probe = fixed.probe();
    let quick = MockLed::new();
    let quick_probe = quick.probe();
    chart.add_light(LedId(0), "F R", fixed).unwrap();
    // Green phase offset puts the quick light mid-eclipse at start.
    chart.add_light(LedId(1), "Q G", quick).unwrap();

    assert_eq!(chart.start(), Ok(1));
    assert_eq!(chart.state(), ChartState::Running);
    assert_eq!(fixed_probe.get_last_color(), Some(RED));
    assert_eq!(quick_probe.write_count(), 1);

    assert_eq!(
        chart.start(),
        Err(ChartError::InvalidState {
            expected: ChartState::Stopped,
            actual: ChartState::Running
        })
    );
}

#[test]
fn service_follows_time_source() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<1>::new(&timer);

    let led = MockLed::new();
    let probe = led.probe();
    chart.add_light(LedId(0), "Fl R 4s", led).unwrap();

    chart.start().unwrap();
    assert_eq!(probe.get_last_color(), Some(RED));

    timer.advance(600);
    assert_eq!(chart.service(), Ok(1));
    assert_eq!(probe.get_last_color(), Some(COLOR_OFF));

    timer.advance(1400);
    assert_eq!(chart.service(), Ok(0));

    timer.advance(2000);
    assert_eq!(chart.service(), Ok(1));
    assert_eq!(chart.current_color(LedId(0)), Ok(RED));
}

#[test]
fn epoch_is_taken_at_start() {
    let timer = MockTimeSource::new();
    timer.set_time(TestInstant(123_456));
    let mut chart = Chart::<1>::new(&timer);
    chart.add_light(LedId(0), "Fl R 4s", MockLed::new()).unwrap();

    chart.start().unwrap();
    assert_eq!(chart.current_color(LedId(0)), Ok(RED));

    timer.advance(600);
    chart.service().unwrap();
    assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
}

#[test]
fn render_only_writes_changes() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<2>::new(&timer);

    let led = MockLed::new();
    let probe = led.probe();
    chart.add_light(LedId(0), "F W", led).unwrap();
    chart.add_light(LedId(1), "F Y", MockLed::new()).unwrap();

    assert_eq!(chart.render(TestDuration(0)), 2);
    assert_eq!(chart.render(TestDuration(100)), 0);
    assert_eq!(chart.render(TestDuration(200)), 0);
    assert_eq!(probe.color_history(), vec![COLOR_OFF, WHITE]);
}

#[test]
fn phase_offsets_desynchronize_identical_lights() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<2>::new(&timer);

    chart.add_light_with_phase(LedId(0), "Fl G 4s", 0, MockLed::new()).unwrap();
    chart.add_light_with_phase(LedId(1), "Fl G 4s", 2000, MockLed::new()).unwrap();

    chart.render(TestDuration(0));
    assert_eq!(chart.current_color(LedId(0)), Ok(GREEN));
    assert_eq!(chart.current_color(LedId(1)), Ok(COLOR_OFF));

    chart.render(TestDuration(2000));
    assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
    assert_eq!(chart.current_color(LedId(1)), Ok(GREEN));
}

#[test]
fn bad_characteristic_stays_dark_without_affecting_others() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<3>::new(&timer);

    let bad = MockLed::new();
    let bad_probe = bad.probe();
    chart.add_light(LedId(0), "Zz R 4s", bad).unwrap();
    chart.add_light(LedId(1), "F R", MockLed::new()).unwrap();
    chart
        .add_light(LedId(2), "this text is far too long to be a light", MockLed::new())
        .unwrap();

    assert_eq!(chart.pattern(LedId(0)), Ok(Err(PatternError::UnrecognizedClass)));
    assert!(matches!(
        chart.pattern(LedId(2)),
        Ok(Err(PatternError::InvalidLength(_)))
    ));

    chart.start().unwrap();
    for _ in 0..50 {
        timer.advance(100);
        chart.service().unwrap();
        assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
        assert_eq!(chart.current_color(LedId(1)), Ok(RED));
        assert_eq!(chart.current_color(LedId(2)), Ok(COLOR_OFF));
    }
    assert_eq!(bad_probe.write_count(), 1);
}

#[test]
fn unknown_color_shows_error_magenta() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<1>::new(&timer);
    chart.add_light(LedId(0), "F X", MockLed::new()).unwrap();

    chart.render(TestDuration(0));
    assert_eq!(chart.current_color(LedId(0)), Ok(ERROR_MAGENTA));
}

#[test]
fn stop_turns_everything_off() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<2>::new(&timer);

    let led = MockLed::new();
    let probe = led.probe();
    chart.add_light(LedId(0), "F G", led).unwrap();
    // Past the occultation at the start of the period.
    chart.add_light_with_phase(LedId(1), "Oc R 6s", 1000, MockLed::new()).unwrap();

    timer.advance(1000);
    chart.start().unwrap();
    assert_eq!(chart.current_color(LedId(0)), Ok(GREEN));
    assert_eq!(chart.current_color(LedId(1)), Ok(RED));

    chart.stop().unwrap();
    assert_eq!(chart.state(), ChartState::Stopped);
    assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
    assert_eq!(chart.current_color(LedId(1)), Ok(COLOR_OFF));
    assert_eq!(probe.get_last_color(), Some(COLOR_OFF));

    // Restarting takes a fresh epoch.
    chart.start().unwrap();
    assert_eq!(chart.current_color(LedId(0)), Ok(GREEN));
}

#[test]
fn frame_reports_every_slot() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<3>::new(&timer);
    chart.add_light(LedId(0), "F Y", MockLed::new()).unwrap();
    chart.add_light(LedId(2), "Fl R 4s", MockLed::new()).unwrap();

    let frame = chart.frame(TestDuration(0));
    assert_eq!(frame.len(), 3);
    assert_eq!(frame[0], YELLOW);
    assert_eq!(frame[1], COLOR_OFF);
    assert_eq!(frame[2], RED);

    // Computing a frame does not write to the LEDs.
    assert_eq!(chart.current_color(LedId(0)), Ok(COLOR_OFF));
}

#[test]
fn preset_charts_parse_completely() {
    for entry in ANNAPOLIS_HARBOR.iter().chain(EASTERN_BAY.iter()) {
        let pattern = parse_pattern(entry.characteristic);
        assert!(pattern.is_ok(), "{} -> {:?}", entry.characteristic, pattern);
        let pattern = pattern.unwrap();
        assert_ne!(pattern.color(), LightColor::Error, "{}", entry.characteristic);
    }
}

#[test]
fn preset_chart_runs_on_a_strip() {
    let timer = MockTimeSource::new();
    let mut chart = Chart::<20>::new(&timer);

    for (idx, entry) in EASTERN_BAY.iter().enumerate() {
        chart
            .add_light_with_phase(
                LedId(idx),
                entry.characteristic,
                entry.phase_offset_ms,
                MockLed::new(),
            )
            .unwrap();
    }
    assert_eq!(chart.len(), EASTERN_BAY.len());

    chart.start().unwrap();
    for _ in 0..300 {
        timer.advance(u64::from(nautical_lights::TICK_PERIOD_MS));
        chart.service().unwrap();
    }

    // The fixed yellow light never goes out.
    assert_eq!(chart.current_color(LedId(18)), Ok(YELLOW));
}
