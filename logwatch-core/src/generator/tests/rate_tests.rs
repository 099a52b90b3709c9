use crate::generator::RateWave;
use std::time::Duration;

#[test]
fn first_delay_is_base_over_five() {
    let mut wave = RateWave::new(Duration::from_secs(4));

    assert_eq!(wave.next_delay(0.0), Duration::from_millis(800));
}

#[test]
fn jitter_adds_up_to_fifty_ms() {
    let mut wave = RateWave::new(Duration::from_secs(4));

    let delay = wave.next_delay(0.5);

    assert_eq!(delay, Duration::from_millis(825));
}

#[test]
fn divisor_rises_then_falls() {
    let mut wave = RateWave::new(Duration::from_secs(4));
    let mut peak = 0.0f64;
    let mut turned = false;

    for _ in 0..2_000 {
        let before = wave.divisor();
        wave.next_delay(0.0);
        peak = peak.max(wave.divisor());
        if wave.divisor() < before {
            turned = true;
        }
    }

    assert!(turned, "wave never turned around");
    assert!(peak > 100.0 && peak < 100.3, "peak {peak}");
}

#[test]
fn divisor_stays_within_bounds() {
    let mut wave = RateWave::new(Duration::from_secs(4));

    for _ in 0..5_000 {
        let delay = wave.next_delay(0.0);
        assert!(wave.divisor() > 4.9 && wave.divisor() < 100.3);
        assert!(delay >= Duration::from_millis(39));
    }
}
