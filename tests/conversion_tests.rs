use rendertransport::time::{try_pulse_to_samples, try_samples_to_pulse};
use rendertransport::{
    pulse_to_samples, samples_per_beat, samples_to_pulse, ClockError, Pulse, SampleCount,
    SampleRate, Tempo,
};

const CD_RATE: SampleRate = SampleRate::from_hz(44_100.0);

#[test]
fn test_samples_per_beat() {
    assert_eq!(samples_per_beat(Tempo::from_bpm(120.0), CD_RATE), 22_050.0);
    assert_eq!(samples_per_beat(Tempo::from_bpm(60.0), CD_RATE), 44_100.0);
    assert_eq!(
        samples_per_beat(Tempo::from_bpm(90.0), SampleRate::from_hz(48_000.0)),
        32_000.0
    );
}

#[test]
fn test_sample_zero_is_pulse_one() {
    for bpm in [40.0, 90.0, 120.0, 174.5, 300.0] {
        for hz in [22_050.0, 44_100.0, 48_000.0, 96_000.0] {
            let pulse = samples_to_pulse(
                SampleCount::ZERO,
                Tempo::from_bpm(bpm),
                SampleRate::from_hz(hz),
            );
            assert_eq!(pulse, Pulse::FIRST);
        }
    }
}

#[test]
fn test_one_second_at_120_bpm_round_trips() {
    let tempo = Tempo::from_bpm(120.0);
    let pulse = samples_to_pulse(SampleCount::new(44_100), tempo, CD_RATE);
    assert_eq!(pulse.get(), 3.0);
    assert_eq!(pulse_to_samples(pulse, tempo, CD_RATE).get(), 44_100);
}

#[test]
fn test_round_trip_stays_within_one_sample() {
    let tempo = Tempo::from_bpm(133.0);
    let rate = SampleRate::from_hz(48_000.0);
    let one_sample_in_pulses = 1.0 / samples_per_beat(tempo, rate);

    for samples in [0u64, 1, 511, 12_345, 1_000_000, 98_765_432] {
        let pulse = samples_to_pulse(SampleCount::new(samples), tempo, rate);
        let back = pulse_to_samples(pulse, tempo, rate).get();
        assert!(samples.abs_diff(back) <= 1, "{} came back as {}", samples, back);
    }

    for ppq in [1.0, 1.25, 2.0, 17.333, 400.5] {
        let samples = pulse_to_samples(Pulse::new(ppq), tempo, rate);
        let back = samples_to_pulse(samples, tempo, rate).get();
        assert!(
            (ppq - back).abs() < one_sample_in_pulses,
            "{} came back as {}",
            ppq,
            back
        );
    }
}

#[test]
fn test_pulse_to_samples_truncates() {
    // 1.5 samples worth of pulse past the downbeat
    let tempo = Tempo::from_bpm(120.0);
    let pulse = Pulse::new(1.0 + 1.5 / 22_050.0);
    assert_eq!(pulse_to_samples(pulse, tempo, CD_RATE).get(), 1);
}

#[test]
fn test_pulse_before_first_beat_clamps_to_zero() {
    let samples = pulse_to_samples(Pulse::new(0.5), Tempo::from_bpm(120.0), CD_RATE);
    assert_eq!(samples, SampleCount::ZERO);
}

#[test]
fn test_unchecked_zero_tempo_is_not_rejected() {
    let tempo = Tempo::from_bpm(0.0);
    assert!(samples_per_beat(tempo, CD_RATE).is_infinite());
    // Every sample collapses onto the first pulse
    let pulse = samples_to_pulse(SampleCount::new(100), tempo, CD_RATE);
    assert_eq!(pulse.get(), 1.0);
}

#[test]
fn test_checked_conversions_reject_bad_tempo() {
    let result = try_samples_to_pulse(SampleCount::new(100), Tempo::from_bpm(0.0), CD_RATE);
    assert_eq!(result, Err(ClockError::InvalidTempo(0.0)));

    let result = try_pulse_to_samples(Pulse::new(2.0), Tempo::from_bpm(-10.0), CD_RATE);
    assert_eq!(result, Err(ClockError::InvalidTempo(-10.0)));

    let result = try_pulse_to_samples(
        Pulse::new(2.0),
        Tempo::from_bpm(120.0),
        SampleRate::from_hz(0.0),
    );
    assert_eq!(result, Err(ClockError::InvalidSampleRate(0.0)));
}

#[test]
fn test_checked_conversions_match_unchecked() {
    let tempo = Tempo::from_bpm(97.0);
    let samples = SampleCount::new(77_777);
    assert_eq!(
        try_samples_to_pulse(samples, tempo, CD_RATE),
        Ok(samples_to_pulse(samples, tempo, CD_RATE))
    );
    let pulse = Pulse::new(9.75);
    assert_eq!(
        try_pulse_to_samples(pulse, tempo, CD_RATE),
        Ok(pulse_to_samples(pulse, tempo, CD_RATE))
    );
}
