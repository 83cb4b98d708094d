use rendertransport::{AudioClock, SampleCount};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_advance_starts_transport() {
        for block_size in [1u64, 64, 512, 4096] {
            let mut clock = AudioClock::new();
            clock.advance(block_size);
            assert!(clock.transport_changed());
            assert!(clock.is_playing());
            assert_eq!(clock.current_frame().get(), block_size);
        }
    }

    #[test]
    fn test_consecutive_advances_clear_change_flag() {
        let mut clock = AudioClock::new();
        clock.advance(256u64);
        clock.advance(256u64);
        assert!(!clock.transport_changed());
        assert!(clock.is_playing());

        clock.advance(256u64);
        assert!(!clock.transport_changed());
    }

    #[test]
    fn test_resume_after_stop_is_a_transport_change() {
        let mut clock = AudioClock::new();
        clock.advance(128u64);
        clock.advance(128u64);
        clock.stop();
        clock.advance(128u64);
        assert!(clock.transport_changed());
        assert!(clock.is_playing());

        clock.advance(128u64);
        assert!(!clock.transport_changed());
    }

    #[test]
    fn test_position_is_sum_of_blocks_across_stops() {
        let blocks = [512u64, 17, 0, 1024, 3, 256, 99];
        let mut clock = AudioClock::new();

        for (i, size) in blocks.iter().enumerate() {
            if i % 3 == 2 {
                clock.stop();
            }
            clock.advance(*size);
        }

        assert_eq!(clock.current_frame().get(), blocks.iter().sum::<u64>());
    }

    #[test]
    fn test_stop_preserves_position() {
        let mut clock = AudioClock::new();
        clock.advance(300u64);
        let before = clock.current_frame();

        clock.stop();
        assert_eq!(clock.current_frame(), before);

        clock.stop();
        assert_eq!(clock.current_frame(), before);
        assert!(!clock.is_playing());
        assert!(clock.transport_changed());
    }

    #[test]
    fn test_stop_on_fresh_clock() {
        let mut clock = AudioClock::new();
        clock.stop();
        assert!(!clock.is_playing());
        assert!(clock.transport_changed());
        assert_eq!(clock.current_frame(), SampleCount::ZERO);
    }

    #[test]
    fn test_zero_block_after_stop_marks_restart() {
        let mut clock = AudioClock::new();
        clock.advance(64u64);
        clock.advance(64u64);
        clock.stop();

        clock.advance(0u64);
        assert!(clock.transport_changed());
        assert!(clock.is_playing());
        assert_eq!(clock.current_frame().get(), 128);
    }

    #[test]
    fn test_render_scenario() {
        let mut clock = AudioClock::new();

        clock.advance(512u64);
        assert!(clock.transport_changed());
        assert!(clock.is_playing());
        assert_eq!(clock.current_frame().get(), 512);

        clock.advance(512u64);
        assert!(!clock.transport_changed());
        assert_eq!(clock.current_frame().get(), 1024);

        clock.stop();
        assert!(!clock.is_playing());
        assert!(clock.transport_changed());
        assert_eq!(clock.current_frame().get(), 1024);

        clock.advance(256u64);
        assert!(clock.transport_changed());
        assert!(clock.is_playing());
        assert_eq!(clock.current_frame().get(), 1280);
    }
}
