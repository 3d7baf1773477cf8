use thinks::audio::{Mixer, RecordingBackend};
use thinks::config::AudioConfig;

const DT: f32 = 1.0 / 60.0;

fn mixer() -> (Mixer, RecordingBackend) {
    let backend = RecordingBackend::new();
    let mixer = Mixer::new(Box::new(backend.clone()), &AudioConfig::default());
    (mixer, backend)
}

fn advance(mixer: &mut Mixer, ticks: usize) {
    for _ in 0..ticks {
        mixer.advance(DT);
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- cross-fade -----------------------------------------------------------

    #[test]
    fn first_track_fades_in_over_ninety_ticks() {
        let (mut mixer, backend) = mixer();
        let title = mixer.track_handle("title_theme");

        mixer.request_track("title_theme", true);
        assert!(mixer.is_mixing());
        assert_eq!(mixer.next_track(), Some("title_theme"));
        assert!(backend.track(title).playing);
        assert!(backend.track(title).looping);
        assert_eq!(backend.track(title).volume, 0.0);

        advance(&mut mixer, 89);
        assert!(mixer.is_mixing());

        advance(&mut mixer, 1);
        assert!(!mixer.is_mixing());
        assert_eq!(mixer.current_track(), Some("title_theme"));
        assert_eq!(mixer.next_track(), None);
        assert_eq!(backend.track(title).volume, 1.0);
    }

    #[test]
    fn cross_fade_swaps_tracks() {
        let (mut mixer, backend) = mixer();
        let a = mixer.track_handle("title_theme");
        let b = mixer.track_handle("no_stopping_now");

        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);
        mixer.request_track("no_stopping_now", true);

        advance(&mut mixer, 45);
        assert!(close(backend.track(a).volume, 0.5));
        assert!(close(backend.track(b).volume, 0.5));
        assert_eq!(backend.playing_tracks(), 2);

        advance(&mut mixer, 45);
        assert!(!backend.track(a).playing);
        assert_eq!(backend.track(b).volume, 1.0);
        assert_eq!(mixer.current_track(), Some("no_stopping_now"));
        assert_eq!(backend.playing_tracks(), 1);
    }

    #[test]
    fn requesting_the_current_track_is_ignored() {
        let (mut mixer, backend) = mixer();
        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);

        mixer.request_track("title_theme", true);
        assert!(!mixer.is_mixing());
        assert_eq!(mixer.next_track(), None);
        assert_eq!(backend.playing_tracks(), 1);
    }

    #[test]
    fn requests_during_a_fade_are_ignored() {
        let (mut mixer, backend) = mixer();
        let win = mixer.track_handle("win_theme");

        mixer.request_track("title_theme", true);
        advance(&mut mixer, 30);
        mixer.request_track("win_theme", false);

        assert_eq!(mixer.next_track(), Some("title_theme"));
        assert!(!backend.track(win).playing);
    }

    #[test]
    fn every_held_track_is_serviced_each_tick() {
        let (mut mixer, backend) = mixer();
        let a = mixer.track_handle("title_theme");
        let b = mixer.track_handle("win_theme");

        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);
        mixer.request_track("win_theme", false);
        advance(&mut mixer, 10);

        assert_eq!(backend.track(a).updates, 100);
        assert_eq!(backend.track(b).updates, 10);
    }

    #[test]
    #[should_panic(expected = "unknown music track")]
    fn unknown_track_panics() {
        let (mut mixer, _) = mixer();
        mixer.request_track("polka", true);
    }

    // -- pitch shift ----------------------------------------------------------

    #[test]
    fn pitch_without_a_track_is_ignored() {
        let (mut mixer, _) = mixer();
        mixer.request_pitch(0.8);
        assert!(!mixer.is_shifting());
        assert_eq!(mixer.pitch(), 1.0);
    }

    #[test]
    fn pitch_glides_over_sixty_ticks() {
        let (mut mixer, backend) = mixer();
        let title = mixer.track_handle("title_theme");
        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);

        mixer.request_pitch(0.8);
        assert!(mixer.is_shifting());

        advance(&mut mixer, 30);
        assert!(close(mixer.pitch(), 0.9));
        assert!(close(backend.track(title).pitch, 0.9));

        advance(&mut mixer, 30);
        assert!(!mixer.is_shifting());
        assert_eq!(mixer.current_pitch(), 0.8);
        assert_eq!(backend.track(title).pitch, 0.8);
    }

    #[test]
    fn pitch_applies_to_incoming_track_too() {
        let (mut mixer, backend) = mixer();
        let win = mixer.track_handle("win_theme");
        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);

        mixer.request_pitch(0.8);
        advance(&mut mixer, 60);
        mixer.request_track("win_theme", false);

        // Starts at the shifted pitch.
        assert_eq!(backend.track(win).pitch, 0.8);
    }

    #[test]
    fn fade_and_shift_run_together() {
        let (mut mixer, backend) = mixer();
        let a = mixer.track_handle("title_theme");
        let b = mixer.track_handle("no_stopping_now");
        mixer.request_track("title_theme", true);
        advance(&mut mixer, 90);

        mixer.request_track("no_stopping_now", true);
        mixer.request_pitch(1.2);
        advance(&mut mixer, 30);
        assert!(close(backend.track(a).pitch, backend.track(b).pitch));

        advance(&mut mixer, 60);
        assert!(!mixer.is_mixing());
        assert!(!mixer.is_shifting());
        assert_eq!(backend.track(b).pitch, 1.2);
    }

    // -- sound effects --------------------------------------------------------

    #[test]
    fn sounds_load_at_configured_volume() {
        let (mut mixer, backend) = mixer();
        let grab = mixer.sound_handle("grab");
        assert!(close(backend.sound(grab).volume, 0.40));

        mixer.play_sound("grab");
        mixer.play_sound("grab");
        assert_eq!(backend.sound(grab).plays, 2);
    }

    #[test]
    #[should_panic(expected = "unknown sound effect")]
    fn unknown_sound_panics() {
        let (mut mixer, _) = mixer();
        mixer.play_sound("kazoo");
    }
}
