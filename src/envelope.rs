/// Amplitude curve applied to a rendered note: a linear attack over the
/// first tenth of the buffer, full sustain in the middle, and a linear
/// release over the last fifth. The release is written after the attack, so
/// it wins wherever the two would meet.
pub fn shape(len: usize) -> Vec<f32> {
    let mut env = vec![1.0f32; len];
    let attack = len / 10;
    let release = len / 5;

    ramp(&mut env[..attack], 0.0, 1.0);
    ramp(&mut env[len - release..], 1.0, 0.0);

    env
}

// Endpoint-inclusive linear ramp. A single-sample segment takes the start
// value, a zero-length segment is left alone.
fn ramp(segment: &mut [f32], from: f32, to: f32) {
    let n = segment.len();
    if n < 2 {
        if let Some(s) = segment.first_mut() {
            *s = from;
        }
        return;
    }

    let step = (to - from) / (n - 1) as f32;
    for (i, s) in segment.iter_mut().enumerate() {
        *s = from + step * i as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn attack_rises_and_release_falls() {
        let env = shape(1000);
        assert_eq!(env.len(), 1000);
        assert_eq!(env[0], 0.0);

        // attack covers the first 100 samples and never dips
        for w in env[..100].windows(2) {
            assert!(w[1] >= w[0]);
        }

        // sustain sits at full amplitude
        assert_relative_eq!(env[500], 1.0);

        // release covers the last 200 samples and never climbs
        for w in env[800..].windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_relative_eq!(env[999], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn short_buffers_do_not_panic() {
        for len in [0, 1, 2, 3, 5, 9] {
            let env = shape(len);
            assert_eq!(env.len(), len);
            for s in &env {
                assert!((0.0..=1.0).contains(s));
            }
        }
    }

    #[test]
    fn values_stay_in_unit_range() {
        for s in shape(4410) {
            assert!((0.0..=1.0).contains(&s));
        }
    }
}
