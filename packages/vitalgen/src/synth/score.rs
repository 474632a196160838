//!
//! Early-warning contribution for each vital sign.
//! Every rule is independent. The observation total is their sum.
//!

pub fn temperature(celsius: f64) -> u32 {
    if celsius >= 39.0 {
        2
    } else if celsius >= 37.5 {
        1
    } else {
        0
    }
}

pub fn respiratory_rate(breaths_per_minute: i64) -> u32 {
    if breaths_per_minute > 25 {
        2
    } else if breaths_per_minute > 20 {
        1
    } else {
        0
    }
}

pub fn heart_rate(beats_per_minute: i64) -> u32 {
    if beats_per_minute > 120 {
        2
    } else if beats_per_minute > 100 {
        1
    } else {
        0
    }
}

///
/// Combined blood pressure score.
/// Recorded on the diastolic reading only, the systolic reading always scores 0.
///
pub fn blood_pressure(systolic: i64, diastolic: i64) -> u32 {
    if systolic > 140 || diastolic > 90 {
        1
    } else {
        0
    }
}

pub fn oxygen_saturation(percent: i64) -> u32 {
    if percent < 90 {
        2
    } else if percent < 95 {
        1
    } else {
        0
    }
}

/// Already on a 0-3 scale
pub fn consciousness_level(level: i64) -> u32 {
    level.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_thresholds() {
        assert_eq!(temperature(39.5), 2);
        assert_eq!(temperature(39.0), 2);
        assert_eq!(temperature(38.9), 1);
        assert_eq!(temperature(38.0), 1);
        assert_eq!(temperature(37.5), 1);
        assert_eq!(temperature(37.4), 0);
        assert_eq!(temperature(36.0), 0);
        assert_eq!(temperature(35.0), 0);
    }

    #[test]
    fn respiratory_rate_thresholds() {
        assert_eq!(respiratory_rate(30), 2);
        assert_eq!(respiratory_rate(26), 2);
        assert_eq!(respiratory_rate(25), 1);
        assert_eq!(respiratory_rate(21), 1);
        assert_eq!(respiratory_rate(20), 0);
        assert_eq!(respiratory_rate(12), 0);
    }

    #[test]
    fn heart_rate_thresholds() {
        assert_eq!(heart_rate(140), 2);
        assert_eq!(heart_rate(121), 2);
        assert_eq!(heart_rate(120), 1);
        assert_eq!(heart_rate(101), 1);
        assert_eq!(heart_rate(100), 0);
        assert_eq!(heart_rate(60), 0);
    }

    #[test]
    fn blood_pressure_is_either_limit() {
        assert_eq!(blood_pressure(140, 90), 0);
        assert_eq!(blood_pressure(141, 60), 1);
        assert_eq!(blood_pressure(90, 91), 1);
        assert_eq!(blood_pressure(160, 100), 1);
    }

    #[test]
    fn oxygen_saturation_thresholds() {
        assert_eq!(oxygen_saturation(85), 2);
        assert_eq!(oxygen_saturation(89), 2);
        assert_eq!(oxygen_saturation(90), 1);
        assert_eq!(oxygen_saturation(94), 1);
        assert_eq!(oxygen_saturation(95), 0);
        assert_eq!(oxygen_saturation(100), 0);
    }

    #[test]
    fn consciousness_level_is_raw_value() {
        for level in 0..=3 {
            assert_eq!(consciousness_level(level), level as u32);
        }
    }
}
