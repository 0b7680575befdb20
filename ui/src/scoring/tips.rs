use super::DEFAULT_RISK_THRESHOLD;
use crate::core::profile::Gender;

pub const HIGH_RISK_TIPS: [&str; 3] = [
    "Avoid bright or flashing lights.",
    "Maintain strict sleep schedule.",
    "Take prescribed medications regularly.",
];
pub const AGE_UNDER_20_TIP: &str = "Avoid video games with intense visuals.";
pub const AGE_OVER_60_TIP: &str = "Avoid stress and overexertion.";
pub const FEMALE_TIP: &str = "Track hormonal cycles, consult neurologist if patterns arise.";

/// Advice for one row, in rule order. Rules are additive and never deduplicated;
/// the two age rules are mutually exclusive.
pub fn prevention_tips(probability: f64, age: u8, gender: Gender) -> Vec<&'static str> {
    prevention_tips_above(probability, DEFAULT_RISK_THRESHOLD, age, gender)
}

/// Same rules with a configurable risk threshold for the lifestyle tips.
pub fn prevention_tips_above(
    probability: f64,
    threshold: f64,
    age: u8,
    gender: Gender,
) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if probability > threshold {
        tips.extend(HIGH_RISK_TIPS);
    }
    if age < 20 {
        tips.push(AGE_UNDER_20_TIP);
    } else if age > 60 {
        tips.push(AGE_OVER_60_TIP);
    }
    if gender == Gender::Female {
        tips.push(FEMALE_TIP);
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn young_male_high_risk() {
        let tips = prevention_tips(85.0, 15, Gender::Male);
        let mut expected = HIGH_RISK_TIPS.to_vec();
        expected.push(AGE_UNDER_20_TIP);
        assert_eq!(tips, expected);
    }

    #[test]
    fn older_female_high_risk() {
        let tips = prevention_tips(85.0, 65, Gender::Female);
        let mut expected = HIGH_RISK_TIPS.to_vec();
        expected.push(AGE_OVER_60_TIP);
        expected.push(FEMALE_TIP);
        assert_eq!(tips, expected);
    }

    #[test]
    fn boundary_probability_gets_no_risk_tips() {
        assert!(prevention_tips(80.0, 30, Gender::Male).is_empty());
    }

    #[test]
    fn age_rules_never_both_fire() {
        for age in 1..=120u8 {
            let tips = prevention_tips(50.0, age, Gender::Other);
            let both = tips.contains(&AGE_UNDER_20_TIP) && tips.contains(&AGE_OVER_60_TIP);
            assert!(!both, "age {age}");
        }
    }

    #[test]
    fn age_boundaries_are_exclusive() {
        assert!(prevention_tips(40.0, 20, Gender::Male).is_empty());
        assert!(prevention_tips(40.0, 60, Gender::Male).is_empty());
        assert_eq!(prevention_tips(40.0, 19, Gender::Male), vec![AGE_UNDER_20_TIP]);
        assert_eq!(prevention_tips(40.0, 61, Gender::Male), vec![AGE_OVER_60_TIP]);
    }
}
