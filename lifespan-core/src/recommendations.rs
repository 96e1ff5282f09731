//! Recommendation generation — one entry per lifestyle dimension, fixed order.
//!
//! Rules look at the profile only, never at the estimate, and use the advice
//! thresholds of the active config rather than the scoring bands.

use crate::config::EstimatorConfig;
use crate::domain::{ProfileInput, Recommendation, RecommendationTag, ReferenceLink, Severity};
use crate::policy::advice::{ActivityBand, BmiBand};

/// Stress above this is flagged as high.
pub const HIGH_STRESS_ABOVE: f64 = 7.0;
/// Stress at or below this is considered low.
pub const LOW_STRESS_AT_MOST: f64 = 3.0;

fn weight_loss_course() -> ReferenceLink {
    ReferenceLink::new(
        "Weight loss and healthy eating course",
        "https://www.coursera.org/learn/food-and-mood",
    )
}

fn quit_smoking_course() -> ReferenceLink {
    ReferenceLink::new(
        "Quit smoking course",
        "https://www.coursera.org/learn/quit-smoking",
    )
}

fn alcohol_course() -> ReferenceLink {
    ReferenceLink::new(
        "Controlling alcohol consumption",
        "https://www.coursera.org/learn/alcohol-abuse",
    )
}

fn fitness_course() -> ReferenceLink {
    ReferenceLink::new(
        "Fitness and physical activity course",
        "https://www.coursera.org/learn/fitness",
    )
}

fn meditation_course() -> ReferenceLink {
    ReferenceLink::new(
        "Meditation and stress management",
        "https://www.coursera.org/learn/meditation",
    )
}

/// Five recommendations in the order BMI, Smoking, Alcohol, Activity, Stress.
pub fn generate_recommendations(
    input: &ProfileInput,
    config: &EstimatorConfig,
) -> Vec<Recommendation> {
    RecommendationTag::ALL
        .iter()
        .map(|tag| match tag {
            RecommendationTag::Bmi => bmi_advice(input, config),
            RecommendationTag::Smoking => smoking_advice(input),
            RecommendationTag::Alcohol => alcohol_advice(input),
            RecommendationTag::Activity => activity_advice(input, config),
            RecommendationTag::Stress => stress_advice(input),
        })
        .collect()
}

fn bmi_advice(input: &ProfileInput, config: &EstimatorConfig) -> Recommendation {
    let tag = RecommendationTag::Bmi;
    match config.advice.bmi.band(input.body_mass_index) {
        BmiBand::Underweight => Recommendation::new(
            tag,
            Severity::Warning,
            "Your body-mass index is too low. Consider seeing a doctor and increasing your nutrient intake.",
        ),
        BmiBand::Normal => Recommendation::new(
            tag,
            Severity::Positive,
            "Your body-mass index is within the normal range. Keep up your healthy lifestyle.",
        ),
        BmiBand::Overweight => Recommendation::new(
            tag,
            Severity::Warning,
            "Your body-mass index is above normal. A balanced diet and regular exercise will help bring it down.",
        )
        .with_link(weight_loss_course()),
        BmiBand::Obese => Recommendation::new(
            tag,
            Severity::Negative,
            "Your body-mass index is well above normal. Weight loss through healthy eating and regular physical activity is recommended.",
        )
        .with_link(weight_loss_course()),
    }
}

fn smoking_advice(input: &ProfileInput) -> Recommendation {
    let tag = RecommendationTag::Smoking;
    if input.smokes {
        Recommendation::new(
            tag,
            Severity::Negative,
            "Smoking significantly shortens life expectancy. Quitting is the single biggest improvement available.",
        )
        .with_link(quit_smoking_course())
    } else {
        Recommendation::new(
            tag,
            Severity::Positive,
            "You do not smoke, which supports better health and a longer life.",
        )
    }
}

fn alcohol_advice(input: &ProfileInput) -> Recommendation {
    let tag = RecommendationTag::Alcohol;
    if input.drinks_alcohol {
        Recommendation::new(
            tag,
            Severity::Warning,
            "Regular alcohol consumption can reduce life expectancy. Consider cutting down.",
        )
        .with_link(alcohol_course())
    } else {
        Recommendation::new(
            tag,
            Severity::Positive,
            "You do not drink alcohol, which has a positive effect on your health.",
        )
    }
}

fn activity_advice(input: &ProfileInput, config: &EstimatorConfig) -> Recommendation {
    let tag = RecommendationTag::Activity;
    match config
        .advice
        .activity
        .band(input.daily_step_count, input.age)
    {
        ActivityBand::Sedentary => Recommendation::new(
            tag,
            Severity::Negative,
            "Your lifestyle is sedentary. Even 5000 steps a day noticeably improves health.",
        )
        .with_link(fitness_course()),
        ActivityBand::Low => Recommendation::new(
            tag,
            Severity::Warning,
            "Try to increase your physical activity. More daily steps measurably improve health.",
        )
        .with_link(fitness_course()),
        ActivityBand::Optimal => Recommendation::new(
            tag,
            Severity::Positive,
            "Your physical activity is within the recommended range. Great work!",
        ),
        ActivityBand::VeryActive => Recommendation::new(
            tag,
            Severity::Positive,
            "You are very physically active. This will have a positive effect on your health.",
        ),
    }
}

fn stress_advice(input: &ProfileInput) -> Recommendation {
    let tag = RecommendationTag::Stress;
    if input.stress_level > HIGH_STRESS_ABOVE {
        Recommendation::new(
            tag,
            Severity::Negative,
            "High stress can harm your health. Try stress-reduction techniques such as meditation or exercise.",
        )
        .with_link(meditation_course())
    } else if input.stress_level > LOW_STRESS_AT_MOST {
        Recommendation::new(
            tag,
            Severity::Neutral,
            "Your stress level is moderate. Keeping it in check helps maintain good health.",
        )
    } else {
        Recommendation::new(
            tag,
            Severity::Positive,
            "Your stress level is low. This helps keep you healthy.",
        )
    }
}
