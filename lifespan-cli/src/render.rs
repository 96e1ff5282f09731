//! Plain-text rendering of an assessment.

use lifespan_core::Assessment;

pub fn render_assessment(a: &Assessment, show_impacts: bool) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("=== Life Expectancy Estimate ===\n");
    out.push_str(&format!(
        "Estimated lifespan:   {:.1} years\n",
        a.estimate.life_expectancy_years
    ));
    out.push_str(&format!(
        "Remaining years:      {:.1}\n",
        a.estimate.remaining_years
    ));
    out.push('\n');
    out.push_str("--- Recommendations ---\n");
    for rec in &a.recommendations {
        out.push_str(&format!(
            "[{}] {:<9} {}\n",
            rec.severity.marker(),
            rec.tag,
            rec.message
        ));
        if let Some(link) = &rec.link {
            out.push_str(&format!("              {} <{}>\n", link.title, link.url));
        }
    }

    if show_impacts {
        out.push('\n');
        out.push_str("--- What If ---\n");
        if a.impacts.is_empty() {
            out.push_str("Every factor is already at its optimum.\n");
        }
        for (intervention, gain) in a.impacts.ranked() {
            out.push_str(&format!("{:<18} {:+.1} years\n", intervention.label(), gain));
        }
        if a.impacts.len() > 1 {
            out.push_str("(each change evaluated on its own; gains do not add up)\n");
        }
    }
    out
}
