use crate::model::profile::ApplicantProfile;
use crate::report::{
    ComparisonChart, METER_WIDTH, ReportContext, bar, format_f64_2, format_percent,
};

const CHART_WIDTH: usize = 30;

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Graduate Admission Prediction\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Applicant profile\n");
    push_profile(&mut out, &ctx.profile);
    out.push('\n');

    out.push_str("2. Prediction\n");
    out.push_str(&format!("Model: {}\n", ctx.model_name));
    out.push_str(&format!(
        "Predicted Chance of Admission: {}%\n",
        ctx.percent_label
    ));
    out.push_str(&format!(
        "Meter: [{}] {}\n",
        bar(ctx.percentage, METER_WIDTH),
        ctx.color
    ));
    out.push_str(&format!("{}: {}\n", ctx.severity.tag(), ctx.message));

    if let (Some(nearest), Some(chart)) = (&ctx.nearest, &ctx.comparison) {
        out.push('\n');
        out.push_str("3. Nearest reference record\n");
        if let Some(dataset) = &ctx.dataset {
            out.push_str(&format!("Dataset: {}\n", dataset));
        }
        out.push_str(&format!(
            "Row: {} (squared distance {})\n",
            nearest.index + 1,
            format_f64_2(nearest.distance)
        ));
        push_profile(&mut out, &nearest.record.profile);
        out.push_str(&format!(
            "Observed Chance of Admission: {}%\n\n",
            format_percent(nearest.outcome_percentage)
        ));
        out.push_str(&render_comparison(chart));
    }

    out
}

pub fn render_comparison(chart: &ComparisonChart) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    out.push_str("Prediction vs nearest match\n");
    for b in &chart.bars {
        out.push_str(&format!(
            "{:<width$}  |{}| {}%\n",
            b.label,
            bar(b.value, CHART_WIDTH),
            format_percent(b.value),
            width = label_width
        ));
    }
    out
}

fn push_profile(out: &mut String, p: &ApplicantProfile) {
    out.push_str(&format!(
        "GRE: {}  TOEFL: {}  University Rating: {}\n",
        p.gre, p.toefl, p.university_rating
    ));
    out.push_str(&format!(
        "SOP: {}  LOR: {}  CGPA: {}  Research: {}\n",
        p.sop,
        p.lor,
        p.cgpa,
        if p.research { "Yes" } else { "No" }
    ));
}
