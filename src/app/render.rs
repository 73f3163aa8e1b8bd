use crate::domain::model::{DemoReport, FloatDisplay};
use crate::utils::error::Result;
use std::fmt::{self, Write};

const BANNER_WIDTH: usize = 60;

pub fn render_text(report: &DemoReport) -> String {
    let mut out = String::new();
    match write_report(&mut out, report) {
        Ok(()) => out,
        Err(_) => unreachable!("writing to a String cannot fail"),
    }
}

fn write_report(out: &mut impl Write, report: &DemoReport) -> fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{}", banner)?;
    writeln!(out, "🦀 Rust Application - Jenkins CI/CD Demo")?;
    writeln!(out, "{}", banner)?;

    writeln!(out, "📊 Mathematical Operations:")?;
    writeln!(out, "   Addition: {} + {} = {}", report.a, report.b, report.sum)?;
    writeln!(
        out,
        "   Multiplication: {} × {} = {}",
        report.a, report.b, report.product
    )?;
    writeln!(
        out,
        "   Division: {} ÷ {} = {}",
        report.a,
        report.b,
        FloatDisplay(report.quotient)
    )?;
    writeln!(
        out,
        "   Factorial: {}! = {}",
        report.factorial_input, report.factorial_result
    )?;
    writeln!(
        out,
        "   Prime numbers in {:?}: {:?}",
        report.prime_candidates, report.primes
    )?;

    writeln!(out, "\n🎉 {}", report.greeting)?;

    writeln!(out, "\n📋 Application Information:")?;
    writeln!(out, "   Version: {}", report.app.version)?;
    writeln!(out, "   Environment: {}", report.app.environment)?;
    writeln!(out, "   Status: ✅ {}", report.app.status)?;

    writeln!(out, "\n✅ Application executed successfully!")?;
    writeln!(out, "{}", banner)
}

pub fn render_json(report: &DemoReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DemoRunner;
    use crate::config::DemoConfig;

    fn default_report() -> DemoReport {
        DemoRunner::new(DemoConfig::default()).run().unwrap()
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&default_report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(60));
        assert_eq!(lines.last().copied(), Some("=".repeat(60).as_str()));
        assert!(text.contains("   Addition: 10 + 5 = 15\n"));
        assert!(text.contains("   Multiplication: 10 × 5 = 50\n"));
        assert!(text.contains("   Division: 10 ÷ 5 = 2.0\n"));
        assert!(text.contains("   Factorial: 5! = 120\n"));
        assert!(text.contains("Prime numbers in [2, 3, 4, 5, 6, 7, 8, 9, 10, 11]: [2, 3, 5, 7, 11]"));
        assert!(text.contains("Hello, Jenkins User!"));
        assert!(text.contains("   Version: 1.0.0\n"));
        assert!(text.contains("   Environment: Production\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&default_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sum"], 15);
        assert_eq!(value["product"], 50);
        assert_eq!(value["quotient"], 2.0);
        assert_eq!(value["factorial_result"], "120");
        assert_eq!(value["primes"], serde_json::json!([2, 3, 5, 7, 11]));
        assert_eq!(value["app"]["environment"], "Production");
    }
}
