//! Text and JSON rendering of command output.

use prng_core::traits::GeneratorCapabilities;
use prng_core::types::{Trace, TraceStep};
use prng_models::catalog::AlgorithmCatalog;
use prng_models::generators::GeneratorParams;
use prng_models::randomness::SuiteReport;
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// A finished generation run, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationView<'a> {
    /// Catalog name of the generator.
    pub algorithm: &'static str,
    /// Inputs the run used.
    pub params: &'a GeneratorParams,
    /// Number of generated values.
    pub n: usize,
    /// Generated values; `None` when they went to a file instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<&'a [f64]>,
    /// Shown trace steps; `None` when tracing was not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<&'a [TraceStep]>,
    /// Trace steps left out of `trace`.
    #[serde(skip_serializing_if = "is_zero")]
    pub omitted_steps: usize,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl<'a> GenerationView<'a> {
    /// Attach the first `rows` steps of `trace` (all of them when `rows` is 0).
    pub fn with_trace(mut self, trace: &'a Trace, rows: usize) -> Self {
        let steps = trace.steps();
        let shown = if rows == 0 { steps.len() } else { rows.min(steps.len()) };
        self.trace = Some(&steps[..shown]);
        self.omitted_steps = steps.len() - shown;
        self
    }
}

#[derive(Serialize)]
struct RunView<'a> {
    generation: &'a GenerationView<'a>,
    report: &'a SuiteReport,
}

#[derive(Serialize)]
struct GeneratorListing {
    name: &'static str,
    display_name: &'static str,
    capabilities: GeneratorCapabilities,
}

#[derive(Serialize)]
struct TestListing {
    name: &'static str,
    display_name: &'static str,
}

#[derive(Serialize)]
struct Listing {
    generators: Vec<GeneratorListing>,
    tests: Vec<TestListing>,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render the catalog contents.
pub fn write_listing<W: Write>(
    out: &mut W,
    catalog: &AlgorithmCatalog,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let listing = Listing {
                generators: catalog
                    .generators()
                    .iter()
                    .map(|entry| GeneratorListing {
                        name: entry.name,
                        display_name: entry.display_name,
                        capabilities: entry.capabilities,
                    })
                    .collect(),
                tests: catalog
                    .tests()
                    .iter()
                    .map(|entry| TestListing {
                        name: entry.name,
                        display_name: entry.display_name,
                    })
                    .collect(),
            };
            write_json(out, &listing)
        }
        OutputFormat::Text => {
            writeln!(out, "Generators:")?;
            for entry in catalog.generators() {
                let caps = entry.capabilities;
                writeln!(
                    out,
                    "  {:<22}{:<30}seeds={} constant={}",
                    entry.name,
                    entry.display_name,
                    caps.required_seeds,
                    if caps.requires_constant { "yes" } else { "no" }
                )?;
            }
            writeln!(out, "Tests:")?;
            for entry in catalog.tests() {
                writeln!(out, "  {:<22}{}", entry.name, entry.display_name)?;
            }
            Ok(())
        }
    }
}

fn write_generation_text<W: Write>(out: &mut W, view: &GenerationView<'_>) -> Result<()> {
    writeln!(out, "{} (n={})", view.algorithm, view.n)?;
    if let Some(steps) = view.trace {
        writeln!(out, "Trace:")?;
        for step in steps {
            writeln!(out, "  {}", step)?;
        }
        if view.omitted_steps > 0 {
            writeln!(out, "  ... {} more step(s)", view.omitted_steps)?;
        }
    }
    if let Some(values) = view.sequence {
        writeln!(out, "Sequence:")?;
        for value in values {
            writeln!(out, "  {}", value)?;
        }
    }
    Ok(())
}

fn write_report_text<W: Write>(out: &mut W, report: &SuiteReport) -> Result<()> {
    for result in &report.results {
        writeln!(out, "{}", result)?;
    }
    if !report.warnings.is_empty() {
        writeln!(out, "Warnings:")?;
        for warning in &report.warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }
    let accepted = report.results.iter().filter(|r| r.accept()).count();
    writeln!(
        out,
        "Summary: {}/{} test(s) accept H0",
        accepted,
        report.results.len()
    )?;
    Ok(())
}

/// Render a generation run.
pub fn write_generation<W: Write>(
    out: &mut W,
    view: &GenerationView<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, view),
        OutputFormat::Text => write_generation_text(out, view),
    }
}

/// Render a suite report.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SuiteReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => write_report_text(out, report),
    }
}

/// Render a generation run followed by its test report.
pub fn write_run<W: Write>(
    out: &mut W,
    view: &GenerationView<'_>,
    report: &SuiteReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &RunView {
                generation: view,
                report,
            },
        ),
        OutputFormat::Text => {
            write_generation_text(out, view)?;
            writeln!(out)?;
            write_report_text(out, report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::traits::DigitSequenceGenerator;
    use prng_core::types::TestOptions;
    use prng_models::generators::{DigitGenerator, GeneratorKind};
    use prng_models::randomness::TestSuite;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn mid_square_params() -> GeneratorParams {
        GeneratorParams::from_inputs(GeneratorKind::MidSquare, Some(1234), None, None).unwrap()
    }

    #[test]
    fn test_listing_text_names_everything() {
        let catalog = AlgorithmCatalog::standard();
        let text = render(|out| write_listing(out, &catalog, OutputFormat::Text));
        for name in catalog.generator_names().chain(catalog.test_names()) {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("seeds=2 constant=no"));
        assert!(text.contains("seeds=1 constant=yes"));
    }

    #[test]
    fn test_listing_json_shape() {
        let catalog = AlgorithmCatalog::standard();
        let text = render(|out| write_listing(out, &catalog, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["generators"].as_array().unwrap().len(), 3);
        assert_eq!(json["tests"].as_array().unwrap().len(), 3);
        assert_eq!(json["generators"][2]["capabilities"]["required_seeds"], 2);
    }

    #[test]
    fn test_generation_text_truncates_trace() {
        let params = mid_square_params();
        let (sequence, trace) = DigitGenerator::mid_square().generate(5, &params).unwrap();
        let view = GenerationView {
            algorithm: "mid-square",
            params: &params,
            n: sequence.len(),
            sequence: Some(sequence.values()),
            trace: None,
            omitted_steps: 0,
        }
        .with_trace(&trace, 2);

        let text = render(|out| write_generation(out, &view, OutputFormat::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "mid-square (n=5)");
        assert_eq!(lines[2], "  Y0=(1234)^2=01522756   X1=5227   r1=0.5227");
        assert_eq!(lines[4], "  ... 3 more step(s)");
        assert_eq!(lines[6], "  0.5227");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_zero_rows_shows_full_trace() {
        let params = mid_square_params();
        let (_, trace) = DigitGenerator::mid_square().generate(4, &params).unwrap();
        let view = GenerationView {
            algorithm: "mid-square",
            params: &params,
            n: 4,
            sequence: None,
            trace: None,
            omitted_steps: 0,
        }
        .with_trace(&trace, 0);
        assert_eq!(view.trace.map(<[TraceStep]>::len), Some(4));
        assert_eq!(view.omitted_steps, 0);

        let text = render(|out| write_generation(out, &view, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["params"]["generator"], "mid-square");
        assert_eq!(json["trace"].as_array().unwrap().len(), 4);
        assert!(json.get("sequence").is_none());
        assert!(json.get("omitted_steps").is_none());
    }

    #[test]
    fn test_report_text_lists_warnings_once() {
        let report = TestSuite::all()
            .run(&[0.2, 0.8, 0.5], 0.05, &TestOptions::default())
            .unwrap();
        let text = render(|out| write_report(out, &report, OutputFormat::Text));

        // Per-result warnings are indented further than the merged list.
        assert_eq!(
            text.lines().filter(|l| l.starts_with("  - n=3 < 10")).count(),
            1
        );
        assert!(text.contains("Warnings:"));
        assert!(text.trim_end().ends_with("test(s) accept H0"));
    }
}
