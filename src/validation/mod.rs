//! Validation of built token layers.
//!
//! Collects the diagnostics raised while building (unresolved, circular,
//! and valueless aliases; duplicate paths) and runs the layering checks
//! on top. Used by both `strata validate` and `strata build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::layers::BuildOutput;
use crate::output::{plural, Printer};

/// Run all validation checks against a build.
pub fn validate_build(build: &BuildOutput) -> ValidationResult {
    let mut result = build.diagnostics.clone();

    result.merge(checks::check_primitive_references(build));
    result.merge(checks::check_dangling_references(build));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = d.severity.to_string();
        let severity = printer.severity(&label, d.severity == Severity::Error);
        match &d.artifact {
            Some(artifact) => printer.line(&format!(
                "  {}[{}]: {}: {}",
                severity,
                d.code,
                printer.cyan(artifact),
                d.message
            )),
            None => printer.line(&format!("  {}[{}]: {}", severity, d.code, d.message)),
        }
        if let Some(help) = &d.help {
            printer.line(&printer.dim(&format!("    help: {}", help)));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("with {}", plural(warnings, "warning", "warnings")));
    } else {
        printer.success("Passed", "no diagnostics");
    }
}
