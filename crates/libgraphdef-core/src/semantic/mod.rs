//! Post-scan semantic analysis.
//!
//! Runs after every deferred job has resolved its references. Category
//! sorting and the two cycle detectors run in parallel; the union, purity
//! and endpoint passes run after they join.

mod alias_cycle_detector;
mod endpoint_validator;
mod purity_validator;
mod struct_cycle_detector;
mod union_validator;

pub(crate) use alias_cycle_detector::AliasCycleDetector;
pub(crate) use endpoint_validator::EndpointValidator;
pub(crate) use purity_validator::PurityValidator;
pub(crate) use struct_cycle_detector::StructCycleDetector;
pub(crate) use union_validator::UnionValidator;

use crate::parser::SchemaContext;
use crate::parser::SchemaHeader;
use crate::schema::SortedCategories;

/// Runs every semantic pass over `context`, reporting into its collector,
/// and returns the name-sorted categories for the model.
pub(crate) fn analyze(
    context: &SchemaContext,
    header: &SchemaHeader,
) -> SortedCategories {
    let (categories, ()) = rayon::join(
        || SortedCategories::build(&context.types, &context.graph),
        || {
            rayon::join(
                || {
                    let errors = AliasCycleDetector::new(&context.types).detect();
                    log::debug!("alias cycle detection: {} diagnostic(s)", errors.len());
                    context.diagnostics.report_all(errors);
                },
                || {
                    let errors =
                        StructCycleDetector::new(&context.types, &context.graph).detect();
                    log::debug!("struct cycle detection: {} diagnostic(s)", errors.len());
                    context.diagnostics.report_all(errors);
                },
            );
        },
    );

    let errors = UnionValidator::new(&context.types).validate();
    log::debug!("union validation: {} diagnostic(s)", errors.len());
    context.diagnostics.report_all(errors);

    let errors = PurityValidator::new(&context.types, &context.graph).validate();
    log::debug!("purity validation: {} diagnostic(s)", errors.len());
    context.diagnostics.report_all(errors);

    let errors = EndpointValidator::new(&context.graph, header).validate();
    context.diagnostics.report_all(errors);

    categories
}

#[cfg(test)]
mod tests;
