use rtlocate_core::{FrameworkReference, LocateError, RuntimeOptions};

use crate::types::DesiredFramework;

/// Builds the desired framework list, in runtime config order.
///
/// `includedFrameworks` wins over `framework`, which wins over
/// `frameworks`. A name listed twice must carry the same version both
/// times.
pub fn desired_frameworks(
    options: &RuntimeOptions,
) -> Result<Vec<DesiredFramework>, LocateError> {
    let references: Vec<&FrameworkReference> = match (
        &options.included_frameworks,
        &options.framework,
        &options.frameworks,
    ) {
        (Some(included), _, _) => included.iter().collect(),
        (None, Some(framework), _) => vec![framework],
        (None, None, Some(frameworks)) => frameworks.iter().collect(),
        (None, None, None) => {
            return Err(LocateError::manifest(
                "expected runtimeOptions to have a framework, frameworks or includedFrameworks entry, but it had none",
            ));
        }
    };

    let mut desired: Vec<DesiredFramework> = Vec::with_capacity(references.len());
    for reference in references {
        match desired.iter().find(|entry| entry.name == reference.name) {
            Some(existing) if existing.version == reference.version => {}
            Some(existing) => {
                return Err(LocateError::manifest(format!(
                    "framework '{}' is required at conflicting versions {} and {}",
                    reference.name, existing.version, reference.version
                )));
            }
            None => desired.push(DesiredFramework {
                name: reference.name.clone(),
                version: reference.version,
            }),
        }
    }

    Ok(desired)
}
