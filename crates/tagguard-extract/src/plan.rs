use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use tagguard_types::{Location, ParseResult, Resource, SrcPath, TagMap};

/// Segment prefixes recognized as resource-type tokens inside dotted plan
/// addresses.
const PROVIDER_PREFIXES: [&str; 5] = ["aws_", "google_", "azurerm_", "alicloud_", "oci_"];

/// Shape of `terraform show -json` output, reduced to the parts we read.
#[derive(Debug, Default, Deserialize)]
struct PlanDoc {
    #[serde(default)]
    planned_values: PlannedValues,
}

#[derive(Debug, Default, Deserialize)]
struct PlannedValues {
    #[serde(default)]
    root_module: ModuleNode,
}

#[derive(Debug, Default, Deserialize)]
struct ModuleNode {
    #[serde(default)]
    resources: Vec<PlannedResource>,
    #[serde(default)]
    child_modules: Vec<ModuleNode>,
}

#[derive(Debug, Default, Deserialize)]
struct PlannedResource {
    #[serde(default)]
    address: String,
    #[serde(default)]
    values: serde_json::Map<String, Value>,
}

/// Decode one plan snapshot into resources.
///
/// The document is one atomic unit: invalid JSON fails the whole call and no
/// partial resources are produced. Addresses that cannot yield a (type,
/// name) pair are dropped silently; that asymmetry with the source
/// extractor's per-file errors is deliberate.
pub fn extract_plan_json(file: &SrcPath, text: &str) -> anyhow::Result<ParseResult> {
    let plan: PlanDoc = serde_json::from_str(text).context("failed to parse plan JSON")?;

    Ok(ParseResult {
        resources: collect_module(&plan.planned_values.root_module, file),
        errors: Vec::new(),
    })
}

/// Depth-first pre-order: this module's resources, then each child module.
/// Each node builds a fresh list; the caller concatenates.
fn collect_module(module: &ModuleNode, file: &SrcPath) -> Vec<Resource> {
    let mut resources: Vec<Resource> = module
        .resources
        .iter()
        .filter_map(|planned| resource_from_planned(planned, file))
        .collect();

    for child in &module.child_modules {
        resources.extend(collect_module(child, file));
    }

    resources
}

fn resource_from_planned(planned: &PlannedResource, file: &SrcPath) -> Option<Resource> {
    let (resource_type, name) = derive_identity(&planned.address)?;

    Some(Resource {
        resource_type,
        name,
        tags: merge_tags(&planned.values),
        // Plan snapshots carry no positions.
        location: Location::file_only(file.clone()),
        file: file.clone(),
    })
}

/// Derive (type, name) from a dotted address.
///
/// The first segment matching a provider prefix is the type and the next
/// segment is the name; this classifies `data.<type>.<name>` and
/// module-nested addresses correctly. With no match, the final two segments
/// are used. Addresses that still cannot produce two non-empty tokens are
/// dropped.
fn derive_identity(address: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() < 2 {
        return None;
    }

    let mut resource_type = "";
    let mut name = "";
    for i in 0..parts.len() - 1 {
        if is_resource_type(parts[i]) {
            resource_type = parts[i];
            name = parts[i + 1];
            break;
        }
    }

    if resource_type.is_empty() || name.is_empty() {
        resource_type = parts[parts.len() - 2];
        name = parts[parts.len() - 1];
    }

    if resource_type.is_empty() || name.is_empty() {
        return None;
    }
    Some((resource_type.to_string(), name.to_string()))
}

fn is_resource_type(segment: &str) -> bool {
    PROVIDER_PREFIXES
        .iter()
        .any(|prefix| segment.starts_with(prefix))
}

/// Union of `tags` and `tags_all`, with `tags_all` overriding on collision.
/// Non-object fields (unresolved placeholders) and non-string entries
/// contribute nothing.
fn merge_tags(values: &serde_json::Map<String, Value>) -> TagMap {
    let mut tags = TagMap::new();
    overlay_string_entries(values.get("tags"), &mut tags);
    overlay_string_entries(values.get("tags_all"), &mut tags);
    tags
}

fn overlay_string_entries(field: Option<&Value>, tags: &mut TagMap) {
    let Some(Value::Object(entries)) = field else {
        return;
    };
    for (key, value) in entries {
        if let Value::String(s) = value {
            tags.insert(key.clone(), s.clone());
        }
    }
}
