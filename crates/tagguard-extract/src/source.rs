use anyhow::Context;
use hcl_edit::Span as _;
use hcl_edit::expr::{Expression, ObjectKey};
use hcl_edit::structure::{Block, BlockLabel, Body};
use hcl_edit::template::{Element, StringTemplate};
use tagguard_types::{Location, Resource, Span, SrcPath, TagMap};

/// Extract resources from one `.tf` document.
///
/// One resource per top-level `resource` block carrying at least two labels
/// (type, then local name); blocks with fewer labels are skipped, not
/// errored. A top-level parse failure is the caller's per-file error.
pub fn extract_source(file: &SrcPath, text: &str) -> anyhow::Result<Vec<Resource>> {
    let body = hcl_edit::parser::parse_body(text).context("failed to parse HCL")?;
    let mapper = SourceMapper::new(text);

    let mut resources = Vec::new();
    for block in body.blocks() {
        if block.ident.as_str() != "resource" {
            continue;
        }
        let Some((resource_type, name)) = block_identity(block) else {
            continue;
        };

        resources.push(Resource {
            resource_type,
            name,
            tags: extract_tags(&block.body),
            location: mapper.location(file.clone(), block.span()),
            file: file.clone(),
        });
    }

    Ok(resources)
}

fn block_identity(block: &Block) -> Option<(String, String)> {
    if block.labels.len() < 2 {
        return None;
    }
    let resource_type = label_text(&block.labels[0]);
    let name = label_text(&block.labels[1]);
    if resource_type.is_empty() || name.is_empty() {
        return None;
    }
    Some((resource_type, name))
}

fn label_text(label: &BlockLabel) -> String {
    match label {
        BlockLabel::Ident(ident) => ident.value().as_str().to_string(),
        BlockLabel::String(s) => s.value().to_string(),
    }
}

/// Collect statically literal tag entries from a `tags = { … }` attribute
/// and from the legacy nested `tags { … }` block form. Entries whose key or
/// value is not statically literal are silently omitted, never an error.
fn extract_tags(body: &Body) -> TagMap {
    let mut tags = TagMap::new();

    if let Some(attr) = body.get_attribute("tags")
        && let Expression::Object(object) = &attr.value
    {
        for (key, value) in object.iter() {
            let Some(key) = object_key_text(key) else {
                continue;
            };
            let Some(value) = static_string(value.expr()) else {
                continue;
            };
            tags.insert(key, value);
        }
    }

    for block in body.blocks() {
        if block.ident.as_str() != "tags" {
            continue;
        }
        for attr in block.body.attributes() {
            if let Some(value) = static_string(&attr.value) {
                tags.insert(attr.key.as_str().to_string(), value);
            }
        }
    }

    tags
}

fn object_key_text(key: &ObjectKey) -> Option<String> {
    match key {
        ObjectKey::Ident(ident) => Some(ident.value().as_str().to_string()),
        ObjectKey::Expression(expr) => static_string(expr),
    }
}

/// Resolve an expression to a static string, or `None` for anything dynamic.
///
/// The match is exhaustive on purpose: every expression kind is either a
/// static string (literal, fully-literal template) or unresolved. Unresolved
/// kinds are never evaluated.
fn static_string(expr: &Expression) -> Option<String> {
    match expr {
        Expression::String(s) => Some(s.value().to_string()),
        Expression::StringTemplate(template) => literal_template(template),
        Expression::Variable(_)
        | Expression::Traversal(_)
        | Expression::FuncCall(_)
        | Expression::Object(_)
        | Expression::Array(_)
        | Expression::Number(_)
        | Expression::Bool(_)
        | Expression::Null(_)
        | Expression::Conditional(_)
        | Expression::ForExpr(_)
        | Expression::BinaryOp(_)
        | Expression::UnaryOp(_)
        | Expression::HeredocTemplate(_)
        | Expression::Parenthesis(_) => None,
    }
}

fn literal_template(template: &StringTemplate) -> Option<String> {
    let mut out = String::new();
    for element in template.iter() {
        match element {
            Element::Literal(lit) => out.push_str(lit.value()),
            Element::Interpolation(_) | Element::Directive(_) => return None,
        }
    }
    Some(out)
}

/// Maps byte spans from the parser to 1-based line/column positions.
struct SourceMapper<'a> {
    source: &'a str,
}

impl<'a> SourceMapper<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn location(&self, file: SrcPath, span: Option<std::ops::Range<usize>>) -> Location {
        match span {
            Some(span) => Location {
                file,
                start: self.position(span.start),
                end: self.position(span.end),
            },
            None => Location::file_only(file),
        }
    }

    fn position(&self, offset: usize) -> Span {
        let mut line: u32 = 1;
        let mut column: u32 = 1;
        for (i, ch) in self.source.char_indices() {
            if i >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Span::new(line, column)
    }
}
