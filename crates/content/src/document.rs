//! SOLID reference document: domain types, wire models and translation helpers.
//!
//! Responsibilities:
//! - Define public, read-only domain types for the document
//! - Define a strict wire model for serialisation/deserialisation
//! - Provide translation helpers between the domain types and the wire model
//! - Enforce the document invariants (principle count and order, non-empty examples,
//!   well-formed references)
//!
//! Notes:
//! - Snippets are opaque. They are carried verbatim and never inspected beyond a blank check.
//! - Domain values can only be obtained by parsing, so every `Document` in memory is valid.

use crate::format::ContentFormat;
use crate::principle::{ComponentKind, PrincipleName};
use crate::validation::{validate_principle_order, validate_reference_url};
use crate::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use solid_types::{NonEmptyText, VerbatimText};
use std::collections::HashSet;

// ============================================================================
// Public domain-level types
// ============================================================================

/// The whole reference document: five principles in acronym order plus references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    principles: Vec<Principle>,
    references: Vec<String>,
}

/// One SOLID principle section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principle {
    name: PrincipleName,
    statement: NonEmptyText,
    narrative: NonEmptyText,
    example: Example,
    analogy: NonEmptyText,
}

/// A named illustrative example made of one or more components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    title: NonEmptyText,
    components: Vec<Component>,
}

/// A class or interface used to illustrate a principle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    name: NonEmptyText,
    kind: ComponentKind,
    responsibility: NonEmptyText,
    snippet: VerbatimText,
}

impl Document {
    /// Parse a document from text in the given format.
    ///
    /// This uses `serde_path_to_error` to surface the path (e.g.
    /// `principles[1].example.components[0].kind`) to the failing field when the text does not
    /// match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if:
    /// - the text is not valid YAML/JSON or does not match the wire schema,
    /// - unknown keys are present (due to `#[serde(deny_unknown_fields)]`),
    /// - any prose field is blank or a component kind is unknown,
    /// - the document breaks an invariant (see [`validate_principle_order`]).
    pub fn parse(text: &str, format: ContentFormat) -> ContentResult<Self> {
        let wire = match format {
            ContentFormat::Yaml => {
                let deserializer = serde_yaml::Deserializer::from_str(text);
                serde_path_to_error::deserialize::<_, DocumentWire>(deserializer)
                    .map_err(|err| schema_mismatch(format, err))?
            }
            ContentFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(text);
                let wire = serde_path_to_error::deserialize::<_, DocumentWire>(&mut deserializer)
                    .map_err(|err| schema_mismatch(format, err))?;
                deserializer.end()?;
                wire
            }
        };

        let document = wire_to_domain(wire)?;
        tracing::debug!(
            format = %format,
            principles = document.principles.len(),
            references = document.references.len(),
            "parsed SOLID reference document"
        );
        Ok(document)
    }

    /// Parse a document from YAML text.
    pub fn from_yaml(yaml_text: &str) -> ContentResult<Self> {
        Self::parse(yaml_text, ContentFormat::Yaml)
    }

    /// Parse a document from JSON text.
    pub fn from_json(json_text: &str) -> ContentResult<Self> {
        Self::parse(json_text, ContentFormat::Json)
    }

    /// Render the document in the given format.
    ///
    /// JSON is pretty-printed. Principle and component order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if serialisation fails.
    pub fn render(&self, format: ContentFormat) -> ContentResult<String> {
        let wire = domain_to_wire(self);
        let text = match format {
            ContentFormat::Yaml => serde_yaml::to_string(&wire)?,
            ContentFormat::Json => serde_json::to_string_pretty(&wire)?,
        };
        Ok(text)
    }

    /// Render the document as YAML text.
    pub fn to_yaml(&self) -> ContentResult<String> {
        self.render(ContentFormat::Yaml)
    }

    /// Render the document as JSON text.
    pub fn to_json(&self) -> ContentResult<String> {
        self.render(ContentFormat::Json)
    }

    /// All principles, in SOLID acronym order.
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    /// The principle with the given name.
    pub fn principle(&self, name: PrincipleName) -> Option<&Principle> {
        self.principles.iter().find(|principle| principle.name == name)
    }

    /// Reference URLs attached to the document, in authored order.
    pub fn references(&self) -> &[String] {
        &self.references
    }
}

impl Principle {
    pub fn name(&self) -> PrincipleName {
        self.name
    }

    /// Full title, e.g. "Liskov Substitution Principle".
    pub fn title(&self) -> &'static str {
        self.name.title()
    }

    /// One-line definition.
    pub fn statement(&self) -> &str {
        self.statement.as_str()
    }

    pub fn narrative(&self) -> &str {
        self.narrative.as_str()
    }

    pub fn example(&self) -> &Example {
        &self.example
    }

    pub fn analogy(&self) -> &str {
        self.analogy.as_str()
    }
}

impl Example {
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Components in authored order. Never empty.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The component with exactly this name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|component| component.name.as_str() == name)
    }
}

impl Component {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn responsibility(&self) -> &str {
        self.responsibility.as_str()
    }

    /// Illustrative source code, exactly as authored.
    pub fn snippet(&self) -> &str {
        self.snippet.as_str()
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of the document.
///
/// This is the exact structure that will be serialised to/from YAML and JSON.
/// All structs use `#[serde(deny_unknown_fields)]` for strict validation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct DocumentWire {
    pub principles: Vec<PrincipleWire>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PrincipleWire {
    pub name: String,
    pub statement: String,
    pub narrative: String,
    pub example: ExampleWire,
    pub analogy: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ExampleWire {
    pub title: String,
    pub components: Vec<ComponentWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ComponentWire {
    pub name: String,
    pub kind: String,
    pub responsibility: String,
    pub snippet: String,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn schema_mismatch<E: std::fmt::Display>(
    format: ContentFormat,
    err: serde_path_to_error::Error<E>,
) -> ContentError {
    let path = err.path().to_string();
    let source = err.into_inner();
    // An empty path displays as "." in serde_path_to_error.
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path.as_str()
    };
    ContentError::Translation(format!(
        "Document {format} schema mismatch at {path}: {source}"
    ))
}

fn prose(value: &str, path: &str) -> ContentResult<NonEmptyText> {
    NonEmptyText::new(value)
        .map_err(|e| ContentError::Translation(format!("{path}: {e}")))
}

/// Convert wire format to domain types, enforcing document invariants.
fn wire_to_domain(wire: DocumentWire) -> ContentResult<Document> {
    let principles = wire
        .principles
        .into_iter()
        .enumerate()
        .map(|(idx, principle)| principle_from_wire(principle, &format!("principles[{idx}]")))
        .collect::<ContentResult<Vec<_>>>()?;

    let names: Vec<PrincipleName> = principles.iter().map(|p| p.name).collect();
    validate_principle_order(&names)?;

    let mut seen = HashSet::new();
    for (idx, url) in wire.references.iter().enumerate() {
        validate_reference_url(url)
            .map_err(|e| ContentError::InvalidInput(format!("references[{idx}]: {e}")))?;
        if !seen.insert(url.as_str()) {
            return Err(ContentError::InvalidInput(format!(
                "references[{idx}]: duplicate reference {url}"
            )));
        }
    }

    Ok(Document {
        principles,
        references: wire.references,
    })
}

fn principle_from_wire(wire: PrincipleWire, path: &str) -> ContentResult<Principle> {
    let name = PrincipleName::from_wire(&wire.name).ok_or_else(|| {
        ContentError::Translation(format!(
            "{path}.name: unknown principle '{}' (expected one of SRP, OCP, LSP, ISP, DIP)",
            wire.name
        ))
    })?;

    Ok(Principle {
        name,
        statement: prose(&wire.statement, &format!("{path}.statement"))?,
        narrative: prose(&wire.narrative, &format!("{path}.narrative"))?,
        example: example_from_wire(wire.example, &format!("{path}.example"))?,
        analogy: prose(&wire.analogy, &format!("{path}.analogy"))?,
    })
}

fn example_from_wire(wire: ExampleWire, path: &str) -> ContentResult<Example> {
    if wire.components.is_empty() {
        return Err(ContentError::InvalidInput(format!(
            "{path}.components must contain at least one component"
        )));
    }

    let mut seen = HashSet::new();
    let mut components = Vec::with_capacity(wire.components.len());
    for (idx, component) in wire.components.into_iter().enumerate() {
        let component = component_from_wire(component, &format!("{path}.components[{idx}]"))?;
        if !seen.insert(component.name.clone()) {
            return Err(ContentError::InvalidInput(format!(
                "{path}.components[{idx}]: duplicate component name '{}'",
                component.name
            )));
        }
        components.push(component);
    }

    Ok(Example {
        title: prose(&wire.title, &format!("{path}.title"))?,
        components,
    })
}

fn component_from_wire(wire: ComponentWire, path: &str) -> ContentResult<Component> {
    let kind = ComponentKind::from_wire(&wire.kind).ok_or_else(|| {
        ContentError::Translation(format!(
            "{path}.kind: unknown component kind '{}' \
             (expected class, interface or abstract-class)",
            wire.kind
        ))
    })?;

    Ok(Component {
        name: prose(&wire.name, &format!("{path}.name"))?,
        kind,
        responsibility: prose(&wire.responsibility, &format!("{path}.responsibility"))?,
        snippet: VerbatimText::new(wire.snippet)
            .map_err(|e| ContentError::Translation(format!("{path}.snippet: {e}")))?,
    })
}

/// Convert domain types to wire format.
fn domain_to_wire(document: &Document) -> DocumentWire {
    DocumentWire {
        principles: document
            .principles
            .iter()
            .map(|p| PrincipleWire {
                name: p.name.abbreviation().to_string(),
                statement: p.statement.to_string(),
                narrative: p.narrative.to_string(),
                example: ExampleWire {
                    title: p.example.title.to_string(),
                    components: p
                        .example
                        .components
                        .iter()
                        .map(|c| ComponentWire {
                            name: c.name.to_string(),
                            kind: c.kind.to_wire().to_string(),
                            responsibility: c.responsibility.to_string(),
                            snippet: c.snippet.to_string(),
                        })
                        .collect(),
                },
                analogy: p.analogy.to_string(),
            })
            .collect(),
        references: document.references.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principle_yaml(name: &str, components: &str) -> String {
        format!(
            r#"  - name: {name}
    statement: Statement for {name}.
    narrative: Narrative for {name}.
    example:
      title: {name} example
      components:
{components}
    analogy: Analogy for {name}.
"#
        )
    }

    fn component_yaml(name: &str, kind: &str) -> String {
        format!(
            r#"        - name: {name}
          kind: {kind}
          responsibility: Does one thing.
          snippet: |
            export class {name} {{
              run(): void {{}}
            }}
"#
        )
    }

    fn document_yaml(names: &[&str], references: &str) -> String {
        let mut out = String::from("principles:\n");
        for name in names {
            let components = component_yaml(&format!("{name}Service"), "class");
            out.push_str(&principle_yaml(name, components.trim_end_matches('\n')));
        }
        out.push_str(references);
        out
    }

    fn valid_yaml() -> String {
        document_yaml(
            &["SRP", "OCP", "LSP", "ISP", "DIP"],
            "references:\n  - https://example.com/solid\n",
        )
    }

    #[test]
    fn parses_valid_document() {
        let document = Document::from_yaml(&valid_yaml()).expect("parse yaml");

        let names: Vec<_> = document.principles().iter().map(|p| p.name()).collect();
        assert_eq!(names, PrincipleName::CANONICAL_ORDER);
        assert_eq!(document.references(), ["https://example.com/solid"]);

        let srp = document.principle(PrincipleName::Srp).expect("SRP present");
        assert_eq!(srp.statement(), "Statement for SRP.");
        assert_eq!(srp.title(), "Single Responsibility Principle");
        assert_eq!(srp.example().title(), "SRP example");
        let component = srp.example().component("SRPService").expect("component");
        assert_eq!(component.kind(), ComponentKind::Class);
        assert_eq!(
            component.snippet(),
            "export class SRPService {\n  run(): void {}\n}\n"
        );
    }

    #[test]
    fn round_trips_yaml_and_json() {
        let document = Document::from_yaml(&valid_yaml()).expect("parse yaml");

        let yaml = document.to_yaml().expect("render yaml");
        assert_eq!(Document::from_yaml(&yaml).expect("reparse yaml"), document);

        let json = document.to_json().expect("render json");
        assert_eq!(Document::from_json(&json).expect("reparse json"), document);
    }

    #[test]
    fn renders_wire_shape() {
        let document = Document::from_yaml(&valid_yaml()).expect("parse yaml");
        let json = document.to_json().expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json value");

        assert_eq!(value["principles"][0]["name"], "SRP");
        assert_eq!(value["principles"][4]["name"], "DIP");
        assert_eq!(
            value["principles"][1]["example"]["components"][0]["kind"],
            "class"
        );
        assert_eq!(value["references"][0], "https://example.com/solid");
    }

    #[test]
    fn references_are_optional() {
        let yaml = document_yaml(&["SRP", "OCP", "LSP", "ISP", "DIP"], "");
        let document = Document::from_yaml(&yaml).expect("parse without references");
        assert!(document.references().is_empty());

        let rendered = document.to_yaml().expect("render yaml");
        assert!(!rendered.contains("references"));
    }

    fn edit_as_json(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let json = Document::from_yaml(&valid_yaml())
            .expect("parse yaml")
            .to_json()
            .expect("render json");
        let mut value: serde_json::Value = serde_json::from_str(&json).expect("json value");
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn snippet_whitespace_survives_round_trip() {
        let snippet = "  // leading indent\n\n\nconst x = 1;\n\n";
        let json = edit_as_json(|value| {
            value["principles"][0]["example"]["components"][0]["snippet"] =
                serde_json::json!(snippet);
        });

        let document = Document::from_json(&json).expect("parse json");
        assert_eq!(
            document.principles()[0].example().components()[0].snippet(),
            snippet
        );

        let reparsed = Document::from_yaml(&document.to_yaml().expect("yaml")).expect("yaml");
        assert_eq!(reparsed, document);
        let reparsed = Document::from_json(&document.to_json().expect("json")).expect("json");
        assert_eq!(reparsed, document);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let yaml = valid_yaml().replacen(
            "    analogy: Analogy for OCP.\n",
            "    analogy: Analogy for OCP.\n    unexpected_key: should_fail\n",
            1,
        );

        let err = Document::from_yaml(&yaml).expect_err("should reject unknown key");
        match err {
            ContentError::Translation(msg) => {
                assert!(msg.contains("unexpected_key"));
                assert!(msg.contains("principles[1]"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_wrong_types() {
        let json = edit_as_json(|value| {
            value["principles"][3]["example"]["components"] = serde_json::json!("not_a_list");
        });

        let err = Document::from_json(&json).expect_err("should reject wrong type");
        match err {
            ContentError::Translation(msg) => {
                assert!(msg.contains("principles[3].example.components"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_field_with_path() {
        let yaml = valid_yaml().replacen("    analogy: Analogy for LSP.\n", "", 1);

        let err = Document::from_yaml(&yaml).expect_err("should reject missing analogy");
        match err {
            ContentError::Translation(msg) => {
                assert!(msg.contains("principles[2]"));
                assert!(msg.contains("analogy"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_trailing_json() {
        let document = Document::from_yaml(&valid_yaml()).expect("parse yaml");
        let json = format!("{} {{}}", document.to_json().expect("render json"));
        let err = Document::from_json(&json).expect_err("should reject trailing data");
        assert!(matches!(err, ContentError::InvalidJson(_)));
    }

    #[test]
    fn rejects_unknown_principle_name() {
        let yaml = document_yaml(&["SRP", "OCP", "LSP", "ISP", "XYZ"], "");
        let err = Document::from_yaml(&yaml).expect_err("should reject XYZ");
        match err {
            ContentError::Translation(msg) => {
                assert!(msg.contains("principles[4].name"));
                assert!(msg.contains("XYZ"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_principle_count_and_order() {
        let yaml = document_yaml(&["SRP", "OCP", "LSP", "ISP"], "");
        let err = Document::from_yaml(&yaml).expect_err("should reject four principles");
        assert!(matches!(err, ContentError::InvalidInput(msg) if msg.contains("exactly 5")));

        let yaml = document_yaml(&["OCP", "SRP", "LSP", "ISP", "DIP"], "");
        let err = Document::from_yaml(&yaml).expect_err("should reject wrong order");
        assert!(matches!(err, ContentError::InvalidInput(msg) if msg.contains("principles[0]")));
    }

    #[test]
    fn rejects_empty_components() {
        let json = edit_as_json(|value| {
            value["principles"][3]["example"]["components"] = serde_json::json!([]);
        });

        let err = Document::from_json(&json).expect_err("should reject empty list");
        assert!(matches!(
            err,
            ContentError::InvalidInput(msg)
                if msg == "principles[3].example.components must contain at least one component"
        ));
    }

    #[test]
    fn rejects_duplicate_component_names() {
        let json = edit_as_json(|value| {
            let component = value["principles"][0]["example"]["components"][0].clone();
            value["principles"][0]["example"]["components"] =
                serde_json::json!([component.clone(), component]);
        });

        let err = Document::from_json(&json).expect_err("should reject duplicate");
        assert!(matches!(
            err,
            ContentError::InvalidInput(msg) if msg.contains("duplicate component")
        ));
    }

    #[test]
    fn rejects_unknown_component_kind() {
        let yaml = valid_yaml().replacen("kind: class", "kind: enum", 1);
        let err = Document::from_yaml(&yaml).expect_err("should reject enum kind");
        assert!(matches!(
            err,
            ContentError::Translation(msg)
                if msg.contains("principles[0].example.components[0].kind")
        ));
    }

    #[test]
    fn rejects_blank_prose() {
        let yaml = valid_yaml().replacen("statement: Statement for DIP.", "statement: '   '", 1);
        let err = Document::from_yaml(&yaml).expect_err("should reject blank statement");
        assert!(
            matches!(err, ContentError::Translation(msg) if msg.contains("principles[4].statement"))
        );
    }

    #[test]
    fn rejects_invalid_and_duplicate_references() {
        let yaml = document_yaml(
            &["SRP", "OCP", "LSP", "ISP", "DIP"],
            "references:\n  - not-a-url\n",
        );
        let err = Document::from_yaml(&yaml).expect_err("should reject bad url");
        assert!(matches!(err, ContentError::InvalidInput(msg) if msg.starts_with("references[0]")));

        let yaml = document_yaml(
            &["SRP", "OCP", "LSP", "ISP", "DIP"],
            "references:\n  - https://example.com\n  - https://example.com\n",
        );
        let err = Document::from_yaml(&yaml).expect_err("should reject duplicate url");
        assert!(matches!(
            err,
            ContentError::InvalidInput(msg) if msg.contains("references[1]: duplicate")
        ));
    }

    #[test]
    fn reports_root_errors() {
        let err = Document::from_yaml("- just\n- a list\n").expect_err("should reject list");
        match err {
            ContentError::Translation(msg) => assert!(msg.contains("<root>")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }
}
