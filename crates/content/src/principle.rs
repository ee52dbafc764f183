//! Closed vocabularies used by the content model.
//!
//! Both enums map to fixed wire strings. Parsing from the wire is strict; lookup by a
//! human-entered name (see [`PrincipleName::lookup`]) is lenient about case and whitespace.

use std::fmt;

/// One of the five SOLID principles.
///
/// The declaration order is the canonical acronym order and is relied upon by
/// [`PrincipleName::CANONICAL_ORDER`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrincipleName {
    /// Single Responsibility Principle.
    Srp,
    /// Open/Closed Principle.
    Ocp,
    /// Liskov Substitution Principle.
    Lsp,
    /// Interface Segregation Principle.
    Isp,
    /// Dependency Inversion Principle.
    Dip,
}

impl PrincipleName {
    /// All principles in SOLID acronym order.
    pub const CANONICAL_ORDER: [PrincipleName; 5] = [
        PrincipleName::Srp,
        PrincipleName::Ocp,
        PrincipleName::Lsp,
        PrincipleName::Isp,
        PrincipleName::Dip,
    ];

    /// The abbreviation used on the wire (`SRP`, `OCP`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            PrincipleName::Srp => "SRP",
            PrincipleName::Ocp => "OCP",
            PrincipleName::Lsp => "LSP",
            PrincipleName::Isp => "ISP",
            PrincipleName::Dip => "DIP",
        }
    }

    /// The full English title of the principle.
    pub fn title(self) -> &'static str {
        match self {
            PrincipleName::Srp => "Single Responsibility Principle",
            PrincipleName::Ocp => "Open/Closed Principle",
            PrincipleName::Lsp => "Liskov Substitution Principle",
            PrincipleName::Isp => "Interface Segregation Principle",
            PrincipleName::Dip => "Dependency Inversion Principle",
        }
    }

    /// Parse from the wire abbreviation. Exact match only.
    pub(crate) fn from_wire(s: &str) -> Option<Self> {
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|name| name.abbreviation() == s)
    }

    /// Resolve a human-entered name.
    ///
    /// Accepts the abbreviation or the full title, ignoring ASCII case and surrounding
    /// whitespace. In titles, `/`, `-` and spaces are interchangeable, so "open-closed
    /// principle" resolves to [`PrincipleName::Ocp`].
    pub fn lookup(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let wanted = normalise_title(query);
        Self::CANONICAL_ORDER.into_iter().find(|name| {
            name.abbreviation().eq_ignore_ascii_case(query)
                || normalise_title(name.title()) == wanted
        })
    }
}

fn normalise_title(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '/' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for PrincipleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Kind of an illustrative component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Class,
    Interface,
    AbstractClass,
}

impl ComponentKind {
    /// Convert to wire format string.
    pub(crate) fn to_wire(self) -> &'static str {
        match self {
            ComponentKind::Class => "class",
            ComponentKind::Interface => "interface",
            ComponentKind::AbstractClass => "abstract-class",
        }
    }

    /// Parse from wire format string.
    pub(crate) fn from_wire(s: &str) -> Option<Self> {
        match s {
            "class" => Some(ComponentKind::Class),
            "interface" => Some(ComponentKind::Interface),
            "abstract-class" => Some(ComponentKind::AbstractClass),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}
