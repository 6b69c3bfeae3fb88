//! Category prefix definitions

use serde::Serialize;

/// Meaning of one category code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixDescription {
    #[serde(skip)]
    pub code: char,
    pub short: &'static str,
    pub long: &'static str,
}

const DEFINITIONS: &[PrefixDescription] = &[
    PrefixDescription {
        code: 'A',
        short: "Artistic",
        long: "Has major artistic or aesthetic aspect - renders, artwork, graphic design, image editing, etc",
    },
    PrefixDescription {
        code: 'C',
        short: "Collaborative",
        long: "Was created in cooperation with 1 or more other outside parties - not all rights to project materials may belong to the project owner",
    },
    PrefixDescription {
        code: 'D',
        short: "Digital / Software",
        long: "Involved development of software or code",
    },
    PrefixDescription {
        code: 'F',
        short: "Additive Manufacturing",
        long: "Involved some form of additive manufacturing (FDM / SLA / SLS / etc)",
    },
    PrefixDescription {
        code: 'H',
        short: "Hardware",
        long: "Involved production / modification of physical item (beyond simple additive manufacturing)",
    },
    PrefixDescription {
        code: 'O',
        short: "Open Source",
        long: "Created as open source - projects that were initially closed source may lack this prefix",
    },
    PrefixDescription {
        code: 'P',
        short: "Prototype",
        long: "Created with the intention of not being production ready",
    },
    PrefixDescription {
        code: 'R',
        short: "Restricted",
        long: "Project metadata and contents are subject to tighter security and access restrictions",
    },
    PrefixDescription {
        code: 'S',
        short: "Special",
        long: "Special purpose - eg: gifts, metaprojects, milestone projects",
    },
];

/// All known prefixes, sorted by code
pub fn definitions() -> &'static [PrefixDescription] {
    DEFINITIONS
}

/// Description for a code, case-insensitive
pub fn lookup(code: char) -> Option<&'static PrefixDescription> {
    let code = code.to_ascii_uppercase();
    DEFINITIONS.iter().find(|d| d.code == code)
}
