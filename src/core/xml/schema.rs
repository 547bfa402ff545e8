//! core::xml::schema
//!
//! Serde shapes of the `terminal_strip` document.
//!
//! # Schema Design
//!
//! Every attribute is read as a string and validated afterwards by the
//! loader, so one bad value costs one terminal or bridge instead of the
//! whole document. Unknown attributes and elements are ignored.
//!
//! # Example
//!
//! ```
//! use terminalstrip::core::xml::schema::TerminalStripXml;
//!
//! let xml = r#"<terminal_strip uuid="67e55044-10b1-426f-9247-bb680e5fe0c8" name="X1">
//!     <physical_terminals>
//!         <physical_terminal uuid="0c0a6a5e-8f0e-4c47-9d7b-3a7c9b3a2f10">
//!             <real_terminal uuid="9a1c2e7d-5b0f-4d7e-8c1a-2b3c4d5e6f70" level="0" label="1"/>
//!         </physical_terminal>
//!     </physical_terminals>
//!     <bridges/>
//! </terminal_strip>"#;
//!
//! let doc: TerminalStripXml = quick_xml::de::from_str(xml).unwrap();
//! assert_eq!(doc.name, "X1");
//! assert_eq!(doc.physical_terminals.items.len(), 1);
//! assert_eq!(doc.physical_terminals.items[0].real_terminals[0].label, "1");
//! ```

use serde::{Deserialize, Serialize};

/// Name of the document root element.
pub const ROOT_TAG: &str = "terminal_strip";

/// The `terminal_strip` root element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "terminal_strip")]
pub struct TerminalStripXml {
    #[serde(rename = "@uuid", default)]
    pub uuid: String,
    #[serde(rename = "@installation", default)]
    pub installation: String,
    #[serde(rename = "@location", default)]
    pub location: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@comment", default)]
    pub comment: String,
    #[serde(rename = "@description", default)]
    pub description: String,
    #[serde(default)]
    pub physical_terminals: PhysicalTerminalsXml,
    #[serde(default)]
    pub bridges: BridgesXml,
}

/// Physical terminals in strip order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTerminalsXml {
    #[serde(rename = "physical_terminal", default)]
    pub items: Vec<PhysicalTerminalXml>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTerminalXml {
    #[serde(rename = "@uuid", default)]
    pub uuid: String,
    #[serde(rename = "real_terminal", default)]
    pub real_terminals: Vec<RealTerminalXml>,
}

/// One real terminal. `element_uuid` is absent for virtual terminals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealTerminalXml {
    #[serde(rename = "@uuid", default)]
    pub uuid: String,
    #[serde(rename = "@level", default)]
    pub level: String,
    #[serde(
        rename = "@element_uuid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub element_uuid: Option<String>,
    #[serde(rename = "@label", default)]
    pub label: String,
    #[serde(rename = "@xref", default)]
    pub xref: String,
    #[serde(rename = "@cable", default)]
    pub cable: String,
    #[serde(rename = "@cable_wire", default)]
    pub cable_wire: String,
    #[serde(rename = "@conductor", default)]
    pub conductor: String,
    #[serde(rename = "@type", default)]
    pub terminal_type: String,
    #[serde(rename = "@function", default)]
    pub function: String,
    #[serde(rename = "@led", default)]
    pub led: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgesXml {
    #[serde(rename = "bridge", default)]
    pub items: Vec<BridgeXml>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeXml {
    #[serde(rename = "@uuid", default)]
    pub uuid: String,
    #[serde(rename = "@color", default)]
    pub color: String,
    #[serde(rename = "real_terminal", default)]
    pub members: Vec<BridgeMemberXml>,
}

/// Reference to a bridged real terminal by uuid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeMemberXml {
    #[serde(rename = "@uuid", default)]
    pub uuid: String,
}

/// Parse a boolean attribute the lenient way: `true`/`1`, anything else false.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let doc: TerminalStripXml =
            quick_xml::de::from_str(r#"<terminal_strip name="X2"/>"#).unwrap();
        assert_eq!(doc.name, "X2");
        assert!(doc.physical_terminals.items.is_empty());
        assert!(doc.bridges.items.is_empty());
    }

    #[test]
    fn virtual_terminal_has_no_element_attribute() {
        let doc: TerminalStripXml = quick_xml::de::from_str(
            r#"<terminal_strip>
                 <physical_terminals>
                   <physical_terminal uuid="a">
                     <real_terminal uuid="b" level="0" led="true"/>
                   </physical_terminal>
                 </physical_terminals>
               </terminal_strip>"#,
        )
        .unwrap();
        let rt = &doc.physical_terminals.items[0].real_terminals[0];
        assert_eq!(rt.element_uuid, None);
        assert!(parse_flag(&rt.led));
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let doc: TerminalStripXml =
            quick_xml::de::from_str(r#"<terminal_strip name="X3" extra="1"/>"#).unwrap();
        assert_eq!(doc.name, "X3");
    }

    #[test]
    fn bridge_members_keep_document_order() {
        let doc: TerminalStripXml = quick_xml::de::from_str(
            r##"<terminal_strip>
                 <bridges>
                   <bridge uuid="x" color="#ff0000">
                     <real_terminal uuid="2"/>
                     <real_terminal uuid="1"/>
                   </bridge>
                 </bridges>
               </terminal_strip>"##,
        )
        .unwrap();
        let bridge = &doc.bridges.items[0];
        assert_eq!(bridge.color, "#ff0000");
        let members: Vec<_> = bridge.members.iter().map(|m| m.uuid.as_str()).collect();
        assert_eq!(members, vec!["2", "1"]);
    }

    #[test]
    fn flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" true "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
