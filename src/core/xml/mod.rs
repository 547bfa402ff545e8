//! core::xml
//!
//! Reading and writing a strip as a `terminal_strip` XML document.
//!
//! # Loading
//!
//! A document that cannot be parsed at all, or whose root element is not
//! `terminal_strip`, is rejected with [`StripError::MalformedDocument`]. Anything smaller is recovered: the
//! offending terminal, physical terminal or bridge is dropped (or the bad
//! attribute defaulted) and a [`LoadWarning`] is recorded. The strip that
//! comes back always passes [`fast_verify`].
//!
//! Real terminals are stacked by their `level` attribute, not by the order
//! they appear in.
//!
//! [`fast_verify`]: crate::core::verify::fast_verify

pub mod schema;

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;

use super::element::TerminalData;
use super::strip::{StripError, TerminalStrip, TerminalStripData};
use super::types::{
    BridgeId, Color, ElementId, PhysicalTerminalId, RealTerminalId, StripId, TerminalFunction,
    TerminalType,
};
use schema::{
    parse_flag, BridgeMemberXml, BridgeXml, BridgesXml, PhysicalTerminalXml,
    PhysicalTerminalsXml, RealTerminalXml, TerminalStripXml, ROOT_TAG,
};

/// A problem recovered while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub message: String,
}

impl LoadWarning {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A loaded strip plus everything that had to be recovered on the way.
#[derive(Debug)]
pub struct LoadResult {
    pub strip: TerminalStrip,
    pub warnings: Vec<LoadWarning>,
}

impl LoadResult {
    /// Whether the document loaded without any recovery.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl TerminalStrip {
    /// Serialize the strip, physical terminals in strip order and real
    /// terminals bottom level first.
    pub fn to_xml(&self) -> Result<String, StripError> {
        let doc = self.to_document();
        let mut out = String::new();
        let mut ser = quick_xml::se::Serializer::new(&mut out);
        ser.indent(' ', 2);
        doc.serialize(ser)
            .map_err(|e| StripError::XmlWrite(e.to_string()))?;
        Ok(out)
    }

    /// Parse a strip document.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` if the text is not a `terminal_strip` document.
    pub fn from_xml(xml: &str) -> Result<LoadResult, StripError> {
        check_root(xml)?;
        let doc: TerminalStripXml = quick_xml::de::from_str(xml)
            .map_err(|e| StripError::MalformedDocument(e.to_string()))?;
        let mut loader = Loader::default();
        let strip = loader.load(doc);
        for warning in &loader.warnings {
            warn!("strip {}: {}", strip.uuid(), warning);
        }
        debug!(
            "strip {}: loaded {} real terminal(s), {} bridge(s), {} warning(s)",
            strip.uuid(),
            strip.real_terminal_count(),
            strip.bridges().len(),
            loader.warnings.len()
        );
        Ok(LoadResult {
            strip,
            warnings: loader.warnings,
        })
    }

    fn to_document(&self) -> TerminalStripXml {
        let data = self.data();
        let items = self
            .physical_terminals()
            .map(|pt| PhysicalTerminalXml {
                uuid: pt.id().to_string(),
                real_terminals: pt
                    .real_terminals()
                    .iter()
                    .filter_map(|id| self.real_terminal(*id))
                    .map(|rt| {
                        let d = rt.data();
                        RealTerminalXml {
                            uuid: rt.id().to_string(),
                            level: rt.level().to_string(),
                            element_uuid: rt.element().map(|e| e.to_string()),
                            label: d.label.clone(),
                            xref: d.xref.clone(),
                            cable: d.cable.clone(),
                            cable_wire: d.cable_wire.clone(),
                            conductor: d.conductor.clone(),
                            terminal_type: d.terminal_type.as_str().to_string(),
                            function: d.terminal_function.as_str().to_string(),
                            led: d.led.to_string(),
                        }
                    })
                    .collect(),
            })
            .collect();
        let bridges = self
            .bridges()
            .iter()
            .map(|b| BridgeXml {
                uuid: b.id().to_string(),
                color: b.color().to_string(),
                members: b
                    .real_terminals()
                    .iter()
                    .map(|id| BridgeMemberXml {
                        uuid: id.to_string(),
                    })
                    .collect(),
            })
            .collect();

        TerminalStripXml {
            uuid: data.uuid.to_string(),
            installation: data.installation.clone(),
            location: data.location.clone(),
            name: data.name.clone(),
            comment: data.comment.clone(),
            description: data.description.clone(),
            physical_terminals: PhysicalTerminalsXml { items },
            bridges: BridgesXml { items: bridges },
        }
    }
}

type Level = (RealTerminalId, Option<ElementId>, TerminalData);

/// Reject documents whose root element is not `terminal_strip`.
fn check_root(xml: &str) -> Result<(), StripError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.name();
                if name.as_ref() == ROOT_TAG.as_bytes() {
                    return Ok(());
                }
                return Err(StripError::MalformedDocument(format!(
                    "root element is <{}>, expected <{ROOT_TAG}>",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Ok(Event::Eof) => {
                return Err(StripError::MalformedDocument(
                    "document has no root element".to_string(),
                ))
            }
            Ok(_) => {}
            Err(e) => return Err(StripError::MalformedDocument(e.to_string())),
        }
    }
}

#[derive(Default)]
struct Loader {
    warnings: Vec<LoadWarning>,
    physicals: HashSet<PhysicalTerminalId>,
    terminals: HashSet<RealTerminalId>,
    elements: HashSet<ElementId>,
    bridged: HashSet<RealTerminalId>,
    bridges: HashSet<BridgeId>,
}

impl Loader {
    fn warn(&mut self, message: String) {
        self.warnings.push(LoadWarning::new(message));
    }

    fn load(&mut self, doc: TerminalStripXml) -> TerminalStrip {
        let uuid = match StripId::parse(&doc.uuid) {
            Ok(id) => id,
            Err(_) => {
                let fresh = StripId::new();
                self.warn(format!("invalid strip uuid {:?}, using {fresh}", doc.uuid));
                fresh
            }
        };
        let mut strip = TerminalStrip::from_data(TerminalStripData {
            installation: doc.installation,
            location: doc.location,
            name: doc.name,
            comment: doc.comment,
            description: doc.description,
            uuid,
        });

        for pt in doc.physical_terminals.items {
            self.load_physical(&mut strip, pt);
        }
        for bridge in doc.bridges.items {
            self.load_bridge(&mut strip, bridge);
        }
        strip
    }

    fn load_physical(&mut self, strip: &mut TerminalStrip, pt: PhysicalTerminalXml) {
        let id = match PhysicalTerminalId::parse(&pt.uuid) {
            Ok(id) if !self.physicals.contains(&id) => id,
            _ => {
                let fresh = PhysicalTerminalId::new();
                self.warn(format!(
                    "invalid or duplicate physical terminal uuid {:?}, using {fresh}",
                    pt.uuid
                ));
                fresh
            }
        };

        let mut levels: Vec<(usize, Level)> = pt
            .real_terminals
            .into_iter()
            .filter_map(|rt| self.load_real_terminal(rt))
            .collect();
        if levels.is_empty() {
            self.warn(format!("physical terminal {id} has no terminals, skipped"));
            return;
        }
        // stable, so equal levels keep document order
        levels.sort_by_key(|(level, _)| *level);

        self.physicals.insert(id);
        strip.restore_physical(id, levels.into_iter().map(|(_, l)| l).collect());
    }

    fn load_real_terminal(&mut self, rt: RealTerminalXml) -> Option<(usize, Level)> {
        let id = match RealTerminalId::parse(&rt.uuid) {
            Ok(id) if !self.terminals.contains(&id) => id,
            Ok(id) => {
                self.warn(format!("duplicate real terminal {id}, skipped"));
                return None;
            }
            Err(_) => {
                self.warn(format!("invalid real terminal uuid {:?}, skipped", rt.uuid));
                return None;
            }
        };

        let element = match rt.element_uuid.as_deref() {
            None => None,
            Some(raw) => match ElementId::parse(raw) {
                Ok(e) if self.elements.contains(&e) => {
                    self.warn(format!(
                        "element {e} already has a terminal, real terminal {id} skipped"
                    ));
                    return None;
                }
                Ok(e) => Some(e),
                Err(_) => {
                    self.warn(format!(
                        "invalid element uuid {raw:?}, real terminal {id} skipped"
                    ));
                    return None;
                }
            },
        };

        let level = match rt.level.trim().parse::<usize>() {
            Ok(level) => level,
            Err(_) => {
                self.warn(format!(
                    "invalid level {:?} on real terminal {id}, stacked on top",
                    rt.level
                ));
                usize::MAX
            }
        };

        let terminal_type = if rt.terminal_type.is_empty() {
            TerminalType::default()
        } else {
            rt.terminal_type.parse().unwrap_or_else(|_| {
                self.warn(format!(
                    "unknown type {:?} on real terminal {id}, using generic",
                    rt.terminal_type
                ));
                TerminalType::default()
            })
        };
        let terminal_function = if rt.function.is_empty() {
            TerminalFunction::default()
        } else {
            rt.function.parse().unwrap_or_else(|_| {
                self.warn(format!(
                    "unknown function {:?} on real terminal {id}, using generic",
                    rt.function
                ));
                TerminalFunction::default()
            })
        };

        self.terminals.insert(id);
        if let Some(e) = element {
            self.elements.insert(e);
        }
        let data = TerminalData {
            label: rt.label,
            xref: rt.xref,
            cable: rt.cable,
            cable_wire: rt.cable_wire,
            conductor: rt.conductor,
            terminal_type,
            terminal_function,
            led: parse_flag(&rt.led),
        };
        Some((level, (id, element, data)))
    }

    fn load_bridge(&mut self, strip: &mut TerminalStrip, bridge: BridgeXml) {
        let id = match BridgeId::parse(&bridge.uuid) {
            Ok(id) if !self.bridges.contains(&id) => id,
            _ => {
                self.warn(format!(
                    "invalid or duplicate bridge uuid {:?}, skipped",
                    bridge.uuid
                ));
                return;
            }
        };

        let mut members = Vec::with_capacity(bridge.members.len());
        for member in &bridge.members {
            let Ok(terminal) = RealTerminalId::parse(&member.uuid) else {
                self.warn(format!(
                    "bridge {id} references invalid uuid {:?}, skipped",
                    member.uuid
                ));
                return;
            };
            if !strip.contains(terminal) {
                self.warn(format!(
                    "bridge {id} references unknown terminal {terminal}, skipped"
                ));
                return;
            }
            if self.bridged.contains(&terminal) || members.contains(&terminal) {
                self.warn(format!(
                    "bridge {id} references already bridged terminal {terminal}, skipped"
                ));
                return;
            }
            members.push(terminal);
        }
        if members.len() < 2 {
            self.warn(format!("bridge {id} has fewer than two members, skipped"));
            return;
        }

        let color = Color::parse(&bridge.color).unwrap_or_else(|_| {
            self.warn(format!(
                "invalid color {:?} on bridge {id}, using {}",
                bridge.color,
                Color::default()
            ));
            Color::default()
        });

        self.bridges.insert(id);
        self.bridged.extend(members.iter().copied());
        strip.restore_bridge(id, color, members);
    }
}
