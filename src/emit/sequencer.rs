//! Joins the four generated blocks into the final output.

use std::fmt;
use std::io::{self, Write};

use crate::descriptor::Tables;

use super::{emit_color_load, emit_color_save, emit_style_load, emit_style_save, EmitOptions};

/// One of the four output blocks, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    StyleSave,
    StyleLoad,
    ColorsSave,
    ColorsLoad,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::StyleSave,
        Section::StyleLoad,
        Section::ColorsSave,
        Section::ColorsLoad,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::StyleSave => "STYLE SAVE",
            Section::StyleLoad => "STYLE LOAD",
            Section::ColorsSave => "COLORS SAVE",
            Section::ColorsLoad => "COLORS LOAD",
        }
    }
}

/// The banner line printed before a section.
pub fn banner(section: Section) -> String {
    format!("----------- {}  -------------------", section.title())
}

/// Generated code for both tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub style_save: Vec<String>,
    pub style_load: Vec<String>,
    pub colors_save: Vec<String>,
    pub colors_load: Vec<String>,
}

impl Generated {
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::StyleSave => &self.style_save,
            Section::StyleLoad => &self.style_load,
            Section::ColorsSave => &self.colors_save,
            Section::ColorsLoad => &self.colors_load,
        }
    }

    /// Write every section, each behind its banner.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in Section::ALL {
            writeln!(f, "{}", banner(section))?;
            for line in self.section(section) {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Run both emitters over fully-read tables.
pub fn generate(tables: &Tables, options: &EmitOptions) -> Generated {
    Generated {
        style_save: emit_style_save(&tables.style, options),
        style_load: emit_style_load(&tables.style, options),
        colors_save: emit_color_save(&tables.colors, options),
        colors_load: emit_color_load(&tables.colors, options),
    }
}
