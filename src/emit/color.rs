//! Color table emission.

use crate::descriptor::ColorDescriptor;

use super::{CodeWriter, EmitOptions};

/// Emit the color save block: key and value per color, plus a comment when
/// the color has one.
pub fn emit_color_save(colors: &[ColorDescriptor], options: &EmitOptions) -> Vec<String> {
    let mut w = CodeWriter::new(options);
    for color in colors {
        let name = &color.name;
        w.line(format!("out << YAML::Key << \"{name}\";"));
        w.line(format!("out << YAML::Value << colors[{name}];"));
        if !color.doc.is_empty() {
            w.line(format!("out << YAML::Comment(\"{}\");", color.doc));
        }
    }
    w.into_lines()
}

/// Emit the color load block: one `SetStyleColor` call per color.
pub fn emit_color_load(colors: &[ColorDescriptor], options: &EmitOptions) -> Vec<String> {
    let mut w = CodeWriter::new(options);
    for color in colors {
        let name = &color.name;
        w.line(format!("SetStyleColor(\"{name}\", {name}, colors);"));
    }
    w.into_lines()
}
