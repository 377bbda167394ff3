//! Style field emission.
//!
//! Save code writes each field under its own key inside a nested `style`
//! map. Load code assigns each field back from the document, guarded by a
//! presence check so missing keys keep their current value.

use crate::descriptor::{FieldDescriptor, TypeTag};

use super::{CodeWriter, EmitOptions};

/// Emit the style save block: emitter setup, one key/value/comment triple
/// per field, and the closing maps.
pub fn emit_style_save(fields: &[FieldDescriptor], options: &EmitOptions) -> Vec<String> {
    let mut w = CodeWriter::new(options);

    w.line("auto &style = ImGui::GetStyle();");
    w.line("YAML::Emitter out;");
    w.line("out << YAML::BeginMap;");
    w.open("{");
    w.line("out << YAML::Key << \"style\";");
    w.line("out << YAML::BeginMap;");
    w.open("{");
    for field in fields {
        save_field(&mut w, field);
    }
    w.close("}");
    w.line("out << YAML::EndMap;");
    w.close("}");
    w.line("out << YAML::EndMap;");

    w.into_lines()
}

/// Emit the style load block: one guarded assignment per field.
pub fn emit_style_load(fields: &[FieldDescriptor], options: &EmitOptions) -> Vec<String> {
    let mut w = CodeWriter::new(options);
    for field in fields {
        load_field(&mut w, field);
    }
    w.into_lines()
}

fn save_field(w: &mut CodeWriter, field: &FieldDescriptor) {
    let name = &field.name;

    w.line(format!("out << YAML::Key << \"{name}\";"));
    match field.ty {
        TypeTag::Scalar | TypeTag::Flag => save_value(w, name),
        TypeTag::Vector2 => save_pair(w, name),
    }
    // Style fields are always annotated, even with an empty comment.
    w.line(format!("out << YAML::Comment(\"{}\");", field.doc));
}

fn save_value(w: &mut CodeWriter, name: &str) {
    w.line(format!("out << YAML::Value << style.{name};"));
}

fn save_pair(w: &mut CodeWriter, name: &str) {
    w.line(format!(
        "out << YAML::Flow << YAML::BeginSeq << style.{name}.x << style.{name}.y << YAML::EndSeq;"
    ));
}

fn load_field(w: &mut CodeWriter, field: &FieldDescriptor) {
    let name = &field.name;

    w.open(format!("if (style[\"{name}\"]) {{"));
    match field.ty {
        TypeTag::Scalar => load_as(w, name, "float"),
        TypeTag::Flag => load_as(w, name, "bool"),
        TypeTag::Vector2 => load_pair(w, name),
    }
    w.close("}");
}

fn load_as(w: &mut CodeWriter, name: &str, cpp_type: &str) {
    w.line(format!(
        "ImGui::GetStyle().{name} = style[\"{name}\"].as<{cpp_type}>();"
    ));
}

fn load_pair(w: &mut CodeWriter, name: &str) {
    w.open(format!("ImGui::GetStyle().{name} = {{"));
    w.line(format!("style[\"{name}\"][0].as<float>(),"));
    w.line(format!("style[\"{name}\"][1].as<float>()"));
    w.close("};");
}
